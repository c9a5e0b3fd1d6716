//! Async counterparts of the core combinators, built on `futures`.
//!
//! Nothing here spawns tasks or sleeps: every future passed in is awaited by
//! the caller's executor, and only on the branch that needs it.
use futures::{
    future::{self, Future},
    stream::{self, BoxStream, StreamExt},
    FutureExt,
};

use crate::RemoteData;

impl<E, A> RemoteData<E, A> {
    /// Await a fallible request and record its outcome.
    pub async fn from_future(request: impl Future<Output = Result<A, E>>) -> Self {
        request.await.into()
    }

    /// Like [`RemoteData::map`], with an async transformation. The future
    /// returned by `f` is only created and awaited on `Success`.
    pub async fn map_async<B, Fut>(self, f: impl FnOnce(A) -> Fut) -> RemoteData<E, B>
    where
        Fut: Future<Output = B>,
    {
        match self {
            RemoteData::Success(data) => RemoteData::Success(f(data).await),
            RemoteData::Failure(error) => RemoteData::Failure(error),
            RemoteData::Loading => RemoteData::Loading,
            RemoteData::NotAsked => RemoteData::NotAsked,
        }
    }

    /// Like [`RemoteData::flat_map`], chaining into a dependent async request.
    pub async fn flat_map_async<B, Fut>(self, f: impl FnOnce(A) -> Fut) -> RemoteData<E, B>
    where
        Fut: Future<Output = RemoteData<E, B>>,
    {
        match self {
            RemoteData::Success(data) => f(data).await,
            RemoteData::Failure(error) => RemoteData::Failure(error),
            RemoteData::Loading => RemoteData::Loading,
            RemoteData::NotAsked => RemoteData::NotAsked,
        }
    }
}

/// The lifecycle of a single request as a stream of states: `Loading` right
/// away, then `Success` or `Failure` once `request` resolves, then the end of
/// the stream.
///
/// ```rust
/// # use futures::{executor::block_on, StreamExt};
/// # use remotedata::{experimental::track, RemoteData};
/// let states: Vec<RemoteData<String, u8>> =
///     block_on(track(async { Ok(1) }).collect());
///
/// assert_eq!(states, vec![RemoteData::Loading, RemoteData::Success(1)]);
/// ```
pub fn track<'a, E, A>(
    request: impl Future<Output = Result<A, E>> + Send + 'a,
) -> BoxStream<'a, RemoteData<E, A>>
where
    E: Send + 'a,
    A: Send + 'a,
{
    stream::once(future::ready(RemoteData::Loading))
        .chain(stream::once(request.map(RemoteData::from)))
        .boxed()
}
