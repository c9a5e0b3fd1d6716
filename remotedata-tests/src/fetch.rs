//! A minimal caller that owns a `RemoteData` and replaces it as a request moves
//! through its lifecycle: `NotAsked` -> `Loading` -> `Success` | `Failure`.
use std::fmt::Display;
use std::time::Duration;

use futures::Future;
use remotedata::RemoteData;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("request timed out after {0:?}")]
    Timeout(Duration),
    #[error("server responded with status {0}")]
    Status(u16),
    #[error("malformed response body: {0}")]
    Malformed(String),
}

/// Some named remote resource and where its request currently stands.
#[derive(Debug)]
pub struct Resource<A> {
    name: String,
    state: RemoteData<FetchError, A>,
}

impl<A> Resource<A> {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            state: RemoteData::NotAsked,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn state(&self) -> &RemoteData<FetchError, A> {
        &self.state
    }

    pub fn into_state(self) -> RemoteData<FetchError, A> {
        self.state
    }

    pub fn start(&mut self) {
        self.replace(RemoteData::Loading);
    }

    pub fn resolve(&mut self, outcome: Result<A, FetchError>) {
        self.replace(outcome.into());
    }

    pub fn reset(&mut self) {
        self.replace(RemoteData::NotAsked);
    }

    /// Run `request` to completion, moving through `Loading` on the way.
    pub async fn fetch<Fut>(&mut self, request: Fut) -> &RemoteData<FetchError, A>
    where
        Fut: Future<Output = Result<A, FetchError>>,
    {
        self.start();
        let outcome = request.await;
        self.resolve(outcome);
        &self.state
    }

    /// Same as [`Resource::fetch`], but gives up with [`FetchError::Timeout`]
    /// if `request` takes longer than `limit`.
    pub async fn fetch_with_timeout<Fut>(
        &mut self,
        request: Fut,
        limit: Duration,
    ) -> &RemoteData<FetchError, A>
    where
        Fut: Future<Output = Result<A, FetchError>>,
    {
        self.fetch(async move {
            match tokio::time::timeout(limit, request).await {
                Ok(outcome) => outcome,
                Err(_elapsed) => Err(FetchError::Timeout(limit)),
            }
        })
        .await
    }

    // the stored value is swapped out whole, never edited
    fn replace(&mut self, next: RemoteData<FetchError, A>) {
        let previous = std::mem::replace(&mut self.state, next);
        log::debug!(
            "{}: {} -> {}",
            self.name,
            state_name(&previous),
            state_name(&self.state)
        );
        if let RemoteData::Failure(error) = &self.state {
            log::warn!("{}: request failed: {}", self.name, error);
        }
    }
}

pub fn state_name<E, A>(state: &RemoteData<E, A>) -> &'static str {
    state
        .as_ref()
        .fold(|| "not asked", || "loading", |_| "failure", |_| "success")
}

/// A user-facing line of text for any state.
pub fn render<E: Display, A: Display>(state: &RemoteData<E, A>) -> String {
    state
        .as_ref()
        .map_both(|e| format!("could not load: {}", e), |a| a.to_string())
        .fold(
            || "nothing requested yet".to_string(),
            || "loading...".to_string(),
            |message| message,
            |text| text,
        )
}
