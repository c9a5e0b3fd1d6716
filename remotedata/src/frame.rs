use crate::RemoteData;

/// A type constructor with a single slot that can be mapped over via `map_frame`.
///
/// # Motivation
///
/// `RemoteData<E, A>` has two type parameters, and generic code sometimes wants
/// to talk about "`RemoteData<E, _>` for some fixed `E`" as a functor in its own
/// right. Rust has no way to name that partially applied type directly, so this
/// trait is implemented on a marker instead: `RemoteData<E, PartiallyApplied>`
/// stands for `RemoteData<E, _>`, and `Frame<X>` fills the hole back in.
///
/// # Implementing this trait
///
/// Use the uninhabited [`PartiallyApplied`] enum for the slot being abstracted over:
///
/// ```rust
/// # use remotedata::{MappableFrame, PartiallyApplied};
/// # #[derive(Debug, PartialEq, Eq)]
/// enum Cached<A> {
///     Fresh(A),
///     Stale(A),
///     Missing,
/// }
///
/// impl MappableFrame for Cached<PartiallyApplied> {
///     type Frame<X> = Cached<X>;
///
///     fn map_frame<A, B>(input: Self::Frame<A>, mut f: impl FnMut(A) -> B) -> Self::Frame<B> {
///         match input {
///             Cached::Fresh(x) => Cached::Fresh(f(x)),
///             Cached::Stale(x) => Cached::Stale(f(x)),
///             Cached::Missing => Cached::Missing,
///         }
///     }
/// }
///
/// let frame = Cached::Stale(1);
/// assert_eq!(Cached::<PartiallyApplied>::map_frame(frame, |n| n + 10), Cached::Stale(11));
/// ```
///
/// # Laws
///
/// `map_frame(x, |a| a)` must equal `x`, and mapping `f` then `g` must equal
/// mapping `|a| g(f(a))` once.
pub trait MappableFrame {
    /// the frame type that is mapped over by `map_frame`
    type Frame<X>;

    /// Apply some function `f` to each element inside a frame
    fn map_frame<A, B>(input: Self::Frame<A>, f: impl FnMut(A) -> B) -> Self::Frame<B>;
}

/// An uninhabited type used to define [`MappableFrame`] instances for partially-applied types.
///
/// For example: the `MappableFrame` instance for `RemoteData<E, A>` cannot be written
/// over `RemoteData<E, _>`, so instead it is written over `RemoteData<E, PartiallyApplied>`
#[derive(Clone, Debug)]
pub enum PartiallyApplied {}

/// Maps the success slot, holding the error type fixed.
///
/// ```rust
/// # use remotedata::{MappableFrame, PartiallyApplied, RemoteData};
/// type Frame = RemoteData<String, PartiallyApplied>;
///
/// let r: RemoteData<String, u8> = RemoteData::Success(2);
/// assert_eq!(Frame::map_frame(r, |x| x * 3), RemoteData::Success(6));
/// ```
impl<E> MappableFrame for RemoteData<E, PartiallyApplied> {
    type Frame<X> = RemoteData<E, X>;

    #[inline(always)]
    fn map_frame<A, B>(input: Self::Frame<A>, f: impl FnMut(A) -> B) -> Self::Frame<B> {
        input.map(f)
    }
}
