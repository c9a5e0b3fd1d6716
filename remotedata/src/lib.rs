//! The state of a remote fetch as a value.
//!
//! [`RemoteData`] has exactly four variants: [`RemoteData::NotAsked`],
//! [`RemoteData::Loading`], [`RemoteData::Success`] and [`RemoteData::Failure`].
//! Fetching is left to the caller, which replaces its stored value as the
//! request progresses. This crate only provides the vocabulary for transforming
//! and reading those values.
//!
//! ```rust
//! use remotedata::RemoteData;
//!
//! let user: RemoteData<String, u32> = RemoteData::Success(41);
//! let next = user.map(|id| id + 1);
//!
//! assert_eq!(next.get_or_else(0), 42);
//! ```
mod frame;
mod remote_data;
mod transform;
mod unwrap;

#[cfg(feature = "experimental")]
pub mod experimental;

pub use frame::{MappableFrame, PartiallyApplied};
pub use remote_data::RemoteData;
