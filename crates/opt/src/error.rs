//! Error taxonomy for option access and option-shaped contracts.

use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum Error {
    /// `get` was called on an empty option.
    #[error("None has no value")]
    Empty,
    /// A `try_flat_map` callback returned something that is not an option.
    #[error("callables passed to flat_map must return an option; maybe use map instead")]
    FlatMapContract,
    /// A deferred computation produced something that is not an option.
    #[error("deferred computation must produce an option")]
    NotAnOption,
}

/// Returned by [`IntoOpt::into_opt`](crate::IntoOpt::into_opt) when a value carries no
/// presence information. Call sites translate it into the matching [`Error`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Error)]
#[error("value is not an option")]
pub struct NotAnOpt;
