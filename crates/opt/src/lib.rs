//! opt: an option type whose combinator chains short-circuit on absence.
//!
//! [`Opt<T>`] is `Some`, `None`, or `Lazy`: a deferred computation resolved
//! and memoized on first access. Factory functions coerce nullable values,
//! container entries, and computations into options, and the `lift*` functions
//! adapt ordinary functions to take options.

pub mod candidate;
pub mod container;
pub mod error;
pub mod iter;
pub mod lazy;
pub mod lift;
pub mod opt;
pub mod shape;

mod factory;
#[cfg(feature = "serde")]
mod serde_impls;

pub use candidate::Candidate;
pub use container::{Countable, Lookup};
pub use error::{Error, NotAnOpt};
pub use iter::{IntoIter, Iter};
pub use lazy::LazyOpt;
pub use lift::*;
pub use opt::Opt;
pub use shape::IntoOpt;
