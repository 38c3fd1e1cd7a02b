//! Inputs accepted by [`Opt::ensure`] and [`Opt::or_else`].

use std::sync::Arc;

use crate::lazy::LazyOpt;
use crate::opt::Opt;

/// Something that can be normalized into an [`Opt`].
pub enum Candidate<T> {
    /// A raw value; `None` is the absent marker.
    Value(Option<T>),
    /// Already an option; passed through untouched.
    Opt(Opt<T>),
    /// A computation producing another candidate, run on first access.
    Deferred(Arc<dyn Fn() -> Candidate<T> + Send + Sync>),
}

impl<T> Candidate<T> {
    #[inline]
    pub fn value(value: T) -> Self { Candidate::Value(Some(value)) }
}

impl<T: 'static> Candidate<T> {
    pub fn deferred<F, C>(f: F) -> Self
    where
        F: Fn() -> C + Send + Sync + 'static,
        C: Into<Candidate<T>>,
    {
        Candidate::Deferred(Arc::new(move || f().into()))
    }
}

impl<T> From<Opt<T>> for Candidate<T> {
    #[inline]
    fn from(opt: Opt<T>) -> Self { Candidate::Opt(opt) }
}

impl<T> From<LazyOpt<T>> for Candidate<T> {
    #[inline]
    fn from(lazy: LazyOpt<T>) -> Self { Candidate::Opt(Opt::Lazy(lazy)) }
}

impl<T> From<Option<T>> for Candidate<T> {
    #[inline]
    fn from(value: Option<T>) -> Self { Candidate::Value(value) }
}
