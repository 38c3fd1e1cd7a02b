//! Constructors that coerce raw, nullable, keyed, and deferred values into options.

use crate::candidate::Candidate;
use crate::container::{Countable, Lookup};
use crate::lazy::LazyOpt;
use crate::opt::Opt;

impl<T> Opt<T> {
    /// `Some(value)` unless `value` is the absent marker (`None`).
    ///
    /// Accepts both raw values and `Option`s: `Opt::from_value(1)` is `Some(1)`,
    /// `Opt::from_value(None::<i32>)` is `None`.
    pub fn from_value(value: impl Into<Option<T>>) -> Self {
        let value: Option<T> = value.into();
        value.into()
    }

    /// Alias of [`from_value`](Self::from_value).
    #[inline]
    pub fn create(value: impl Into<Option<T>>) -> Self { Self::from_value(value) }

    #[inline]
    pub fn not_null(value: Option<T>) -> Self { value.into() }

    /// `Some(value)` unless `value == *none_value`.
    pub fn from_value_unless(value: T, none_value: &T) -> Self
    where
        T: PartialEq,
    {
        if value == *none_value {
            Opt::None
        } else {
            Opt::Some(value)
        }
    }

    /// `None` for zero-length strings and collections, `Some(value)` for anything else.
    pub fn non_empty(value: T) -> Self
    where
        T: Countable,
    {
        if value.is_zero_length() {
            Opt::None
        } else {
            Opt::Some(value)
        }
    }
}

impl<'a, V: ?Sized> Opt<&'a V> {
    /// The entry stored under `key`, or `None` when the container has no entry or
    /// the entry is its absent marker.
    pub fn from_entry<C, Q>(container: &'a C, key: &Q) -> Self
    where
        C: Lookup<Q, Output = V> + ?Sized,
        Q: ?Sized,
    {
        container.lookup(key).into()
    }
}

impl<'a, V> Opt<&'a V> {
    /// Like [`from_entry`](Opt::from_entry) for containers of `Option`s: a stored
    /// `None` counts as a missing entry.
    pub fn from_nullable_entry<C, Q>(container: &'a C, key: &Q) -> Self
    where
        C: Lookup<Q, Output = Option<V>> + ?Sized,
        Q: ?Sized,
    {
        container.lookup(key).and_then(Option::as_ref).into()
    }
}

impl<T: 'static> Opt<T> {
    /// Defers `f` until first access and coerces its result like
    /// [`from_value`](Self::from_value).
    pub fn from_return<F, V>(f: F) -> Self
    where
        F: Fn() -> V + Send + Sync + 'static,
        V: Into<Option<T>>,
    {
        Opt::Lazy(LazyOpt::new(move || Opt::<T>::from_value(f())))
    }

    /// [`from_return`](Self::from_return) with a custom absent marker.
    pub fn from_return_unless<F, V>(f: F, none_value: T) -> Self
    where
        T: PartialEq + Send + Sync,
        F: Fn() -> V + Send + Sync + 'static,
        V: Into<Option<T>>,
    {
        Opt::Lazy(LazyOpt::new(move || {
            let value: Option<T> = f().into();
            match value {
                Some(value) => Opt::from_value_unless(value, &none_value),
                None => Opt::None,
            }
        }))
    }

    /// Normalizes `candidate` into an option.
    ///
    /// Options are returned untouched, raw values go through
    /// [`from_value`](Self::from_value), and deferred candidates become a lazy option
    /// whose result is ensured in turn.
    pub fn ensure(candidate: impl Into<Candidate<T>>) -> Self {
        match candidate.into() {
            Candidate::Opt(opt) => opt,
            Candidate::Value(value) => value.into(),
            Candidate::Deferred(f) => Opt::Lazy(LazyOpt::new(move || Opt::<T>::ensure(f()))),
        }
    }

    /// [`ensure`](Self::ensure) with a custom absent marker for raw values.
    pub fn ensure_unless(candidate: impl Into<Candidate<T>>, none_value: T) -> Self
    where
        T: PartialEq + Clone + Send + Sync,
    {
        match candidate.into() {
            Candidate::Opt(opt) => opt,
            Candidate::Value(Some(value)) => Opt::from_value_unless(value, &none_value),
            Candidate::Value(None) => Opt::None,
            Candidate::Deferred(f) => Opt::Lazy(LazyOpt::new(move || {
                Opt::<T>::ensure_unless(f(), none_value.clone())
            })),
        }
    }
}
