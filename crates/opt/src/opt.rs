//! The option type and its combinators.

use std::fmt;

use crate::candidate::Candidate;
use crate::error::Error;
use crate::lazy::LazyOpt;
use crate::shape::IntoOpt;

/// A value (`Some`), no value (`None`), or a deferred computation that decides
/// between the two (`Lazy`).
///
/// Operations on `Lazy` force its computation first and then behave exactly like
/// the variant it resolved to. Chains of lazy options are followed until a
/// concrete variant is reached.
pub enum Opt<T> {
    Some(T),
    None,
    Lazy(LazyOpt<T>),
}

impl<T> Opt<T> {
    #[inline]
    pub fn some(value: T) -> Self { Opt::Some(value) }

    #[inline]
    pub fn none() -> Self { Opt::None }

    /// Borrows the value of the concrete variant, forcing lazy options.
    ///
    /// The returned option is never `Lazy`.
    pub fn as_ref(&self) -> Opt<&T> {
        match self {
            Opt::Some(value) => Opt::Some(value),
            Opt::None => Opt::None,
            Opt::Lazy(lazy) => lazy.force().as_ref(),
        }
    }

    /// Replaces a lazy option by the concrete variant it resolves to.
    pub fn into_concrete(self) -> Self {
        match self {
            Opt::Lazy(lazy) => lazy.into_inner().into_concrete(),
            concrete => concrete,
        }
    }

    /// Converts into a std option, forcing lazy options.
    pub fn into_option(self) -> Option<T> {
        match self {
            Opt::Some(value) => Some(value),
            Opt::None => None,
            Opt::Lazy(lazy) => lazy.into_inner().into_option(),
        }
    }

    pub fn is_defined(&self) -> bool {
        match self {
            Opt::Some(_) => true,
            Opt::None => false,
            Opt::Lazy(lazy) => lazy.force().is_defined(),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool { !self.is_defined() }

    /// Returns the value, or [`Error::Empty`].
    pub fn get(self) -> Result<T, Error> { self.get_or_throw(Error::Empty) }

    /// Returns the value, or `default`.
    pub fn get_or_else(self, default: T) -> T { self.into_option().unwrap_or(default) }

    /// Returns the value, or the result of `supplier`. `supplier` only runs when
    /// there is no value, which makes this preferable over `get_or_else` for
    /// expensive defaults.
    pub fn get_or_call<F: FnOnce() -> T>(self, supplier: F) -> T {
        self.into_option().unwrap_or_else(supplier)
    }

    /// Returns the value, or `error` as the failure.
    pub fn get_or_throw<E>(self, error: E) -> Result<T, E> { self.into_option().ok_or(error) }

    /// Maps `Opt<T>` to `Opt<U>` by applying `f` to the contained value.
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Opt<U> {
        match self.into_option() {
            Some(value) => Opt::Some(f(value)),
            None => Opt::None,
        }
    }

    /// Returns the option produced by `f`, without re-wrapping it.
    pub fn flat_map<U, F: FnOnce(T) -> Opt<U>>(self, f: F) -> Opt<U> {
        match self.into_option() {
            Some(value) => f(value),
            None => Opt::None,
        }
    }

    /// [`flat_map`](Self::flat_map) for callbacks whose result is only known to be
    /// option-shaped at runtime.
    ///
    /// Fails with [`Error::FlatMapContract`] when the callback returns anything else.
    pub fn try_flat_map<U, R, F>(self, f: F) -> Result<Opt<U>, Error>
    where
        R: IntoOpt<U>,
        F: FnOnce(T) -> R,
    {
        let Some(value) = self.into_option() else {
            return Ok(Opt::None);
        };
        f(value).into_opt().map_err(|_| {
            tracing::debug!("flat_map callback returned a non-option value");
            Error::FlatMapContract
        })
    }

    /// Keeps the value only if `predicate` returns `true`.
    pub fn filter<P: FnOnce(&T) -> bool>(self, predicate: P) -> Self {
        self.into_option().filter(predicate).into()
    }

    /// Keeps the value only if `predicate` returns `false`.
    pub fn filter_not<P: FnOnce(&T) -> bool>(self, predicate: P) -> Self {
        self.into_option().filter(|value| !predicate(value)).into()
    }

    /// Keeps the value only if it equals `value`.
    pub fn select(self, value: &T) -> Self
    where
        T: PartialEq,
    {
        self.filter(|own| own == value)
    }

    /// Drops the value if it equals `value`.
    pub fn reject(self, value: &T) -> Self
    where
        T: PartialEq,
    {
        self.filter_not(|own| own == value)
    }

    /// Runs `consumer` on the value, if any, and returns the option unchanged.
    pub fn for_all<F: FnOnce(&T)>(self, consumer: F) -> Self {
        if let Opt::Some(value) = self.as_ref() {
            consumer(value);
        }
        self
    }

    /// Alias of [`for_all`](Self::for_all).
    #[inline]
    pub fn if_defined<F: FnOnce(&T)>(self, consumer: F) -> Self { self.for_all(consumer) }

    pub fn fold_left<U, F: FnOnce(U, T) -> U>(self, initial: U, combine: F) -> U {
        match self.into_option() {
            Some(value) => combine(initial, value),
            None => initial,
        }
    }

    pub fn fold_right<U, F: FnOnce(T, U) -> U>(self, initial: U, combine: F) -> U {
        match self.into_option() {
            Some(value) => combine(value, initial),
            None => initial,
        }
    }

    pub(crate) fn variant_name(&self) -> &'static str {
        match self {
            Opt::Some(_) => "Some",
            Opt::None => "None",
            Opt::Lazy(_) => "Lazy",
        }
    }
}

impl<T: 'static> Opt<T> {
    /// Returns this option if it holds a value, else `alternative` normalized
    /// through [`Opt::ensure`].
    ///
    /// A deferred alternative is not run here; it stays lazy until accessed.
    pub fn or_else(self, alternative: impl Into<Candidate<T>>) -> Self {
        match self.into_concrete() {
            Opt::None => Opt::ensure(alternative),
            defined => defined,
        }
    }
}

impl<T: Clone> Opt<&T> {
    pub fn cloned(self) -> Opt<T> { self.map(T::clone) }
}

impl<T: Copy> Opt<&T> {
    pub fn copied(self) -> Opt<T> { self.map(|value| *value) }
}

impl<T> Default for Opt<T> {
    #[inline]
    fn default() -> Self { Opt::None }
}

impl<T: Clone> Clone for Opt<T> {
    fn clone(&self) -> Self {
        match self {
            Opt::Some(value) => Opt::Some(value.clone()),
            Opt::None => Opt::None,
            Opt::Lazy(lazy) => Opt::Lazy(lazy.clone()),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Opt<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Opt::Some(value) => f.debug_tuple("Some").field(value).finish(),
            Opt::None => f.write_str("None"),
            Opt::Lazy(lazy) => fmt::Debug::fmt(lazy, f),
        }
    }
}

/// Compares the concrete variants; lazy options are forced.
impl<T: PartialEq> PartialEq for Opt<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_ref().into_option() == other.as_ref().into_option()
    }
}

impl<T: Eq> Eq for Opt<T> {}

impl<T> From<Option<T>> for Opt<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Opt::Some(value),
            None => Opt::None,
        }
    }
}

impl<T> From<Opt<T>> for Option<T> {
    #[inline]
    fn from(value: Opt<T>) -> Self { value.into_option() }
}

impl<T> From<LazyOpt<T>> for Opt<T> {
    #[inline]
    fn from(lazy: LazyOpt<T>) -> Self { Opt::Lazy(lazy) }
}
