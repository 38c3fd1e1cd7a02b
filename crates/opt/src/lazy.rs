//! Deferred options, resolved on first access and memoized.

use std::fmt;
use std::sync::Arc;

use once_cell::sync::OnceCell;

use crate::error::Error;
use crate::opt::Opt;
use crate::shape::IntoOpt;

type Computation<T> = Arc<dyn Fn() -> Result<Opt<T>, Error> + Send + Sync>;

/// An option whose variant is decided by a computation run on first access.
///
/// The computation is never run at construction. Once it produces an option the
/// result is cached for the lifetime of the instance and every access delegates to
/// it; concurrent first accesses block on a single running initializer.
///
/// A computation whose result is not option-shaped leaves the instance
/// unresolved: the access fails with [`Error::NotAnOption`] and the next access
/// runs the computation again.
pub struct LazyOpt<T> {
    compute: Computation<T>,
    cell: OnceCell<Box<Opt<T>>>,
}

impl<T: 'static> LazyOpt<T> {
    pub fn new<F, R>(f: F) -> Self
    where
        F: Fn() -> R + Send + Sync + 'static,
        R: IntoOpt<T>,
    {
        let compute: Computation<T> = Arc::new(move || {
            f().into_opt().map_err(|_| Error::NotAnOption)
        });
        Self { compute, cell: OnceCell::new() }
    }

    /// Defers `f(&args)`; `args` is kept alive for as long as the instance.
    pub fn with_args<A, F, R>(f: F, args: A) -> Self
    where
        A: Send + Sync + 'static,
        F: Fn(&A) -> R + Send + Sync + 'static,
        R: IntoOpt<T>,
    {
        Self::new(move || f(&args))
    }
}

impl<T> LazyOpt<T> {
    /// Resolves the option, running the computation unless a result is cached.
    pub fn try_force(&self) -> Result<&Opt<T>, Error> {
        self.cell
            .get_or_try_init(|| evaluate(&self.compute).map(Box::new))
            .map(|opt| &**opt)
    }

    /// Like [`try_force`](Self::try_force).
    ///
    /// # Panics
    ///
    /// If the computation produces a value that is not an option.
    pub fn force(&self) -> &Opt<T> {
        match self.try_force() {
            Ok(opt) => opt,
            Err(err) => panic!("{err}"),
        }
    }

    /// Whether a result is cached. Never runs the computation.
    #[inline]
    pub fn is_resolved(&self) -> bool { self.cell.get().is_some() }

    /// Takes the cached result, or runs the computation if there is none.
    pub fn try_into_inner(self) -> Result<Opt<T>, Error> {
        let LazyOpt { compute, cell } = self;
        match cell.into_inner() {
            Some(opt) => Ok(*opt),
            None => evaluate(&compute),
        }
    }

    /// # Panics
    ///
    /// If the computation produces a value that is not an option.
    pub fn into_inner(self) -> Opt<T> {
        match self.try_into_inner() {
            Ok(opt) => opt,
            Err(err) => panic!("{err}"),
        }
    }
}

fn evaluate<T>(compute: &Computation<T>) -> Result<Opt<T>, Error> {
    tracing::trace!("evaluating deferred option");
    match compute() {
        Ok(opt) => {
            tracing::trace!(variant = opt.variant_name(), "deferred option resolved");
            Ok(opt)
        }
        Err(err) => {
            tracing::debug!(%err, "deferred computation produced a non-option value");
            Err(err)
        }
    }
}

impl<T: Clone> Clone for LazyOpt<T> {
    /// The clone shares the computation and copies the cached result, if any.
    fn clone(&self) -> Self {
        Self { compute: Arc::clone(&self.compute), cell: self.cell.clone() }
    }
}

impl<T: fmt::Debug> fmt::Debug for LazyOpt<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.cell.get() {
            Some(opt) => f.debug_tuple("LazyOpt").field(opt).finish(),
            None => f.write_str("LazyOpt(<unresolved>)"),
        }
    }
}
