//! Runtime "is this option-shaped?" checks.
//!
//! Statically typed callbacks return `Opt<T>` and never need this. It exists for
//! callbacks whose result type is only known at runtime, e.g. plugin hooks
//! handing back a `Box<dyn Any>`.

use std::any::Any;

use crate::error::NotAnOpt;
use crate::opt::Opt;

/// Conversion into an [`Opt`] that may fail when the value has no presence semantics.
pub trait IntoOpt<T> {
    fn into_opt(self) -> Result<Opt<T>, NotAnOpt>;
}

impl<T> IntoOpt<T> for Opt<T> {
    #[inline]
    fn into_opt(self) -> Result<Opt<T>, NotAnOpt> { Ok(self) }
}

impl<T> IntoOpt<T> for Option<T> {
    #[inline]
    fn into_opt(self) -> Result<Opt<T>, NotAnOpt> { Ok(self.into()) }
}

impl<T: 'static> IntoOpt<T> for Box<dyn Any> {
    fn into_opt(self) -> Result<Opt<T>, NotAnOpt> {
        let this = match self.downcast::<Opt<T>>() {
            Ok(opt) => return Ok(*opt),
            Err(this) => this,
        };
        this.downcast::<Option<T>>()
            .map(|opt| Opt::from(*opt))
            .map_err(|_| NotAnOpt)
    }
}

impl<T: 'static> IntoOpt<T> for Box<dyn Any + Send> {
    fn into_opt(self) -> Result<Opt<T>, NotAnOpt> {
        let this = match self.downcast::<Opt<T>>() {
            Ok(opt) => return Ok(*opt),
            Err(this) => this,
        };
        this.downcast::<Option<T>>()
            .map(|opt| Opt::from(*opt))
            .map_err(|_| NotAnOpt)
    }
}
