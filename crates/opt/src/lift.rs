//! Lifting plain functions into functions over options.
//!
//! `liftN(f)` returns a function taking `N` options. If any argument is empty
//! the result is `None` and `f` is not called; otherwise `f` receives the
//! unwrapped values and its result is normalized through [`Opt::ensure`], so `f`
//! may return an `Opt`, an `Option`, or a [`Candidate`].

use crate::candidate::Candidate;
use crate::opt::Opt;

macro_rules! lift {
    ($name:ident, $name_unless:ident; $($arg:ident: $ty:ident),+) => {
        /// Lifts `f` over options, see the [module docs](self).
        pub fn $name<$($ty,)+ R, C, F>(f: F) -> impl Fn($(Opt<$ty>),+) -> Opt<R>
        where
            F: Fn($($ty),+) -> C,
            C: Into<Candidate<R>>,
            R: 'static,
        {
            move |$($arg: Opt<$ty>),+| {
                $(
                    let Some($arg) = $arg.into_option() else {
                        return Opt::None;
                    };
                )+
                Opt::ensure(f($($arg),+))
            }
        }

        #[doc = concat!("[`", stringify!($name), "`] where results equal to `none_value` become `None`.")]
        pub fn $name_unless<$($ty,)+ R, C, F>(f: F, none_value: R) -> impl Fn($(Opt<$ty>),+) -> Opt<R>
        where
            F: Fn($($ty),+) -> C,
            C: Into<Candidate<R>>,
            R: PartialEq + Clone + Send + Sync + 'static,
        {
            move |$($arg: Opt<$ty>),+| {
                $(
                    let Some($arg) = $arg.into_option() else {
                        return Opt::None;
                    };
                )+
                Opt::ensure_unless(f($($arg),+), none_value.clone())
            }
        }
    };
}

lift!(lift1, lift1_unless; a: A);
lift!(lift2, lift2_unless; a: A, b: B);
lift!(lift3, lift3_unless; a: A, b: B, c: C1);
lift!(lift4, lift4_unless; a: A, b: B, c: C1, d: D);
