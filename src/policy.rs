//! Validation policies selecting a hierarchy.
//!
//! The policy is a zero-sized marker carried in the type of every value, so a
//! safe tree and an unchecked tree never mix.

use std::convert::Infallible;
use std::fmt::Debug;
use std::hash::Hash;

use crate::{NumberFormatError, literal};

mod sealed {
    pub trait Sealed {}
    impl Sealed for super::Safe {}
    impl Sealed for super::Unchecked {}
}

/// Number acceptance rules of a hierarchy.
pub trait Policy:
    sealed::Sealed + Copy + Default + Eq + Hash + Debug + Send + Sync + 'static
{
    /// Failure raised when a number is refused.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Short name used in diagnostics.
    const NAME: &'static str;

    /// Decides whether `literal` may be stored as number text.
    fn check_literal(literal: &str) -> Result<(), Self::Error>;

    /// Decides whether a native float may be stored.
    fn check_f64(value: f64) -> Result<(), Self::Error>;
}

/// Strict JSON numbers: grammatical and finite.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Safe;

/// Anything goes: text is kept verbatim, floats may be non-finite.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Unchecked;

impl Policy for Safe {
    type Error = NumberFormatError;

    const NAME: &'static str = "safe";

    fn check_literal(literal: &str) -> Result<(), NumberFormatError> {
        literal::check(literal)
    }

    fn check_f64(value: f64) -> Result<(), NumberFormatError> {
        literal::check_finite(value)
    }
}

impl Policy for Unchecked {
    type Error = Infallible;

    const NAME: &'static str = "unchecked";

    fn check_literal(_: &str) -> Result<(), Infallible> {
        Ok(())
    }

    fn check_f64(_: f64) -> Result<(), Infallible> {
        Ok(())
    }
}

/// Unwraps a result whose error type is uninhabited.
pub(crate) fn into_ok<T>(result: Result<T, Infallible>) -> T {
    match result {
        Ok(value) => value,
        Err(never) => match never {},
    }
}
