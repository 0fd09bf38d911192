use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;

use crate::policy::{Policy, Safe, Unchecked, into_ok};
use crate::{JValue, NumberFormatError, literal};

/// A JSON number, held as decimal text.
///
/// Native floats are turned into text once, at construction. Under the
/// [`Safe`] policy the text is always a grammatical, finite JSON number; under
/// [`Unchecked`] it is whatever was given.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct JNumber<P = Safe> {
    literal: String,
    policy: PhantomData<P>,
}

impl<P> JNumber<P> {
    pub(crate) fn new_unchecked(literal: String) -> Self {
        Self {
            literal,
            policy: PhantomData,
        }
    }

    /// The stored decimal text.
    pub fn value(&self) -> &str {
        &self.literal
    }

    pub fn as_str(&self) -> &str {
        &self.literal
    }

    pub fn into_string(self) -> String {
        self.literal
    }

    /// Whether the stored text would pass the safe rules.
    pub fn is_well_formed(&self) -> bool {
        literal::check(&self.literal).is_ok()
    }

    /// Native float reading of the text.
    ///
    /// Never fails: magnitudes beyond `f64` saturate to an infinity, and text
    /// that is not numeric at all gives NaN.
    pub fn to_f64(&self) -> f64 {
        literal::parse_f64(&self.literal)
    }

    pub fn as_i64(&self) -> Option<i64> {
        self.literal.parse().ok()
    }

    pub fn as_u64(&self) -> Option<u64> {
        self.literal.parse().ok()
    }
}

impl<P: Policy> JNumber<P> {
    /// Builds a number from its text.
    ///
    /// A safe number keeps a valid literal byte for byte; it refuses anything
    /// off-grammar and anything that overflows `f64`.
    ///
    /// Grammar alone is not enough under [`Safe`]: text such as `"1e400"` is
    /// well formed JSON but is refused with
    /// [`NumberFormatError::OutOfRange`], because every safe number must have
    /// a finite native reading. Underflow to zero (`"1e-400"`) is accepted.
    /// Use [`Unchecked`] to keep such text as is.
    pub fn from_literal(literal: impl Into<String>) -> Result<Self, P::Error> {
        let literal = literal.into();
        P::check_literal(&literal)?;
        Ok(Self::new_unchecked(literal))
    }

    /// Builds a number from a native float, spelled as its shortest
    /// round-tripping decimal text.
    pub fn from_f64(value: f64) -> Result<Self, P::Error> {
        P::check_f64(value)?;
        Ok(Self::new_unchecked(literal::format_f64(value)))
    }

    /// Re-checks the text under another policy.
    pub fn into_policy<Q: Policy>(self) -> Result<JNumber<Q>, Q::Error> {
        Q::check_literal(&self.literal)?;
        Ok(JNumber::new_unchecked(self.literal))
    }
}

impl JNumber<Safe> {
    pub fn into_unchecked(self) -> JNumber<Unchecked> {
        JNumber::new_unchecked(self.literal)
    }
}

impl JNumber<Unchecked> {
    pub fn into_safe(self) -> Result<JNumber<Safe>, NumberFormatError> {
        self.into_policy::<Safe>()
    }
}

impl<P> fmt::Debug for JNumber<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("JNumber").field(&self.literal).finish()
    }
}

impl<P> fmt::Display for JNumber<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.literal)
    }
}

impl<P: Policy> FromStr for JNumber<P> {
    type Err = P::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_literal(s)
    }
}

// ------------------------------ Safe inputs -------------------------------- //

impl TryFrom<&str> for JNumber<Safe> {
    type Error = NumberFormatError;

    fn try_from(literal: &str) -> Result<Self, Self::Error> {
        Self::from_literal(literal)
    }
}

impl TryFrom<String> for JNumber<Safe> {
    type Error = NumberFormatError;

    fn try_from(literal: String) -> Result<Self, Self::Error> {
        Self::from_literal(literal)
    }
}

impl TryFrom<f64> for JNumber<Safe> {
    type Error = NumberFormatError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::from_f64(value)
    }
}

// ---------------------------- Unchecked inputs ----------------------------- //

impl From<&str> for JNumber<Unchecked> {
    fn from(literal: &str) -> Self {
        into_ok(Self::from_literal(literal))
    }
}

impl From<String> for JNumber<Unchecked> {
    fn from(literal: String) -> Self {
        into_ok(Self::from_literal(literal))
    }
}

impl From<f64> for JNumber<Unchecked> {
    fn from(value: f64) -> Self {
        into_ok(Self::from_f64(value))
    }
}

impl From<f64> for JValue<Unchecked> {
    fn from(value: f64) -> Self {
        JValue::Number(value.into())
    }
}

impl TryFrom<f64> for JValue<Safe> {
    type Error = NumberFormatError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        JNumber::from_f64(value).map(JValue::Number)
    }
}

// ------------------------------- Integers ---------------------------------- //

// Decimal digits of an integer are always a valid literal, whatever the policy.
macro_rules! from_integer {
    ($($ty:ty)*) => {
        $(
            impl<P> From<$ty> for JNumber<P> {
                fn from(n: $ty) -> Self {
                    Self::new_unchecked(n.to_string())
                }
            }

            impl<P> From<$ty> for JValue<P> {
                fn from(n: $ty) -> Self {
                    JValue::Number(n.into())
                }
            }
        )*
    };
}

from_integer!(i8 i16 i32 i64 i128 isize u8 u16 u32 u64 u128 usize);
