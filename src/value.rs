//! The JSON value tree.
//!
//! One enum, [`JValue`], covers every JSON shape. It is generic over a
//! validation [`Policy`] so the safe and unchecked hierarchies are distinct
//! types sharing one implementation:
//!
//! - scalars without a policy-dependent payload (null, booleans, strings) are
//!   plain variants;
//! - [`JNumber`] carries the policy and enforces it at construction;
//! - [`JArray`] and [`JObject`] own their children, which share the parent's
//!   policy.
//!
//! Values are immutable once built. There is no in-place mutation API; a
//! changed document is a new tree.
pub mod arr;
pub mod num;
pub mod obj;

use crate::NumberFormatError;
use crate::policy::{Policy, Safe, Unchecked, into_ok};

pub use arr::JArray;
pub use num::JNumber;
pub use obj::JObject;

/// Any JSON value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum JValue<P = Safe> {
    Null,
    Boolean(bool),
    /// Stored verbatim; escaping belongs to whoever serializes it.
    String(String),
    Number(JNumber<P>),
    Array(JArray<P>),
    Object(JObject<P>),
}

impl<P> JValue<P> {
    pub const NULL: Self = JValue::Null;
    pub const TRUE: Self = JValue::Boolean(true);
    pub const FALSE: Self = JValue::Boolean(false);

    pub fn boolean(value: bool) -> Self {
        if value { Self::TRUE } else { Self::FALSE }
    }

    // ------------------------------- Kinds -------------------------------- //

    pub fn is_null(&self) -> bool {
        matches!(self, JValue::Null)
    }

    pub fn is_boolean(&self) -> bool {
        matches!(self, JValue::Boolean(_))
    }

    pub fn is_string(&self) -> bool {
        matches!(self, JValue::String(_))
    }

    pub fn is_number(&self) -> bool {
        matches!(self, JValue::Number(_))
    }

    pub fn is_array(&self) -> bool {
        matches!(self, JValue::Array(_))
    }

    pub fn is_object(&self) -> bool {
        matches!(self, JValue::Object(_))
    }

    /// Kind name for diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            JValue::Null => "null",
            JValue::Boolean(_) => "boolean",
            JValue::String(_) => "string",
            JValue::Number(_) => "number",
            JValue::Array(_) => "array",
            JValue::Object(_) => "object",
        }
    }

    // ----------------------------- Accessors ------------------------------ //

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            JValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            JValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<&JNumber<P>> {
        match self {
            JValue::Number(n) => Some(n),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&JArray<P>> {
        match self {
            JValue::Array(a) => Some(a),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&JObject<P>> {
        match self {
            JValue::Object(o) => Some(o),
            _ => None,
        }
    }

    /// Member lookup; `None` unless this is an object holding `key`.
    pub fn get(&self, key: &str) -> Option<&JValue<P>> {
        self.as_object().and_then(|o| o.get(key))
    }

    /// Element lookup; `None` unless this is an array long enough.
    pub fn get_index(&self, index: usize) -> Option<&JValue<P>> {
        self.as_array().and_then(|a| a.get(index))
    }
}

// --------------------------- Hierarchy change ----------------------------- //

impl<P: Policy> JValue<P> {
    /// Rebuilds the tree under policy `Q`, re-checking every number.
    ///
    /// Stops at the first number `Q` refuses, in document order.
    pub fn into_policy<Q: Policy>(self) -> Result<JValue<Q>, Q::Error> {
        Ok(match self {
            JValue::Null => JValue::Null,
            JValue::Boolean(b) => JValue::Boolean(b),
            JValue::String(s) => JValue::String(s),
            JValue::Number(n) => JValue::Number(n.into_policy::<Q>()?),
            JValue::Array(a) => JValue::Array(
                a.into_iter()
                    .map(JValue::into_policy::<Q>)
                    .collect::<Result<JArray<Q>, _>>()?,
            ),
            JValue::Object(o) => JValue::Object(
                o.into_iter()
                    .map(|(key, value)| Ok::<_, Q::Error>((key, value.into_policy::<Q>()?)))
                    .collect::<Result<JObject<Q>, _>>()?,
            ),
        })
    }
}

impl JValue<Safe> {
    /// Every safe tree is a valid unchecked tree.
    pub fn into_unchecked(self) -> JValue<Unchecked> {
        into_ok(self.into_policy::<Unchecked>())
    }
}

impl JValue<Unchecked> {
    /// Validates every number; fails on the first one the safe rules refuse.
    pub fn into_safe(self) -> Result<JValue<Safe>, NumberFormatError> {
        self.into_policy::<Safe>().inspect_err(|err| {
            log::debug!("unchecked tree refused by the {} policy: {err}", Safe::NAME);
        })
    }
}

impl<P> Default for JValue<P> {
    fn default() -> Self {
        Self::NULL
    }
}

// ---------------------------- Scalar inputs ------------------------------- //

impl<P> From<bool> for JValue<P> {
    fn from(value: bool) -> Self {
        Self::boolean(value)
    }
}

impl<P> From<String> for JValue<P> {
    fn from(value: String) -> Self {
        JValue::String(value)
    }
}

impl<P> From<&str> for JValue<P> {
    fn from(value: &str) -> Self {
        JValue::String(value.to_owned())
    }
}

impl<P> From<JNumber<P>> for JValue<P> {
    fn from(value: JNumber<P>) -> Self {
        JValue::Number(value)
    }
}

impl<P> From<JArray<P>> for JValue<P> {
    fn from(value: JArray<P>) -> Self {
        JValue::Array(value)
    }
}

impl<P> From<JObject<P>> for JValue<P> {
    fn from(value: JObject<P>) -> Self {
        JValue::Object(value)
    }
}

impl<P> From<Vec<JValue<P>>> for JValue<P> {
    fn from(items: Vec<JValue<P>>) -> Self {
        JValue::Array(items.into())
    }
}

impl<P> FromIterator<JValue<P>> for JValue<P> {
    fn from_iter<I: IntoIterator<Item = JValue<P>>>(iter: I) -> Self {
        JValue::Array(iter.into_iter().collect())
    }
}
