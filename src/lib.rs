//! Typed JSON abstract syntax trees.
//!
//! Two hierarchies of the same shape:
//!
//! - [`safe`]: numbers are checked when they are built. Text must follow the
//!   JSON number grammar and stay within the finite `f64` range; native floats
//!   must be finite. A safe tree therefore always converts back to native
//!   values without loss of validity.
//! - [`unchecked`]: numbers are stored as given, whatever they look like.
//!
//! Both are the generic [`JValue`] over a [`Policy`] marker, so they are
//! distinct types and cannot be mixed by accident. Moving between them is
//! explicit: [`JValue::into_unchecked`] always succeeds, [`JValue::into_safe`]
//! re-validates every number.
//!
//! Native values are [`serde_json::Value`]s:
//!
//! ```
//! use json_ast::{JObject, JValue};
//! use serde_json::json;
//!
//! let tree: JValue = JValue::Object(JObject::from([("test", JValue::from("test"))]));
//! assert_eq!(tree.to_native(), json!({"test": "test"}));
//! ```
//!
//! Conversions, hierarchy changes and dropping a tree all recurse once per
//! nesting level, so very deep documents (hundreds of thousands of levels)
//! can exhaust the thread's stack. `serde_json::Value` has the same limit;
//! its parser refuses input nested deeper than 128 levels by default.
pub mod error;
pub mod literal;
mod native;
pub mod policy;
pub mod safe;
pub mod unchecked;
pub mod value;

#[cfg(feature = "serde")]
mod serde_support;

pub use error::NumberFormatError;
pub use policy::{Policy, Safe, Unchecked};
pub use value::{JArray, JNumber, JObject, JValue};
