//! The unchecked ("unsafe") hierarchy: numbers are stored as given.
//!
//! Nothing here can fail. Text that is not a JSON number, and floats that are
//! not finite, are kept as best-effort text; reading them back follows `f64`
//! semantics.
//!
//! ```
//! use json_ast::unchecked::{JNumber, JValue};
//!
//! let n = JNumber::from("007");
//! assert_eq!(n.value(), "007");
//!
//! let big = JValue::from(f64::INFINITY);
//! assert_eq!(big.as_number().map(JNumber::to_f64), Some(f64::INFINITY));
//! ```
use crate::policy::Unchecked;

pub type JValue = crate::JValue<Unchecked>;
pub type JNumber = crate::JNumber<Unchecked>;
pub type JArray = crate::JArray<Unchecked>;
pub type JObject = crate::JObject<Unchecked>;
