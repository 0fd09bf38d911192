//! The safe hierarchy: every number is a grammatical, finite JSON number.
//!
//! ```
//! use json_ast::safe::{JNumber, JValue};
//!
//! let n: JNumber = "34335325".parse().unwrap();
//! assert_eq!(n.value(), "34335325");
//! assert!("007".parse::<JNumber>().is_err());
//! assert!(JNumber::from_f64(f64::INFINITY).is_err());
//!
//! let v = JValue::from(n);
//! assert_eq!(v.to_native(), serde_json::json!(34335325));
//! ```
use crate::policy::Safe;

pub type JValue = crate::JValue<Safe>;
pub type JNumber = crate::JNumber<Safe>;
pub type JArray = crate::JArray<Safe>;
pub type JObject = crate::JObject<Safe>;
