//! Conversion between the AST and native values.
//!
//! The native value is [`serde_json::Value`]: null, bool, string, finite
//! number, array and insertion-ordered object. Going to native is total for
//! both hierarchies. Coming from native can only fail for the safe hierarchy,
//! and only for a number the safe rules refuse.
use serde_json::{Map, Number, Value};

use crate::policy::{Policy, Safe, Unchecked, into_ok};
use crate::{JArray, JNumber, JObject, JValue, NumberFormatError};

// ------------------------------- To native -------------------------------- //

impl<P> JNumber<P> {
    /// Native number for the stored text.
    ///
    /// Integer text that fits `i64`/`u64` stays exact; anything else goes
    /// through `f64`. Only unchecked text can overflow (the result saturates
    /// to `±f64::MAX`, the largest finite native number) or fail to parse
    /// (the result is `null`).
    pub fn to_native(&self) -> Value {
        if let Some(n) = self.as_i64() {
            return Value::from(n);
        }
        if let Some(n) = self.as_u64() {
            return Value::from(n);
        }

        let value = self.to_f64();
        if value.is_nan() {
            log::trace!("number text {:?} has no native reading", self.value());
            return Value::Null;
        }
        if value.is_infinite() {
            log::trace!("number text {:?} saturates", self.value());
            return Value::from(f64::MAX.copysign(value));
        }
        Value::from(value)
    }
}

impl<P> JArray<P> {
    pub fn to_native(&self) -> Value {
        Value::Array(self.iter().map(JValue::to_native).collect())
    }
}

impl<P> JObject<P> {
    pub fn to_native(&self) -> Value {
        Value::Object(
            self.iter()
                .map(|(key, value)| (key.clone(), value.to_native()))
                .collect(),
        )
    }
}

impl<P> JValue<P> {
    /// Native copy of the whole tree.
    pub fn to_native(&self) -> Value {
        match self {
            JValue::Null => Value::Null,
            JValue::Boolean(b) => Value::Bool(*b),
            JValue::String(s) => Value::String(s.clone()),
            JValue::Number(n) => n.to_native(),
            JValue::Array(a) => a.to_native(),
            JValue::Object(o) => o.to_native(),
        }
    }

    /// Like [`to_native`](Self::to_native), reusing the tree's strings.
    pub fn into_native(self) -> Value {
        match self {
            JValue::Null => Value::Null,
            JValue::Boolean(b) => Value::Bool(b),
            JValue::String(s) => Value::String(s),
            JValue::Number(n) => n.to_native(),
            JValue::Array(a) => Value::Array(a.into_iter().map(JValue::into_native).collect()),
            JValue::Object(o) => Value::Object(
                o.into_iter()
                    .map(|(key, value)| (key, value.into_native()))
                    .collect::<Map<_, _>>(),
            ),
        }
    }
}

impl<P> From<JValue<P>> for Value {
    fn from(value: JValue<P>) -> Self {
        value.into_native()
    }
}

impl<P> From<JNumber<P>> for Value {
    fn from(value: JNumber<P>) -> Self {
        value.to_native()
    }
}

impl<P> From<JArray<P>> for Value {
    fn from(value: JArray<P>) -> Self {
        JValue::Array(value).into_native()
    }
}

impl<P> From<JObject<P>> for Value {
    fn from(value: JObject<P>) -> Self {
        JValue::Object(value).into_native()
    }
}

// ------------------------------ From native ------------------------------- //

impl<P: Policy> JNumber<P> {
    /// Integers keep their digits; floats keep the text `serde_json` prints
    /// for them (`1.0` stays `"1.0"`), so [`to_native`](Self::to_native)
    /// gives back an equal number of the same kind.
    ///
    /// Bare `f64` input goes through [`from_f64`](Self::from_f64) instead.
    pub fn from_native(number: &Number) -> Result<Self, P::Error> {
        if let Some(n) = number.as_i64() {
            Ok(Self::from(n))
        } else if let Some(n) = number.as_u64() {
            Ok(Self::from(n))
        } else {
            Self::from_literal(number.to_string())
        }
    }
}

impl<P: Policy> JValue<P> {
    /// Builds a tree from a native value, checking numbers under `P`.
    pub fn from_native(value: Value) -> Result<Self, P::Error> {
        Ok(match value {
            Value::Null => JValue::Null,
            Value::Bool(b) => JValue::Boolean(b),
            Value::String(s) => JValue::String(s),
            Value::Number(n) => JValue::Number(JNumber::from_native(&n)?),
            Value::Array(items) => JValue::Array(
                items
                    .into_iter()
                    .map(Self::from_native)
                    .collect::<Result<JArray<P>, _>>()?,
            ),
            Value::Object(map) => JValue::Object(
                map.into_iter()
                    .map(|(key, value)| Ok::<_, P::Error>((key, Self::from_native(value)?)))
                    .collect::<Result<JObject<P>, _>>()?,
            ),
        })
    }
}

impl From<Value> for JValue<Unchecked> {
    fn from(value: Value) -> Self {
        into_ok(Self::from_native(value))
    }
}

impl TryFrom<Value> for JValue<Safe> {
    type Error = NumberFormatError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Self::from_native(value)
    }
}

impl From<&Number> for JNumber<Unchecked> {
    fn from(number: &Number) -> Self {
        into_ok(Self::from_native(number))
    }
}

impl TryFrom<&Number> for JNumber<Safe> {
    type Error = NumberFormatError;

    fn try_from(number: &Number) -> Result<Self, Self::Error> {
        Self::from_native(number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn scalars() {
        assert_eq!(JValue::<Safe>::NULL.to_native(), Value::Null);
        assert_eq!(JValue::<Safe>::TRUE.to_native(), json!(true));
        assert_eq!(JValue::<Safe>::FALSE.to_native(), json!(false));
        assert_eq!(JValue::<Safe>::from("test").to_native(), json!("test"));
    }

    #[test]
    fn numbers() {
        assert_eq!(JValue::<Safe>::from(343435).to_native(), json!(343435));
        assert_eq!(JNumber::<Safe>::from_literal("34335325").unwrap().to_native(), json!(34335325));
        assert_eq!(JNumber::<Safe>::from_literal("-1.5e2").unwrap().to_native(), json!(-150.0));
        assert_eq!(
            JNumber::<Safe>::from_literal("18446744073709551615").unwrap().to_native(),
            json!(u64::MAX)
        );
    }

    #[test]
    fn unchecked_numbers_never_fail() {
        assert_eq!(JNumber::<Unchecked>::from("1e400").to_native(), json!(f64::MAX));
        assert_eq!(JNumber::<Unchecked>::from("-1e400").to_native(), json!(f64::MIN));
        assert_eq!(JNumber::<Unchecked>::from(f64::INFINITY).to_native(), json!(f64::MAX));
        assert_eq!(JNumber::<Unchecked>::from("not a number").to_native(), Value::Null);
        assert_eq!(JNumber::<Unchecked>::from("007").to_native(), json!(7));
    }

    #[test]
    fn composites_convert_children_in_order() {
        let tree = JValue::<Safe>::Object(JObject::from([
            ("z", JValue::from(vec![JValue::from(1), JValue::from("two"), JValue::NULL])),
            ("a", JValue::Object(JObject::from([("nested", JValue::TRUE)]))),
        ]));
        let native = tree.to_native();
        assert_eq!(native, json!({"z": [1, "two", null], "a": {"nested": true}}));

        let keys: Vec<_> = native.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys, ["z", "a"]);

        assert_eq!(tree.into_native(), native);
    }

    #[test]
    fn from_native_round_trip() {
        let native = json!({"name": "x", "tags": ["a", "b"], "n": 1.25, "big": 12345678901u64, "none": null});
        let tree = JValue::<Safe>::try_from(native.clone()).unwrap();
        assert_eq!(tree.get("n").and_then(JValue::as_number).map(JNumber::value), Some("1.25"));
        assert_eq!(tree.get("big").and_then(JValue::as_number).map(JNumber::value), Some("12345678901"));
        assert_eq!(tree.to_native(), native);

        let unchecked = JValue::<Unchecked>::from(native.clone());
        assert_eq!(unchecked.to_native(), native);
    }

    #[test]
    fn native_floats_keep_their_kind() {
        let n = JNumber::<Safe>::try_from(&Number::from_f64(343435.0).unwrap()).unwrap();
        assert_eq!(n.value(), "343435.0");
        assert_eq!(n.to_native(), json!(343435.0));
        assert!(n.to_native().is_f64());

        let native = json!({"x": 1.0, "y": [2.0, -0.5, 1e300], "z": 3});
        let tree = JValue::<Safe>::try_from(native.clone()).unwrap();
        assert_eq!(tree.to_native(), native);
        assert!(tree.to_native()["x"].is_f64());
        assert!(tree.to_native()["z"].is_i64());
        assert_eq!(JValue::<Unchecked>::from(native.clone()).into_native(), native);
    }

    #[test]
    fn nested_arrays_convert_level_by_level() {
        let mut native = json!(1.5);
        for _ in 0..256 {
            native = Value::Array(vec![native]);
        }
        let tree = JValue::<Unchecked>::from(native.clone());
        let safe = tree.into_safe().unwrap();
        assert_eq!(safe.to_native(), native);
        assert_eq!(safe.into_native(), native);
    }
}
