//! `serde` integration.
//!
//! Serialization goes through the native conversion, so numbers come out as
//! native numbers rather than as their stored text: `"1.50"` is written as
//! `1.5`, `"1E2"` as `100.0`, and integer text wider than `u64` is written
//! through `f64`. Use [`JNumber::value`] when the exact spelling matters.
//!
//! Deserialization reads a [`serde_json::Value`] first and
//! then builds the tree under the target policy, so a safe tree refuses bad
//! numbers with the deserializer's own error type.
use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};
use serde_json::{Number, Value};

use crate::policy::Policy;
use crate::{JArray, JNumber, JObject, JValue};

impl<P> Serialize for JNumber<P> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_native().serialize(serializer)
    }
}

impl<P> Serialize for JArray<P> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for element in self {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}

impl<P> Serialize for JObject<P> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl<P> Serialize for JValue<P> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            JValue::Null => serializer.serialize_unit(),
            JValue::Boolean(b) => serializer.serialize_bool(*b),
            JValue::String(s) => serializer.serialize_str(s),
            JValue::Number(n) => n.serialize(serializer),
            JValue::Array(a) => a.serialize(serializer),
            JValue::Object(o) => o.serialize(serializer),
        }
    }
}

impl<'de, P: Policy> Deserialize<'de> for JValue<P> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        JValue::from_native(value).map_err(de::Error::custom)
    }
}

impl<'de, P: Policy> Deserialize<'de> for JNumber<P> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let number = Number::deserialize(deserializer)?;
        JNumber::from_native(&number).map_err(de::Error::custom)
    }
}
