use std::hash::{DefaultHasher, Hash, Hasher};

use indexmap::IndexMap;
use indexmap::map;

use crate::JValue;
use crate::policy::Safe;

/// A JSON object: unique keys in insertion order.
///
/// Iteration and native conversion follow insertion order, but equality does
/// not: two objects are equal when they hold the same keys with equal values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JObject<P = Safe>(IndexMap<String, JValue<P>>);

impl<P> JObject<P> {
    pub fn new() -> Self {
        Self(IndexMap::new())
    }

    /// The entries, in insertion order.
    pub fn value(&self) -> &IndexMap<String, JValue<P>> {
        &self.0
    }

    pub fn as_map(&self) -> &IndexMap<String, JValue<P>> {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&JValue<P>> {
        self.0.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn keys(&self) -> map::Keys<'_, String, JValue<P>> {
        self.0.keys()
    }

    pub fn values(&self) -> map::Values<'_, String, JValue<P>> {
        self.0.values()
    }

    pub fn iter(&self) -> map::Iter<'_, String, JValue<P>> {
        self.0.iter()
    }

    pub fn into_map(self) -> IndexMap<String, JValue<P>> {
        self.0
    }
}

impl<P> Default for JObject<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Hash> Hash for JObject<P> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Entry digests are summed so the result does not depend on key order.
        let mut sum: u64 = 0;
        for (key, value) in &self.0 {
            let mut entry = DefaultHasher::new();
            key.hash(&mut entry);
            value.hash(&mut entry);
            sum = sum.wrapping_add(entry.finish());
        }
        self.0.len().hash(state);
        sum.hash(state);
    }
}

impl<P> From<IndexMap<String, JValue<P>>> for JObject<P> {
    fn from(map: IndexMap<String, JValue<P>>) -> Self {
        Self(map)
    }
}

impl<P, K: Into<String>, const N: usize> From<[(K, JValue<P>); N]> for JObject<P> {
    fn from(entries: [(K, JValue<P>); N]) -> Self {
        entries.into_iter().collect()
    }
}

/// Last write wins: a repeated key keeps its final value and sits where it
/// was last seen.
impl<P, K: Into<String>> FromIterator<(K, JValue<P>)> for JObject<P> {
    fn from_iter<I: IntoIterator<Item = (K, JValue<P>)>>(iter: I) -> Self {
        let mut map = IndexMap::new();
        for (key, value) in iter {
            let key = key.into();
            map.shift_remove(&key);
            map.insert(key, value);
        }
        Self(map)
    }
}

impl<P> IntoIterator for JObject<P> {
    type Item = (String, JValue<P>);
    type IntoIter = map::IntoIter<String, JValue<P>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, P> IntoIterator for &'a JObject<P> {
    type Item = (&'a String, &'a JValue<P>);
    type IntoIter = map::Iter<'a, String, JValue<P>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn digest<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn duplicate_key_moves_to_last_position() {
        let obj = JObject::<Safe>::from([
            ("a", JValue::from(1)),
            ("b", JValue::from(2)),
            ("a", JValue::from(3)),
        ]);
        assert_eq!(obj.len(), 2);
        assert_eq!(obj.keys().collect::<Vec<_>>(), ["b", "a"]);
        assert_eq!(obj.get("a"), Some(&JValue::from(3)));
    }

    #[test]
    fn equality_ignores_key_order() {
        let ab = JObject::<Safe>::from([("a", JValue::from(1)), ("b", JValue::from(2))]);
        let ba = JObject::<Safe>::from([("b", JValue::from(2)), ("a", JValue::from(1))]);
        assert_eq!(ab, ba);
        assert_eq!(digest(&ab), digest(&ba));

        // Iteration order is still the insertion order.
        assert_eq!(ab.keys().collect::<Vec<_>>(), ["a", "b"]);
        assert_eq!(ba.keys().collect::<Vec<_>>(), ["b", "a"]);
    }

    #[test]
    fn equality_compares_values() {
        let one = JObject::<Safe>::from([("a", JValue::from(1))]);
        let two = JObject::<Safe>::from([("a", JValue::from(2))]);
        let other_key = JObject::<Safe>::from([("b", JValue::from(1))]);
        assert_ne!(one, two);
        assert_ne!(one, other_key);
        assert_ne!(one, JObject::new());
    }

    #[test]
    fn usable_as_set_member() {
        let mut set = HashSet::new();
        set.insert(JObject::<Safe>::from([("x", JValue::TRUE), ("y", JValue::NULL)]));
        assert!(set.contains(&JObject::<Safe>::from([("y", JValue::NULL), ("x", JValue::TRUE)])));
    }
}
