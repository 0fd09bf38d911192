use std::slice;

use crate::JValue;
use crate::policy::Safe;

/// An ordered JSON array.
///
/// Order and repeated elements are preserved; equality is element-wise and
/// order-sensitive.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct JArray<P = Safe>(Vec<JValue<P>>);

impl<P> JArray<P> {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// The elements, in order.
    pub fn value(&self) -> &[JValue<P>] {
        &self.0
    }

    pub fn as_slice(&self) -> &[JValue<P>] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&JValue<P>> {
        self.0.get(index)
    }

    pub fn iter(&self) -> slice::Iter<'_, JValue<P>> {
        self.0.iter()
    }

    pub fn into_vec(self) -> Vec<JValue<P>> {
        self.0
    }
}

impl<P> Default for JArray<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> From<Vec<JValue<P>>> for JArray<P> {
    fn from(items: Vec<JValue<P>>) -> Self {
        Self(items)
    }
}

impl<P, const N: usize> From<[JValue<P>; N]> for JArray<P> {
    fn from(items: [JValue<P>; N]) -> Self {
        Self(items.into())
    }
}

impl<P> FromIterator<JValue<P>> for JArray<P> {
    fn from_iter<I: IntoIterator<Item = JValue<P>>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<P> IntoIterator for JArray<P> {
    type Item = JValue<P>;
    type IntoIter = std::vec::IntoIter<JValue<P>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, P> IntoIterator for &'a JArray<P> {
    type Item = &'a JValue<P>;
    type IntoIter = slice::Iter<'a, JValue<P>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
