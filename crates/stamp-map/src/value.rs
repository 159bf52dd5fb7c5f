use std::collections::btree_map::{self, BTreeMap};

use serde::Serialize;

/// A map-file value: one string or an ordered list of strings.
///
/// The variant is fixed when the line is parsed. Serializes untagged, so a
/// scalar becomes a string and a list a sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Value {
    /// Line had exactly one separator.
    Scalar(String),
    /// Line had two or more separators; holds every part after the key.
    List(Vec<String>),
}

impl Value {
    /// Returns the string if this is a scalar.
    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            Value::Scalar(s) => Some(s),
            Value::List(_) => None,
        }
    }

    /// Returns the items if this is a list.
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Value::Scalar(_) => None,
            Value::List(items) => Some(items),
        }
    }

    pub fn is_list(&self) -> bool {
        matches!(self, Value::List(_))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Scalar(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Scalar(s)
    }
}

impl From<Vec<String>> for Value {
    fn from(items: Vec<String>) -> Self {
        Value::List(items)
    }
}

/// Template data parsed from a map file.
///
/// Read-only once built. Use [`MapBuilder`](crate::MapBuilder) to populate
/// one from files or lines, or collect an iterator of pairs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DataMapping {
    entries: BTreeMap<String, Value>,
}

impl DataMapping {
    /// Creates an empty mapping, used when no map file is given.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries in key order.
    pub fn iter(&self) -> btree_map::Iter<'_, String, Value> {
        self.entries.iter()
    }

    pub(crate) fn insert(&mut self, key: String, value: Value) {
        self.entries.insert(key, value);
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for DataMapping {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut mapping = DataMapping::new();
        for (key, value) in iter {
            mapping.insert(key.into(), value.into());
        }
        mapping
    }
}

impl<'a> IntoIterator for &'a DataMapping {
    type Item = (&'a String, &'a Value);
    type IntoIter = btree_map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
