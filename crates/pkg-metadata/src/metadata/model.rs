//! The JSON form of core metadata.
//!
//! [`Metadata`] maps JSON keys (see [`crate::metadata::fields::json_key`]) to
//! either a single string or a list of strings. A key may also be present
//! with no value, which serializes as `null`; the `pyproject.toml` projection
//! uses this for `metadata_version`, which is left for the caller to assign.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// The value of a metadata field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// A single-use field, e.g. `name`.
    Single(String),
    /// A multiple-use field (e.g. `requires_dist`), or `keywords`.
    Multiple(Vec<String>),
}

impl FieldValue {
    /// Return the value as a string, if it is a single value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Single(value) => Some(value),
            Self::Multiple(_) => None,
        }
    }

    /// Return the value as a list, if it is a multiple value.
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Self::Single(_) => None,
            Self::Multiple(values) => Some(values),
        }
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Single(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Single(value.to_owned())
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(values: Vec<String>) -> Self {
        Self::Multiple(values)
    }
}

impl From<Vec<&str>> for FieldValue {
    fn from(values: Vec<&str>) -> Self {
        Self::Multiple(values.into_iter().map(ToOwned::to_owned).collect())
    }
}

/// Core metadata in JSON form.
///
/// Entries keep their insertion order for serialization, but equality
/// ignores order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Metadata(IndexMap<String, Option<FieldValue>>);

impl Metadata {
    /// Create an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key` to `value`, replacing any previous value in place.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<FieldValue>) {
        self.0.insert(key.into(), Some(value.into()));
    }

    /// Set `key` to `null`.
    pub fn insert_null(&mut self, key: impl Into<String>) {
        self.0.insert(key.into(), None);
    }

    /// Return the value of `key`, or `None` if it is absent or `null`.
    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.0.get(key).and_then(Option::as_ref)
    }

    /// Return the value of `key` if it is a single string.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(FieldValue::as_str)
    }

    /// Return the value of `key` if it is a list of strings.
    pub fn get_list(&self, key: &str) -> Option<&[String]> {
        self.get(key).and_then(FieldValue::as_list)
    }

    /// Return a mutable reference to the value of `key`.
    pub(crate) fn get_mut(&mut self, key: &str) -> Option<&mut FieldValue> {
        self.0.get_mut(key).and_then(Option::as_mut)
    }

    /// Whether `key` is present, including with a `null` value.
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Iterate over the entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&FieldValue>)> {
        self.0
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_ref()))
    }

    /// The number of keys, including those with a `null` value.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the mapping has no keys.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Metadata
where
    K: Into<String>,
    V: Into<FieldValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(key, value)| (key.into(), Some(value.into())))
                .collect(),
        )
    }
}
