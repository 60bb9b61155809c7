//! Key-unique structured metadata attached to a result.

use indexmap::IndexMap;
use serde::Serialize;

/// Value stored against an argument key.
///
/// Values are opaque to this crate; they are stored and returned verbatim.
pub type ArgumentValue = serde_json::Value;

/// Insertion-ordered argument map whose keys never repeat.
///
/// The map only grows through the validating appliers on
/// [`crate::ResultDetails`]; there is no public way to overwrite an entry.
///
/// # Examples
///
/// ```
/// use operation_result::{Detailed, succeeded};
///
/// let result = succeeded().with_argument("attempt", 3)?;
/// assert_eq!(result.arguments().get("attempt"), Some(&serde_json::Value::from(3)));
/// # Ok::<(), operation_result::OperationResultError>(())
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Arguments(IndexMap<String, ArgumentValue>);

impl Arguments {
    /// Create an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self(IndexMap::new())
    }

    /// Look up the value stored against `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&ArgumentValue> {
        self.0.get(key)
    }

    /// Returns `true` when `key` is present.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Number of stored arguments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` when no arguments are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Key/value pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ArgumentValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    // Callers must have checked the key is absent.
    pub(crate) fn insert_unchecked(&mut self, key: String, value: ArgumentValue) {
        self.0.insert(key, value);
    }
}

impl<'a> IntoIterator for &'a Arguments {
    type Item = (&'a String, &'a ArgumentValue);
    type IntoIter = indexmap::map::Iter<'a, String, ArgumentValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for Arguments {
    type Item = (String, ArgumentValue);
    type IntoIter = indexmap::map::IntoIter<String, ArgumentValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
