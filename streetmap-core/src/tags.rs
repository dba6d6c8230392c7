//! Insertion-ordered tag collection.
//!
//! OSM tags are free-form key/value pairs, but their enumeration order must
//! be deterministic for a given input stream. A bare `HashMap` iterates in
//! hash order, so `TagSet` keeps a parallel key list alongside the map and
//! enumerates through it.

use std::collections::HashMap;

/// An ordered `String -> String` tag map.
///
/// Keys are unique and keep the position of their first insertion.
/// Re-inserting an existing key overwrites the value without moving the key.
///
/// # Examples
/// ```
/// use streetmap_core::TagSet;
///
/// let mut tags = TagSet::new();
/// tags.insert("name".into(), "SF".into());
/// tags.insert("population".into(), "800000".into());
/// tags.insert("name".into(), "San Francisco".into());
///
/// assert_eq!(tags.key_at(0), Some("name"));
/// assert_eq!(tags.key_at(1), Some("population"));
/// assert_eq!(tags.get("name"), Some("San Francisco"));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TagSet {
    keys: Vec<String>,
    values: HashMap<String, String>,
}

impl TagSet {
    /// Create an empty tag set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite a tag, preserving the key's original position.
    pub fn insert(&mut self, key: String, value: String) {
        if self.values.insert(key.clone(), value).is_none() {
            self.keys.push(key);
        }
    }

    /// Look up a tag value by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Whether a tag with this key is present.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// The key at `index` in first-insertion order, or `None` out of range.
    #[must_use]
    pub fn key_at(&self, index: usize) -> Option<&str> {
        self.keys.get(index).map(String::as_str)
    }

    /// Number of distinct keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Whether the set holds no tags.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Iterate over `(key, value)` pairs in first-insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.keys
            .iter()
            .filter_map(|key| self.values.get(key).map(|value| (key.as_str(), value.as_str())))
    }
}

impl FromIterator<(String, String)> for TagSet {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(pairs: I) -> Self {
        let mut tags = Self::new();
        for (key, value) in pairs {
            tags.insert(key, value);
        }
        tags
    }
}
