//! Ordered map type for plain objects.
//!
//! This module provides [`ObjectMap`], a wrapper around [`IndexMap`] that keeps
//! insertion order for object fields and knows the natural key enumeration
//! order used by the array-like classifier.
//!
//! ## Enumeration Order
//!
//! [`ObjectMap::own_keys`] lists keys the way a plain object enumerates them:
//!
//! 1. Array-index keys (`"0"`, `"1"`, ... without leading zeros, below
//!    2^32 − 1) in ascending numeric order
//! 2. Every other key in insertion order
//!
//! [`ObjectMap::iter`] and [`ObjectMap::keys`] stay in plain insertion order.
//!
//! ## Examples
//!
//! ```rust
//! use serde_leaf::{ObjectMap, Value};
//!
//! let mut map = ObjectMap::new();
//! map.insert("name".to_string(), Value::from("Alice"));
//! map.insert("1".to_string(), Value::from(1));
//! map.insert("0".to_string(), Value::from(0));
//!
//! assert_eq!(map.own_keys(), vec!["0", "1", "name"]);
//! ```

use indexmap::IndexMap;
use std::collections::HashMap;

/// An insertion-ordered map of string keys to values.
///
/// # Examples
///
/// ```rust
/// use serde_leaf::{ObjectMap, Value};
///
/// let mut map = ObjectMap::new();
/// map.insert("first".to_string(), Value::from(1));
/// map.insert("second".to_string(), Value::from(2));
///
/// // Iteration maintains insertion order
/// let keys: Vec<_> = map.keys().cloned().collect();
/// assert_eq!(keys, vec!["first", "second"]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectMap(IndexMap<String, crate::Value>);

impl ObjectMap {
    /// Creates an empty `ObjectMap`.
    #[must_use]
    pub fn new() -> Self {
        ObjectMap(IndexMap::new())
    }

    /// Creates an empty `ObjectMap` with the specified capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        ObjectMap(IndexMap::with_capacity(capacity))
    }

    /// Inserts a key-value pair into the map.
    ///
    /// If the map already contained this key, the old value is returned and
    /// the key keeps its original position.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_leaf::{ObjectMap, Value};
    ///
    /// let mut map = ObjectMap::new();
    /// assert!(map.insert("key".to_string(), Value::from(42)).is_none());
    /// assert!(map.insert("key".to_string(), Value::from(43)).is_some());
    /// ```
    pub fn insert(&mut self, key: String, value: crate::Value) -> Option<crate::Value> {
        self.0.insert(key, value)
    }

    /// Returns a reference to the value corresponding to the key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&crate::Value> {
        self.0.get(key)
    }

    #[must_use]
    pub fn get_mut(&mut self, key: &str) -> Option<&mut crate::Value> {
        self.0.get_mut(key)
    }

    /// Returns the number of elements in the map.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the map contains no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the keys of the map, in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, crate::Value> {
        self.0.keys()
    }

    /// Returns an iterator over the values of the map, in insertion order.
    pub fn values(&self) -> indexmap::map::Values<'_, String, crate::Value> {
        self.0.values()
    }

    /// Returns an iterator over the key-value pairs of the map, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, crate::Value> {
        self.0.iter()
    }

    /// Returns the keys in natural enumeration order: array-index keys
    /// ascending, then the remaining keys in insertion order.
    #[must_use]
    pub fn own_keys(&self) -> Vec<&str> {
        self.own_entries().into_iter().map(|(k, _)| k).collect()
    }

    /// Returns the entries in natural enumeration order.
    #[must_use]
    pub fn own_entries(&self) -> Vec<(&str, &crate::Value)> {
        let mut indexed: Vec<(u32, &str, &crate::Value)> = Vec::new();
        let mut named: Vec<(&str, &crate::Value)> = Vec::new();
        for (key, value) in &self.0 {
            match array_index(key) {
                Some(index) => indexed.push((index, key.as_str(), value)),
                None => named.push((key.as_str(), value)),
            }
        }
        indexed.sort_unstable_by_key(|(index, _, _)| *index);

        indexed
            .into_iter()
            .map(|(_, key, value)| (key, value))
            .chain(named)
            .collect()
    }
}

/// Returns the numeric value of `key` if it is a canonical array index:
/// `"0"` or a digit string without a leading zero, below 2^32 − 1.
fn array_index(key: &str) -> Option<u32> {
    if key.is_empty() || (key.len() > 1 && key.starts_with('0')) {
        return None;
    }
    if !key.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    key.parse::<u32>().ok().filter(|&index| index != u32::MAX)
}

impl Default for ObjectMap {
    fn default() -> Self {
        Self::new()
    }
}

impl From<HashMap<String, crate::Value>> for ObjectMap {
    fn from(map: HashMap<String, crate::Value>) -> Self {
        ObjectMap(map.into_iter().collect())
    }
}

impl From<ObjectMap> for HashMap<String, crate::Value> {
    fn from(map: ObjectMap) -> Self {
        map.0.into_iter().collect()
    }
}

impl IntoIterator for ObjectMap {
    type Item = (String, crate::Value);
    type IntoIter = indexmap::map::IntoIter<String, crate::Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ObjectMap {
    type Item = (&'a String, &'a crate::Value);
    type IntoIter = indexmap::map::Iter<'a, String, crate::Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<(String, crate::Value)> for ObjectMap {
    fn from_iter<T: IntoIterator<Item = (String, crate::Value)>>(iter: T) -> Self {
        ObjectMap(IndexMap::from_iter(iter))
    }
}
