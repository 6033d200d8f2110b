//! Insertion-ordered set and map keyed by arbitrary values.
//!
//! [`ValueSet`] and [`ValueMap`] iterate in insertion order and decide
//! membership with SameValueZero equality (see [`Value::same_value_zero`]).
//! [`Value`] holds floats, so neither `Hash` nor `Eq` is available and lookups
//! are linear scans.
//!
//! Equality between two sets, or two maps, ignores iteration order.

use crate::Value;

/// Unique values in insertion order.
///
/// # Examples
///
/// ```rust
/// use serde_leaf::{Value, ValueSet};
///
/// let set: ValueSet = [3, 1, 2, 1].into_iter().map(Value::from).collect();
/// assert_eq!(set.len(), 3);
///
/// let order: Vec<_> = set.iter().filter_map(Value::as_i64).collect();
/// assert_eq!(order, vec![3, 1, 2]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ValueSet(Vec<Value>);

impl ValueSet {
    #[must_use]
    pub fn new() -> Self {
        ValueSet(Vec::new())
    }

    /// Adds `value` unless an equal element is already present.
    /// Returns `true` if the value was inserted.
    pub fn insert(&mut self, value: Value) -> bool {
        if self.contains(&value) {
            return false;
        }
        self.0.push(value);
        true
    }

    #[must_use]
    pub fn contains(&self, value: &Value) -> bool {
        self.0.iter().any(|v| v.same_value_zero(value))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.0.iter()
    }
}

impl PartialEq for ValueSet {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|v| other.contains(v))
    }
}

impl FromIterator<Value> for ValueSet {
    fn from_iter<T: IntoIterator<Item = Value>>(iter: T) -> Self {
        let mut set = ValueSet::new();
        for value in iter {
            set.insert(value);
        }
        set
    }
}

impl IntoIterator for ValueSet {
    type Item = Value;
    type IntoIter = std::vec::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValueSet {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Key-value association with arbitrary value keys, in insertion order.
///
/// # Examples
///
/// ```rust
/// use serde_leaf::{Value, ValueMap};
///
/// let mut map = ValueMap::new();
/// map.insert(Value::from(1), Value::from("one"));
/// map.insert(Value::from("1"), Value::from("string one"));
/// assert_eq!(map.len(), 2);
/// assert_eq!(map.get(&Value::from(1.0)), Some(&Value::from("one")));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ValueMap(Vec<(Value, Value)>);

impl ValueMap {
    #[must_use]
    pub fn new() -> Self {
        ValueMap(Vec::new())
    }

    /// Inserts or replaces the entry for `key`. A replaced entry keeps its
    /// original position; the previous value is returned.
    pub fn insert(&mut self, key: Value, value: Value) -> Option<Value> {
        match self.0.iter_mut().find(|(k, _)| k.same_value_zero(&key)) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.0.push((key, value));
                None
            }
        }
    }

    #[must_use]
    pub fn get(&self, key: &Value) -> Option<&Value> {
        self.0
            .iter()
            .find(|(k, _)| k.same_value_zero(key))
            .map(|(_, v)| v)
    }

    #[must_use]
    pub fn contains_key(&self, key: &Value) -> bool {
        self.get(key).is_some()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&Value, &Value)> {
        self.0.iter().map(|(k, v)| (k, v))
    }
}

impl PartialEq for ValueMap {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|(k, v)| other.get(k) == Some(v))
    }
}

impl FromIterator<(Value, Value)> for ValueMap {
    fn from_iter<T: IntoIterator<Item = (Value, Value)>>(iter: T) -> Self {
        let mut map = ValueMap::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

impl IntoIterator for ValueMap {
    type Item = (Value, Value);
    type IntoIter = std::vec::IntoIter<(Value, Value)>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
