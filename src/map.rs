//! Map type backing JSON objects.
//!
//! [`Map`] wraps an [`IndexMap`] from owned keys to [`Value`]s. Keys are always copied at
//! insertion, so they do not borrow from the input buffer; values may.
//!
//! Member order is not part of the value's meaning: two maps holding the same pairs in
//! different orders compare equal. Iteration (and so serialization) happens in insertion
//! order, which keeps output deterministic.
//!
//! ## Examples
//!
//! ```rust
//! use json_borrow::{Map, Value};
//!
//! let mut map = Map::new();
//! assert!(map.insert_if_absent("a".to_string(), Value::from(1.0)));
//! assert!(!map.insert_if_absent("a".to_string(), Value::from(2.0)));
//! assert_eq!(map.get("a").and_then(Value::as_f64), Some(1.0));
//! ```

use crate::Value;
use indexmap::IndexMap;

/// A map of owned string keys to JSON values borrowing from `'a`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Map<'a>(IndexMap<String, Value<'a>>);

impl<'a> Map<'a> {
    #[must_use]
    pub fn new() -> Self {
        Map(IndexMap::new())
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Map(IndexMap::with_capacity(capacity))
    }

    /// Inserts a key-value pair, replacing any existing value.
    ///
    /// If the map already contained this key, the old value is returned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use json_borrow::{Map, Value};
    ///
    /// let mut map = Map::new();
    /// assert!(map.insert("key".to_string(), Value::from(1.0)).is_none());
    /// assert_eq!(map.insert("key".to_string(), Value::from(2.0)), Some(Value::from(1.0)));
    /// ```
    pub fn insert(&mut self, key: String, value: Value<'a>) -> Option<Value<'a>> {
        self.0.insert(key, value)
    }

    /// Inserts a key-value pair only if the key is not present yet.
    ///
    /// Returns `true` if the pair was inserted. This is how the parser resolves
    /// duplicate keys: the first occurrence wins and later ones are dropped.
    pub fn insert_if_absent(&mut self, key: String, value: Value<'a>) -> bool {
        match self.0.entry(key) {
            indexmap::map::Entry::Occupied(_) => false,
            indexmap::map::Entry::Vacant(slot) => {
                slot.insert(value);
                true
            }
        }
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value<'a>> {
        self.0.get(key)
    }

    /// Returns a mutable reference to the value for `key`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use json_borrow::from_str;
    ///
    /// let mut root = from_str(r#"{"counter": 1}"#).unwrap();
    /// if let Some(counter) = root.as_object_mut().and_then(|m| m.get_mut("counter")) {
    ///     if let Some(n) = counter.as_f64_mut() {
    ///         *n += 1.0;
    ///     }
    /// }
    /// assert_eq!(json_borrow::to_string(&root), r#"{"counter":2}"#);
    /// ```
    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value<'a>> {
        self.0.get_mut(key)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Removes `key`, keeping the relative order of the remaining members.
    pub fn remove(&mut self, key: &str) -> Option<Value<'a>> {
        self.0.shift_remove(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn keys(&self) -> indexmap::map::Keys<'_, String, Value<'a>> {
        self.0.keys()
    }

    pub fn values(&self) -> indexmap::map::Values<'_, String, Value<'a>> {
        self.0.values()
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Value<'a>> {
        self.0.iter()
    }

    pub fn iter_mut(&mut self) -> indexmap::map::IterMut<'_, String, Value<'a>> {
        self.0.iter_mut()
    }
}

impl<'a> IntoIterator for Map<'a> {
    type Item = (String, Value<'a>);
    type IntoIter = indexmap::map::IntoIter<String, Value<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'m, 'a> IntoIterator for &'m Map<'a> {
    type Item = (&'m String, &'m Value<'a>);
    type IntoIter = indexmap::map::Iter<'m, String, Value<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Collects pairs with first-write-wins on duplicate keys, matching the parser.
impl<'a> FromIterator<(String, Value<'a>)> for Map<'a> {
    fn from_iter<T: IntoIterator<Item = (String, Value<'a>)>>(iter: T) -> Self {
        let mut map = Map::new();
        for (key, value) in iter {
            map.insert_if_absent(key, value);
        }
        map
    }
}
