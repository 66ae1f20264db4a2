use crate::error::{AppResult, DomainError};
use indexmap::IndexMap;
use serde::Serialize;

/// A named, insertion-ordered string-keyed store.
///
/// Absence and "present but zero/empty" are different things: `get` answers
/// `None` only when the key was never set, so a stored `0` or `""` is
/// returned as-is and never replaced by a default. Keys are plain strings
/// and none of them is special; `"__proto__"` behaves like `"gold"`.
#[derive(Debug, Clone, Serialize)]
pub struct Dict<V> {
    name: String,
    elements: IndexMap<String, V>,
}

impl<V> Dict<V> {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            elements: IndexMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn has(&self, key: &str) -> bool {
        self.elements.contains_key(key)
    }

    pub fn get(&self, key: &str) -> Option<&V> {
        self.elements.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut V> {
        self.elements.get_mut(key)
    }

    /// The stored value, or `default` when the key is absent.
    pub fn get_or<'a>(&'a self, key: &str, default: &'a V) -> &'a V {
        self.elements.get(key).unwrap_or(default)
    }

    /// Insert or overwrite. Answers the previous value, if any.
    ///
    /// An empty key is a contract violation, not a game-logic outcome.
    pub fn set(&mut self, key: impl Into<String>, value: V) -> AppResult<Option<V>> {
        let key = key.into();
        if key.is_empty() {
            return Err(DomainError::InvalidKey("empty dictionary key".to_string()));
        }
        Ok(self.elements.insert(key, value))
    }

    /// Remove a key. Answers the removed value; removing an absent key is a
    /// no-op that answers `None`.
    pub fn remove(&mut self, key: &str) -> Option<V> {
        // shift_remove keeps the remaining entries in insertion order
        self.elements.shift_remove(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.elements.keys().map(String::as_str)
    }

    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.elements.values()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}
