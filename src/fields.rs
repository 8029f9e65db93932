//! Ordered wire-field table
//!
//! Every request builder accumulates its wire fields in a [`FieldTable`]
//! before it is validated and serialized into an
//! `application/x-www-form-urlencoded` body.
//!
//! Queuing a key that is already present replaces its value and moves the
//! key to the end of the table, so the serialized body lists fields in the
//! order they were last written.

use crate::{GatewayError, Result};
use indexmap::IndexMap;
use url::form_urlencoded;

/// Insertion-ordered mapping of wire field name to value
#[derive(Clone, Default, PartialEq, Eq)]
pub struct FieldTable {
    entries: IndexMap<String, String>,
}

impl std::fmt::Debug for FieldTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // values carry card data
        f.debug_struct("FieldTable")
            .field("keys", &self.entries.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl FieldTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Upsert a field, moving it to the end of the table
    pub fn queue(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        self.entries.shift_remove(&key);
        self.entries.insert(key, value.into());
    }

    /// Get the value queued for a field
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Whether the field has been queued (possibly with an empty value)
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Remove a field, keeping the order of the others
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.entries.shift_remove(key)
    }

    /// Number of queued fields
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no field has been queued
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Field names in serialization order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Fields in serialization order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    /// Serialize the table as a form-encoded request body
    ///
    /// Pairs are joined with `&` in table order with no trailing separator.
    pub fn to_post_string(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.entries.iter())
            .finish()
    }

    /// Assert that every key is queued with a non-empty value
    ///
    /// All keys are checked before failing; the error names every offending
    /// field in argument order.
    pub fn assert_present(&self, keys: &[&str]) -> Result<()> {
        let missing: Vec<&str> = keys
            .iter()
            .copied()
            .filter(|key| self.get(key).map_or(true, str::is_empty))
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(GatewayError::validation(missing))
        }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FieldTable {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut table = FieldTable::new();
        for (key, value) in iter {
            table.queue(key, value);
        }
        table
    }
}
