//! Change-tracking record
//!
//! A `Record` mirrors one table row as field name → string value and remembers
//! which fields were set since the last clean point (hydration or a
//! successful write).
//!
//! # Invariants
//! - Right after `hydrate`, `changed_data()` is empty.
//! - Every `set` marks its field dirty, even when the value is unchanged.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Row shape shared by records, generated statements and executor results.
/// Sorted so generated column lists are stable.
pub type FieldMap = BTreeMap<String, String>;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    data: FieldMap,
    #[serde(skip)]
    dirty: BTreeSet<String>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a clean record from a row read from storage.
    pub fn from_existing_data(data: FieldMap) -> Self {
        let mut record = Self::new();
        record.hydrate(data);
        record
    }

    /// Stored value, or the empty string when the field is absent.
    pub fn get(&self, field: &str) -> &str {
        self.data.get(field).map(String::as_str).unwrap_or("")
    }

    pub fn contains(&self, field: &str) -> bool {
        self.data.contains_key(field)
    }

    pub fn set(&mut self, field: impl Into<String>, value: impl Into<String>) {
        let field = field.into();
        self.dirty.insert(field.clone());
        self.data.insert(field, value.into());
    }

    /// Full snapshot, used for inserts.
    pub fn data(&self) -> FieldMap {
        self.data.clone()
    }

    /// Snapshot restricted to dirty fields, used for updates.
    pub fn changed_data(&self) -> FieldMap {
        self.dirty
            .iter()
            .filter_map(|field| {
                self.data
                    .get(field)
                    .map(|value| (field.clone(), value.clone()))
            })
            .collect()
    }

    /// Bulk-loads stored values without marking anything dirty.
    pub fn hydrate(&mut self, existing: FieldMap) {
        self.data.extend(existing);
        self.dirty.clear();
    }

    pub fn mark_clean(&mut self) {
        self.dirty.clear();
    }

    pub fn is_dirty(&self) -> bool {
        !self.dirty.is_empty()
    }

    pub fn dirty_fields(&self) -> impl Iterator<Item = &str> {
        self.dirty.iter().map(String::as_str)
    }
}
