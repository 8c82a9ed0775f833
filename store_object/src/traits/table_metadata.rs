//! Trait definitions
//!
//! Table structure and record access for persisted entities.

use crate::errors::StoreResult;
use crate::query_builder::CompileQuery;
use crate::record::{FieldMap, Record};
use std::fmt::Debug;

/// Storage type of a column. Every column holds text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    VarChar(u32),
    Text,
    /// `YYYY-MM-DD HH:MM:SS` string
    DateTime,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnDefinition {
    pub name: &'static str,
    pub kind: ColumnKind,
}

impl ColumnDefinition {
    pub const fn new(name: &'static str, kind: ColumnKind) -> Self {
        Self { name, kind }
    }
}

/// Metadata about database table structure and operations
pub trait TableMetadata: Clone + Send + Sync + Debug + 'static {
    /// Query type used to list this entity
    type Query: CompileQuery + Default;

    /// Singular name used in logs and error messages
    fn entity_name() -> &'static str;

    /// Columns in table-definition order
    fn column_definitions() -> &'static [ColumnDefinition];

    fn primary_key_field() -> &'static str {
        crate::models::COLUMN_ID
    }

    /// Wrap a stored row without marking anything dirty
    fn from_existing_data(data: FieldMap) -> Self;

    fn record(&self) -> &Record;

    fn record_mut(&mut self) -> &mut Record;

    /// Query selecting the single visible row with this id
    fn id_query(id: &str) -> Self::Query;

    /// Query matching existing live rows that would clash with this record on
    /// create. `None` when the entity has no uniqueness rule.
    fn uniqueness_query(&self) -> StoreResult<Option<Self::Query>> {
        Ok(None)
    }
}
