//! Traits for database operations
//!
//! This module contains the traits that define the persistence interface for
//! roles and entity-role assignments.

pub mod core;
pub mod soft_deletable;
pub mod table_metadata;

// Re-export all public items for convenience
pub use self::core::StoreObject;
pub use soft_deletable::SoftDeletable;
pub use table_metadata::{ColumnDefinition, ColumnKind, TableMetadata};
