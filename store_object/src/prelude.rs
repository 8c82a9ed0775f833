//! Convenience re-exports for common store-object usage

// Core traits
pub use crate::traits::{SoftDeletable, StoreObject, TableMetadata};

// Error types
pub use crate::errors::{StoreError, StoreResult};
pub use crate::validation::ValidationError;

// Core store functionality
pub use crate::generic_store::{ExecContext, GenericStore, StoreTransaction};

// Records and queries
pub use crate::models::{EntityRole, Metas, Role, RoleStatus};
pub use crate::query::{EntityRoleQuery, RoleQuery};
pub use crate::query_builder::{CompileQuery, Dialect};
pub use crate::record::{FieldMap, Record};

// Observers and id generation
pub use crate::sql_logger::{SqlLogger, TracingSqlLogger};
pub use crate::uid::IdGenerator;

// Common external dependencies that are frequently used
pub use async_trait::async_trait;
