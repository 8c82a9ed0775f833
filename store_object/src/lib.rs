//! Store Object - persistence layer for roles and entity-role assignments
//!
//! This crate provides the change-tracked `Record`, the typed `Role` and
//! `EntityRole` views over it, typed queries with their compiler, and the
//! generic store that executes them through sqlx's `Any` driver.

/// Conditional debug logging macros
/// These macros only compile in code when the `debug-logging` feature is enabled
#[cfg(feature = "debug-logging")]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        tracing::debug!($($arg)*)
    };
}

#[cfg(not(feature = "debug-logging"))]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "debug-logging")]
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {
        tracing::trace!($($arg)*)
    };
}

#[cfg(not(feature = "debug-logging"))]
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {};
}

pub mod datetime;
pub mod errors;
pub mod generic_store;
pub mod models;
pub mod prelude;
pub mod query;
pub mod query_builder;
pub mod record;
pub mod sql_logger;
pub mod traits;
pub mod uid;
pub mod validation;

pub use errors::{StoreError, StoreResult};
pub use generic_store::{ExecContext, GenericStore, StoreCore, StoreTransaction};
pub use models::{EntityRole, Metas, Role, RoleStatus};
pub use query::{CommonQuery, EntityRoleQuery, RoleQuery};
pub use query_builder::{CompileQuery, Dialect, QueryPlan, SortOrder};
pub use record::{FieldMap, Record};
pub use sql_logger::{NoopSqlLogger, SqlLogger, TracingSqlLogger};
pub use traits::{SoftDeletable, StoreObject, TableMetadata};
pub use uid::{HumanUidGenerator, IdGenerator, UuidGenerator};
pub use validation::{ValidatedTableName, ValidationError};

pub type DbPool = sqlx::AnyPool;
