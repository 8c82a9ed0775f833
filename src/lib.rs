//! # rolestore
//!
//! Persistence for roles and entity-to-role assignments on PostgreSQL,
//! MySQL or SQLite, with change-tracked records and optional-filter queries.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use rolestore::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = AppConfig::load()?;
//!     let store = RoleStore::connect(&config).await?;
//!     let mut ctx = ExecContext::ambient();
//!
//!     let mut role = Role::new();
//!     role.set_handle("ADMIN")
//!         .set_title("Administrator")
//!         .set_status(RoleStatus::Active);
//!     store.roles().create(&mut ctx, &mut role).await?;
//!
//!     let mut assignment = EntityRole::new();
//!     assignment
//!         .set_entity_type("user")
//!         .set_entity_id("42")
//!         .set_role_id(role.id());
//!     store.entity_roles().create(&mut ctx, &mut assignment).await?;
//!
//!     let admins = store
//!         .entity_roles()
//!         .list(&mut ctx, &EntityRoleQuery::new().role_id(role.id()))
//!         .await?;
//!     println!("{} admin assignment(s)", admins.len());
//!
//!     Ok(())
//! }
//! ```

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

pub mod core;
pub mod errors;
pub mod migration;
pub mod prelude;

// Re-export the main public types for convenience
pub use crate::core::{NewStoreOptions, RoleStore};
pub use errors::RoleStoreError;

// Re-export centralized config
pub use config::{AppConfig, DatabaseConfig, StoreConfig};

pub use store_object;

// Re-export external dependencies used in public API
pub use async_trait;
pub use sqlx;
