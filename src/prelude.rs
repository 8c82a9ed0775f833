//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and traits from the
//! role store, so users can import everything with a single use statement:
//!
//! ```rust
//! use rolestore::prelude::*;
//! ```

pub use crate::core::{NewStoreOptions, RoleStore};
pub use crate::errors::RoleStoreError;

pub use config::{AppConfig, DatabaseConfig, StoreConfig};

pub use store_object::prelude::*;
