//! Error types for the rolestore crate
//!
//! Failures while opening a store. Errors from individual store calls are
//! `store_object::StoreError`.

use config::ConfigError;
use store_object::{StoreError, ValidationError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RoleStoreError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid table name: {0}")]
    InvalidTableName(#[from] ValidationError),

    #[error("Invalid store options: {0}")]
    InvalidOptions(String),

    #[error("Unsupported database url: {0}")]
    UnsupportedDatabase(String),

    #[error("Database connection error: {0}")]
    DatabaseConnection(#[from] sqlx::Error),

    #[error("Migration failed: {0}")]
    Migration(#[source] StoreError),

    #[error(transparent)]
    Store(#[from] StoreError),
}
