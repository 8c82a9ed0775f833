use crate::validation::ValidationError;
use thiserror::Error;

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Error, Debug)]
pub enum StoreError {
    /// A query filter or required key was degenerate. Raised before any I/O.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// A create would duplicate a unique, non-deleted row.
    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Connection error: {0}")]
    Connection(String),

    /// Passed through from the SQL executor unmodified.
    #[error(transparent)]
    Database(#[from] sqlx::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The count aggregate was missing or not an integer.
    #[error("Invalid aggregate: {0}")]
    InvalidAggregate(String),
}

impl StoreError {
    pub fn is_validation(&self) -> bool {
        matches!(self, StoreError::Validation(_))
    }

    pub fn is_conflict(&self) -> bool {
        matches!(self, StoreError::Conflict(_))
    }
}
