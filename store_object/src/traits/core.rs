//! Trait definitions
//!
//! This module defines core traits for database operations.

use crate::errors::StoreResult;
use crate::generic_store::ExecContext;
use crate::traits::table_metadata::TableMetadata;
use async_trait::async_trait;

/// Trait that defines common database operations for all entities
///
/// Every operation runs inside `ctx`: either the caller's transaction or an
/// ambient pool connection.
#[async_trait]
pub trait StoreObject: Send + Sync {
    /// The record type that this store persists
    type Model: TableMetadata;

    /// Number of rows matching `query`. Paging and ordering are ignored.
    async fn count(&self, ctx: &mut ExecContext<'_>, query: &<Self::Model as TableMetadata>::Query)
        -> StoreResult<i64>;

    /// Insert a new row from the full record and mark the record clean
    async fn create(&self, ctx: &mut ExecContext<'_>, record: &mut Self::Model) -> StoreResult<()>;

    /// Write only the changed fields of the record, if any
    async fn update(&self, ctx: &mut ExecContext<'_>, record: &mut Self::Model) -> StoreResult<()>;

    /// Remove the row. Returns whether a row was removed.
    async fn delete(&self, ctx: &mut ExecContext<'_>, record: &Self::Model) -> StoreResult<bool>;

    async fn delete_by_id(&self, ctx: &mut ExecContext<'_>, id: &str) -> StoreResult<bool>;

    /// Get a visible record by its ID
    async fn find_by_id(
        &self,
        ctx: &mut ExecContext<'_>,
        id: &str,
    ) -> StoreResult<Option<Self::Model>>;

    /// Find records matching the query, hydrated clean
    async fn list(
        &self,
        ctx: &mut ExecContext<'_>,
        query: &<Self::Model as TableMetadata>::Query,
    ) -> StoreResult<Vec<Self::Model>>;
}
