//! Trait definitions
//!
//! Soft deletion keeps the row and hides it from default reads by stamping
//! `soft_deleted_at` with the current time.

use super::core::StoreObject;
use crate::errors::StoreResult;
use crate::generic_store::ExecContext;
use async_trait::async_trait;

#[async_trait]
pub trait SoftDeletable: StoreObject {
    /// Stamp `soft_deleted_at` and persist it through `update`
    async fn soft_delete(
        &self,
        ctx: &mut ExecContext<'_>,
        record: &mut Self::Model,
    ) -> StoreResult<()>;

    /// Soft delete by id. A missing or already hidden row is a no-op.
    async fn soft_delete_by_id(&self, ctx: &mut ExecContext<'_>, id: &str) -> StoreResult<()>;
}
