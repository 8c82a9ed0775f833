//! Generic store implementations
//!
//! Soft deletion for every store: the row stays, `soft_deleted_at` moves to
//! the current time and default reads stop returning it.

use super::core::GenericStore;
use super::executor::ExecContext;
use crate::datetime::now_datetime_string;
use crate::errors::StoreResult;
use crate::models::COLUMN_SOFT_DELETED_AT;
use crate::traits::table_metadata::TableMetadata;
use crate::traits::{SoftDeletable, StoreObject};
use async_trait::async_trait;

#[async_trait]
impl<T: TableMetadata> SoftDeletable for GenericStore<T> {
    async fn soft_delete(&self, ctx: &mut ExecContext<'_>, record: &mut T) -> StoreResult<()> {
        record
            .record_mut()
            .set(COLUMN_SOFT_DELETED_AT, now_datetime_string());
        self.update(ctx, record).await
    }

    async fn soft_delete_by_id(&self, ctx: &mut ExecContext<'_>, id: &str) -> StoreResult<()> {
        match self.find_by_id(ctx, id).await? {
            Some(mut record) => self.soft_delete(ctx, &mut record).await,
            None => {
                crate::debug_log!("{} {} not found, nothing to soft delete", T::entity_name(), id);
                Ok(())
            }
        }
    }
}
