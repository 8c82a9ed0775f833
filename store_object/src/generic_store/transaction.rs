//! Transaction support for GenericStore
//!
//! This module provides database transaction functionality for GenericStore,
//! allowing multiple operations to be executed atomically.

use super::core::GenericStore;
use super::executor::ExecContext;
use crate::errors::StoreResult;
use crate::traits::table_metadata::TableMetadata;
use crate::DbPool;
use sqlx::{Any, Transaction};

/// A transactional context for store operations
///
/// Wraps a sqlx transaction and provides commit/rollback. Pass `context()`
/// to any store call to run it inside the transaction.
///
/// # Example
/// ```ignore
/// let mut tx = store.begin_transaction().await?;
///
/// store.roles().create(&mut tx.context(), &mut role).await?;
/// store.entity_roles().create(&mut tx.context(), &mut assignment).await?;
///
/// // Commit the transaction
/// tx.commit().await?;
/// ```
pub struct StoreTransaction {
    tx: Transaction<'static, Any>,
}

impl std::fmt::Debug for StoreTransaction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoreTransaction").finish_non_exhaustive()
    }
}

impl StoreTransaction {
    pub async fn begin(pool: &DbPool) -> StoreResult<Self> {
        let tx = pool.begin().await?;
        Ok(Self { tx })
    }

    /// Commit the transaction
    pub async fn commit(self) -> StoreResult<()> {
        self.tx.commit().await?;
        Ok(())
    }

    /// Rollback the transaction
    pub async fn rollback(self) -> StoreResult<()> {
        self.tx.rollback().await?;
        Ok(())
    }

    /// Execution context bound to this transaction
    pub fn context(&mut self) -> ExecContext<'_> {
        ExecContext::with_transaction(&mut self.tx)
    }

    /// Get a mutable reference to the underlying transaction
    /// Use this to execute queries within the transaction
    pub fn as_mut(&mut self) -> &mut Transaction<'static, Any> {
        &mut self.tx
    }
}

impl<T: TableMetadata> GenericStore<T> {
    /// Begin a new database transaction
    pub async fn begin_transaction(&self) -> StoreResult<StoreTransaction> {
        StoreTransaction::begin(&self.core.db_pool).await
    }

    /// Get a reference to the underlying pool
    pub fn pool(&self) -> &DbPool {
        &self.core.db_pool
    }
}
