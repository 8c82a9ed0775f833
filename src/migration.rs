//! Database migration functionality
//!
//! This module provides automatic table creation for the role and
//! entity-role tables managed by a `RoleStore`.

use crate::core::RoleStore;
use crate::errors::RoleStoreError;
use store_object::{GenericStore, StoreError, TableMetadata};

impl RoleStore {
    /// Create both tables if they do not exist yet
    pub async fn auto_migrate(&self) -> Result<(), RoleStoreError> {
        migrate_table(self.roles())
            .await
            .map_err(RoleStoreError::Migration)?;
        migrate_table(self.entity_roles())
            .await
            .map_err(RoleStoreError::Migration)?;
        Ok(())
    }
}

async fn migrate_table<T: TableMetadata>(store: &GenericStore<T>) -> Result<(), StoreError> {
    let core = store.core();
    let table = store.table();
    let create_table_sql = core.sql_generator().create_table(
        table,
        T::column_definitions(),
        T::primary_key_field(),
    );

    crate::debug_log!("Creating table with SQL: {}", create_table_sql);
    if core.is_debug_enabled() {
        core.sql_logger().log_sql("migrate", &create_table_sql, &[]);
    }

    sqlx::query(&create_table_sql).execute(core.pool()).await?;
    tracing::debug!(entity = T::entity_name(), table = %table, "table ready");
    Ok(())
}
