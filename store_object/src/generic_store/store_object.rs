//! Generic store implementations
//!
//! CRUD and listing for any `TableMetadata` entity, plus the lookups that
//! only make sense for one entity.

use super::core::GenericStore;
use super::executor::ExecContext;
use crate::datetime::{now_datetime_string, MAX_DATETIME};
use crate::errors::{StoreError, StoreResult};
use crate::models::{EntityRole, Role, COLUMN_CREATED_AT, COLUMN_SOFT_DELETED_AT, COLUMN_UPDATED_AT};
use crate::query::{EntityRoleQuery, RoleQuery};
use crate::query_builder::CompileQuery;
use crate::record::FieldMap;
use crate::traits::table_metadata::TableMetadata;
use crate::traits::StoreObject;
use crate::validation::require_key;
use async_trait::async_trait;

impl<T: TableMetadata> GenericStore<T> {
    /// Changed fields that would be written, without the primary key
    fn pending_changes(record: &T) -> FieldMap {
        let mut changes = record.record().changed_data();
        changes.remove(T::primary_key_field());
        changes
    }

    /// Run the first page of `query` and keep its first row
    async fn find_first(
        &self,
        ctx: &mut ExecContext<'_>,
        query: &T::Query,
    ) -> StoreResult<Option<T>> {
        Ok(self.list(ctx, query).await?.into_iter().next())
    }
}

fn parse_count(rows: Vec<FieldMap>) -> StoreResult<i64> {
    let row = rows
        .into_iter()
        .next()
        .ok_or_else(|| StoreError::InvalidAggregate("count returned no rows".to_string()))?;
    let value = row
        .get("count")
        .ok_or_else(|| StoreError::InvalidAggregate("count column missing".to_string()))?;

    value
        .parse::<i64>()
        .map_err(|_| StoreError::InvalidAggregate(format!("count '{}' is not an integer", value)))
}

#[async_trait]
impl<T: TableMetadata> StoreObject for GenericStore<T> {
    type Model = T;

    async fn count(&self, ctx: &mut ExecContext<'_>, query: &T::Query) -> StoreResult<i64> {
        let mut query = query.clone();
        query.common_mut().count_only = true;

        let plan = query.compile(&now_datetime_string())?;
        let (sql, params) = plan.to_sql(self.core.dialect, &self.table);
        let rows = self.core.fetch_rows(ctx, "count", &sql, params).await?;

        parse_count(rows)
    }

    async fn create(&self, ctx: &mut ExecContext<'_>, record: &mut T) -> StoreResult<()> {
        if let Some(existing) = record.uniqueness_query()? {
            if self.count(ctx, &existing).await? > 0 {
                return Err(StoreError::Conflict(format!(
                    "{} already exists in {}",
                    T::entity_name(),
                    self.table
                )));
            }
        }

        let now = now_datetime_string();
        let data = record.record_mut();
        if data.get(T::primary_key_field()).is_empty() {
            data.set(T::primary_key_field(), self.core.id_generator.generate());
        }
        if data.get(COLUMN_SOFT_DELETED_AT).is_empty() {
            data.set(COLUMN_SOFT_DELETED_AT, MAX_DATETIME);
        }
        data.set(COLUMN_CREATED_AT, now.clone());
        data.set(COLUMN_UPDATED_AT, now);

        let (sql, params) = self.core.sql_generator().insert(&self.table, &data.data());
        self.core.execute(ctx, "create", &sql, params).await?;

        let data = record.record_mut();
        data.mark_clean();
        crate::debug_log!(
            "created {} {}",
            T::entity_name(),
            data.get(T::primary_key_field())
        );
        Ok(())
    }

    async fn update(&self, ctx: &mut ExecContext<'_>, record: &mut T) -> StoreResult<()> {
        let id = record.record().get(T::primary_key_field()).to_string();
        require_key(T::primary_key_field(), &id)?;

        if Self::pending_changes(record).is_empty() {
            return Ok(());
        }

        record
            .record_mut()
            .set(COLUMN_UPDATED_AT, now_datetime_string());
        let changes = Self::pending_changes(record);

        let (sql, params) = self.core.sql_generator().update_by_id(
            &self.table,
            T::primary_key_field(),
            &id,
            &changes,
        );
        self.core.execute(ctx, "update", &sql, params).await?;

        record.record_mut().mark_clean();
        crate::debug_log!("updated {} {}", T::entity_name(), id);
        Ok(())
    }

    async fn delete(&self, ctx: &mut ExecContext<'_>, record: &T) -> StoreResult<bool> {
        let id = record.record().get(T::primary_key_field()).to_string();
        self.delete_by_id(ctx, &id).await
    }

    async fn delete_by_id(&self, ctx: &mut ExecContext<'_>, id: &str) -> StoreResult<bool> {
        require_key(T::primary_key_field(), id)?;

        let (sql, params) =
            self.core
                .sql_generator()
                .delete_by_id(&self.table, T::primary_key_field(), id);
        let affected = self.core.execute(ctx, "delete", &sql, params).await?;

        Ok(affected > 0)
    }

    async fn find_by_id(&self, ctx: &mut ExecContext<'_>, id: &str) -> StoreResult<Option<T>> {
        require_key(T::primary_key_field(), id)?;
        self.find_first(ctx, &T::id_query(id)).await
    }

    async fn list(&self, ctx: &mut ExecContext<'_>, query: &T::Query) -> StoreResult<Vec<T>> {
        let plan = query.compile(&now_datetime_string())?;
        let (sql, params) = plan.to_sql(self.core.dialect, &self.table);
        let rows = self.core.fetch_rows(ctx, "list", &sql, params).await?;

        Ok(rows.into_iter().map(T::from_existing_data).collect())
    }
}

impl GenericStore<Role> {
    /// Visible role with the given handle
    pub async fn find_by_handle(
        &self,
        ctx: &mut ExecContext<'_>,
        handle: &str,
    ) -> StoreResult<Option<Role>> {
        require_key("handle", handle)?;
        self.find_first(ctx, &RoleQuery::new().handle(handle).limit(1))
            .await
    }
}

impl GenericStore<EntityRole> {
    /// Visible assignment of `role_id` to the given entity
    pub async fn find_by_entity_and_role(
        &self,
        ctx: &mut ExecContext<'_>,
        entity_type: &str,
        entity_id: &str,
        role_id: &str,
    ) -> StoreResult<Option<EntityRole>> {
        require_key("entity_type", entity_type)?;
        require_key("entity_id", entity_id)?;
        require_key("role_id", role_id)?;

        let query = EntityRoleQuery::new()
            .entity_type(entity_type)
            .entity_id(entity_id)
            .role_id(role_id)
            .limit(1);
        self.find_first(ctx, &query).await
    }
}
