//! Statement execution
//!
//! Runs generated SQL either inside a caller-owned transaction or on a pool
//! connection, and converts result rows into string maps.

use crate::errors::{StoreError, StoreResult};
use crate::generic_store::core::StoreCore;
use crate::record::FieldMap;
use sqlx::any::AnyRow;
use sqlx::{Any, Column, Row, Transaction};

/// Where a store call runs.
///
/// ```ignore
/// let mut ctx = ExecContext::ambient();
/// store.roles().create(&mut ctx, &mut role).await?;
///
/// let mut tx = store.begin_transaction().await?;
/// store.roles().create(&mut tx.context(), &mut role).await?;
/// tx.commit().await?;
/// ```
#[derive(Default)]
pub struct ExecContext<'c> {
    tx: Option<&'c mut Transaction<'static, Any>>,
}

impl std::fmt::Debug for ExecContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExecContext")
            .field("in_transaction", &self.in_transaction())
            .finish()
    }
}

impl ExecContext<'static> {
    /// Statements run on a pool connection and are visible once they succeed
    pub fn ambient() -> Self {
        Self { tx: None }
    }
}

impl<'c> ExecContext<'c> {
    /// Statements join the given transaction
    pub fn with_transaction(tx: &'c mut Transaction<'static, Any>) -> Self {
        Self { tx: Some(tx) }
    }

    pub fn in_transaction(&self) -> bool {
        self.tx.is_some()
    }
}

impl StoreCore {
    fn ensure_open(&self) -> StoreResult<()> {
        if self.db_pool.is_closed() {
            return Err(StoreError::Connection(
                "database pool is closed and no transaction was supplied".to_string(),
            ));
        }
        Ok(())
    }

    fn log_statement(&self, operation: &str, sql: &str, params: &[String]) {
        if self.is_debug_enabled() {
            self.sql_logger.log_sql(operation, sql, params);
        }
        crate::trace_log!("{}: {}", operation, sql);
    }

    /// Run a write statement and return the number of affected rows
    pub(crate) async fn execute(
        &self,
        ctx: &mut ExecContext<'_>,
        operation: &str,
        sql: &str,
        params: Vec<String>,
    ) -> StoreResult<u64> {
        self.log_statement(operation, sql, &params);

        let mut query = sqlx::query::<Any>(sql);
        for param in params {
            query = query.bind(param);
        }

        let result = match ctx.tx.as_deref_mut() {
            Some(tx) => query.execute(&mut **tx).await?,
            None => {
                self.ensure_open()?;
                query.execute(&self.db_pool).await?
            }
        };

        Ok(result.rows_affected())
    }

    /// Run a SELECT and return every row as column name -> text value
    pub(crate) async fn fetch_rows(
        &self,
        ctx: &mut ExecContext<'_>,
        operation: &str,
        sql: &str,
        params: Vec<String>,
    ) -> StoreResult<Vec<FieldMap>> {
        self.log_statement(operation, sql, &params);

        let mut query = sqlx::query::<Any>(sql);
        for param in params {
            query = query.bind(param);
        }

        let rows = match ctx.tx.as_deref_mut() {
            Some(tx) => query.fetch_all(&mut **tx).await?,
            None => {
                self.ensure_open()?;
                query.fetch_all(&self.db_pool).await?
            }
        };

        rows.iter().map(row_to_map).collect()
    }
}

fn row_to_map(row: &AnyRow) -> StoreResult<FieldMap> {
    row.columns()
        .iter()
        .map(|column| {
            let value = column_to_string(row, column.ordinal())?;
            Ok((column.name().to_string(), value))
        })
        .collect()
}

/// Text columns decode directly. Aggregates and engine-typed columns fall
/// back to their textual form. NULL reads as the empty string.
fn column_to_string(row: &AnyRow, index: usize) -> StoreResult<String> {
    if let Ok(value) = row.try_get::<Option<String>, _>(index) {
        return Ok(value.unwrap_or_default());
    }
    if let Ok(value) = row.try_get::<Option<i64>, _>(index) {
        return Ok(value.map(|v| v.to_string()).unwrap_or_default());
    }
    if let Ok(value) = row.try_get::<Option<i32>, _>(index) {
        return Ok(value.map(|v| v.to_string()).unwrap_or_default());
    }
    if let Ok(value) = row.try_get::<Option<f64>, _>(index) {
        return Ok(value.map(|v| v.to_string()).unwrap_or_default());
    }
    let value = row.try_get::<Option<bool>, _>(index)?;
    Ok(value.map(|v| v.to_string()).unwrap_or_default())
}
