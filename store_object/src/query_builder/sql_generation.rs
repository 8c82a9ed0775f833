//! Query builder utilities
//!
//! Renders plans and record snapshots into SQL text plus positional
//! parameters. Identifiers are always quoted, values always bound.

use crate::query_builder::builder::{Projection, QueryPlan};
use crate::query_builder::dialect::Dialect;
use crate::query_builder::filter::{QueryCondition, QueryFilter, QueryOperator, QueryValue};
use crate::query_builder::ordering::SortOrder;
use crate::record::FieldMap;
use crate::traits::table_metadata::{ColumnDefinition, ColumnKind};
use crate::validation::ValidatedTableName;

#[derive(Debug, Clone, Copy)]
pub struct SqlGenerator {
    dialect: Dialect,
}

impl SqlGenerator {
    pub fn new(dialect: Dialect) -> Self {
        Self { dialect }
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    fn bind(&self, params: &mut Vec<String>, value: &str) -> String {
        params.push(value.to_string());
        self.dialect.placeholder(params.len())
    }

    fn quote(&self, name: &str) -> String {
        self.dialect.quote_identifier(name)
    }

    /// Build WHERE clause from conditions
    pub fn build_where_clause(&self, conditions: &[QueryFilter], params: &mut Vec<String>) -> String {
        if conditions.is_empty() {
            return String::new();
        }

        let conditions_sql = conditions
            .iter()
            .map(|condition| self.build_condition_sql(condition, params))
            .collect::<Vec<_>>()
            .join(" AND ");

        format!("WHERE {}", conditions_sql)
    }

    fn build_condition_sql(&self, filter: &QueryFilter, params: &mut Vec<String>) -> String {
        match filter {
            QueryFilter::Condition(condition) => self.build_single_condition_sql(condition, params),
            QueryFilter::All(filters) if filters.is_empty() => "1=1".to_string(),
            QueryFilter::All(filters) => {
                let group_conditions = filters
                    .iter()
                    .map(|f| self.build_condition_sql(f, params))
                    .collect::<Vec<_>>()
                    .join(" AND ");

                format!("({})", group_conditions)
            }
        }
    }

    fn build_single_condition_sql(
        &self,
        condition: &QueryCondition,
        params: &mut Vec<String>,
    ) -> String {
        let field = self.quote(&condition.field);

        match (&condition.operator, &condition.value) {
            (QueryOperator::In, QueryValue::List(values)) if values.is_empty() => {
                "1=0".to_string()
            }
            (QueryOperator::In, QueryValue::List(values)) => {
                let placeholders = values
                    .iter()
                    .map(|value| self.bind(params, value))
                    .collect::<Vec<_>>()
                    .join(", ");
                format!("{} IN ({})", field, placeholders)
            }
            (QueryOperator::In, QueryValue::Single(value)) => {
                format!("{} IN ({})", field, self.bind(params, value))
            }
            (QueryOperator::Eq, QueryValue::Single(value)) => {
                format!("{} = {}", field, self.bind(params, value))
            }
            (QueryOperator::Gt, QueryValue::Single(value)) => {
                format!("{} > {}", field, self.bind(params, value))
            }
            (QueryOperator::Gte, QueryValue::Single(value)) => {
                format!("{} >= {}", field, self.bind(params, value))
            }
            (QueryOperator::Lte, QueryValue::Single(value)) => {
                format!("{} <= {}", field, self.bind(params, value))
            }
            (QueryOperator::ILike, QueryValue::Single(value)) => {
                let param = self.bind(params, value);
                self.dialect.ilike(&field, &param)
            }
            // Scalar operators never carry a list.
            (_, QueryValue::List(_)) => "1=0".to_string(),
        }
    }

    /// Build ORDER BY clause
    pub fn build_order_clause(&self, order_by: Option<&(String, SortOrder)>) -> String {
        match order_by {
            Some((field, order)) => format!("ORDER BY {} {}", self.quote(field), order.to_sql()),
            None => String::new(),
        }
    }

    pub fn build_projection(&self, projection: &Projection) -> String {
        match projection {
            Projection::All => "*".to_string(),
            Projection::Columns(columns) => columns
                .iter()
                .map(|column| self.quote(column))
                .collect::<Vec<_>>()
                .join(", "),
            Projection::Count => "COUNT(*) AS count".to_string(),
        }
    }

    /// Complete SELECT for a compiled plan
    pub fn select(&self, table: &ValidatedTableName, plan: &QueryPlan) -> (String, Vec<String>) {
        let mut params = Vec::new();
        let parts = [
            format!(
                "SELECT {} FROM {}",
                self.build_projection(&plan.projection),
                self.quote(table.as_str())
            ),
            self.build_where_clause(&plan.filters, &mut params),
            self.build_order_clause(plan.order_by.as_ref()),
            plan.pagination.to_sql(self.dialect),
        ];

        let sql = parts
            .into_iter()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        (sql, params)
    }

    /// INSERT of a full record snapshot
    pub fn insert(&self, table: &ValidatedTableName, data: &FieldMap) -> (String, Vec<String>) {
        let mut params = Vec::with_capacity(data.len());
        let columns = data
            .keys()
            .map(|column| self.quote(column))
            .collect::<Vec<_>>()
            .join(", ");
        let values = data
            .values()
            .map(|value| self.bind(&mut params, value))
            .collect::<Vec<_>>()
            .join(", ");

        let sql = format!(
            "INSERT INTO {} ({}) VALUES ({})",
            self.quote(table.as_str()),
            columns,
            values
        );
        (sql, params)
    }

    /// UPDATE of the given columns on the row with primary key `id`
    pub fn update_by_id(
        &self,
        table: &ValidatedTableName,
        primary_key: &str,
        id: &str,
        changes: &FieldMap,
    ) -> (String, Vec<String>) {
        let mut params = Vec::with_capacity(changes.len() + 1);
        let assignments = changes
            .iter()
            .map(|(column, value)| format!("{} = {}", self.quote(column), self.bind(&mut params, value)))
            .collect::<Vec<_>>()
            .join(", ");
        let id_param = self.bind(&mut params, id);

        let sql = format!(
            "UPDATE {} SET {} WHERE {} = {}",
            self.quote(table.as_str()),
            assignments,
            self.quote(primary_key),
            id_param
        );
        (sql, params)
    }

    pub fn delete_by_id(
        &self,
        table: &ValidatedTableName,
        primary_key: &str,
        id: &str,
    ) -> (String, Vec<String>) {
        let mut params = Vec::with_capacity(1);
        let id_param = self.bind(&mut params, id);
        let sql = format!(
            "DELETE FROM {} WHERE {} = {}",
            self.quote(table.as_str()),
            self.quote(primary_key),
            id_param
        );
        (sql, params)
    }

    /// Idempotent CREATE TABLE for the given columns
    pub fn create_table(
        &self,
        table: &ValidatedTableName,
        columns: &[ColumnDefinition],
        primary_key: &str,
    ) -> String {
        let mut definitions = columns
            .iter()
            .map(|column| {
                let mut definition =
                    format!("{} {}", self.quote(column.name), self.column_type(column.kind));
                if column.name == primary_key {
                    definition.push_str(" NOT NULL");
                }
                definition
            })
            .collect::<Vec<_>>();
        definitions.push(format!("PRIMARY KEY ({})", self.quote(primary_key)));

        format!(
            "CREATE TABLE IF NOT EXISTS {} ({})",
            self.quote(table.as_str()),
            definitions.join(", ")
        )
    }

    fn column_type(&self, kind: ColumnKind) -> String {
        match kind {
            ColumnKind::VarChar(length) => format!("VARCHAR({})", length),
            ColumnKind::Text => "TEXT".to_string(),
            ColumnKind::DateTime => "VARCHAR(32)".to_string(),
        }
    }
}
