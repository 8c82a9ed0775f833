//! Query builder utilities
//!
//! `QueryPlan` is the compiled, dialect-independent form of a query.

use crate::query_builder::dialect::Dialect;
use crate::query_builder::filter::QueryFilter;
use crate::query_builder::ordering::SortOrder;
use crate::query_builder::pagination::Pagination;
use crate::query_builder::sql_generation::SqlGenerator;
use crate::validation::ValidatedTableName;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Projection {
    #[default]
    All,
    Columns(Vec<String>),
    /// `COUNT(*) AS count`
    Count,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryPlan {
    pub projection: Projection,
    pub filters: Vec<QueryFilter>,
    pub order_by: Option<(String, SortOrder)>,
    pub pagination: Pagination,
}

impl QueryPlan {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a filter condition
    pub fn filter(mut self, filter: QueryFilter) -> Self {
        self.filters.push(filter);
        self
    }

    /// Add multiple filters (combined with AND)
    pub fn filters(mut self, filters: Vec<QueryFilter>) -> Self {
        self.filters.extend(filters);
        self
    }

    pub fn order_by(mut self, field: &str, order: SortOrder) -> Self {
        self.order_by = Some((field.to_string(), order));
        self
    }

    pub fn projection(mut self, projection: Projection) -> Self {
        self.projection = projection;
        self
    }

    pub fn pagination(mut self, pagination: Pagination) -> Self {
        self.pagination = pagination;
        self
    }

    pub fn is_count(&self) -> bool {
        self.projection == Projection::Count
    }

    /// SELECT statement and its parameters for `table`
    pub fn to_sql(&self, dialect: Dialect, table: &ValidatedTableName) -> (String, Vec<String>) {
        SqlGenerator::new(dialect).select(table, self)
    }
}
