//! Query compilation
//!
//! Every query compiles the same way: shared filters first, then the
//! entity-specific ones, then soft-delete visibility. All predicates are
//! ANDed.

use crate::datetime::now_datetime_string;
use crate::models::{COLUMN_CREATED_AT, COLUMN_ID, COLUMN_SOFT_DELETED_AT};
use crate::query::CommonQuery;
use crate::query_builder::builder::{Projection, QueryPlan};
use crate::query_builder::filter::QueryFilter;
use crate::query_builder::ordering::SortOrder;
use crate::query_builder::pagination::Pagination;
use crate::validation::ValidationError;
use std::fmt::Debug;

pub trait CompileQuery: Clone + Send + Sync + Debug {
    fn common(&self) -> &CommonQuery;

    fn common_mut(&mut self) -> &mut CommonQuery;

    fn validate(&self) -> Result<(), ValidationError>;

    /// Predicates for the filters only this entity has.
    fn entity_filters(&self) -> Vec<QueryFilter>;

    /// Validates and compiles against `now`, the cut-off for soft-delete
    /// visibility.
    fn compile(&self, now: &str) -> Result<QueryPlan, ValidationError> {
        self.validate()?;
        let common = self.common();

        let mut filters = Vec::new();
        if let Some(id) = &common.id {
            filters.push(QueryFilter::eq(COLUMN_ID, id));
        }
        if let Some(ids) = &common.id_in {
            filters.push(QueryFilter::in_values(COLUMN_ID, ids.clone()));
        }
        if let Some(range) = QueryFilter::between(
            COLUMN_CREATED_AT,
            common.created_at_gte.as_deref(),
            common.created_at_lte.as_deref(),
        ) {
            filters.push(range);
        }
        filters.extend(self.entity_filters());
        if !common.soft_deleted_included {
            filters.push(QueryFilter::gt(COLUMN_SOFT_DELETED_AT, now));
        }

        let plan = QueryPlan::new().filters(filters);

        if common.count_only {
            return Ok(plan
                .projection(Projection::Count)
                .pagination(Pagination::new().with_limit(1)));
        }

        let mut plan = plan.pagination(Pagination {
            limit: common.limit,
            offset: common.offset,
        });
        if !common.columns.is_empty() {
            plan = plan.projection(Projection::Columns(common.columns.clone()));
        }
        if let Some(column) = &common.order_by {
            plan = plan.order_by(
                column,
                SortOrder::from_direction(common.sort_direction.as_deref()),
            );
        }

        Ok(plan)
    }

    /// Compiles against the current time.
    fn compile_now(&self) -> Result<QueryPlan, ValidationError> {
        self.compile(&now_datetime_string())
    }
}
