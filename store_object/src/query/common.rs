use crate::validation::{require_non_empty, require_non_empty_list, ValidationError};

/// Filters and result shaping shared by every entity query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommonQuery {
    pub id: Option<String>,
    pub id_in: Option<Vec<String>>,
    /// Inclusive lower bound on `created_at`.
    pub created_at_gte: Option<String>,
    /// Inclusive upper bound on `created_at`.
    pub created_at_lte: Option<String>,
    pub order_by: Option<String>,
    /// `asc` (any case) sorts ascending, anything else descending.
    pub sort_direction: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
    /// Projected columns. Empty selects every column.
    pub columns: Vec<String>,
    pub count_only: bool,
    pub soft_deleted_included: bool,
}

impl CommonQuery {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_non_empty("id", self.id.as_deref())?;
        require_non_empty_list("id_in", self.id_in.as_deref())?;
        require_non_empty("created_at_gte", self.created_at_gte.as_deref())?;
        require_non_empty("created_at_lte", self.created_at_lte.as_deref())?;
        require_non_empty("order_by", self.order_by.as_deref())?;
        require_non_empty("sort_direction", self.sort_direction.as_deref())?;

        if let Some(limit) = self.limit {
            if limit <= 0 {
                return Err(ValidationError::NonPositiveLimit(limit));
            }
        }
        if let Some(offset) = self.offset {
            if offset < 0 {
                return Err(ValidationError::NegativeOffset(offset));
            }
        }
        if self.columns.iter().any(String::is_empty) {
            return Err(ValidationError::EmptyValue { field: "columns" });
        }

        Ok(())
    }
}

/// Consuming builder methods for the `common` part of an entity query.
macro_rules! common_query_builders {
    ($query:ty) => {
        impl $query {
            pub fn id(mut self, id: impl Into<String>) -> Self {
                self.common.id = Some(id.into());
                self
            }

            pub fn id_in<I, S>(mut self, ids: I) -> Self
            where
                I: IntoIterator<Item = S>,
                S: Into<String>,
            {
                self.common.id_in = Some(ids.into_iter().map(Into::into).collect());
                self
            }

            pub fn created_at_gte(mut self, at: impl Into<String>) -> Self {
                self.common.created_at_gte = Some(at.into());
                self
            }

            pub fn created_at_lte(mut self, at: impl Into<String>) -> Self {
                self.common.created_at_lte = Some(at.into());
                self
            }

            pub fn order_by(mut self, column: impl Into<String>) -> Self {
                self.common.order_by = Some(column.into());
                self
            }

            pub fn sort_direction(mut self, direction: impl Into<String>) -> Self {
                self.common.sort_direction = Some(direction.into());
                self
            }

            pub fn limit(mut self, limit: i64) -> Self {
                self.common.limit = Some(limit);
                self
            }

            pub fn offset(mut self, offset: i64) -> Self {
                self.common.offset = Some(offset);
                self
            }

            pub fn columns<I, S>(mut self, columns: I) -> Self
            where
                I: IntoIterator<Item = S>,
                S: Into<String>,
            {
                self.common.columns = columns.into_iter().map(Into::into).collect();
                self
            }

            pub fn count_only(mut self, count_only: bool) -> Self {
                self.common.count_only = count_only;
                self
            }

            pub fn soft_deleted_included(mut self, included: bool) -> Self {
                self.common.soft_deleted_included = included;
                self
            }
        }
    };
}

pub(crate) use common_query_builders;
