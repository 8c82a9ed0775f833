use super::common::{common_query_builders, CommonQuery};
use crate::models::role::{COLUMN_HANDLE, COLUMN_STATUS, COLUMN_TITLE};
use crate::query_builder::{CompileQuery, QueryFilter};
use crate::validation::{require_non_empty, require_non_empty_list, ValidationError};

/// Filters over the role table.
///
/// ```
/// use store_object::query::RoleQuery;
///
/// let query = RoleQuery::new().handle("ADMIN").limit(1);
/// assert!(query.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoleQuery {
    pub common: CommonQuery,
    pub status: Option<String>,
    pub status_in: Option<Vec<String>>,
    pub handle: Option<String>,
    /// Case-insensitive substring match on `title`.
    pub title_like: Option<String>,
}

impl RoleQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    pub fn status_in<I, S>(mut self, statuses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.status_in = Some(statuses.into_iter().map(Into::into).collect());
        self
    }

    pub fn handle(mut self, handle: impl Into<String>) -> Self {
        self.handle = Some(handle.into());
        self
    }

    pub fn title_like(mut self, title: impl Into<String>) -> Self {
        self.title_like = Some(title.into());
        self
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        self.common.validate()?;
        require_non_empty("status", self.status.as_deref())?;
        require_non_empty_list("status_in", self.status_in.as_deref())?;
        require_non_empty("handle", self.handle.as_deref())?;
        require_non_empty("title_like", self.title_like.as_deref())?;
        Ok(())
    }
}

common_query_builders!(RoleQuery);

impl CompileQuery for RoleQuery {
    fn common(&self) -> &CommonQuery {
        &self.common
    }

    fn common_mut(&mut self) -> &mut CommonQuery {
        &mut self.common
    }

    fn validate(&self) -> Result<(), ValidationError> {
        RoleQuery::validate(self)
    }

    fn entity_filters(&self) -> Vec<QueryFilter> {
        let mut filters = Vec::new();

        if let Some(status) = &self.status {
            filters.push(QueryFilter::eq(COLUMN_STATUS, status));
        }
        if let Some(statuses) = &self.status_in {
            filters.push(QueryFilter::in_values(COLUMN_STATUS, statuses.clone()));
        }
        if let Some(handle) = &self.handle {
            filters.push(QueryFilter::eq(COLUMN_HANDLE, handle));
        }
        if let Some(title) = &self.title_like {
            filters.push(QueryFilter::contains_ignore_case(COLUMN_TITLE, title));
        }

        filters
    }
}
