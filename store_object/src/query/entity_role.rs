use super::common::{common_query_builders, CommonQuery};
use crate::models::entity_role::{COLUMN_ENTITY_ID, COLUMN_ENTITY_TYPE, COLUMN_ROLE_ID};
use crate::query_builder::{CompileQuery, QueryFilter};
use crate::validation::{require_non_empty, ValidationError};

/// Filters over the entity-role table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntityRoleQuery {
    pub common: CommonQuery,
    pub entity_type: Option<String>,
    pub entity_id: Option<String>,
    pub role_id: Option<String>,
}

impl EntityRoleQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entity_type(mut self, entity_type: impl Into<String>) -> Self {
        self.entity_type = Some(entity_type.into());
        self
    }

    pub fn entity_id(mut self, entity_id: impl Into<String>) -> Self {
        self.entity_id = Some(entity_id.into());
        self
    }

    pub fn role_id(mut self, role_id: impl Into<String>) -> Self {
        self.role_id = Some(role_id.into());
        self
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        self.common.validate()?;
        require_non_empty("entity_type", self.entity_type.as_deref())?;
        require_non_empty("entity_id", self.entity_id.as_deref())?;
        require_non_empty("role_id", self.role_id.as_deref())?;
        Ok(())
    }
}

common_query_builders!(EntityRoleQuery);

impl CompileQuery for EntityRoleQuery {
    fn common(&self) -> &CommonQuery {
        &self.common
    }

    fn common_mut(&mut self) -> &mut CommonQuery {
        &mut self.common
    }

    fn validate(&self) -> Result<(), ValidationError> {
        EntityRoleQuery::validate(self)
    }

    fn entity_filters(&self) -> Vec<QueryFilter> {
        [
            (COLUMN_ENTITY_TYPE, &self.entity_type),
            (COLUMN_ENTITY_ID, &self.entity_id),
            (COLUMN_ROLE_ID, &self.role_id),
        ]
        .into_iter()
        .filter_map(|(column, value)| value.as_ref().map(|v| QueryFilter::eq(column, v)))
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_triple_parts() {
        for (query, field) in [
            (EntityRoleQuery::new().entity_type(""), "entity_type"),
            (EntityRoleQuery::new().entity_id(""), "entity_id"),
            (EntityRoleQuery::new().role_id(""), "role_id"),
            (EntityRoleQuery::new().created_at_gte(""), "created_at_gte"),
        ] {
            assert_eq!(query.validate(), Err(ValidationError::EmptyValue { field }));
        }
    }

    #[test]
    fn filters_follow_column_order() {
        let query = EntityRoleQuery::new().role_id("R1").entity_type("user");
        assert_eq!(query.entity_filters().len(), 2);
    }
}
