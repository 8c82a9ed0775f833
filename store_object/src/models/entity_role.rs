use super::{apply_new_defaults, common_fields, string_field, COLUMN_ID};
use crate::errors::StoreResult;
use crate::query::EntityRoleQuery;
use crate::record::{FieldMap, Record};
use crate::traits::table_metadata::{ColumnDefinition, ColumnKind, TableMetadata};
use crate::uid::{HumanUidGenerator, IdGenerator};
use crate::validation::require_key;
use serde::{Deserialize, Serialize};

pub const COLUMN_ENTITY_TYPE: &str = "entity_type";
pub const COLUMN_ENTITY_ID: &str = "entity_id";
pub const COLUMN_ROLE_ID: &str = "role_id";

const COLUMNS: &[ColumnDefinition] = &[
    ColumnDefinition::new(COLUMN_ID, ColumnKind::VarChar(40)),
    ColumnDefinition::new(COLUMN_ENTITY_TYPE, ColumnKind::VarChar(80)),
    ColumnDefinition::new(COLUMN_ENTITY_ID, ColumnKind::VarChar(40)),
    ColumnDefinition::new(COLUMN_ROLE_ID, ColumnKind::VarChar(40)),
    ColumnDefinition::new(super::COLUMN_METAS, ColumnKind::Text),
    ColumnDefinition::new(super::COLUMN_MEMO, ColumnKind::Text),
    ColumnDefinition::new(super::COLUMN_CREATED_AT, ColumnKind::DateTime),
    ColumnDefinition::new(super::COLUMN_UPDATED_AT, ColumnKind::DateTime),
    ColumnDefinition::new(super::COLUMN_SOFT_DELETED_AT, ColumnKind::DateTime),
];

/// Assignment of a role to an arbitrary entity, e.g. `("user", "42", role_id)`.
///
/// The triple is unique among rows that are not soft deleted. `role_id` is
/// not enforced as a foreign key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityRole {
    record: Record,
}

impl EntityRole {
    pub fn new() -> Self {
        let mut entity_role = Self::default();
        entity_role
            .record
            .set(COLUMN_ID, HumanUidGenerator.generate());
        apply_new_defaults(&mut entity_role.record);
        entity_role
    }

    common_fields!();

    string_field!(entity_type, set_entity_type, COLUMN_ENTITY_TYPE);
    string_field!(entity_id, set_entity_id, COLUMN_ENTITY_ID);
    string_field!(role_id, set_role_id, COLUMN_ROLE_ID);
}

impl TableMetadata for EntityRole {
    type Query = EntityRoleQuery;

    fn entity_name() -> &'static str {
        "entity_role"
    }

    fn column_definitions() -> &'static [ColumnDefinition] {
        COLUMNS
    }

    fn from_existing_data(data: FieldMap) -> Self {
        EntityRole::from_existing_data(data)
    }

    fn record(&self) -> &Record {
        &self.record
    }

    fn record_mut(&mut self) -> &mut Record {
        &mut self.record
    }

    fn id_query(id: &str) -> Self::Query {
        EntityRoleQuery::new().id(id).limit(1)
    }

    /// Rejects an incomplete triple, then looks for a live row with the same one.
    fn uniqueness_query(&self) -> StoreResult<Option<Self::Query>> {
        require_key(COLUMN_ROLE_ID, self.role_id())?;
        require_key(COLUMN_ENTITY_ID, self.entity_id())?;
        require_key(COLUMN_ENTITY_TYPE, self.entity_type())?;

        Ok(Some(
            EntityRoleQuery::new()
                .entity_type(self.entity_type())
                .entity_id(self.entity_id())
                .role_id(self.role_id())
                .limit(1),
        ))
    }
}
