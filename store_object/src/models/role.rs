use super::{apply_new_defaults, common_fields, string_field, COLUMN_ID};
use crate::query::RoleQuery;
use crate::record::{FieldMap, Record};
use crate::traits::table_metadata::{ColumnDefinition, ColumnKind, TableMetadata};
use crate::uid::{HumanUidGenerator, IdGenerator};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const COLUMN_STATUS: &str = "status";
pub const COLUMN_HANDLE: &str = "handle";
pub const COLUMN_TITLE: &str = "title";

const COLUMNS: &[ColumnDefinition] = &[
    ColumnDefinition::new(COLUMN_ID, ColumnKind::VarChar(40)),
    ColumnDefinition::new(COLUMN_STATUS, ColumnKind::VarChar(40)),
    ColumnDefinition::new(COLUMN_HANDLE, ColumnKind::VarChar(50)),
    ColumnDefinition::new(COLUMN_TITLE, ColumnKind::VarChar(100)),
    ColumnDefinition::new(super::COLUMN_METAS, ColumnKind::Text),
    ColumnDefinition::new(super::COLUMN_MEMO, ColumnKind::Text),
    ColumnDefinition::new(super::COLUMN_CREATED_AT, ColumnKind::DateTime),
    ColumnDefinition::new(super::COLUMN_UPDATED_AT, ColumnKind::DateTime),
    ColumnDefinition::new(super::COLUMN_SOFT_DELETED_AT, ColumnKind::DateTime),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoleStatus {
    Active,
    Inactive,
    Deleted,
}

impl RoleStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RoleStatus::Active => "active",
            RoleStatus::Inactive => "inactive",
            RoleStatus::Deleted => "deleted",
        }
    }
}

impl fmt::Display for RoleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RoleStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(RoleStatus::Active),
            "inactive" => Ok(RoleStatus::Inactive),
            "deleted" => Ok(RoleStatus::Deleted),
            other => Err(format!("unknown role status '{}'", other)),
        }
    }
}

impl From<RoleStatus> for String {
    fn from(status: RoleStatus) -> Self {
        status.as_str().to_string()
    }
}

/// A named role, identified by `id` and looked up by `handle`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Role {
    record: Record,
}

impl Role {
    /// New inactive role with a generated id and current timestamps.
    pub fn new() -> Self {
        let mut role = Self::default();
        role.record.set(COLUMN_ID, HumanUidGenerator.generate());
        role.record.set(COLUMN_STATUS, RoleStatus::Inactive);
        apply_new_defaults(&mut role.record);
        role
    }

    common_fields!();

    string_field!(status, set_status, COLUMN_STATUS);
    string_field!(handle, set_handle, COLUMN_HANDLE);
    string_field!(title, set_title, COLUMN_TITLE);

    pub fn status_kind(&self) -> Option<RoleStatus> {
        self.status().parse().ok()
    }

    pub fn is_active(&self) -> bool {
        self.status() == RoleStatus::Active.as_str()
    }

    pub fn is_inactive(&self) -> bool {
        self.status() == RoleStatus::Inactive.as_str()
    }
}

impl TableMetadata for Role {
    type Query = RoleQuery;

    fn entity_name() -> &'static str {
        "role"
    }

    fn column_definitions() -> &'static [ColumnDefinition] {
        COLUMNS
    }

    fn from_existing_data(data: FieldMap) -> Self {
        Role::from_existing_data(data)
    }

    fn record(&self) -> &Record {
        &self.record
    }

    fn record_mut(&mut self) -> &mut Record {
        &mut self.record
    }

    fn id_query(id: &str) -> Self::Query {
        RoleQuery::new().id(id).limit(1)
    }
}
