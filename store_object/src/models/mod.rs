//! Typed views over `Record` for the two persisted entities.

use crate::errors::StoreResult;
use std::collections::BTreeMap;

pub const COLUMN_ID: &str = "id";
pub const COLUMN_MEMO: &str = "memo";
pub const COLUMN_METAS: &str = "metas";
pub const COLUMN_CREATED_AT: &str = "created_at";
pub const COLUMN_UPDATED_AT: &str = "updated_at";
pub const COLUMN_SOFT_DELETED_AT: &str = "soft_deleted_at";

/// Free-form string attributes stored as JSON text in `metas`.
pub type Metas = BTreeMap<String, String>;

pub(crate) fn decode_metas(raw: &str) -> StoreResult<Metas> {
    if raw.is_empty() {
        return Ok(Metas::new());
    }
    Ok(serde_json::from_str(raw)?)
}

pub(crate) fn encode_metas(metas: &Metas) -> StoreResult<String> {
    Ok(serde_json::to_string(metas)?)
}

/// Getter and chaining setter for a plain string column.
macro_rules! string_field {
    ($(#[$meta:meta])* $getter:ident, $setter:ident, $column:expr) => {
        $(#[$meta])*
        pub fn $getter(&self) -> &str {
            self.record.get($column)
        }

        pub fn $setter(&mut self, value: impl Into<String>) -> &mut Self {
            self.record.set($column, value);
            self
        }
    };
}

/// Columns every entity carries: id, memo, metas and the three timestamps.
macro_rules! common_fields {
    () => {
        string_field!(id, set_id, $crate::models::COLUMN_ID);
        string_field!(memo, set_memo, $crate::models::COLUMN_MEMO);
        string_field!(created_at, set_created_at, $crate::models::COLUMN_CREATED_AT);
        string_field!(updated_at, set_updated_at, $crate::models::COLUMN_UPDATED_AT);
        string_field!(
            soft_deleted_at,
            set_soft_deleted_at,
            $crate::models::COLUMN_SOFT_DELETED_AT
        );

        /// Raw JSON text of the `metas` column.
        pub fn metas_raw(&self) -> &str {
            self.record.get($crate::models::COLUMN_METAS)
        }

        /// Decoded `metas`. An empty stored value decodes as an empty map.
        pub fn metas(&self) -> $crate::errors::StoreResult<$crate::models::Metas> {
            $crate::models::decode_metas(self.metas_raw())
        }

        /// Replaces all metas.
        pub fn set_metas(
            &mut self,
            metas: &$crate::models::Metas,
        ) -> $crate::errors::StoreResult<&mut Self> {
            let encoded = $crate::models::encode_metas(metas)?;
            self.record.set($crate::models::COLUMN_METAS, encoded);
            Ok(self)
        }

        /// Merges `metas` into the existing ones, overwriting equal keys.
        pub fn upsert_metas(
            &mut self,
            metas: &$crate::models::Metas,
        ) -> $crate::errors::StoreResult<&mut Self> {
            let mut current = self.metas()?;
            current.extend(metas.iter().map(|(k, v)| (k.clone(), v.clone())));
            self.set_metas(&current)
        }

        /// Single meta value, or the empty string when missing or undecodable.
        pub fn meta(&self, name: &str) -> String {
            self.metas()
                .ok()
                .and_then(|mut metas| metas.remove(name))
                .unwrap_or_default()
        }

        pub fn set_meta(
            &mut self,
            name: impl Into<String>,
            value: impl Into<String>,
        ) -> $crate::errors::StoreResult<&mut Self> {
            let mut update = $crate::models::Metas::new();
            update.insert(name.into(), value.into());
            self.upsert_metas(&update)
        }

        pub fn created_at_datetime(&self) -> Option<chrono::DateTime<chrono::Utc>> {
            $crate::datetime::parse_datetime(self.created_at())
        }

        pub fn updated_at_datetime(&self) -> Option<chrono::DateTime<chrono::Utc>> {
            $crate::datetime::parse_datetime(self.updated_at())
        }

        pub fn soft_deleted_at_datetime(&self) -> Option<chrono::DateTime<chrono::Utc>> {
            $crate::datetime::parse_datetime(self.soft_deleted_at())
        }

        /// True once `soft_deleted_at` lies strictly in the past.
        pub fn is_soft_deleted(&self) -> bool {
            self.soft_deleted_at_datetime()
                .is_some_and(|at| at < chrono::Utc::now())
        }

        pub fn record(&self) -> &$crate::record::Record {
            &self.record
        }

        pub fn record_mut(&mut self) -> &mut $crate::record::Record {
            &mut self.record
        }

        /// Wraps a stored row. The result has no dirty fields.
        pub fn from_existing_data(data: $crate::record::FieldMap) -> Self {
            Self {
                record: $crate::record::Record::from_existing_data(data),
            }
        }
    };
}

/// Fills the defaults shared by new entities. Every field ends up dirty.
fn apply_new_defaults(record: &mut crate::record::Record) {
    let now = crate::datetime::now_datetime_string();
    record.set(COLUMN_MEMO, "");
    record.set(COLUMN_METAS, "{}");
    record.set(COLUMN_CREATED_AT, now.clone());
    record.set(COLUMN_UPDATED_AT, now);
    record.set(COLUMN_SOFT_DELETED_AT, crate::datetime::MAX_DATETIME);
}

pub(crate) use common_fields;
pub(crate) use string_field;

pub mod entity_role;
pub mod role;

pub use entity_role::EntityRole;
pub use role::{Role, RoleStatus};
