//! Query filters
//!
//! A query is a sparse set of optional filters. A filter that is `None`
//! never constrains the result; a filter that is present but degenerate (an
//! empty string or an empty list) is rejected by `validate`.

pub mod common;
pub mod entity_role;
pub mod role;

pub use common::CommonQuery;
pub use entity_role::EntityRoleQuery;
pub use role::RoleQuery;
