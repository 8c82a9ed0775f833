//! Query builder utilities
//!
//! This module turns typed queries into dialect-specific SQL with bound
//! parameters.

pub mod builder;
pub mod compiler;
pub mod dialect;
pub mod filter;
pub mod ordering;
pub mod pagination;
pub mod sql_generation;


pub use builder::{Projection, QueryPlan};
pub use compiler::CompileQuery;
pub use dialect::Dialect;
pub use filter::{QueryFilter, QueryOperator, QueryValue};
pub use ordering::SortOrder;
pub use pagination::Pagination;
pub use sql_generation::SqlGenerator;
