//! Query builder utilities
//!
//! LIMIT / OFFSET rendering.

use super::dialect::Dialect;

/// Pagination configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Pagination {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

impl Pagination {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn with_offset(mut self, offset: i64) -> Self {
        self.offset = Some(offset);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.limit.is_none() && self.offset.is_none()
    }

    pub fn to_sql(&self, dialect: Dialect) -> String {
        match (self.limit, self.offset) {
            (Some(limit), Some(offset)) => format!("LIMIT {} OFFSET {}", limit, offset),
            (Some(limit), None) => format!("LIMIT {}", limit),
            (None, Some(offset)) => dialect.offset_only(offset),
            (None, None) => String::new(),
        }
    }
}
