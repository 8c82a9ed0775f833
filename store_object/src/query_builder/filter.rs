//! Query builder utilities
//!
//! Filter predicates. Every value is a string because every column is
//! stored as text.

/// Query condition operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryOperator {
    Eq,    // =
    Gt,    // >
    Gte,   // >=
    Lte,   // <=
    In,    // IN
    ILike, // case-insensitive LIKE
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryValue {
    Single(String),
    List(Vec<String>),
}

/// Single condition in WHERE clause
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryCondition {
    pub field: String,
    pub operator: QueryOperator,
    pub value: QueryValue,
}

/// Query filter that can be nested
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryFilter {
    Condition(QueryCondition),
    /// Conjunction rendered in parentheses.
    All(Vec<QueryFilter>),
}

impl QueryFilter {
    /// Create a simple condition
    pub fn condition(field: &str, operator: QueryOperator, value: QueryValue) -> Self {
        Self::Condition(QueryCondition {
            field: field.to_string(),
            operator,
            value,
        })
    }

    /// Create AND group
    pub fn and(filters: Vec<QueryFilter>) -> Self {
        Self::All(filters)
    }

    /// Equal condition
    pub fn eq(field: &str, value: impl Into<String>) -> Self {
        Self::condition(field, QueryOperator::Eq, QueryValue::Single(value.into()))
    }

    /// Greater than condition
    pub fn gt(field: &str, value: impl Into<String>) -> Self {
        Self::condition(field, QueryOperator::Gt, QueryValue::Single(value.into()))
    }

    /// Greater than or equal condition
    pub fn gte(field: &str, value: impl Into<String>) -> Self {
        Self::condition(field, QueryOperator::Gte, QueryValue::Single(value.into()))
    }

    /// Less than or equal condition
    pub fn lte(field: &str, value: impl Into<String>) -> Self {
        Self::condition(field, QueryOperator::Lte, QueryValue::Single(value.into()))
    }

    /// IN condition
    pub fn in_values(field: &str, values: Vec<String>) -> Self {
        Self::condition(field, QueryOperator::In, QueryValue::List(values))
    }

    /// Case-insensitive substring match, `%value%`
    pub fn contains_ignore_case(field: &str, value: &str) -> Self {
        Self::condition(
            field,
            QueryOperator::ILike,
            QueryValue::Single(format!("%{}%", value)),
        )
    }

    /// Inclusive range. Missing bounds are left open; `None` when both are.
    pub fn between(field: &str, gte: Option<&str>, lte: Option<&str>) -> Option<Self> {
        match (gte, lte) {
            (Some(from), Some(to)) => Some(Self::and(vec![
                Self::gte(field, from),
                Self::lte(field, to),
            ])),
            (Some(from), None) => Some(Self::gte(field, from)),
            (None, Some(to)) => Some(Self::lte(field, to)),
            (None, None) => None,
        }
    }
}
