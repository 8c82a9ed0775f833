//! SQL statement observer
//!
//! Stores report every statement they execute to an `SqlLogger` while debug
//! mode is on. The default logger discards everything.

use std::fmt::Debug;

pub trait SqlLogger: Send + Sync + Debug {
    /// Called once per statement, before it is sent to the database.
    fn log_sql(&self, operation: &str, sql: &str, params: &[String]);
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSqlLogger;

impl SqlLogger for NoopSqlLogger {
    fn log_sql(&self, _operation: &str, _sql: &str, _params: &[String]) {}
}

/// Forwards statements to `tracing` at debug level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSqlLogger;

impl SqlLogger for TracingSqlLogger {
    fn log_sql(&self, operation: &str, sql: &str, params: &[String]) {
        tracing::debug!(operation, sql, ?params, "executing statement");
    }
}
