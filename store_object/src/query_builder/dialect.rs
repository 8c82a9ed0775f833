//! SQL dialect differences
//!
//! Covers what the generated statements need: placeholders, identifier
//! quoting, case-insensitive matching, offset without limit and column types.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    Postgres,
    Sqlite,
    MySql,
}

impl Dialect {
    /// Picks the dialect from a connection URL scheme.
    pub fn from_url(url: &str) -> Option<Self> {
        let scheme = url.split(':').next()?.to_ascii_lowercase();
        match scheme.as_str() {
            "postgres" | "postgresql" => Some(Dialect::Postgres),
            "sqlite" => Some(Dialect::Sqlite),
            "mysql" | "mariadb" => Some(Dialect::MySql),
            _ => None,
        }
    }

    /// Placeholder for the 1-based parameter `index`.
    pub fn placeholder(&self, index: usize) -> String {
        match self {
            Dialect::Postgres => format!("${}", index),
            Dialect::Sqlite | Dialect::MySql => "?".to_string(),
        }
    }

    pub fn quote_identifier(&self, name: &str) -> String {
        match self {
            Dialect::MySql => format!("`{}`", name.replace('`', "``")),
            Dialect::Postgres | Dialect::Sqlite => format!("\"{}\"", name.replace('"', "\"\"")),
        }
    }

    /// Case-insensitive LIKE of a quoted column against a placeholder.
    pub fn ilike(&self, column: &str, placeholder: &str) -> String {
        match self {
            Dialect::Postgres => format!("{} ILIKE {}", column, placeholder),
            Dialect::Sqlite | Dialect::MySql => {
                format!("LOWER({}) LIKE LOWER({})", column, placeholder)
            }
        }
    }

    /// Clause for an offset without a limit.
    pub fn offset_only(&self, offset: i64) -> String {
        match self {
            Dialect::Postgres => format!("OFFSET {}", offset),
            Dialect::Sqlite => format!("LIMIT -1 OFFSET {}", offset),
            Dialect::MySql => format!("LIMIT 18446744073709551615 OFFSET {}", offset),
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Dialect::Postgres => "postgres",
            Dialect::Sqlite => "sqlite",
            Dialect::MySql => "mysql",
        };
        f.write_str(name)
    }
}
