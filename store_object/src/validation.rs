//! Validation module
//!
//! Validation errors for query filters and required keys, plus the validated
//! table name used for every generated statement.

use std::fmt;

/// Validation errors for query filters, required keys and database identifiers
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// A filter or key is present but holds an empty string
    EmptyValue { field: &'static str },
    /// A membership filter is present but holds no values
    EmptyList { field: &'static str },
    /// Limit must be strictly positive
    NonPositiveLimit(i64),
    /// Offset must not be negative
    NegativeOffset(i64),
    /// Name contains invalid characters (only alphanumeric and underscore allowed)
    InvalidCharacters(String),
    /// Name is too long (PostgreSQL limit is 63 characters)
    TooLong {
        name: String,
        length: usize,
        max_length: usize,
    },
    /// Name is empty
    EmptyName,
    /// Name starts with invalid character (must start with letter or underscore)
    InvalidStartCharacter(String),
    /// Name is a reserved SQL keyword
    ReservedKeyword(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::EmptyValue { field } => {
                write!(f, "{} cannot be empty", field)
            }
            ValidationError::EmptyList { field } => {
                write!(f, "{} cannot be an empty list", field)
            }
            ValidationError::NonPositiveLimit(limit) => {
                write!(f, "limit must be greater than 0, got {}", limit)
            }
            ValidationError::NegativeOffset(offset) => {
                write!(f, "offset must be greater than or equal to 0, got {}", offset)
            }
            ValidationError::InvalidCharacters(name) => {
                write!(f, "Invalid characters in name '{}': only alphanumeric characters and underscores are allowed", name)
            }
            ValidationError::TooLong {
                name,
                length,
                max_length,
            } => {
                write!(
                    f,
                    "Name '{}' is too long: {} characters (max {})",
                    name, length, max_length
                )
            }
            ValidationError::EmptyName => {
                write!(f, "Name cannot be empty")
            }
            ValidationError::InvalidStartCharacter(name) => {
                write!(f, "Name '{}' must start with a letter or underscore", name)
            }
            ValidationError::ReservedKeyword(name) => {
                write!(f, "Name '{}' is a reserved SQL keyword", name)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Fails with `EmptyValue` when a present value is the empty string.
pub(crate) fn require_non_empty(
    field: &'static str,
    value: Option<&str>,
) -> Result<(), ValidationError> {
    match value {
        Some("") => Err(ValidationError::EmptyValue { field }),
        _ => Ok(()),
    }
}

/// Fails with `EmptyList` when a present list has no entries.
pub(crate) fn require_non_empty_list(
    field: &'static str,
    values: Option<&[String]>,
) -> Result<(), ValidationError> {
    match values {
        Some([]) => Err(ValidationError::EmptyList { field }),
        _ => Ok(()),
    }
}

/// Fails with `EmptyValue` for an empty required key such as an id or handle.
pub fn require_key(field: &'static str, value: &str) -> Result<(), ValidationError> {
    require_non_empty(field, Some(value))
}

/// A validated table name that is safe to use in SQL queries
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ValidatedTableName(String);

impl ValidatedTableName {
    /// PostgreSQL identifier length limit
    const MAX_LENGTH: usize = 63;

    /// Create a new validated table name
    pub fn new(name: &str) -> Result<Self, ValidationError> {
        Self::validate_identifier(name)?;
        Ok(Self(name.to_string()))
    }

    /// Get the validated name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn validate_identifier(name: &str) -> Result<(), ValidationError> {
        let first_char = name.chars().next().ok_or(ValidationError::EmptyName)?;

        if name.len() > Self::MAX_LENGTH {
            return Err(ValidationError::TooLong {
                name: name.to_string(),
                length: name.len(),
                max_length: Self::MAX_LENGTH,
            });
        }

        if !first_char.is_ascii_alphabetic() && first_char != '_' {
            return Err(ValidationError::InvalidStartCharacter(name.to_string()));
        }

        if !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
            return Err(ValidationError::InvalidCharacters(name.to_string()));
        }

        if Self::is_reserved_keyword(name) {
            return Err(ValidationError::ReservedKeyword(name.to_string()));
        }

        Ok(())
    }

    fn is_reserved_keyword(name: &str) -> bool {
        const RESERVED_KEYWORDS: &[&str] = &[
            "SELECT", "INSERT", "UPDATE", "DELETE", "FROM", "WHERE", "JOIN", "INNER", "LEFT",
            "RIGHT", "FULL", "OUTER", "ON", "AS", "AND", "OR", "NOT", "NULL", "TRUE", "FALSE",
            "CASE", "WHEN", "THEN", "ELSE", "END", "IF", "EXISTS", "IN", "LIKE", "ILIKE",
            "BETWEEN", "ORDER", "BY", "GROUP", "HAVING", "LIMIT", "OFFSET", "UNION", "ALL",
            "DISTINCT", "COUNT", "CREATE", "DROP", "ALTER", "TABLE", "INDEX", "VIEW",
            "DATABASE", "SCHEMA", "PRIMARY", "KEY", "FOREIGN", "REFERENCES", "UNIQUE", "CHECK",
            "DEFAULT", "CONSTRAINT", "COLUMN", "USER", "ROLE", "GRANT", "REVOKE",
        ];

        RESERVED_KEYWORDS.contains(&name.to_ascii_uppercase().as_str())
    }
}

impl fmt::Display for ValidatedTableName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_table_names() {
        let long_name = "a".repeat(63);
        let valid_names = [
            "roles_role",
            "roles_entity_role",
            "RolesRole",
            "_private_table",
            "table123",
            long_name.as_str(),
        ];

        for name in valid_names {
            assert!(
                ValidatedTableName::new(name).is_ok(),
                "Should accept valid name: {}",
                name
            );
        }
    }

    #[test]
    fn test_invalid_table_names() {
        let test_cases = [
            ("", ValidationError::EmptyName),
            (
                "123table",
                ValidationError::InvalidStartCharacter("123table".to_string()),
            ),
            (
                "role-table",
                ValidationError::InvalidCharacters("role-table".to_string()),
            ),
            (
                "roles; DROP TABLE x",
                ValidationError::InvalidCharacters("roles; DROP TABLE x".to_string()),
            ),
            ("role", ValidationError::ReservedKeyword("role".to_string())),
            ("SELECT", ValidationError::ReservedKeyword("SELECT".to_string())),
        ];

        for (name, expected_error) in test_cases {
            let result = ValidatedTableName::new(name);
            assert_eq!(result.unwrap_err(), expected_error, "name: {}", name);
        }
    }

    #[test]
    fn test_too_long_name() {
        let long_name = "a".repeat(64);
        match ValidatedTableName::new(&long_name).unwrap_err() {
            ValidationError::TooLong {
                length, max_length, ..
            } => {
                assert_eq!(length, 64);
                assert_eq!(max_length, 63);
            }
            other => panic!("Expected TooLong error, got {other:?}"),
        }
    }

    #[test]
    fn test_require_helpers() {
        assert!(require_non_empty("id", None).is_ok());
        assert!(require_non_empty("id", Some("ROLE_01")).is_ok());
        assert_eq!(
            require_non_empty("id", Some("")),
            Err(ValidationError::EmptyValue { field: "id" })
        );

        let empty: Vec<String> = Vec::new();
        assert!(require_non_empty_list("id_in", None).is_ok());
        assert_eq!(
            require_non_empty_list("id_in", Some(&empty)),
            Err(ValidationError::EmptyList { field: "id_in" })
        );

        assert!(require_key("handle", "ADMIN").is_ok());
        assert!(require_key("handle", "").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(
            ValidationError::EmptyValue { field: "handle" }.to_string(),
            "handle cannot be empty"
        );
        assert_eq!(
            ValidationError::NonPositiveLimit(0).to_string(),
            "limit must be greater than 0, got 0"
        );
        let table_name = ValidatedTableName::new("roles_role").unwrap();
        assert_eq!(format!("{}", table_name), "roles_role");
    }
}
