//! Query builder utilities
//!
//! Sort direction parsing and rendering.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn to_sql(&self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }

    /// `asc` in any case is ascending. Everything else, including a missing
    /// direction, is descending.
    pub fn from_direction(direction: Option<&str>) -> Self {
        match direction {
            Some(direction) if direction.eq_ignore_ascii_case("asc") => SortOrder::Asc,
            Some(direction) => {
                if !direction.eq_ignore_ascii_case("desc") {
                    tracing::warn!(
                        direction,
                        "unrecognized sort direction, sorting descending"
                    );
                }
                SortOrder::Desc
            }
            None => SortOrder::Desc,
        }
    }
}
