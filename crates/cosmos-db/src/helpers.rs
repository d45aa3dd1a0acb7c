//! Row-to-entity parsing and column-list helpers.
//!
//! Every repo converts `libsql::Row` (column-indexed) into typed entity
//! structs. Joined queries select a second entity after the first, so parsers
//! take the column offset where their entity starts.

use cosmos_core::entities::{CelestialBody, Mission, Researcher};

use crate::error::DatabaseError;

/// Columns read by [`celestial_body_at`], in order.
pub const CELESTIAL_BODY_COLS: &str = "id, name, distance_from_earth, nearest_star";

/// Columns read by [`researcher_at`], in order.
pub const RESEARCHER_COLS: &str = "id, name, field_of_study";

/// Columns read by [`mission_at`], in order.
pub const MISSION_COLS: &str = "id, name, celestial_body_id, researcher_id";

/// Read a celestial body from four columns starting at `base`.
///
/// # Errors
///
/// Returns `DatabaseError` if a column read fails.
pub fn celestial_body_at(row: &libsql::Row, base: i32) -> Result<CelestialBody, DatabaseError> {
    Ok(CelestialBody {
        id: row.get::<i64>(base)?,
        name: row.get::<Option<String>>(base + 1)?,
        distance_from_earth: row.get::<Option<i64>>(base + 2)?,
        nearest_star: row.get::<Option<String>>(base + 3)?,
    })
}

/// Read a researcher from three columns starting at `base`.
///
/// # Errors
///
/// Returns `DatabaseError` if a column read fails.
pub fn researcher_at(row: &libsql::Row, base: i32) -> Result<Researcher, DatabaseError> {
    Ok(Researcher {
        id: row.get::<i64>(base)?,
        name: row.get::<String>(base + 1)?,
        field_of_study: row.get::<String>(base + 2)?,
    })
}

/// Read a mission from four columns starting at `base`.
///
/// # Errors
///
/// Returns `DatabaseError` if a column read fails.
pub fn mission_at(row: &libsql::Row, base: i32) -> Result<Mission, DatabaseError> {
    Ok(Mission {
        id: row.get::<i64>(base)?,
        name: row.get::<String>(base + 1)?,
        celestial_body_id: row.get::<i64>(base + 2)?,
        researcher_id: row.get::<i64>(base + 3)?,
    })
}

/// Qualify a comma-separated column list with a table alias.
///
/// `qualified("m", "id, name")` → `"m.id, m.name"`.
#[must_use]
pub fn qualified(alias: &str, cols: &str) -> String {
    cols.split(", ")
        .map(|c| format!("{alias}.{c}"))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn qualified_prefixes_every_column() {
        assert_eq!(
            qualified("m", MISSION_COLS),
            "m.id, m.name, m.celestial_body_id, m.researcher_id"
        );
    }
}
