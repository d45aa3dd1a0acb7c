//! Write-time field validators.
//!
//! Each validator checks a single candidate value and either hands it back or
//! fails with a [`ValidationError`] naming the field. Validators run per field,
//! so callers report the first rejected field in declaration order.

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A field guarded by a validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Name,
    FieldOfStudy,
    CelestialBodyId,
    ResearcherId,
}

impl Field {
    /// Return the column/JSON name of the field.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::FieldOfStudy => "field_of_study",
            Self::CelestialBodyId => "celestial_body_id",
            Self::ResearcherId => "researcher_id",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A candidate value was rejected for `field`.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize, JsonSchema)]
#[error("{message}")]
pub struct ValidationError {
    pub field: Field,
    pub message: String,
}

impl ValidationError {
    /// The error raised when a required value is null or empty.
    #[must_use]
    pub fn missing(field: Field) -> Self {
        Self {
            field,
            message: format!("Must have a {field} attribute"),
        }
    }
}

/// Require a non-null, non-empty string.
///
/// Whitespace is not trimmed: `"   "` is accepted.
///
/// # Errors
///
/// Returns `ValidationError` if `value` is `None` or `""`.
pub fn require_text(field: Field, value: Option<&str>) -> Result<&str, ValidationError> {
    match value {
        Some(s) if !s.is_empty() => Ok(s),
        _ => Err(ValidationError::missing(field)),
    }
}

/// Require a non-null foreign key.
///
/// Only presence is checked. Zero, negative ids, and ids with no matching
/// parent row all pass; referential existence is the storage layer's job.
///
/// # Errors
///
/// Returns `ValidationError` if `value` is `None`.
pub fn require_id(field: Field, value: Option<i64>) -> Result<i64, ValidationError> {
    value.ok_or_else(|| ValidationError::missing(field))
}
