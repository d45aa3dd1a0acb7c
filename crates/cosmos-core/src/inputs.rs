//! Insert field maps.
//!
//! These are the shapes accepted from callers when creating an entity. Every
//! field is optional on the wire (absent and `null` both map to `None`), and
//! `validate()` converts a field map into a checked value that the storage
//! layer can insert without re-inspecting it.

use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};

use crate::validation::{Field, ValidationError, require_id, require_text};

/// Deserialize a field that distinguishes "absent" from "explicit null".
///
/// Use with `#[serde(default, deserialize_with = "deserialize_present")]` on an
/// `Option<Option<T>>`: a missing key stays `None`, `null` becomes `Some(None)`.
///
/// # Errors
///
/// Propagates the inner deserializer's error.
pub fn deserialize_present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Fields for a new celestial body. Always valid.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(default)]
pub struct NewCelestialBody {
    pub name: Option<String>,
    pub distance_from_earth: Option<i64>,
    pub nearest_star: Option<String>,
}

impl NewCelestialBody {
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }
}

/// Fields for a new researcher.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(default)]
pub struct NewResearcher {
    pub name: Option<String>,
    pub field_of_study: Option<String>,
}

impl NewResearcher {
    #[must_use]
    pub fn new(name: impl Into<String>, field_of_study: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            field_of_study: Some(field_of_study.into()),
        }
    }

    /// Check `name` then `field_of_study`.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` for the first null or empty field.
    pub fn validate(self) -> Result<ResearcherFields, ValidationError> {
        require_text(Field::Name, self.name.as_deref())?;
        require_text(Field::FieldOfStudy, self.field_of_study.as_deref())?;
        Ok(ResearcherFields {
            name: self.name.unwrap_or_default(),
            field_of_study: self.field_of_study.unwrap_or_default(),
        })
    }
}

/// A researcher field map that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResearcherFields {
    name: String,
    field_of_study: String,
}

impl ResearcherFields {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn field_of_study(&self) -> &str {
        &self.field_of_study
    }
}

/// Fields for a new mission.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(default)]
pub struct NewMission {
    pub name: Option<String>,
    pub celestial_body_id: Option<i64>,
    pub researcher_id: Option<i64>,
}

impl NewMission {
    #[must_use]
    pub fn new(name: impl Into<String>, celestial_body_id: i64, researcher_id: i64) -> Self {
        Self {
            name: Some(name.into()),
            celestial_body_id: Some(celestial_body_id),
            researcher_id: Some(researcher_id),
        }
    }

    /// Check `name`, `celestial_body_id`, then `researcher_id`.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` for the first rejected field.
    pub fn validate(self) -> Result<MissionFields, ValidationError> {
        require_text(Field::Name, self.name.as_deref())?;
        let celestial_body_id = require_id(Field::CelestialBodyId, self.celestial_body_id)?;
        let researcher_id = require_id(Field::ResearcherId, self.researcher_id)?;
        Ok(MissionFields {
            name: self.name.unwrap_or_default(),
            celestial_body_id,
            researcher_id,
        })
    }
}

/// A mission field map that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissionFields {
    name: String,
    celestial_body_id: i64,
    researcher_id: i64,
}

impl MissionFields {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn celestial_body_id(&self) -> i64 {
        self.celestial_body_id
    }

    #[must_use]
    pub const fn researcher_id(&self) -> i64 {
        self.researcher_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn researcher_missing_field_of_study_is_rejected() {
        let input: NewResearcher = serde_json::from_str(r#"{"name": "Bob"}"#).unwrap();
        let err = input.validate().unwrap_err();
        assert_eq!(err.field, Field::FieldOfStudy);
    }

    #[test]
    fn researcher_null_field_of_study_is_rejected() {
        let input: NewResearcher =
            serde_json::from_str(r#"{"name": "Bob", "field_of_study": null}"#).unwrap();
        assert_eq!(
            input.validate().unwrap_err(),
            ValidationError::missing(Field::FieldOfStudy)
        );
    }

    #[test]
    fn researcher_name_checked_before_field_of_study() {
        let err = NewResearcher::default().validate().unwrap_err();
        assert_eq!(err.field, Field::Name);
    }

    #[test]
    fn researcher_whitespace_values_pass() {
        let fields = NewResearcher::new(" ", "  ").validate().unwrap();
        assert_eq!(fields.name(), " ");
        assert_eq!(fields.field_of_study(), "  ");
    }

    #[test]
    fn mission_empty_name_is_rejected() {
        let err = NewMission::new("", 1, 1).validate().unwrap_err();
        assert_eq!(err, ValidationError::missing(Field::Name));
    }

    #[test]
    fn mission_zero_ids_pass() {
        let fields = NewMission::new("M1", 0, 0).validate().unwrap();
        assert_eq!(fields.celestial_body_id(), 0);
        assert_eq!(fields.researcher_id(), 0);
    }

    #[test]
    fn mission_missing_ids_are_rejected_in_order() {
        let input: NewMission = serde_json::from_str(r#"{"name": "M1"}"#).unwrap();
        let err = input.clone().validate().unwrap_err();
        assert_eq!(err.field, Field::CelestialBodyId);

        let input = NewMission {
            celestial_body_id: Some(3),
            ..input
        };
        assert_eq!(input.validate().unwrap_err().field, Field::ResearcherId);
    }

    #[test]
    fn celestial_body_accepts_empty_input() {
        let input: NewCelestialBody = serde_json::from_str("{}").unwrap();
        assert_eq!(input, NewCelestialBody::default());
    }

    #[derive(Deserialize)]
    struct Probe {
        #[serde(default, deserialize_with = "deserialize_present")]
        value: Option<Option<i64>>,
    }

    #[test]
    fn deserialize_present_distinguishes_absent_and_null() {
        let absent: Probe = serde_json::from_str("{}").unwrap();
        let null: Probe = serde_json::from_str(r#"{"value": null}"#).unwrap();
        let set: Probe = serde_json::from_str(r#"{"value": 5}"#).unwrap();
        assert_eq!(absent.value, None);
        assert_eq!(null.value, Some(None));
        assert_eq!(set.value, Some(Some(5)));
    }
}
