//! Researcher update builder.

use cosmos_core::inputs::deserialize_present;
use cosmos_core::validation::{Field, ValidationError, require_text};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResearcherUpdate {
    #[serde(
        default,
        deserialize_with = "deserialize_present",
        skip_serializing_if = "Option::is_none"
    )]
    pub name: Option<Option<String>>,
    #[serde(
        default,
        deserialize_with = "deserialize_present",
        skip_serializing_if = "Option::is_none"
    )]
    pub field_of_study: Option<Option<String>>,
}

impl ResearcherUpdate {
    /// Check every assigned field.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` for the first field assigned null or `""`.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(name) = &self.name {
            require_text(Field::Name, name.as_deref())?;
        }
        if let Some(field_of_study) = &self.field_of_study {
            require_text(Field::FieldOfStudy, field_of_study.as_deref())?;
        }
        Ok(())
    }
}

pub struct ResearcherUpdateBuilder(ResearcherUpdate);

impl ResearcherUpdateBuilder {
    pub fn new() -> Self {
        Self(ResearcherUpdate::default())
    }

    pub fn name(mut self, val: Option<String>) -> Result<Self, ValidationError> {
        require_text(Field::Name, val.as_deref())?;
        self.0.name = Some(val);
        Ok(self)
    }

    pub fn field_of_study(mut self, val: Option<String>) -> Result<Self, ValidationError> {
        require_text(Field::FieldOfStudy, val.as_deref())?;
        self.0.field_of_study = Some(val);
        Ok(self)
    }

    pub fn build(self) -> ResearcherUpdate {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn setter_rejects_empty_name_at_assignment() {
        let err = ResearcherUpdateBuilder::new()
            .name(Some(String::new()))
            .err()
            .unwrap();
        assert_eq!(err, ValidationError::missing(Field::Name));
    }

    #[test]
    fn setter_rejects_null_field_of_study() {
        let result = ResearcherUpdateBuilder::new().field_of_study(None);
        assert!(result.is_err());
    }

    #[test]
    fn explicit_null_from_json_fails_validation() {
        let update: ResearcherUpdate = serde_json::from_str(r#"{"field_of_study": null}"#).unwrap();
        assert_eq!(update.field_of_study, Some(None));
        assert_eq!(update.validate().unwrap_err().field, Field::FieldOfStudy);
    }

    #[test]
    fn absent_fields_are_untouched_and_valid() {
        let update: ResearcherUpdate = serde_json::from_str("{}").unwrap();
        assert_eq!(update, ResearcherUpdate::default());
        assert!(update.validate().is_ok());
    }

    #[test]
    fn serializes_changed_fields_only() {
        let update = ResearcherUpdateBuilder::new()
            .name(Some("Ada".into()))
            .unwrap()
            .build();
        let json = serde_json::to_value(&update).unwrap();
        assert_eq!(json, serde_json::json!({"name": "Ada"}));
    }
}
