//! Mission update builder.

use cosmos_core::inputs::deserialize_present;
use cosmos_core::validation::{Field, ValidationError, require_id, require_text};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MissionUpdate {
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
    pub celestial_body_id: Option<Option<i64>>,
    #[serde(
        default,
        deserialize_with = "deserialize_present",
        skip_serializing_if = "Option::is_none"
    )]
    pub researcher_id: Option<Option<i64>>,
}

impl MissionUpdate {
    /// Check every assigned field.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` for the first rejected field.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(name) = &self.name {
            require_text(Field::Name, name.as_deref())?;
        }
        if let Some(id) = self.celestial_body_id {
            require_id(Field::CelestialBodyId, id)?;
        }
        if let Some(id) = self.researcher_id {
            require_id(Field::ResearcherId, id)?;
        }
        Ok(())
    }
}

pub struct MissionUpdateBuilder(MissionUpdate);

impl MissionUpdateBuilder {
    pub fn new() -> Self {
        Self(MissionUpdate::default())
    }

    pub fn name(mut self, val: Option<String>) -> Result<Self, ValidationError> {
        require_text(Field::Name, val.as_deref())?;
        self.0.name = Some(val);
        Ok(self)
    }

    pub fn celestial_body_id(mut self, val: Option<i64>) -> Result<Self, ValidationError> {
        require_id(Field::CelestialBodyId, val)?;
        self.0.celestial_body_id = Some(val);
        Ok(self)
    }

    pub fn researcher_id(mut self, val: Option<i64>) -> Result<Self, ValidationError> {
        require_id(Field::ResearcherId, val)?;
        self.0.researcher_id = Some(val);
        Ok(self)
    }

    pub fn build(self) -> MissionUpdate {
        self.0
    }
}
