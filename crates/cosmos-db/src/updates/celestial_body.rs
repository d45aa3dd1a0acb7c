//! Celestial body update builder.

use cosmos_core::inputs::deserialize_present;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CelestialBodyUpdate {
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
    pub distance_from_earth: Option<Option<i64>>,
    #[serde(
        default,
        deserialize_with = "deserialize_present",
        skip_serializing_if = "Option::is_none"
    )]
    pub nearest_star: Option<Option<String>>,
}

pub struct CelestialBodyUpdateBuilder(CelestialBodyUpdate);

impl CelestialBodyUpdateBuilder {
    pub fn new() -> Self {
        Self(CelestialBodyUpdate::default())
    }

    pub fn name(mut self, val: Option<String>) -> Self {
        self.0.name = Some(val);
        self
    }

    pub fn distance_from_earth(mut self, val: Option<i64>) -> Self {
        self.0.distance_from_earth = Some(val);
        self
    }

    pub fn nearest_star(mut self, val: Option<String>) -> Self {
        self.0.nearest_star = Some(val);
        self
    }

    pub fn build(self) -> CelestialBodyUpdate {
        self.0
    }
}
