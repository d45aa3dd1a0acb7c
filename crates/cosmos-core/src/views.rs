//! Acyclic serialization views.
//!
//! Each view fixes the direction of traversal at the type level:
//!
//! ```text
//! CelestialBodyView → BodyMission       → Researcher
//! ResearcherView    → ResearcherMission → CelestialBody
//! MissionView       → CelestialBody + Researcher
//! ```
//!
//! Entities never carry relationship fields, so an embedded `CelestialBody` or
//! `Researcher` cannot expand back into its missions.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{CelestialBody, Mission, Researcher};

/// A mission as seen from its celestial body: no `celestial_body` field.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct BodyMission {
    pub id: i64,
    pub name: String,
    pub celestial_body_id: i64,
    pub researcher_id: i64,
    pub researcher: Researcher,
}

impl BodyMission {
    #[must_use]
    pub fn new(mission: Mission, researcher: Researcher) -> Self {
        Self {
            id: mission.id,
            name: mission.name,
            celestial_body_id: mission.celestial_body_id,
            researcher_id: mission.researcher_id,
            researcher,
        }
    }
}

/// A celestial body with its missions expanded one level.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CelestialBodyView {
    pub id: i64,
    pub name: Option<String>,
    pub distance_from_earth: Option<i64>,
    pub nearest_star: Option<String>,
    pub missions: Vec<BodyMission>,
}

impl CelestialBodyView {
    #[must_use]
    pub fn new(body: CelestialBody, missions: Vec<BodyMission>) -> Self {
        Self {
            id: body.id,
            name: body.name,
            distance_from_earth: body.distance_from_earth,
            nearest_star: body.nearest_star,
            missions,
        }
    }
}

/// A mission as seen from its researcher: no `researcher` field.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ResearcherMission {
    pub id: i64,
    pub name: String,
    pub celestial_body_id: i64,
    pub researcher_id: i64,
    pub celestial_body: CelestialBody,
}

impl ResearcherMission {
    #[must_use]
    pub fn new(mission: Mission, celestial_body: CelestialBody) -> Self {
        Self {
            id: mission.id,
            name: mission.name,
            celestial_body_id: mission.celestial_body_id,
            researcher_id: mission.researcher_id,
            celestial_body,
        }
    }
}

/// A researcher with its missions expanded one level.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ResearcherView {
    pub id: i64,
    pub name: String,
    pub field_of_study: String,
    pub missions: Vec<ResearcherMission>,
}

impl ResearcherView {
    #[must_use]
    pub fn new(researcher: Researcher, missions: Vec<ResearcherMission>) -> Self {
        Self {
            id: researcher.id,
            name: researcher.name,
            field_of_study: researcher.field_of_study,
            missions,
        }
    }
}

/// A mission with both parents resolved, each rendered without `missions`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct MissionView {
    pub id: i64,
    pub name: String,
    pub celestial_body_id: i64,
    pub researcher_id: i64,
    pub celestial_body: CelestialBody,
    pub researcher: Researcher,
}

impl MissionView {
    #[must_use]
    pub fn new(mission: Mission, celestial_body: CelestialBody, researcher: Researcher) -> Self {
        Self {
            id: mission.id,
            name: mission.name,
            celestial_body_id: mission.celestial_body_id,
            researcher_id: mission.researcher_id,
            celestial_body,
            researcher,
        }
    }
}
