use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A planet or other body that missions target.
///
/// No field is validated: empty names and negative distances are stored as given.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CelestialBody {
    pub id: i64,
    pub name: Option<String>,
    /// Opaque numeric attribute; no unit is implied.
    pub distance_from_earth: Option<i64>,
    pub nearest_star: Option<String>,
}
