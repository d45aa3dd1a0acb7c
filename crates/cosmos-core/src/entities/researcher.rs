use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A scientist who flies missions.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Researcher {
    pub id: i64,
    /// Never empty.
    pub name: String,
    /// Never empty.
    pub field_of_study: String,
}
