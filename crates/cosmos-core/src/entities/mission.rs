use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Join record linking one researcher to one celestial body.
///
/// Removed automatically when either parent is deleted.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Mission {
    pub id: i64,
    pub name: String,
    pub celestial_body_id: i64,
    pub researcher_id: i64,
}
