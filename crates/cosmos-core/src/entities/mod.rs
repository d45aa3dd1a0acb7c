//! Entity structs for all Cosmos domain objects.
//!
//! Each entity maps to a table in the libSQL database and holds only its own
//! columns. Relationship collections are assembled by the views in
//! [`crate::views`], never stored on the entity.

mod celestial_body;
mod mission;
mod researcher;

pub use celestial_body::CelestialBody;
pub use mission::Mission;
pub use researcher::Researcher;
