//! Update builder types for entity mutations.
//!
//! Each update struct has `Option<Option<T>>` fields: the outer `None` leaves a
//! column untouched, `Some(None)` assigns NULL. Only `Some` fields generate SET
//! clauses in the dynamic UPDATE SQL. Deserializing from JSON keeps an absent
//! key distinct from an explicit `null`.
//!
//! Builders for validated entities check each value as it is assigned and
//! return the `ValidationError` from the setter itself.

pub mod celestial_body;
pub mod mission;
pub mod researcher;
