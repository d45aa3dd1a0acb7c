//! # cosmos-core
//!
//! Core types, validators, and serialization views for Cosmos.
//!
//! This crate provides the foundational types shared across all Cosmos crates:
//! - Entity structs for celestial bodies, researchers, and missions
//! - Field-map inputs for inserts, with validating conversions
//! - Field validators and the `ValidationError` they raise
//! - Acyclic serialization views for external output

pub mod entities;
pub mod inputs;
pub mod validation;
pub mod views;
