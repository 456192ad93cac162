//! Domain models
//!
//! This module contains all domain models representing fleet entities
//! and concepts. Starships and starbases carry their own behaviour; the
//! galaxy owns every entity and resolves the ids that tie them together.

pub mod constants;
pub mod sector;
pub mod player;
pub mod entity;
pub mod fleet;
pub mod starship;
pub mod starbase;
pub mod galaxy;
