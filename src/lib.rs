//! Armada
//!
//! A deterministic fleet combat simulation. Players hold fleets of
//! starships and starbases inside a shared galaxy; starships move
//! between sectors and attack enemy ships and bases, and docking to a
//! friendly starbase allows repairs. Every rule decision is logged as
//! it happens.
//!
//! # Modules
//!
//! - [`models`] - Domain models (Galaxy, Starship, Starbase, Fleet)
//! - [`services`] - Fleet command services (navigation, docking, combat)
//! - [`io`] - Output abstractions for testing
//! - [`ui`] - User interface and presentation logic
//!
//! # Example
//!
//! ```rust
//! use armada::models::galaxy::Galaxy;
//! use armada::models::player::Player;
//! use armada::models::sector::Sector;
//! use armada::services::combat;
//!
//! let mut galaxy = Galaxy::new();
//! let fleet = galaxy.new_fleet(Player::new(1));
//! let rival = galaxy.new_fleet(Player::new(2));
//! let attacker = galaxy.new_starship(Sector::new(0, 0));
//! let target = galaxy.new_starship(Sector::new(0, 0));
//! galaxy.add_entities(fleet, &[attacker]);
//! galaxy.add_entities(rival, &[target]);
//!
//! combat::attack(&mut galaxy, attacker, target);
//! assert_eq!(galaxy.health(target), Some(80.0));
//! ```

pub mod models;
pub mod services;
pub mod io;
pub mod ui;

// Re-export commonly used types
pub use models::entity::{Entity, EntityId};
pub use models::fleet::FleetId;
pub use models::galaxy::Galaxy;
