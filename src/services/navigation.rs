//! Navigation orders
//!
//! Movement is instantaneous and unconstrained by distance; the only
//! things that hold a ship in place are docking and destruction, and the
//! ship itself enforces both.

use log::debug;

use crate::models::entity::EntityId;
use crate::models::fleet::FleetId;
use crate::models::galaxy::Galaxy;
use crate::models::sector::Sector;

/// Order one starship to a sector.
pub fn move_ship(galaxy: &mut Galaxy, starship_id: EntityId, sector: Sector) {
    match galaxy.starship_mut(starship_id) {
        Some(starship) => starship.move_to_sector(sector),
        None => debug!("No starship {} in the galaxy; cannot move it", starship_id),
    }
}

/// Order every starship of a fleet to the same sector, in roster order.
/// Starbases stay where they were built.
pub fn move_all(galaxy: &mut Galaxy, fleet_id: FleetId, sector: Sector) {
    debug!("Moving all starships of {} to {}", fleet_id, sector);
    let starships = galaxy.fleet(fleet_id).starships().to_vec();
    for starship_id in starships {
        move_ship(galaxy, starship_id, sector);
    }
}
