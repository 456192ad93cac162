//! Docking and repair orders
//!
//! Docking is a two-party agreement: the starbase vets the ship and
//! records it, then the ship commits its own docked state. The service
//! layer's job is only to bring both parties into scope at once.

use log::{debug, info};

use crate::models::entity::EntityId;
use crate::models::galaxy::Galaxy;

/// Dock a starship to a starbase. Returns whether the base accepted.
pub fn dock(galaxy: &mut Galaxy, starship_id: EntityId, starbase_id: EntityId) -> bool {
    match galaxy.starship_and_starbase_mut(starship_id, starbase_id) {
        Some((starship, starbase)) => starship.dock_to_starbase(starbase),
        None => {
            debug!(
                "No starship {} and starbase {} pair in the galaxy; cannot dock",
                starship_id, starbase_id
            );
            false
        }
    }
}

/// Undock a starship from a starbase. Returns whether the base released it.
pub fn undock(galaxy: &mut Galaxy, starship_id: EntityId, starbase_id: EntityId) -> bool {
    match galaxy.starship_and_starbase_mut(starship_id, starbase_id) {
        Some((starship, starbase)) => starship.undock_from_starbase(starbase),
        None => {
            debug!(
                "No starship {} and starbase {} pair in the galaxy; cannot undock",
                starship_id, starbase_id
            );
            false
        }
    }
}

/// Dock each listed starship to the starbase, in list order. Returns
/// how many the base accepted.
pub fn dock_starships_to(
    galaxy: &mut Galaxy,
    starbase_id: EntityId,
    starship_ids: &[EntityId],
) -> usize {
    let mut accepted = 0;
    for &starship_id in starship_ids {
        if dock(galaxy, starship_id, starbase_id) {
            accepted += 1;
        }
    }
    info!(
        "Docked {} of {} starships to starbase {}",
        accepted,
        starship_ids.len(),
        starbase_id
    );
    accepted
}

/// Run one repair tick on a starship.
pub fn repair_ship(galaxy: &mut Galaxy, starship_id: EntityId) {
    match galaxy.starship_mut(starship_id) {
        Some(starship) => starship.repair(),
        None => debug!("No starship {} in the galaxy; cannot repair it", starship_id),
    }
}
