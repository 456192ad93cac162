//! Combat orders
//!
//! An attack is always delivered by a starship. The attacker runs its
//! own pre-attack protocol; this layer resolves the target's kind and,
//! for a starbase, gathers the docked ships its defence depends on.

use log::debug;

use crate::models::entity::{Entity, EntityId};
use crate::models::fleet::FleetId;
use crate::models::galaxy::Galaxy;

/// Order one starship to attack another entity, of either kind.
pub fn attack(galaxy: &mut Galaxy, attacker_id: EntityId, target_id: EntityId) {
    if attacker_id == target_id {
        debug!("Entity {} cannot attack itself", attacker_id);
        return;
    }
    if galaxy.starship(target_id).is_some() {
        attack_starship(galaxy, attacker_id, target_id);
    } else if galaxy.starbase(target_id).is_some() {
        attack_starbase(galaxy, attacker_id, target_id);
    } else {
        debug!("No entity {} in the galaxy; cannot attack it", target_id);
    }
}

/// Order every starship of a fleet against one target, in roster order.
/// Each ship runs its own protocol, so refusals are per ship.
pub fn attack_with_all(galaxy: &mut Galaxy, fleet_id: FleetId, target_id: EntityId) {
    debug!("All starships of {} engage {}", fleet_id, target_id);
    let attackers = galaxy.fleet(fleet_id).starships().to_vec();
    for attacker_id in attackers {
        attack(galaxy, attacker_id, target_id);
    }
}

fn attack_starship(galaxy: &mut Galaxy, attacker_id: EntityId, target_id: EntityId) {
    match galaxy.starship_pair_mut(attacker_id, target_id) {
        Some((attacker, target)) => attacker.attack(target),
        None => debug!(
            "No starship {} in the galaxy; cannot attack {}",
            attacker_id, target_id
        ),
    }
}

/// The two-borrow dance for a starbase target: gate and aim against a
/// snapshot of the base's core, then deliver against the base together
/// with its docked ships.
fn attack_starbase(galaxy: &mut Galaxy, attacker_id: EntityId, target_id: EntityId) {
    let Some(target_core) = galaxy.starbase(target_id).map(|base| base.core().clone()) else {
        return;
    };
    let damage = match galaxy.starship_mut(attacker_id) {
        Some(attacker) => attacker.prepare_attack(&target_core),
        None => {
            debug!(
                "No starship {} in the galaxy; cannot attack {}",
                attacker_id, target_id
            );
            return;
        }
    };
    if let Some(damage) = damage {
        if let Some((starbase, docked)) = galaxy.starbase_and_docked_mut(target_id) {
            starbase.take_damage(damage, &docked);
        }
    }
}
