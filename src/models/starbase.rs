//! The starbase variant: a stationary dock and repair yard.
//!
//! A starbase never moves or attacks. Its job is to accept fleet-mate
//! starships for docking and to fold their defence strength into its own.
//! The base records membership as ids; callers resolve those ids to ships
//! through the registry when a defence figure is needed.

use std::fmt;

use log::{debug, info};

use super::constants::{STARBASE_MAX_DEFENCE_STRENGTH, STARBASE_MAX_HEALTH};
use super::entity::{Entity, EntityCore, EntityId, EntityKind, IdAllocator};
use super::fleet::fleet_mates;
use super::sector::Sector;
use super::starship::Starship;

/// A starbase. New bases start at full health with no docked ships.
#[derive(Debug, Clone)]
pub struct Starbase {
    core: EntityCore,
    docked_starships: Vec<EntityId>,
}

impl Starbase {
    pub fn new(ids: &IdAllocator, sector: Sector) -> Self {
        Starbase {
            core: EntityCore::new(
                ids.allocate(),
                EntityKind::Starbase,
                STARBASE_MAX_HEALTH,
                STARBASE_MAX_DEFENCE_STRENGTH,
                sector,
            ),
            docked_starships: Vec::new(),
        }
    }

    /// Ids of the ships currently docked here, in docking order.
    pub fn docked_starships(&self) -> &[EntityId] {
        &self.docked_starships
    }

    /// Current defence strength: own hull contribution plus a bonus from
    /// the docked ships. `docked` holds the resolved ships named in
    /// [`docked_starships`](Self::docked_starships); destroyed ships count
    /// for neither term.
    pub fn defence_strength(&self, docked: &[&Starship]) -> f64 {
        let docked_strength = Self::docked_ships_strength(docked);
        let docked_count = docked.iter().filter(|ship| !ship.is_destroyed()).count();
        let defence_strength = self.max_defence_strength() * (self.health() / self.max_health())
            + docked_strength * (docked_count as f64 / self.max_defence_strength());
        debug!("Defence strength of {} is {}", self, defence_strength);
        defence_strength
    }

    /// Combined defence strength of the docked ships that are still alive.
    pub fn docked_ships_strength(docked: &[&Starship]) -> f64 {
        docked
            .iter()
            .filter(|ship| !ship.is_destroyed())
            .map(|ship| ship.defence_strength())
            .sum()
    }

    /// Accept a fleet-mate starship for docking. The base only records
    /// membership; the ship commits its own docked flag once accepted.
    pub fn dock_starship(&mut self, starship: &Starship) -> bool {
        if self.is_destroyed() {
            debug!("{} has been destroyed; cannot dock starships", self.core());
            return false;
        }
        if !fleet_mates(starship.fleet(), self.fleet()) {
            debug!("Cannot dock {} to {}; not in the same fleet", starship, self);
            return false;
        }
        if starship.is_destroyed() {
            debug!("{} has been destroyed; cannot dock to {}", starship, self);
            return false;
        }
        if starship.is_docked() || self.docked_starships.contains(&starship.id()) {
            debug!("Cannot dock {} to {}", starship, self);
            return false;
        }
        self.docked_starships.push(starship.id());
        info!("Docked {} to {}", starship, self);
        true
    }

    /// Release a docked fleet-mate. Succeeds only when the ship is both
    /// flagged docked and present in this base's list.
    pub fn undock_starship(&mut self, starship: &Starship) -> bool {
        if self.is_destroyed() {
            debug!(
                "{} has been destroyed; cannot undock starships",
                self.core()
            );
            return false;
        }
        if !fleet_mates(starship.fleet(), self.fleet()) {
            debug!(
                "Cannot undock {} from {}; not in the same fleet",
                starship, self
            );
            return false;
        }
        if starship.is_docked() {
            if let Some(position) = self
                .docked_starships
                .iter()
                .position(|&id| id == starship.id())
            {
                self.docked_starships.remove(position);
                info!("Undocked {} from {}", starship, self);
                return true;
            }
        }
        debug!("{} is not docked to {}; cannot undock", starship, self);
        false
    }

    /// Take incoming damage against the full defence strength, docked
    /// ships included. Crew is a starship concern; a base only loses hull.
    pub fn take_damage(&mut self, damage: f64, docked: &[&Starship]) {
        if self.is_destroyed() {
            debug!("{} has been destroyed; damage has no effect", self.core());
            return;
        }
        let defence = self.defence_strength(docked);
        self.apply_damage(damage, defence);
    }
}

impl Entity for Starbase {
    fn core(&self) -> &EntityCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut EntityCore {
        &mut self.core
    }
}

impl fmt::Display for Starbase {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.core)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fleet::FleetId;

    const EPSILON: f64 = 1e-9;

    fn start_sector() -> Sector {
        Sector::new(0, 0)
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < EPSILON,
            "expected {expected}, got {actual}"
        );
    }

    fn base_with_docked_ships(count: usize) -> (IdAllocator, Starbase, Vec<Starship>) {
        let ids = IdAllocator::new();
        let fleet = FleetId::from_index(0);
        let mut base = Starbase::new(&ids, start_sector());
        base.assign_fleet(fleet);

        let mut ships = Vec::new();
        for _ in 0..count {
            let mut ship = Starship::new(&ids, start_sector());
            ship.assign_fleet(fleet);
            assert!(ship.dock_to_starbase(&mut base));
            ships.push(ship);
        }
        (ids, base, ships)
    }

    #[test]
    fn docked_ships_strength_sums_live_ships() {
        let (_ids, _base, ships) = base_with_docked_ships(3);
        let docked: Vec<&Starship> = ships.iter().collect();
        assert_close(Starbase::docked_ships_strength(&docked), 30.0);
    }

    #[test]
    fn defence_strength_includes_docked_bonus() {
        let (_ids, base, ships) = base_with_docked_ships(3);
        let docked: Vec<&Starship> = ships.iter().collect();

        // 20 * (500/500) + 30 * (3/20) = 24.5.
        assert_close(base.defence_strength(&docked), 24.5);
    }

    #[test]
    fn defence_strength_without_docked_ships_is_hull_only() {
        let (_ids, base, _ships) = base_with_docked_ships(0);
        assert_close(base.defence_strength(&[]), 20.0);
    }

    #[test]
    fn destroyed_docked_ships_count_for_neither_term() {
        let (_ids, base, mut ships) = base_with_docked_ships(3);
        ships[1].set_health(0.0);
        let docked: Vec<&Starship> = ships.iter().collect();

        // Two live ships at strength 10: 20 + 20 * (2/20) = 22.
        assert_close(base.defence_strength(&docked), 22.0);
    }

    #[test]
    fn dock_rejects_other_fleets_and_destroyed_ships() {
        let ids = IdAllocator::new();
        let mut base = Starbase::new(&ids, start_sector());
        base.assign_fleet(FleetId::from_index(0));

        let mut stranger = Starship::new(&ids, start_sector());
        stranger.assign_fleet(FleetId::from_index(1));
        assert!(!base.dock_starship(&stranger));

        let mut wreck = Starship::new(&ids, start_sector());
        wreck.assign_fleet(FleetId::from_index(0));
        wreck.set_health(0.0);
        assert!(!base.dock_starship(&wreck));

        assert!(base.docked_starships().is_empty());
    }

    #[test]
    fn destroyed_base_refuses_docking_traffic() {
        let ids = IdAllocator::new();
        let fleet = FleetId::from_index(0);
        let mut base = Starbase::new(&ids, start_sector());
        base.assign_fleet(fleet);
        let mut ship = Starship::new(&ids, start_sector());
        ship.assign_fleet(fleet);

        base.set_health(0.0);
        assert!(!ship.dock_to_starbase(&mut base));
        assert!(!ship.is_docked());
    }

    #[test]
    fn undock_fails_for_a_ship_docked_elsewhere() {
        let ids = IdAllocator::new();
        let fleet = FleetId::from_index(0);
        let mut home = Starbase::new(&ids, start_sector());
        let mut other = Starbase::new(&ids, start_sector());
        home.assign_fleet(fleet);
        other.assign_fleet(fleet);

        let mut ship = Starship::new(&ids, start_sector());
        ship.assign_fleet(fleet);
        assert!(ship.dock_to_starbase(&mut home));

        // Docked flag is set but the other base never admitted this ship.
        assert!(!ship.undock_from_starbase(&mut other));
        assert!(ship.is_docked());
        assert_eq!(home.docked_starships(), [ship.id()]);
    }

    #[test]
    fn undock_fails_for_an_undocked_ship() {
        let ids = IdAllocator::new();
        let fleet = FleetId::from_index(0);
        let mut base = Starbase::new(&ids, start_sector());
        base.assign_fleet(fleet);
        let mut ship = Starship::new(&ids, start_sector());
        ship.assign_fleet(fleet);

        assert!(!ship.undock_from_starbase(&mut base));
    }

    #[test]
    fn take_damage_uses_the_full_defence_strength() {
        let (_ids, mut base, _ships) = base_with_docked_ships(0);

        // Defence 20 against 30 incoming nets 10.
        base.take_damage(30.0, &[]);
        assert_close(base.health(), 490.0);
    }

    #[test]
    fn docked_ships_blunt_incoming_damage() {
        let (_ids, mut base, ships) = base_with_docked_ships(3);
        let docked: Vec<&Starship> = ships.iter().collect();

        // Defence 24.5 against 30 incoming nets max(5, 5.5) = 5.5.
        base.take_damage(30.0, &docked);
        assert_close(base.health(), 494.5);
    }
}
