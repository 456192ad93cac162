//! The starship variant: the only entity that moves or attacks.
//!
//! A starship is a small state machine over `{docked, repairing}` on top of
//! the shared destroyed latch. Docking gates movement and attacking; a
//! docked, repairing ship spends those calls on repair progress instead.

use std::fmt;

use log::{debug, info};

use super::constants::{
    STARSHIP_MAX_ATTACK_STRENGTH, STARSHIP_MAX_CREW, STARSHIP_MAX_DEFENCE_STRENGTH,
    STARSHIP_MAX_HEALTH,
};
use super::entity::{Entity, EntityCore, EntityKind, IdAllocator};
use super::fleet::fleet_mates;
use super::sector::Sector;
use super::starbase::Starbase;

/// A starship. New ships start at full health with a full crew, undocked.
#[derive(Debug, Clone)]
pub struct Starship {
    core: EntityCore,
    crew: i32,
    docked: bool,
    repairing: bool,
}

impl Starship {
    pub fn new(ids: &IdAllocator, sector: Sector) -> Self {
        Starship {
            core: EntityCore::new(
                ids.allocate(),
                EntityKind::Starship,
                STARSHIP_MAX_HEALTH,
                STARSHIP_MAX_DEFENCE_STRENGTH,
                sector,
            ),
            crew: STARSHIP_MAX_CREW,
            docked: false,
            repairing: false,
        }
    }

    pub fn crew(&self) -> i32 {
        self.crew
    }

    pub fn is_docked(&self) -> bool {
        self.docked
    }

    pub fn is_repairing(&self) -> bool {
        self.repairing
    }

    /// Current defence strength, blending hull and crew condition into one
    /// ratio. Recomputed on every call.
    pub fn defence_strength(&self) -> f64 {
        self.max_defence_strength()
            * ((self.health() + f64::from(self.crew))
                / (self.max_health() + f64::from(STARSHIP_MAX_CREW)))
    }

    /// Current attack strength, scaled purely by hull condition.
    pub fn attack_strength(&self) -> f64 {
        STARSHIP_MAX_ATTACK_STRENGTH * (self.health() / self.max_health())
    }

    /// Move the ship to a new sector. There is no distance or fuel model;
    /// an undocked, live ship moves unconditionally. A docked ship refuses,
    /// and a docked, repairing ship spends the call on a repair tick.
    pub fn move_to_sector(&mut self, new_sector: Sector) {
        if self.is_destroyed() {
            debug!("{} has been destroyed; cannot move", self.core());
            return;
        }
        if self.docked {
            if self.repairing {
                debug!(
                    "{} is repairing; repair progresses instead of moving",
                    self.core()
                );
                self.repair();
            } else {
                debug!("{} is docked; cannot move", self.core());
            }
            return;
        }
        self.core.set_sector(new_sector);
        info!("{} moved to {}", self.core(), new_sector);
    }

    /// Dock to a starbase. The base decides acceptance and records
    /// membership; only then does the ship commit its own flag, so a
    /// rejected dock leaves both sides untouched.
    pub fn dock_to_starbase(&mut self, base: &mut Starbase) -> bool {
        if self.is_destroyed() {
            debug!("{} has been destroyed; cannot dock", self.core());
            return false;
        }
        if base.dock_starship(self) {
            self.docked = true;
            true
        } else {
            false
        }
    }

    /// Undock from a starbase; the symmetric release. The base confirms
    /// removal from its list before the ship clears its flag.
    pub fn undock_from_starbase(&mut self, base: &mut Starbase) -> bool {
        if self.is_destroyed() {
            debug!("{} has been destroyed; cannot undock", self.core());
            return false;
        }
        if base.undock_starship(self) {
            self.docked = false;
            true
        } else {
            false
        }
    }

    /// One repair tick. Only a live, docked ship repairs. Health advances
    /// one quartile of maximum per call: below 25% to 25%, below 50% to
    /// 50%, below 75% to 75%, and otherwise to full. The final step also
    /// ends the repairing state.
    pub fn repair(&mut self) {
        if self.is_destroyed() {
            debug!("{} has been destroyed; cannot repair", self.core());
            return;
        }
        if !self.docked {
            debug!("{} is not docked; cannot repair", self.core());
            return;
        }
        let max = self.max_health();
        if self.health() < max {
            self.repairing = true;
        }
        if self.health() < 0.25 * max {
            self.set_health(0.25 * max);
        } else if self.health() < 0.50 * max {
            self.set_health(0.50 * max);
        } else if self.health() < 0.75 * max {
            self.set_health(0.75 * max);
        } else {
            self.set_health(max);
            self.repairing = false;
        }
        info!("{} repaired to {:.1} health", self.core(), self.health());
    }

    /// Run the pre-attack protocol against a target's state. Returns the
    /// damage to deliver when the attack may proceed, or `None` when it is
    /// refused: the ship is destroyed, docked (a docked, repairing ship
    /// spends the call on a repair tick), out of the target's sector, or a
    /// fleet-mate of the target.
    pub fn prepare_attack(&mut self, target: &EntityCore) -> Option<f64> {
        if self.is_destroyed() {
            debug!("{} has been destroyed; cannot attack", self.core());
            return None;
        }
        if self.docked {
            if self.repairing {
                debug!(
                    "{} is repairing; repair progresses instead of attacking",
                    self.core()
                );
                self.repair();
            } else {
                debug!("{} is docked; cannot attack", self.core());
            }
            return None;
        }
        if target.sector() != self.sector() {
            debug!(
                "{} cannot attack {}; not in the same sector",
                self.core(),
                target
            );
            return None;
        }
        if fleet_mates(self.fleet(), target.fleet()) {
            debug!("{} cannot attack {}; same fleet", self.core(), target);
            return None;
        }
        let strength = self.attack_strength();
        info!(
            "{} attacks {} with strength {:.1}",
            self.core(),
            target,
            strength
        );
        Some(strength)
    }

    /// Attack another starship: full strength on success, nothing on
    /// refusal. Starbase targets go through the registry, which resolves
    /// the base's docked ships for its defence.
    pub fn attack(&mut self, target: &mut Starship) {
        if let Some(damage) = self.prepare_attack(target.core()) {
            target.take_damage(damage);
        }
    }

    /// Take incoming damage: the shared hull application first, then crew
    /// loss proportional to the damage actually applied, both computed from
    /// the pre-damage figures.
    pub fn take_damage(&mut self, damage: f64) {
        if self.is_destroyed() {
            debug!("{} has been destroyed; damage has no effect", self.core());
            return;
        }
        let defence = self.defence_strength();
        let applied = self.apply_damage(damage, defence);
        let lost = self.calculate_crew_lost(applied);
        self.set_crew(self.crew - lost);
    }

    /// Crew lost to a hit, proportional to the applied damage (not the raw
    /// incoming damage), rounded to the nearest whole crew member.
    pub fn calculate_crew_lost(&self, damage: f64) -> i32 {
        (damage / self.max_health() * f64::from(self.crew)).round() as i32
    }

    fn set_crew(&mut self, new_crew: i32) {
        // A skeleton crew of 1 always remains; only hull destruction ends a ship.
        self.crew = new_crew.max(1);
    }
}

impl Entity for Starship {
    fn core(&self) -> &EntityCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut EntityCore {
        &mut self.core
    }
}

impl fmt::Display for Starship {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.core)
    }
}
