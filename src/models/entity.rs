//! Common entity state and the shared damage algorithm.
//!
//! Every entity variant (starship, starbase) embeds an [`EntityCore`] and
//! implements the [`Entity`] trait over it. Variant-specific behaviour
//! (defence formulas, movement, docking) lives on the variant structs.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use log::{debug, info};

use super::constants::MIN_APPLIED_DAMAGE;
use super::fleet::FleetId;
use super::sector::Sector;

/// Identity of a single entity, unique across variants for the lifetime of
/// the allocator that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(u64);

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Hands out entity ids, monotonically and without reuse.
///
/// The rest of the model is single-threaded, but ids must stay unique even
/// when an embedding application constructs entities from several threads,
/// so the counter is atomic. Relaxed ordering suffices: fetch-add already
/// guarantees each caller a distinct value.
#[derive(Debug, Default)]
pub struct IdAllocator {
    next: AtomicU64,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn allocate(&self) -> EntityId {
        EntityId(self.next.fetch_add(1, Ordering::Relaxed))
    }
}

/// The entity variants the simulation knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Starship,
    Starbase,
}

impl EntityKind {
    pub fn name(&self) -> &'static str {
        match self {
            EntityKind::Starship => "Starship",
            EntityKind::Starbase => "Starbase",
        }
    }
}

/// State every entity variant carries: identity, hull, position, allegiance.
///
/// `health` stays within `[0, max_health]` at all times. `destroyed` latches
/// to true the moment health reaches exactly 0 and never clears again; every
/// later action against the entity degenerates into a logged no-op.
#[derive(Debug, Clone)]
pub struct EntityCore {
    id: EntityId,
    kind: EntityKind,
    max_health: f64,
    max_defence_strength: f64,
    health: f64,
    sector: Sector,
    fleet: Option<FleetId>,
    destroyed: bool,
}

impl EntityCore {
    /// New core at full health, unassigned to any fleet.
    pub fn new(
        id: EntityId,
        kind: EntityKind,
        max_health: f64,
        max_defence_strength: f64,
        sector: Sector,
    ) -> Self {
        EntityCore {
            id,
            kind,
            max_health,
            max_defence_strength,
            health: max_health,
            sector,
            fleet: None,
            destroyed: false,
        }
    }

    pub fn id(&self) -> EntityId {
        self.id
    }

    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    pub fn max_health(&self) -> f64 {
        self.max_health
    }

    pub fn max_defence_strength(&self) -> f64 {
        self.max_defence_strength
    }

    pub fn health(&self) -> f64 {
        self.health
    }

    pub fn sector(&self) -> Sector {
        self.sector
    }

    pub(crate) fn set_sector(&mut self, sector: Sector) {
        self.sector = sector;
    }

    pub fn fleet(&self) -> Option<FleetId> {
        self.fleet
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    /// Set health, clamped to `[0, max_health]`. Reaching exactly 0 marks
    /// the entity destroyed; once destroyed, health is frozen at 0 and
    /// further changes are ignored.
    pub fn set_health(&mut self, new_health: f64) {
        if self.destroyed {
            debug!("{} has been destroyed; health unchanged", self);
            return;
        }
        self.health = new_health.clamp(0.0, self.max_health);
        if self.health == 0.0 {
            self.destroyed = true;
            info!("{} has been destroyed", self);
        }
    }

    /// Record fleet membership. An entity joins a fleet at most once; a
    /// second assignment is refused.
    pub fn assign_fleet(&mut self, fleet: FleetId) -> bool {
        if self.fleet.is_some() {
            debug!("{} already belongs to a fleet; cannot reassign", self);
            return false;
        }
        self.fleet = Some(fleet);
        true
    }
}

impl fmt::Display for EntityCore {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.fleet {
            Some(fleet) => write!(f, "{} {} ({})", self.kind.name(), self.id, fleet),
            None => write!(f, "{} {} (no fleet)", self.kind.name(), self.id),
        }
    }
}

/// Capability set common to all entity variants.
///
/// Variants implement `core`/`core_mut`; everything else is provided,
/// including the damage application every variant shares.
pub trait Entity {
    fn core(&self) -> &EntityCore;
    fn core_mut(&mut self) -> &mut EntityCore;

    fn id(&self) -> EntityId {
        self.core().id()
    }

    fn kind(&self) -> EntityKind {
        self.core().kind()
    }

    fn max_health(&self) -> f64 {
        self.core().max_health()
    }

    fn max_defence_strength(&self) -> f64 {
        self.core().max_defence_strength()
    }

    fn health(&self) -> f64 {
        self.core().health()
    }

    fn sector(&self) -> Sector {
        self.core().sector()
    }

    fn fleet(&self) -> Option<FleetId> {
        self.core().fleet()
    }

    fn is_destroyed(&self) -> bool {
        self.core().is_destroyed()
    }

    fn set_health(&mut self, new_health: f64) {
        self.core_mut().set_health(new_health);
    }

    fn assign_fleet(&mut self, fleet: FleetId) -> bool {
        self.core_mut().assign_fleet(fleet)
    }

    /// Apply incoming damage against the given defence strength.
    ///
    /// At least [`MIN_APPLIED_DAMAGE`] always gets through, and the applied
    /// amount never exceeds remaining health, so health lands exactly on 0
    /// rather than going negative. Destroyed entities take nothing more.
    /// Returns the damage actually applied.
    fn apply_damage(&mut self, damage: f64, defence_strength: f64) -> f64 {
        if self.is_destroyed() {
            debug!("{} has been destroyed; damage has no effect", self.core());
            return 0.0;
        }
        let applied = (damage - defence_strength)
            .max(MIN_APPLIED_DAMAGE)
            .clamp(0.0, self.health());
        let remaining = self.health() - applied;
        info!(
            "{} takes {:.1} damage, {:.1} applied; health {:.1}",
            self.core(),
            damage,
            applied,
            remaining
        );
        self.core_mut().set_health(remaining);
        applied
    }
}
