//! The galaxy: owner and registry of every fleet, starship and starbase.
//!
//! Entities live in plain vectors and are addressed by [`EntityId`].
//! Fleets and starbases record ids rather than references, so any
//! operation that spans entities comes back through the registry to
//! resolve them; mutable access to more than one entity at a time goes
//! through the split-borrow helpers.

mod lookup;

use log::{debug, info};

use super::entity::{Entity, EntityId, IdAllocator};
use super::fleet::{Fleet, FleetId};
use super::player::Player;
use super::sector::Sector;
use super::starbase::Starbase;
use super::starship::Starship;

use lookup::{starbase_index, starship_index, starship_pair_mut};

/// Top-level simulation state container.
#[derive(Debug, Default)]
pub struct Galaxy {
    ids: IdAllocator,
    starships: Vec<Starship>,
    starbases: Vec<Starbase>,
    fleets: Vec<Fleet>,
}

impl Galaxy {
    pub fn new() -> Self {
        Galaxy::default()
    }

    /// Commission a new starship at the given sector and register it.
    pub fn new_starship(&mut self, sector: Sector) -> EntityId {
        let starship = Starship::new(&self.ids, sector);
        let id = starship.id();
        debug!("Commissioned {} at {}", starship, sector);
        self.starships.push(starship);
        id
    }

    /// Commission a new starbase at the given sector and register it.
    pub fn new_starbase(&mut self, sector: Sector) -> EntityId {
        let starbase = Starbase::new(&self.ids, sector);
        let id = starbase.id();
        debug!("Commissioned {} at {}", starbase, sector);
        self.starbases.push(starbase);
        id
    }

    /// Raise an empty fleet for a player. Fleets are never removed, so the
    /// returned id stays valid for the life of the galaxy.
    pub fn new_fleet(&mut self, player: Player) -> FleetId {
        let id = FleetId::from_index(self.fleets.len());
        self.fleets.push(Fleet::new(player));
        debug!("Raised {} for {}", id, player);
        id
    }

    /// Enrol registered entities into a fleet, in the order given. Returns
    /// how many joined; an unknown id or an entity already claimed by a
    /// fleet is skipped.
    pub fn add_entities(&mut self, fleet_id: FleetId, entity_ids: &[EntityId]) -> usize {
        let mut added = 0;
        for &id in entity_ids {
            if let Some(index) = starship_index(&self.starships, id) {
                if self.starships[index].assign_fleet(fleet_id) {
                    self.fleets[fleet_id.index()].add_starship(id);
                    info!("Added {} to {}", self.starships[index], fleet_id);
                    added += 1;
                }
            } else if let Some(index) = starbase_index(&self.starbases, id) {
                if self.starbases[index].assign_fleet(fleet_id) {
                    self.fleets[fleet_id.index()].add_starbase(id);
                    info!("Added {} to {}", self.starbases[index], fleet_id);
                    added += 1;
                }
            } else {
                debug!("No entity {} in the galaxy; cannot add to {}", id, fleet_id);
            }
        }
        added
    }

    pub fn starship(&self, id: EntityId) -> Option<&Starship> {
        starship_index(&self.starships, id).map(|index| &self.starships[index])
    }

    pub fn starship_mut(&mut self, id: EntityId) -> Option<&mut Starship> {
        starship_index(&self.starships, id).map(|index| &mut self.starships[index])
    }

    pub fn starbase(&self, id: EntityId) -> Option<&Starbase> {
        starbase_index(&self.starbases, id).map(|index| &self.starbases[index])
    }

    pub fn starbase_mut(&mut self, id: EntityId) -> Option<&mut Starbase> {
        starbase_index(&self.starbases, id).map(|index| &mut self.starbases[index])
    }

    /// Entity of either kind, by id.
    pub fn entity(&self, id: EntityId) -> Option<&dyn Entity> {
        if let Some(starship) = self.starship(id) {
            return Some(starship);
        }
        self.starbase(id).map(|starbase| starbase as &dyn Entity)
    }

    /// `FleetId`s originate from [`new_fleet`](Self::new_fleet) and fleets
    /// are never removed, so an id from this galaxy always resolves.
    pub fn fleet(&self, id: FleetId) -> &Fleet {
        &self.fleets[id.index()]
    }

    pub fn fleets(&self) -> &[Fleet] {
        &self.fleets
    }

    /// Resolve a starbase's docked ids to the ships themselves, in
    /// docking order. Destroyed ships are included; strength calculations
    /// filter them out themselves.
    pub fn docked_ships_of(&self, starbase: &Starbase) -> Vec<&Starship> {
        starbase
            .docked_starships()
            .iter()
            .filter_map(|&id| self.starship(id))
            .collect()
    }

    pub fn health(&self, id: EntityId) -> Option<f64> {
        self.entity(id).map(|entity| entity.health())
    }

    pub fn max_health(&self, id: EntityId) -> Option<f64> {
        self.entity(id).map(|entity| entity.max_health())
    }

    pub fn sector_of(&self, id: EntityId) -> Option<Sector> {
        self.entity(id).map(|entity| entity.sector())
    }

    pub fn fleet_of(&self, id: EntityId) -> Option<FleetId> {
        self.entity(id).and_then(|entity| entity.fleet())
    }

    /// Whether the id names a destroyed entity. An unknown id counts as
    /// destroyed.
    pub fn is_destroyed(&self, id: EntityId) -> bool {
        self.entity(id).map_or(true, |entity| entity.is_destroyed())
    }

    /// Current defence strength of either kind of entity. A starbase's
    /// figure includes its docked ships, resolved through the registry.
    pub fn defence_strength(&self, id: EntityId) -> Option<f64> {
        if let Some(starship) = self.starship(id) {
            return Some(starship.defence_strength());
        }
        self.starbase(id)
            .map(|starbase| starbase.defence_strength(&self.docked_ships_of(starbase)))
    }

    /// One-line description of an entity: kind, id and fleet.
    pub fn describe(&self, id: EntityId) -> Option<String> {
        self.entity(id).map(|entity| entity.core().to_string())
    }

    /// Mutable references to two distinct starships at once.
    pub(crate) fn starship_pair_mut(
        &mut self,
        first: EntityId,
        second: EntityId,
    ) -> Option<(&mut Starship, &mut Starship)> {
        starship_pair_mut(&mut self.starships, first, second)
    }

    /// Mutable references to a starship and a starbase at once.
    pub(crate) fn starship_and_starbase_mut(
        &mut self,
        starship_id: EntityId,
        starbase_id: EntityId,
    ) -> Option<(&mut Starship, &mut Starbase)> {
        let starship_index = starship_index(&self.starships, starship_id)?;
        let starbase_index = starbase_index(&self.starbases, starbase_id)?;
        Some((
            &mut self.starships[starship_index],
            &mut self.starbases[starbase_index],
        ))
    }

    /// A starbase mutably together with shared references to its docked
    /// ships, for damage taken against the full defence strength.
    pub(crate) fn starbase_and_docked_mut(
        &mut self,
        starbase_id: EntityId,
    ) -> Option<(&mut Starbase, Vec<&Starship>)> {
        let starships = &self.starships;
        let index = starbase_index(&self.starbases, starbase_id)?;
        let starbase = &mut self.starbases[index];
        let docked = starbase
            .docked_starships()
            .iter()
            .filter_map(|&id| starships.iter().find(|starship| starship.id() == id))
            .collect();
        Some((starbase, docked))
    }
}
