//! Fleets: player-owned groupings of starbases and starships.
//!
//! A fleet holds ordered id lists, never the entities themselves; the
//! registry owns entity lifetime. Entities are never removed from a fleet
//! (destruction is a flag, not removal), so list positions are stable.

use std::fmt;

use super::entity::EntityId;
use super::player::Player;

/// Non-owning handle to a fleet in the registry's fleet table.
///
/// Fleet identity comparisons are comparisons of this handle; fleets are
/// never compared by value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FleetId(usize);

impl FleetId {
    pub(crate) fn from_index(index: usize) -> Self {
        FleetId(index)
    }

    pub(crate) fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for FleetId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "fleet {}", self.0)
    }
}

/// Two entities count as fleet-mates only when both carry a fleet assignment
/// and the assignments match. An unassigned entity is fleet-mates with
/// nothing: it can never dock, and the friendly-fire guard never protects
/// it.
pub fn fleet_mates(a: Option<FleetId>, b: Option<FleetId>) -> bool {
    matches!((a, b), (Some(x), Some(y)) if x == y)
}

/// A player's fleet: its starbases and starships, in the order they joined.
#[derive(Debug)]
pub struct Fleet {
    player: Player,
    starbases: Vec<EntityId>,
    starships: Vec<EntityId>,
}

impl Fleet {
    pub fn new(player: Player) -> Self {
        Fleet {
            player,
            starbases: Vec::new(),
            starships: Vec::new(),
        }
    }

    pub fn player(&self) -> Player {
        self.player
    }

    pub fn starbases(&self) -> &[EntityId] {
        &self.starbases
    }

    pub fn starships(&self) -> &[EntityId] {
        &self.starships
    }

    /// The i-th starbase to have joined, if the fleet has that many.
    pub fn starbase_at(&self, index: usize) -> Option<EntityId> {
        self.starbases.get(index).copied()
    }

    /// The i-th starship to have joined, if the fleet has that many.
    pub fn starship_at(&self, index: usize) -> Option<EntityId> {
        self.starships.get(index).copied()
    }

    pub(crate) fn add_starbase(&mut self, id: EntityId) {
        self.starbases.push(id);
    }

    pub(crate) fn add_starship(&mut self, id: EntityId) {
        self.starships.push(id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::entity::IdAllocator;

    #[test]
    fn indexed_accessors_return_none_out_of_range() {
        let ids = IdAllocator::new();
        let mut fleet = Fleet::new(Player::new(1));

        assert_eq!(fleet.starship_at(0), None);
        assert_eq!(fleet.starbase_at(0), None);

        let ship = ids.allocate();
        fleet.add_starship(ship);
        assert_eq!(fleet.starship_at(0), Some(ship));
        assert_eq!(fleet.starship_at(1), None);
        assert_eq!(fleet.starbase_at(0), None);
    }

    #[test]
    fn accessors_preserve_join_order() {
        let ids = IdAllocator::new();
        let mut fleet = Fleet::new(Player::new(2));
        let first = ids.allocate();
        let second = ids.allocate();

        fleet.add_starship(first);
        fleet.add_starship(second);
        assert_eq!(fleet.starship_at(0), Some(first));
        assert_eq!(fleet.starship_at(1), Some(second));
    }

    #[test]
    fn unassigned_entities_are_never_fleet_mates() {
        let a = FleetId::from_index(0);
        let b = FleetId::from_index(1);

        assert!(fleet_mates(Some(a), Some(a)));
        assert!(!fleet_mates(Some(a), Some(b)));
        assert!(!fleet_mates(Some(a), None));
        assert!(!fleet_mates(None, Some(b)));
        assert!(!fleet_mates(None, None));
    }
}
