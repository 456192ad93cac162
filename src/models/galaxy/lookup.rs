use crate::models::entity::{Entity, EntityId};
use crate::models::starbase::Starbase;
use crate::models::starship::Starship;

/// Position of a starship in the registry, if the id names one.
pub fn starship_index(starships: &[Starship], id: EntityId) -> Option<usize> {
    starships.iter().position(|starship| starship.id() == id)
}

/// Position of a starbase in the registry, if the id names one.
pub fn starbase_index(starbases: &[Starbase], id: EntityId) -> Option<usize> {
    starbases.iter().position(|starbase| starbase.id() == id)
}

/// Mutable references to two distinct starships at once. The slice is
/// split around the higher index so both borrows are disjoint. `None`
/// when either id is unknown or both name the same ship.
pub fn starship_pair_mut(
    starships: &mut [Starship],
    first: EntityId,
    second: EntityId,
) -> Option<(&mut Starship, &mut Starship)> {
    let a = starship_index(starships, first)?;
    let b = starship_index(starships, second)?;
    if a == b {
        return None;
    }
    if a < b {
        let (left, right) = starships.split_at_mut(b);
        Some((&mut left[a], &mut right[0]))
    } else {
        let (left, right) = starships.split_at_mut(a);
        Some((&mut right[0], &mut left[b]))
    }
}
