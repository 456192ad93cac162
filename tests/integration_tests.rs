use armada::models::galaxy::Galaxy;
use armada::models::player::Player;
use armada::models::sector::Sector;
use armada::services::{combat, docking, navigation};
use armada::{Entity, EntityId, FleetId};

const EPSILON: f64 = 1e-9;

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < EPSILON,
        "expected {expected}, got {actual}"
    );
}

/// One fleet of a starbase and three starships, base enrolled first.
fn assemble_fleet(
    galaxy: &mut Galaxy,
    player: Player,
    sector: Sector,
) -> (FleetId, EntityId, Vec<EntityId>) {
    let fleet = galaxy.new_fleet(player);
    let base = galaxy.new_starbase(sector);
    let ships: Vec<EntityId> = (0..3).map(|_| galaxy.new_starship(sector)).collect();

    let mut members = vec![base];
    members.extend(&ships);
    assert_eq!(galaxy.add_entities(fleet, &members), 4);
    (fleet, base, ships)
}

#[test]
fn fleet_assembly_registers_every_entity() {
    let mut galaxy = Galaxy::new();
    let (fleet, base, ships) = assemble_fleet(&mut galaxy, Player::new(1), Sector::new(1, 1));

    assert_eq!(galaxy.fleet(fleet).starbases(), [base]);
    assert_eq!(galaxy.fleet(fleet).starships(), ships.as_slice());
    assert_eq!(galaxy.fleet(fleet).player(), Player::new(1));

    for &id in galaxy.fleet(fleet).starships() {
        assert_eq!(galaxy.fleet_of(id), Some(fleet));
        assert_eq!(galaxy.sector_of(id), Some(Sector::new(1, 1)));
        assert_eq!(galaxy.health(id), Some(100.0));
    }
    assert_eq!(galaxy.health(base), Some(500.0));
}

/// The full engagement: raid, shelter, repair and siege, with the
/// arithmetic checked at each step.
#[test]
fn battle_for_the_far_sector() {
    let mut galaxy = Galaxy::new();
    let home = Sector::new(1, 1);
    let far = Sector::new(2, 2);
    let (fleet1, _base1, attackers) = assemble_fleet(&mut galaxy, Player::new(1), home);
    let (fleet2, base2, defenders) = assemble_fleet(&mut galaxy, Player::new(2), far);

    // The whole attacking wing jumps to the defenders' sector.
    navigation::move_all(&mut galaxy, fleet1, far);
    for &id in &attackers {
        assert_eq!(galaxy.sector_of(id), Some(far));
    }

    // Two defenders shelter at their base; the third stays outside.
    assert!(docking::dock(&mut galaxy, defenders[0], base2));
    assert!(docking::dock(&mut galaxy, defenders[1], base2));
    assert_eq!(
        galaxy.starbase(base2).map(|b| b.docked_starships().len()),
        Some(2)
    );

    // Two hits on the exposed defender. The first lands 20 through full
    // defence; the second lands 22 through the weakened defence of 8.
    combat::attack(&mut galaxy, attackers[0], defenders[2]);
    assert_close(galaxy.health(defenders[2]).expect("defender"), 80.0);
    combat::attack(&mut galaxy, attackers[0], defenders[2]);
    assert_close(galaxy.health(defenders[2]).expect("defender"), 58.0);
    assert_eq!(galaxy.starship(defenders[2]).map(|s| s.crew()), Some(6));

    // The battered ship limps in and starts repairs: 58 rises to 75.
    assert!(docking::dock(&mut galaxy, defenders[2], base2));
    docking::repair_ship(&mut galaxy, defenders[2]);
    assert_close(galaxy.health(defenders[2]).expect("defender"), 75.0);
    assert!(galaxy
        .starship(defenders[2])
        .is_some_and(|s| s.is_repairing()));

    // The attackers pound the starbase until it falls. The damage floor
    // guarantees progress, so the siege always terminates.
    while !galaxy.is_destroyed(base2) {
        combat::attack_with_all(&mut galaxy, fleet1, base2);
    }
    assert_eq!(galaxy.health(base2), Some(0.0));

    // Docked ships shield the base but never soak its damage.
    assert_eq!(galaxy.health(defenders[0]), Some(100.0));
    assert_eq!(galaxy.health(defenders[1]), Some(100.0));
    assert_close(galaxy.health(defenders[2]).expect("defender"), 75.0);
    for &id in &defenders {
        assert!(galaxy.starship(id).is_some_and(|s| s.is_docked()));
    }

    // The base never fires back; the attackers leave untouched.
    for &id in &attackers {
        assert_eq!(galaxy.health(id), Some(100.0));
    }
}

#[test]
fn docking_is_refused_across_fleets() {
    let mut galaxy = Galaxy::new();
    let sector = Sector::new(3, 3);
    let (_fleet1, _base1, attackers) = assemble_fleet(&mut galaxy, Player::new(1), sector);
    let (_fleet2, base2, _defenders) = assemble_fleet(&mut galaxy, Player::new(2), sector);

    assert!(!docking::dock(&mut galaxy, attackers[0], base2));
    assert!(!galaxy.starship(attackers[0]).is_some_and(|s| s.is_docked()));
    assert_eq!(
        galaxy.starbase(base2).map(|b| b.docked_starships().len()),
        Some(0)
    );
}

#[test]
fn destroyed_starbase_traps_its_docked_ships() {
    let mut galaxy = Galaxy::new();
    let sector = Sector::new(3, 3);
    let (_fleet, base, ships) = assemble_fleet(&mut galaxy, Player::new(1), sector);
    assert!(docking::dock(&mut galaxy, ships[0], base));

    if let Some(starbase) = galaxy.starbase_mut(base) {
        starbase.set_health(0.0);
    }
    assert!(galaxy.is_destroyed(base));

    // A destroyed base answers no docking traffic, in either direction.
    assert!(!docking::undock(&mut galaxy, ships[0], base));
    assert!(galaxy.starship(ships[0]).is_some_and(|s| s.is_docked()));
    assert!(!docking::dock(&mut galaxy, ships[1], base));
}

#[test]
fn attacks_only_land_within_the_sector() {
    let mut galaxy = Galaxy::new();
    let (_fleet1, _base1, attackers) =
        assemble_fleet(&mut galaxy, Player::new(1), Sector::new(1, 1));
    let (_fleet2, _base2, defenders) =
        assemble_fleet(&mut galaxy, Player::new(2), Sector::new(2, 2));

    combat::attack(&mut galaxy, attackers[0], defenders[0]);
    assert_eq!(galaxy.health(defenders[0]), Some(100.0));

    navigation::move_ship(&mut galaxy, attackers[0], Sector::new(2, 2));
    combat::attack(&mut galaxy, attackers[0], defenders[0]);
    assert_close(galaxy.health(defenders[0]).expect("defender"), 80.0);
}

#[test]
fn fleet_wide_orders_respect_individual_refusals() {
    let mut galaxy = Galaxy::new();
    let sector = Sector::new(5, 5);
    let (fleet1, base1, attackers) = assemble_fleet(&mut galaxy, Player::new(1), sector);
    let (_fleet2, _base2, defenders) = assemble_fleet(&mut galaxy, Player::new(2), sector);

    // One attacker sits docked at its own base and skips the order.
    assert!(docking::dock(&mut galaxy, attackers[0], base1));
    combat::attack_with_all(&mut galaxy, fleet1, defenders[0]);

    // Two hits landed: 20 through defence 10, then 22 through defence 8.
    assert_close(galaxy.health(defenders[0]).expect("defender"), 58.0);
}

#[test]
fn repairs_walk_the_quartile_ladder_to_full() {
    let mut galaxy = Galaxy::new();
    let sector = Sector::new(4, 4);
    let (_fleet, base, ships) = assemble_fleet(&mut galaxy, Player::new(1), sector);

    if let Some(starship) = galaxy.starship_mut(ships[0]) {
        starship.set_health(10.0);
    }
    assert!(docking::dock(&mut galaxy, ships[0], base));

    for expected in [25.0, 50.0, 75.0, 100.0] {
        docking::repair_ship(&mut galaxy, ships[0]);
        assert_close(galaxy.health(ships[0]).expect("ship"), expected);
    }
    assert!(!galaxy
        .starship(ships[0])
        .is_some_and(|s| s.is_repairing()));
}
