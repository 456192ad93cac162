use env_logger::Env;

use armada::io::{OutputWriter, TerminalIO};
use armada::models::galaxy::Galaxy;
use armada::models::player::Player;
use armada::models::sector::Sector;
use armada::services::{combat, docking, navigation};
use armada::ui::presenters::FleetPresenter;

fn main() {
    let env = Env::default()
        .filter_or("ARMADA_LOG", "info")
        .write_style_or("ARMADA_LOG_STYLE", "auto");
    env_logger::init_from_env(env);

    let mut output = TerminalIO;
    output.writeln("*** ARMADA ***");
    output.writeln("");
    output.writeln("Creating fleets");

    let mut galaxy = Galaxy::new();
    let home_sector = Sector::new(1, 1);
    let far_sector = Sector::new(2, 2);

    // Player 1: one starbase and three starships in sector (1,1)
    let fleet1 = galaxy.new_fleet(Player::new(1));
    let base1 = galaxy.new_starbase(home_sector);
    let first_wing = [
        galaxy.new_starship(home_sector),
        galaxy.new_starship(home_sector),
        galaxy.new_starship(home_sector),
    ];
    galaxy.add_entities(fleet1, &[base1, first_wing[0], first_wing[1], first_wing[2]]);

    // Player 2: one starbase and three starships in sector (2,2)
    let fleet2 = galaxy.new_fleet(Player::new(2));
    let base2 = galaxy.new_starbase(far_sector);
    let second_wing = [
        galaxy.new_starship(far_sector),
        galaxy.new_starship(far_sector),
        galaxy.new_starship(far_sector),
    ];
    galaxy.add_entities(
        fleet2,
        &[base2, second_wing[0], second_wing[1], second_wing[2]],
    );

    FleetPresenter::show_galaxy(&galaxy, &mut output);

    // Move all player 1 ships into player 2's sector
    navigation::move_all(&mut galaxy, fleet1, far_sector);

    // Shelter the first two player 2 ships at their starbase
    if let Some(starbase) = galaxy.fleet(fleet2).starbase_at(0) {
        if let Some(first) = galaxy.fleet(fleet2).starship_at(0) {
            docking::dock(&mut galaxy, first, starbase);
        }
        if let Some(second) = galaxy.fleet(fleet2).starship_at(1) {
            docking::dock(&mut galaxy, second, starbase);
        }
    }

    // The first player 1 ship attacks the ship left outside, twice
    if let (Some(attacker), Some(enemy)) = (
        galaxy.fleet(fleet1).starship_at(0),
        galaxy.fleet(fleet2).starship_at(2),
    ) {
        combat::attack(&mut galaxy, attacker, enemy);
        combat::attack(&mut galaxy, attacker, enemy);
    }

    // Pull the damaged ship in and start repairs
    if let (Some(starship), Some(starbase)) = (
        galaxy.fleet(fleet2).starship_at(2),
        galaxy.fleet(fleet2).starbase_at(0),
    ) {
        docking::dock(&mut galaxy, starship, starbase);
        docking::repair_ship(&mut galaxy, starship);
    }

    // Pound the starbase with the whole fleet until it falls
    if let Some(starbase) = galaxy.fleet(fleet2).starbase_at(0) {
        while !galaxy.is_destroyed(starbase) {
            combat::attack_with_all(&mut galaxy, fleet1, starbase);
        }
    }

    output.writeln("");
    output.writeln("After the battle");
    FleetPresenter::show_galaxy(&galaxy, &mut output);
}
