use crate::io::OutputWriter;
use crate::models::entity::EntityId;
use crate::models::fleet::FleetId;
use crate::models::galaxy::Galaxy;

pub struct FleetPresenter;

impl FleetPresenter {
    /// Roster of every fleet in the galaxy.
    pub fn show_galaxy(galaxy: &Galaxy, output: &mut dyn OutputWriter) {
        for index in 0..galaxy.fleets().len() {
            Self::show_fleet(galaxy, FleetId::from_index(index), output);
        }
    }

    /// Roster of one fleet: bases first, then ships, in joining order.
    pub fn show_fleet(galaxy: &Galaxy, fleet_id: FleetId, output: &mut dyn OutputWriter) {
        let fleet = galaxy.fleet(fleet_id);
        output.writeln(&format!("{} ({})", fleet_id, fleet.player()));
        for &id in fleet.starbases() {
            Self::show_entity(galaxy, id, output);
        }
        for &id in fleet.starships() {
            Self::show_entity(galaxy, id, output);
        }
    }

    /// One status line for an entity of either kind. Crew and docking
    /// only apply to starships.
    pub fn show_entity(galaxy: &Galaxy, id: EntityId, output: &mut dyn OutputWriter) {
        let Some(description) = galaxy.describe(id) else {
            output.writeln(&format!("  entity {} is not in the galaxy", id));
            return;
        };
        let sector = galaxy
            .sector_of(id)
            .map(|sector| sector.to_string())
            .unwrap_or_default();
        let health = galaxy.health(id).unwrap_or_default();
        let defence = galaxy.defence_strength(id).unwrap_or_default();
        let mut line = format!(
            "  {:<24} {:<8} health {:>5.1}  defence {:>6.2}",
            description, sector, health, defence
        );
        if let Some(starship) = galaxy.starship(id) {
            line.push_str(&format!("  crew {:>2}", starship.crew()));
            if starship.is_docked() {
                line.push_str("  docked");
            }
        }
        if galaxy.is_destroyed(id) {
            line.push_str("  DESTROYED");
        }
        output.writeln(&line);
    }
}
