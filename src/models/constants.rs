//! Combat constants shared by every instance of an entity variant.

/// Hull damage that always gets through, no matter how strong the target's
/// defence. Keeps a fight from stalling against an over-defended target.
pub const MIN_APPLIED_DAMAGE: f64 = 5.0;

pub const STARSHIP_MAX_HEALTH: f64 = 100.0;
pub const STARSHIP_MAX_DEFENCE_STRENGTH: f64 = 10.0;
pub const STARSHIP_MAX_ATTACK_STRENGTH: f64 = 30.0;
pub const STARSHIP_MAX_CREW: i32 = 10;

pub const STARBASE_MAX_HEALTH: f64 = 500.0;
pub const STARBASE_MAX_DEFENCE_STRENGTH: f64 = 20.0;
