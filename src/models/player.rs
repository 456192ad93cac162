use std::fmt;

/// Identity of a fleet owner: a wrapper around a player number.
/// Purely a data carrier; wins, scores and the like can hang off it later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Player {
    pub number: u32,
}

impl Player {
    pub fn new(number: u32) -> Self {
        Player { number }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "player {}", self.number)
    }
}
