use std::fmt;

/// A location on the map grid.
/// The grid is unbounded; callers pick whatever integer coordinates they
/// need. Compared by field value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Sector {
    pub x: i32,
    pub y: i32,
}

impl Sector {
    pub fn new(x: i32, y: i32) -> Self {
        Sector { x, y }
    }
}

impl fmt::Display for Sector {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_is_by_value() {
        assert_eq!(Sector::new(2, 3), Sector::new(2, 3));
        assert_ne!(Sector::new(2, 3), Sector::new(3, 2));
    }

    #[test]
    fn display_shows_coordinates() {
        assert_eq!(Sector::new(-1, 7).to_string(), "(-1,7)");
    }
}
