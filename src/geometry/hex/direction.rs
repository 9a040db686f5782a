use super::coordinate::Coordinate;
use serde::{Deserialize, Serialize};

/// Direction in a hexagonal coordinate system
///
/// Assumes flat-topped hexagons with `y` increasing northward. Variants are
/// declared in ring-walking order, clockwise from `Northeast`.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    parse_display::Display,
    parse_display::FromStr,
)]
pub enum Direction {
    #[display("ne")]
    Northeast,
    #[display("se")]
    Southeast,
    #[display("s")]
    South,
    #[display("sw")]
    Southwest,
    #[display("nw")]
    Northwest,
    #[display("n")]
    North,
}

impl Direction {
    const ALL: [Direction; 6] = [
        Direction::Northeast,
        Direction::Southeast,
        Direction::South,
        Direction::Southwest,
        Direction::Northwest,
        Direction::North,
    ];

    /// Iterate through all `Direction`s, clockwise from `Northeast`.
    pub fn iter() -> impl Iterator<Item = Direction> {
        (0..Self::ALL.len()).map(Direction::from_index)
    }

    /// Direction at position `index` in [`Direction::iter`] order.
    ///
    /// Indices wrap modulo 6.
    pub fn from_index(index: usize) -> Direction {
        Self::ALL[index % Self::ALL.len()]
    }

    /// Position of this direction in [`Direction::iter`] order.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Unit cubic vector for this direction.
    pub fn delta(self) -> Coordinate {
        use Direction::*;

        let (q, r) = match self {
            Northeast => (1, -1),
            Southeast => (1, 0),
            South => (0, 1),
            Southwest => (-1, 1),
            Northwest => (-1, 0),
            North => (0, -1),
        };
        Coordinate::new(q, r)
    }

    pub fn rotate_clockwise(self) -> Direction {
        Self::from_index(self.index() + 1)
    }

    pub fn rotate_counterclockwise(self) -> Direction {
        Self::from_index(self.index() + 5)
    }

    pub fn opposite(self) -> Direction {
        Self::from_index(self.index() + 3)
    }
}
