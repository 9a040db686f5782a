use std::{
    fmt,
    ops::{Add, AddAssign, Mul, Neg, Sub},
};

use serde::{Deserialize, Serialize};

use super::direction::Direction;

/// Cubic hex coordinates.
///
/// See [reference](https://www.redblobgames.com/grids/hexagons/#coordinates).
///
/// Constraint: `q + r + s == 0`. Only `q` and `r` are stored, so the
/// constraint can't be violated; `s` is derived on demand.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Default, Hash, Serialize, Deserialize,
)]
pub struct Coordinate {
    pub q: i32,
    pub r: i32,
}

impl Coordinate {
    pub const ORIGIN: Coordinate = Coordinate { q: 0, r: 0 };

    pub const fn new(q: i32, r: i32) -> Coordinate {
        Coordinate { q, r }
    }

    /// Construct a coordinate from all three cubic components.
    pub fn cubic(q: i32, r: i32, s: i32) -> Result<Coordinate, InvalidCoordinate> {
        if q + r + s == 0 {
            Ok(Coordinate { q, r })
        } else {
            Err(InvalidCoordinate { q, r, s })
        }
    }

    pub const fn s(self) -> i32 {
        -self.q - self.r
    }

    /// The adjacent cell in `direction`.
    pub fn neighbor(self, direction: Direction) -> Coordinate {
        self + direction
    }

    pub fn neighbors(self) -> impl 'static + Iterator<Item = Coordinate> {
        Direction::iter().map(move |direction| self + direction)
    }

    /// Number of steps between two cells.
    pub fn distance(self, other: Coordinate) -> u32 {
        (other - self).length()
    }

    /// Number of steps from the origin.
    pub fn length(self) -> u32 {
        (self.q.unsigned_abs() + self.r.unsigned_abs() + self.s().unsigned_abs()) / 2
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.q, self.r, self.s())
    }
}

impl AddAssign<Direction> for Coordinate {
    fn add_assign(&mut self, rhs: Direction) {
        *self = *self + rhs.delta();
    }
}

impl Add<Direction> for Coordinate {
    type Output = Coordinate;

    fn add(mut self, rhs: Direction) -> Self::Output {
        self += rhs;
        self
    }
}

impl Add for Coordinate {
    type Output = Coordinate;

    fn add(self, rhs: Coordinate) -> Self::Output {
        Coordinate::new(self.q + rhs.q, self.r + rhs.r)
    }
}

impl Sub for Coordinate {
    type Output = Coordinate;

    fn sub(self, rhs: Coordinate) -> Self::Output {
        Coordinate::new(self.q - rhs.q, self.r - rhs.r)
    }
}

impl Neg for Coordinate {
    type Output = Coordinate;

    fn neg(self) -> Self::Output {
        Coordinate::new(-self.q, -self.r)
    }
}

impl Mul<i32> for Coordinate {
    type Output = Coordinate;

    fn mul(self, rhs: i32) -> Self::Output {
        Coordinate::new(self.q * rhs, self.r * rhs)
    }
}

/// A cubic triple whose components do not sum to zero
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("cubic coordinate ({q}, {r}, {s}) does not sum to zero")]
pub struct InvalidCoordinate {
    pub q: i32,
    pub r: i32,
    pub s: i32,
}
