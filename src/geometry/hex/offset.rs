use num::Integer;
use serde::{Deserialize, Serialize};

use super::Coordinate;

/// Column/row offset coordinates for flat-topped hexagons.
///
/// Columns are `q`; rows follow `s`, shifted by half the column so that a
/// row reads as a horizontal zigzag.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Default,
    Hash,
    Serialize,
    Deserialize,
    parse_display::Display,
)]
#[display("({col}, {row})")]
pub struct Offset {
    pub col: i32,
    pub row: i32,
}

impl Offset {
    /// `1` for odd columns, `0` for even ones, negative columns included.
    pub fn parity(self) -> i32 {
        self.col.mod_floor(&2)
    }
}

impl From<Coordinate> for Offset {
    fn from(coordinate: Coordinate) -> Self {
        Offset {
            col: coordinate.q,
            row: coordinate.s() + coordinate.q.div_floor(&2),
        }
    }
}

impl From<Offset> for Coordinate {
    fn from(offset: Offset) -> Self {
        let q = offset.col;
        let s = offset.row - q.div_floor(&2);
        Coordinate::new(q, -q - s)
    }
}
