use serde::{Deserialize, Serialize};

use super::{Coordinate, Offset};
use crate::geometry::Point;

/// Projects hex cells onto the plane.
///
/// Hexagons are flat-topped; `width` is the point-to-point width of one
/// hexagon, so cells in adjacent columns sit `0.75 * width` apart
/// horizontally and cells in one column sit `sqrt(3) / 2 * width` apart.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    pub width: f64,
}

impl Layout {
    pub const fn new(width: f64) -> Layout {
        Layout { width }
    }

    pub fn column_spacing(&self) -> f64 {
        self.width * 0.75
    }

    pub fn row_spacing(&self) -> f64 {
        self.width * 3.0_f64.sqrt() / 2.0
    }

    /// Center of `coordinate`'s cell, with the origin cell at `(0, 0)`.
    pub fn to_planar(&self, coordinate: Coordinate) -> Point {
        let offset = Offset::from(coordinate);
        Point::new(
            self.column_spacing() * offset.col as f64,
            self.row_spacing() * (offset.row as f64 + 0.5 * offset.parity() as f64),
        )
    }
}

/// Center of `coordinate`'s cell for hexagons of the given `width`.
///
/// Shorthand for `Layout::new(width).to_planar(coordinate)`.
pub fn to_planar(coordinate: Coordinate, width: f64) -> Point {
    Layout::new(width).to_planar(coordinate)
}
