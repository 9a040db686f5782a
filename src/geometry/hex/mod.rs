//! Hexagonal geometry support.
//!
//! Uses techniques from [this reference](https://www.redblobgames.com/grids/hexagons/)

pub mod coordinate;
pub mod direction;
pub mod layout;
pub mod offset;

pub use coordinate::{Coordinate, InvalidCoordinate};
pub use direction::Direction;
pub use layout::{to_planar, Layout};
pub use offset::Offset;

/// Direction from the center to the first cell of every ring.
///
/// Walking the directions in [`Direction::iter`] order from this corner stays on the ring.
const RING_START: Direction = Direction::Northwest;

/// Iterator over the cells at an exact distance from a center.
///
/// Produced by [`Ring::new`]; see [`ring`].
#[derive(Clone, Debug)]
pub struct Ring {
    position: Coordinate,
    radius: u32,
    side: usize,
    step: u32,
    remaining: usize,
}

impl Ring {
    /// Ring of `radius` cells around `center`.
    ///
    /// Rings reaching past `±i32::MAX` in any of `q`, `r` or `s` are empty.
    pub fn new(center: Coordinate, radius: u32) -> Ring {
        let mut ring = Ring {
            position: center,
            radius,
            side: 0,
            step: 0,
            remaining: 0,
        };
        if addressable(center, radius) {
            ring.position = center + RING_START.delta() * radius as i32;
            ring.remaining = ring_len(radius);
        }
        ring
    }
}

fn addressable(center: Coordinate, radius: u32) -> bool {
    let reach = i64::from(radius);
    let limit = i64::from(i32::MAX);
    let fits = |component: i64| component - reach >= -limit && component + reach <= limit;
    let (q, r) = (i64::from(center.q), i64::from(center.r));
    fits(q) && fits(r) && fits(-q - r)
}

impl Iterator for Ring {
    type Item = Coordinate;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        let cell = self.position;
        if self.radius > 0 {
            self.position += Direction::from_index(self.side);
            self.step += 1;
            if self.step == self.radius {
                self.step = 0;
                self.side += 1;
            }
        }
        Some(cell)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Ring {}

impl std::iter::FusedIterator for Ring {}

/// Number of cells in a ring of `radius`.
pub fn ring_len(radius: u32) -> usize {
    match radius {
        0 => 1,
        _ => 6 * radius as usize,
    }
}

/// Number of cells in a spiral out to `max_radius`.
pub fn spiral_len(max_radius: u32) -> usize {
    let n = max_radius as usize;
    1 + 3 * n * (n + 1)
}

/// All cells at exactly `radius` steps from `center`, in clockwise order.
///
/// Consecutive cells are adjacent, as are the last and first. A radius of 0 yields only `center`.
pub fn ring(center: Coordinate, radius: u32) -> Vec<Coordinate> {
    Ring::new(center, radius).collect()
}

/// `center`, followed by every ring from 1 through `max_radius`.
pub fn spiral(center: Coordinate, max_radius: u32) -> Vec<Coordinate> {
    let mut cells = Vec::with_capacity(spiral_len(max_radius));
    for radius in 0..=max_radius {
        cells.extend(Ring::new(center, radius));
    }
    cells
}
