//! Layout of hexagonal holes inside a circular boundary.

use crate::geometry::{
    hex::{Coordinate, Layout, Ring},
    Point,
};

/// Number of rings needed to cover a disk of `radius` with hexagons of `width`.
///
/// The innermost cell of ring `n` lies `0.75 * width * n` from the origin, so once
/// that exceeds `radius` no cell of the ring can fit. Returns 0 for non-positive or
/// non-finite inputs.
pub fn ring_count(width: f64, radius: f64) -> u32 {
    if !(width > 0.0 && radius > 0.0 && width.is_finite() && radius.is_finite()) {
        return 0;
    }
    let rings = (radius / (width * 1.5) * 2.0).ceil();
    if rings >= u32::MAX as f64 {
        u32::MAX
    } else {
        rings as u32
    }
}

/// Cells whose hexagon of `width` fits strictly inside a disk of `radius`, paired with
/// their centers. Spiral order, starting from the origin cell.
///
/// Rings are visited lazily, so memory tracks the cells kept rather than the cells
/// visited. Run time still grows with `(radius / width)^2`.
pub fn tile_cells(width: f64, radius: f64) -> Vec<(Coordinate, Point)> {
    let rings = ring_count(width, radius);
    if rings == 0 {
        log::debug!("no hex cells for width {} in radius {}", width, radius);
        return Vec::new();
    }

    let layout = Layout::new(width);
    let limit = radius - width / 2.0;
    let mut visited = 0_usize;

    let cells: Vec<_> = (0..=rings)
        .flat_map(|ring| Ring::new(Coordinate::ORIGIN, ring))
        .inspect(|_| visited += 1)
        .map(|coordinate| (coordinate, layout.to_planar(coordinate)))
        .filter(|(_, point)| point.norm() < limit)
        .collect();

    log::debug!(
        "tiled radius {} with width {}: {} rings, kept {} of {} cells",
        radius,
        width,
        rings,
        cells.len(),
        visited
    );
    cells
}

/// Centers of the hexagons of `width` which fit strictly inside a disk of `radius`.
///
/// Degenerate inputs produce no points.
pub fn tile(width: f64, radius: f64) -> Vec<Point> {
    tile_cells(width, radius)
        .into_iter()
        .map(|(_, point)| point)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::hex::{ring, spiral, spiral_len, to_planar};

    #[test]
    fn test_ring_count() {
        assert_eq!(ring_count(3.6, 38.5), 15);
        assert_eq!(ring_count(2.0, 1.5), 1);
        assert_eq!(ring_count(0.0, 10.0), 0);
        assert_eq!(ring_count(1.0, -1.0), 0);
        assert_eq!(ring_count(f64::NAN, 10.0), 0);
    }

    #[test]
    fn test_reference_plate() {
        let points = tile(3.6, 38.5);
        assert_eq!(points[0], Point::ORIGIN);
        assert!(points.iter().all(|point| point.norm() < 36.7));
    }

    #[test]
    fn test_ring_count_is_sufficient() {
        for &(width, radius) in &[(3.6, 38.5), (1.0, 10.0), (5.0, 7.4), (2.5, 100.0)] {
            let beyond = ring(Coordinate::ORIGIN, ring_count(width, radius) + 1);
            assert!(beyond
                .into_iter()
                .all(|cell| to_planar(cell, width).norm() >= radius - width / 2.0));
        }
    }

    #[test]
    fn test_small_disk_holds_only_center() {
        assert_eq!(tile(2.0, 1.5), vec![Point::ORIGIN]);
    }

    #[test]
    fn test_degenerate_inputs_are_empty() {
        assert!(tile(0.0, 10.0).is_empty());
        assert!(tile(-1.0, 10.0).is_empty());
        assert!(tile(1.0, 0.0).is_empty());
        assert!(tile(4.0, 2.0).is_empty());
    }

    #[test]
    fn test_fine_grid_matches_filtered_spiral() {
        let (width, radius) = (0.01, 1.0);
        let rings = ring_count(width, radius);
        let expect: Vec<_> = spiral(Coordinate::ORIGIN, rings)
            .into_iter()
            .filter(|&cell| to_planar(cell, width).norm() < radius - width / 2.0)
            .collect();
        let cells = tile_cells(width, radius);
        assert!(cells.len() < spiral_len(rings));
        assert_eq!(
            cells.into_iter().map(|(cell, _)| cell).collect::<Vec<_>>(),
            expect
        );
    }

    #[test]
    fn test_cells_match_points() {
        for (coordinate, point) in tile_cells(1.2, 9.0) {
            assert_eq!(to_planar(coordinate, 1.2), point);
        }
    }
}
