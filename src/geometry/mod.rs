//! Planar polygon helpers
//!
//! Thin wrappers over `geo` that fix the vocabulary the rest of the crate
//! uses: validity, intersection, translation and bounding boxes. All
//! functions are pure.

mod validity;

pub use validity::{is_valid, validate, InvalidPolygon};

use geo::{BoundingRect, Intersects, Translate};
use geo_types::{Coord, LineString, Polygon};

use crate::core::config::AxisBox;

/// True iff the two polygons share any interior or boundary point
pub fn intersects(a: &Polygon<f64>, b: &Polygon<f64>) -> bool {
    a.intersects(b)
}

/// New polygon with every vertex shifted by (dx, dy)
pub fn translate(polygon: &Polygon<f64>, dx: f64, dy: f64) -> Polygon<f64> {
    polygon.translate(dx, dy)
}

/// Bounding box of the polygon, `None` for an empty polygon
pub fn bounds(polygon: &Polygon<f64>) -> Option<AxisBox> {
    polygon.bounding_rect().map(|rect| {
        let min = rect.min();
        let max = rect.max();
        AxisBox::new(min.x, min.y, max.x, max.y)
    })
}

/// Build a hole-free polygon from `[x, y]` positions. The ring is closed if needed.
pub fn polygon_from_ring(ring: &[[f64; 2]]) -> Polygon<f64> {
    let coords: Vec<Coord<f64>> = ring.iter().map(|[x, y]| Coord { x: *x, y: *y }).collect();
    Polygon::new(LineString::new(coords), vec![])
}

/// Exterior ring as `[x, y]` positions, closing position included
pub fn ring_positions(polygon: &Polygon<f64>) -> Vec<[f64; 2]> {
    polygon.exterior().coords().map(|c| [c.x, c.y]).collect()
}
