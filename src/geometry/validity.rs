//! Simple-polygon validity: closed ring, finite coordinates, no degenerate
//! edges, no self-contact, non-zero area

use geo::line_intersection::{line_intersection, LineIntersection};
use geo::Area;
use geo_types::{Line, Polygon};
use thiserror::Error;

/// Why a polygon failed validation
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InvalidPolygon {
    #[error("polygon has {0} interior ring(s)")]
    HasInteriors(usize),
    #[error("exterior ring is not closed")]
    NotClosed,
    #[error("ring has {count} positions, at least {minimum} required")]
    TooFewPositions { count: usize, minimum: usize },
    #[error("ring contains a non-finite coordinate")]
    NonFinite,
    #[error("edge {index} has zero length")]
    DegenerateEdge { index: usize },
    #[error("edges {first} and {second} touch or cross")]
    SelfIntersecting { first: usize, second: usize },
    #[error("polygon has zero area")]
    ZeroArea,
}

/// Minimal closed ring: a triangle plus its closing position
const MIN_RING_POSITIONS: usize = 4;

pub fn is_valid(polygon: &Polygon<f64>) -> bool {
    validate(polygon).is_ok()
}

/// Check the polygon against planar simple-polygon rules, reporting the first failure
pub fn validate(polygon: &Polygon<f64>) -> Result<(), InvalidPolygon> {
    if !polygon.interiors().is_empty() {
        return Err(InvalidPolygon::HasInteriors(polygon.interiors().len()));
    }

    let ring = polygon.exterior();
    if ring.0.len() < MIN_RING_POSITIONS {
        return Err(InvalidPolygon::TooFewPositions {
            count: ring.0.len(),
            minimum: MIN_RING_POSITIONS,
        });
    }
    if !ring.is_closed() {
        return Err(InvalidPolygon::NotClosed);
    }
    if ring.coords().any(|c| !c.x.is_finite() || !c.y.is_finite()) {
        return Err(InvalidPolygon::NonFinite);
    }

    let edges: Vec<Line<f64>> = ring.lines().collect();
    if let Some(index) = edges.iter().position(|e| e.start == e.end) {
        return Err(InvalidPolygon::DegenerateEdge { index });
    }

    if let Some((first, second)) = first_self_contact(&edges) {
        return Err(InvalidPolygon::SelfIntersecting { first, second });
    }

    if polygon.signed_area() == 0.0 {
        return Err(InvalidPolygon::ZeroArea);
    }

    Ok(())
}

/// First pair of edges that touch anywhere other than a shared vertex.
///
/// Adjacent edges always meet at their shared vertex; they only count when
/// they overlap along a segment (a spike folding back on itself).
fn first_self_contact(edges: &[Line<f64>]) -> Option<(usize, usize)> {
    let n = edges.len();
    for i in 0..n {
        for j in (i + 1)..n {
            let adjacent = j == i + 1 || (i == 0 && j == n - 1);
            match line_intersection(edges[i], edges[j]) {
                None => {}
                Some(LineIntersection::SinglePoint { .. }) if adjacent => {}
                Some(_) => return Some((i, j)),
            }
        }
    }
    None
}
