//! A single named plate

use geo_types::Polygon;

use crate::core::types::PlateId;
use crate::geometry;

/// A named simple polygon drifting on the plane
#[derive(Debug, Clone, PartialEq)]
pub struct Plate {
    pub id: PlateId,
    pub name: String,
    polygon: Polygon<f64>,
    /// Rendering color, fixed at construction
    color: [u8; 3],
}

impl Plate {
    pub fn new(id: PlateId, name: impl Into<String>, polygon: Polygon<f64>, color: [u8; 3]) -> Self {
        Self {
            id,
            name: name.into(),
            polygon,
            color,
        }
    }

    pub fn polygon(&self) -> &Polygon<f64> {
        &self.polygon
    }

    pub fn color(&self) -> [u8; 3] {
        self.color
    }

    /// Exterior ring as `[x, y]` positions, closing position included
    pub fn ring(&self) -> Vec<[f64; 2]> {
        geometry::ring_positions(&self.polygon)
    }

    pub fn is_valid(&self) -> bool {
        geometry::is_valid(&self.polygon)
    }

    pub(crate) fn set_polygon(&mut self, polygon: Polygon<f64>) -> Polygon<f64> {
        std::mem::replace(&mut self.polygon, polygon)
    }
}
