//! Boundary wrap
//!
//! A plate that has left the domain entirely on one axis is teleported by
//! the full domain extent on that axis. Axes are handled independently and
//! both may fire in the same tick. Plates still overlapping the domain, even
//! partially, are left where they are.

use geo_types::Polygon;

use crate::core::config::WorldBounds;
use crate::geometry;

/// Translation applied by the wrap step, zero on axes that did not wrap
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WrapShift {
    pub dx: f64,
    pub dy: f64,
}

impl WrapShift {
    pub fn is_none(&self) -> bool {
        self.dx == 0.0 && self.dy == 0.0
    }
}

/// Shift needed to bring a plate with bounding box `plate` back toward the domain
pub fn wrap_shift(plate: &WorldBounds, world: &WorldBounds) -> WrapShift {
    let dx = if plate.min_x > world.max_x {
        -world.width()
    } else if plate.max_x < world.min_x {
        world.width()
    } else {
        0.0
    };

    let dy = if plate.min_y > world.max_y {
        -world.height()
    } else if plate.max_y < world.min_y {
        world.height()
    } else {
        0.0
    };

    WrapShift { dx, dy }
}

/// Apply the wrap rule to a polygon
pub fn wrap_polygon(polygon: &Polygon<f64>, world: &WorldBounds) -> (Polygon<f64>, WrapShift) {
    let Some(plate_bounds) = geometry::bounds(polygon) else {
        return (polygon.clone(), WrapShift::default());
    };

    let shift = wrap_shift(&plate_bounds, world);
    if shift.is_none() {
        (polygon.clone(), shift)
    } else {
        (geometry::translate(polygon, shift.dx, shift.dy), shift)
    }
}
