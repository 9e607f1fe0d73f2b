//! Random seed polygons
//!
//! Vertices are laid out by angle around a fixed centre with jittered
//! angular steps and Gaussian radii, in a -180..180 x -90..90 frame that is
//! then squeezed into the seed box. Coordinates are clamped to the box and
//! rounded to integers, so a sample can collapse into an invalid ring; the
//! factory rejects those.

use geo_types::{Coord, LineString, Polygon};
use rand::Rng;
use rand_distr::StandardNormal;
use std::f64::consts::TAU;

use crate::core::config::AxisBox;

/// Mean vertex distance from the centre, in frame units
const AVERAGE_RADIUS: f64 = 60.0;
/// Frame-space centre of every seed polygon
const CENTRE: (f64, f64) = (0.1, 0.2);
/// Max deviation of an angular step, as a fraction of the mean step
const IRREGULARITY: f64 = 0.1;
/// Radius standard deviation, as a fraction of `AVERAGE_RADIUS`
const SPIKEYNESS: f64 = 0.5;

/// Frame the polar layout happens in before mapping into the seed box
const FRAME_WIDTH: f64 = 360.0;
const FRAME_HEIGHT: f64 = 180.0;

/// Sample a star-shaped polygon with `vertex_count` vertices inside `seed_box`
pub fn random_star_polygon<R: Rng>(vertex_count: usize, seed_box: &AxisBox, rng: &mut R) -> Polygon<f64> {
    let steps = angular_steps(vertex_count, rng);
    let spread = AVERAGE_RADIUS * SPIKEYNESS;

    let mut angle = rng.gen_range(0.0..TAU);
    let mut coords = Vec::with_capacity(vertex_count + 1);
    for step in steps {
        let gauss: f64 = rng.sample(StandardNormal);
        let radius = (AVERAGE_RADIUS + spread * gauss).clamp(0.0, 2.0 * AVERAGE_RADIUS);

        let frame_x = CENTRE.0 + radius * angle.cos();
        let frame_y = CENTRE.1 + radius * angle.sin();
        coords.push(into_seed_box(frame_x, frame_y, seed_box));

        angle += step;
    }

    Polygon::new(LineString::new(coords), vec![])
}

/// Angular increments that sum to a full turn
fn angular_steps<R: Rng>(vertex_count: usize, rng: &mut R) -> Vec<f64> {
    let mean = TAU / vertex_count as f64;
    let jitter = IRREGULARITY * mean;

    let mut steps: Vec<f64> = (0..vertex_count)
        .map(|_| rng.gen_range((mean - jitter)..=(mean + jitter)))
        .collect();
    let total: f64 = steps.iter().sum();
    for step in &mut steps {
        *step *= TAU / total;
    }
    steps
}

fn into_seed_box(frame_x: f64, frame_y: f64, seed_box: &AxisBox) -> Coord<f64> {
    let x = (frame_x + FRAME_WIDTH / 2.0) * (seed_box.width() / FRAME_WIDTH) + seed_box.min_x;
    let y = (frame_y + FRAME_HEIGHT / 2.0) * (seed_box.height() / FRAME_HEIGHT) + seed_box.min_y;
    Coord {
        x: x.clamp(seed_box.min_x, seed_box.max_x).round(),
        y: y.clamp(seed_box.min_y, seed_box.max_y).round(),
    }
}
