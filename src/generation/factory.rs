//! PlateFactory - builds the initial world
//!
//! Each plate is drawn independently: sample a seed polygon, shift it by a
//! random offset, and keep it only if it is a valid simple polygon that
//! touches none of the plates accepted so far. The loop is capped per plate.

use geo_types::Polygon;
use rand::Rng;

use crate::core::config::GenerationConfig;
use crate::core::error::{ConfigError, PlateError, Result};
use crate::core::types::PlateId;
use crate::generation::polygon::random_star_polygon;
use crate::geometry::{self, InvalidPolygon};
use crate::plates::{jet_color, Plate, WorldState};

/// Why a candidate polygon was discarded
#[derive(Debug, Clone, PartialEq)]
pub enum Rejection {
    Invalid(InvalidPolygon),
    Overlaps(PlateId),
}

pub struct PlateFactory {
    config: GenerationConfig,
}

impl Default for PlateFactory {
    fn default() -> Self {
        Self {
            config: GenerationConfig::default(),
        }
    }
}

impl PlateFactory {
    /// Build a factory, rejecting ranges that cannot be sampled
    pub fn new(config: GenerationConfig) -> std::result::Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }

    /// Generate using the configured plate count (or a draw from its range)
    pub fn generate_default<R: Rng>(&self, rng: &mut R) -> Result<WorldState> {
        let count = self.config.resolve_plate_count(rng);
        self.generate(count, rng)
    }

    /// Generate exactly `count` valid, pairwise non-intersecting plates.
    ///
    /// Plates are named `plate1..plateN` in generation order. Fails with
    /// [`PlateError::GenerationExhausted`] when a single plate cannot be
    /// placed within `max_attempts_per_plate` candidates.
    pub fn generate<R: Rng>(&self, count: u32, rng: &mut R) -> Result<WorldState> {
        let mut world = WorldState::new();

        for n in 1..=count {
            let id = PlateId(n);
            let polygon = self.place_plate(id, &world, rng)?;
            let color = jet_color((n - 1) as usize, count as usize);
            world.insert(Plate::new(id, id.default_name(), polygon, color))?;
        }

        tracing::debug!("Generated world: {}", world.summary());
        Ok(world)
    }

    fn place_plate<R: Rng>(&self, id: PlateId, accepted: &WorldState, rng: &mut R) -> Result<Polygon<f64>> {
        let cap = self.config.max_attempts_per_plate;

        for attempt in 1..=cap {
            let candidate = self.candidate(rng);
            match check_candidate(&candidate, accepted) {
                Ok(()) => {
                    tracing::debug!("Placed plate {} after {} attempt(s)", id, attempt);
                    return Ok(candidate);
                }
                Err(rejection) => {
                    tracing::trace!("Plate {} attempt {} rejected: {:?}", id, attempt, rejection);
                }
            }
        }

        tracing::warn!("Giving up on plate {} after {} attempts", id, cap);
        Err(PlateError::GenerationExhausted { plate: id, attempts: cap })
    }

    /// One unchecked candidate: seed polygon plus a random placement offset
    pub fn candidate<R: Rng>(&self, rng: &mut R) -> Polygon<f64> {
        let vertex_count = self.config.vertex_count_range.sample(rng).max(3) as usize;
        let seed = random_star_polygon(vertex_count, &self.config.seed_box, rng);
        let dx = self.config.offset_x_range.sample(rng);
        let dy = self.config.offset_y_range.sample(rng);
        geometry::translate(&seed, dx as f64, dy as f64)
    }
}

/// Acceptance test for a candidate against the plates placed so far
pub fn check_candidate(candidate: &Polygon<f64>, accepted: &WorldState) -> std::result::Result<(), Rejection> {
    geometry::validate(candidate).map_err(Rejection::Invalid)?;
    if let Some(other) = accepted.iter().find(|p| geometry::intersects(candidate, p.polygon())) {
        return Err(Rejection::Overlaps(other.id));
    }
    Ok(())
}
