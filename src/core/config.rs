//! Generation and simulation configuration
//!
//! Every tunable number lives here. Values can be loaded from a TOML file;
//! every section has a default so partial files are accepted.
//!
//! ```toml
//! [generation]
//! plate_count = 6
//! vertex_count_range = { min = 5, max = 7 }
//!
//! [motion]
//! step_range = { min = -2, max = 2 }
//! ```

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::core::error::ConfigError;

/// Inclusive integer range `[min, max]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntRange {
    pub min: i32,
    pub max: i32,
}

impl IntRange {
    pub const fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }

    /// Draw uniformly from the inclusive range
    pub fn sample<R: Rng>(&self, rng: &mut R) -> i32 {
        rng.gen_range(self.min..=self.max)
    }

    fn check(&self, field: &'static str) -> Result<(), ConfigError> {
        if self.min > self.max {
            return Err(ConfigError::InvertedRange {
                field,
                min: self.min as i64,
                max: self.max as i64,
            });
        }
        Ok(())
    }
}

/// Axis-aligned box in plane coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisBox {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl AxisBox {
    /// [-180, 180] x [-90, 90]
    pub const GLOBE: AxisBox = AxisBox::new(-180.0, -90.0, 180.0, 90.0);

    pub const fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self { min_x, min_y, max_x, max_y }
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    pub(crate) fn check(&self, field: &'static str) -> Result<(), ConfigError> {
        let finite = [self.min_x, self.min_y, self.max_x, self.max_y]
            .iter()
            .all(|v| v.is_finite());
        if !finite || self.width() <= 0.0 || self.height() <= 0.0 {
            return Err(ConfigError::DegenerateBox { field });
        }
        Ok(())
    }
}

/// The bounded domain plates drift in. Longitude-like x, latitude-like y.
pub type WorldBounds = AxisBox;

impl Default for AxisBox {
    fn default() -> Self {
        AxisBox::GLOBE
    }
}

/// Parameters for the plate factory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Fixed plate count. When absent the count is drawn from `plate_count_range`.
    pub plate_count: Option<u32>,
    pub plate_count_range: IntRange,
    /// Vertices per seed polygon (before closing the ring)
    pub vertex_count_range: IntRange,
    /// Box every seed polygon is synthesized inside, before offsetting
    pub seed_box: AxisBox,
    /// Offset applied once to each seed polygon. Not clamped to world bounds.
    pub offset_x_range: IntRange,
    pub offset_y_range: IntRange,
    /// Candidates tried for a single plate before giving up
    pub max_attempts_per_plate: u32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            plate_count: None,
            plate_count_range: IntRange::new(5, 8),
            vertex_count_range: IntRange::new(5, 7),
            seed_box: AxisBox::new(-75.0, -25.0, 75.0, 25.0),
            offset_x_range: IntRange::new(-100, 100),
            offset_y_range: IntRange::new(-60, 60),
            max_attempts_per_plate: 10_000,
        }
    }
}

impl GenerationConfig {
    /// The configured plate count, or a fresh draw from `plate_count_range`
    pub fn resolve_plate_count<R: Rng>(&self, rng: &mut R) -> u32 {
        match self.plate_count {
            Some(count) => count,
            None => self.plate_count_range.sample(rng).max(0) as u32,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.plate_count_range.check("generation.plate_count_range")?;
        if self.plate_count_range.min < 0 {
            return Err(ConfigError::TooSmall {
                field: "generation.plate_count_range.min",
                minimum: 0,
            });
        }
        self.vertex_count_range.check("generation.vertex_count_range")?;
        if self.vertex_count_range.min < 3 {
            return Err(ConfigError::TooSmall {
                field: "generation.vertex_count_range.min",
                minimum: 3,
            });
        }
        self.seed_box.check("generation.seed_box")?;
        self.offset_x_range.check("generation.offset_x_range")?;
        self.offset_y_range.check("generation.offset_y_range")?;
        if self.max_attempts_per_plate == 0 {
            return Err(ConfigError::TooSmall {
                field: "generation.max_attempts_per_plate",
                minimum: 1,
            });
        }
        Ok(())
    }
}

/// Per-tick movement parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionConfig {
    /// Range each axis offset is drawn from every tick
    pub step_range: IntRange,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            step_range: IntRange::new(-4, 4),
        }
    }
}

impl MotionConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.step_range.check("motion.step_range")
    }
}

/// Caller-level defaults for the driver. Not engine invariants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    pub steps: u64,
    /// Pause between ticks, applied by the driver's observer
    pub tick_delay_ms: u64,
    pub seed: Option<u64>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            steps: 100,
            tick_delay_ms: 0,
            seed: None,
        }
    }
}

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PlateConfig {
    pub generation: GenerationConfig,
    pub motion: MotionConfig,
    pub bounds: WorldBounds,
    pub run: RunConfig,
}

impl PlateConfig {
    /// Parse and validate a TOML document
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: PlateConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.generation.validate()?;
        self.motion.validate()?;
        self.bounds.check("bounds")?;
        Ok(())
    }
}
