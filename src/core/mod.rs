pub mod config;
pub mod error;
pub mod types;

pub use config::{AxisBox, GenerationConfig, IntRange, MotionConfig, PlateConfig, RunConfig, WorldBounds};
pub use error::{ConfigError, PlateError, Result};
pub use types::{Offset, PlateId, Tick};
