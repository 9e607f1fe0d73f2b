//! Plate Drift - procedural tectonic plate generation and drift simulation
//!
//! `generation` builds an initial set of non-overlapping plates,
//! `simulation` moves them tick by tick, and `persistence` moves worlds in
//! and out of GeoJSON.

pub mod core;
pub mod generation;
pub mod geometry;
pub mod persistence;
pub mod plates;
pub mod simulation;

pub use crate::core::config::PlateConfig;
pub use crate::core::error::{PlateError, Result};
pub use crate::core::types::PlateId;
pub use generation::PlateFactory;
pub use plates::{Plate, WorldState};
pub use simulation::{SimulationEngine, StopSignal, TickObserver, TickReport};
