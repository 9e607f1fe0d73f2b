//! Plate drift simulation
//!
//! Each tick moves every plate by a small random offset, reverses the offset
//! when the move would hit another plate, and wraps plates that have left
//! the domain. Plates are processed one at a time in world order.

pub mod engine;
pub mod hooks;
pub mod wrap;

pub use engine::{EngineState, PlateMove, RunOutcome, RunSummary, SimulationEngine, TickReport};
pub use hooks::{NoopObserver, StopSignal, TickObserver};
pub use wrap::{wrap_polygon, wrap_shift, WrapShift};
