//! Plates and the ordered world state the simulation mutates

pub mod color;
pub mod plate;
pub mod world;

pub use color::jet_color;
pub use plate::Plate;
pub use world::WorldState;
