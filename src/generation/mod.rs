//! Initial plate generation by rejection sampling

pub mod factory;
pub mod polygon;

pub use factory::{check_candidate, PlateFactory, Rejection};
pub use polygon::random_star_polygon;
