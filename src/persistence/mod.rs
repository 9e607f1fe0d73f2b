//! Load and save worlds as GeoJSON feature collections

pub mod geojson;

pub use geojson::{from_geojson_str, load_world, save_world, to_geojson_string, LoadError, SaveError};
