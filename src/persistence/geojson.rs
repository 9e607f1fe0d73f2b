//! GeoJSON interchange
//!
//! A world is stored as a `FeatureCollection`. Each plate is one `Feature`
//! with `properties.name`, `properties.id` and a single-ring `Polygon`
//! geometry. Feature order is world order.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::core::types::PlateId;
use crate::geometry::{self, polygon_from_ring};
use crate::plates::{jet_color, Plate, WorldState};

/// Errors that can occur when loading a world
#[derive(Debug, Error)]
pub enum LoadError {
    /// JSON parsing failed
    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),
    /// File I/O error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Expected a FeatureCollection, found {0:?}")]
    NotFeatureCollection(String),
    #[error("Feature {feature}: expected a Polygon geometry, found {kind:?}")]
    UnsupportedGeometry { feature: usize, kind: String },
    #[error("Feature {feature}: polygon has no exterior ring")]
    MissingRing { feature: usize },
    #[error("Feature {feature}: polygon has {holes} hole(s), plates must be hole-free")]
    HasHoles { feature: usize, holes: usize },
    #[error("Feature {feature}: ring has {count} positions, at least 4 required")]
    RingTooShort { feature: usize, count: usize },
    #[error("Feature {feature}: ring is not closed")]
    RingNotClosed { feature: usize },
    #[error("Feature {feature}: position {index} must be an [x, y] pair")]
    BadPosition { feature: usize, index: usize },
    #[error("Feature {feature}: missing properties.name")]
    MissingName { feature: usize },
    #[error("Duplicate plate id {0}")]
    DuplicateId(PlateId),
}

/// Errors that can occur when saving a world
#[derive(Debug, Error)]
pub enum SaveError {
    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

const FEATURE_COLLECTION: &str = "FeatureCollection";
const FEATURE: &str = "Feature";
const POLYGON: &str = "Polygon";

#[derive(Debug, Serialize, Deserialize)]
struct FeatureCollectionJson {
    #[serde(rename = "type")]
    kind: String,
    features: Vec<FeatureJson>,
}

#[derive(Debug, Serialize, Deserialize)]
struct FeatureJson {
    #[serde(rename = "type", default = "feature_kind")]
    kind: String,
    #[serde(default)]
    properties: Option<PropertiesJson>,
    geometry: GeometryJson,
}

#[derive(Debug, Serialize, Deserialize)]
struct PropertiesJson {
    #[serde(default)]
    name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id: Option<u32>,
}

#[derive(Debug, Serialize, Deserialize)]
struct GeometryJson {
    #[serde(rename = "type")]
    kind: String,
    /// Rings of positions. Kept loose so shape errors get a precise message.
    coordinates: Vec<Vec<Vec<f64>>>,
}

fn feature_kind() -> String {
    FEATURE.to_string()
}

/// Serialize a world as pretty-printed GeoJSON
pub fn to_geojson_string(world: &WorldState) -> Result<String, SaveError> {
    let features = world
        .iter()
        .map(|plate| FeatureJson {
            kind: FEATURE.to_string(),
            properties: Some(PropertiesJson {
                name: Some(plate.name.clone()),
                id: Some(plate.id.0),
            }),
            geometry: GeometryJson {
                kind: POLYGON.to_string(),
                coordinates: vec![plate.ring().iter().map(|p| p.to_vec()).collect()],
            },
        })
        .collect();

    let collection = FeatureCollectionJson {
        kind: FEATURE_COLLECTION.to_string(),
        features,
    };
    Ok(serde_json::to_string_pretty(&collection)?)
}

/// Parse a world from GeoJSON text
pub fn from_geojson_str(json: &str) -> Result<WorldState, LoadError> {
    let collection: FeatureCollectionJson = serde_json::from_str(json)?;
    if collection.kind != FEATURE_COLLECTION {
        return Err(LoadError::NotFeatureCollection(collection.kind));
    }

    let count = collection.features.len();
    let mut world = WorldState::new();

    for (index, feature) in collection.features.into_iter().enumerate() {
        let properties = feature.properties.ok_or(LoadError::MissingName { feature: index })?;
        let name = properties.name.ok_or(LoadError::MissingName { feature: index })?;
        let id = PlateId(properties.id.unwrap_or(index as u32 + 1));

        let ring = parse_ring(index, feature.geometry)?;
        let polygon = polygon_from_ring(&ring);
        if !geometry::is_valid(&polygon) {
            tracing::warn!("Loaded plate {} ({}) is not a valid simple polygon", id, name);
        }

        let plate = Plate::new(id, name, polygon, jet_color(index, count));
        world.insert(plate).map_err(|_| LoadError::DuplicateId(id))?;
    }

    Ok(world)
}

fn parse_ring(feature: usize, geometry: GeometryJson) -> Result<Vec<[f64; 2]>, LoadError> {
    if geometry.kind != POLYGON {
        return Err(LoadError::UnsupportedGeometry {
            feature,
            kind: geometry.kind,
        });
    }

    let mut rings = geometry.coordinates.into_iter();
    let exterior = rings.next().ok_or(LoadError::MissingRing { feature })?;
    let holes = rings.count();
    if holes > 0 {
        return Err(LoadError::HasHoles { feature, holes });
    }

    let ring = exterior
        .iter()
        .enumerate()
        .map(|(index, position)| match position.as_slice() {
            [x, y] => Ok([*x, *y]),
            _ => Err(LoadError::BadPosition { feature, index }),
        })
        .collect::<Result<Vec<[f64; 2]>, LoadError>>()?;

    if ring.len() < 4 {
        return Err(LoadError::RingTooShort {
            feature,
            count: ring.len(),
        });
    }
    if ring.first() != ring.last() {
        return Err(LoadError::RingNotClosed { feature });
    }

    Ok(ring)
}

/// Write a world to a GeoJSON file
pub fn save_world(world: &WorldState, path: &Path) -> Result<(), SaveError> {
    let json = to_geojson_string(world)?;
    std::fs::write(path, json)?;
    tracing::info!("Saved {} plate(s) to {}", world.len(), path.display());
    Ok(())
}

/// Read a world from a GeoJSON file
pub fn load_world(path: &Path) -> Result<WorldState, LoadError> {
    let content = std::fs::read_to_string(path)?;
    let world = from_geojson_str(&content)?;
    tracing::info!("Loaded {} plate(s) from {}", world.len(), path.display());
    Ok(world)
}
