use thiserror::Error;

use crate::core::types::PlateId;
use crate::persistence::{LoadError, SaveError};

#[derive(Error, Debug)]
pub enum PlateError {
    #[error("Generation exhausted: plate {plate} not placed after {attempts} attempts")]
    GenerationExhausted { plate: PlateId, attempts: u32 },

    #[error("Duplicate plate id: {0}")]
    DuplicatePlate(PlateId),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Load error: {0}")]
    Load(#[from] LoadError),

    #[error("Save error: {0}")]
    Save(#[from] SaveError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Problems with a configuration file or with values inside it
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid range for {field}: min {min} > max {max}")]
    InvertedRange { field: &'static str, min: i64, max: i64 },

    #[error("Degenerate box for {field}: width and height must be positive")]
    DegenerateBox { field: &'static str },

    #[error("{field} must be at least {minimum}")]
    TooSmall { field: &'static str, minimum: i64 },
}

pub type Result<T> = std::result::Result<T, PlateError>;
