//! Error types for comfort-rings-core

use thiserror::Error;

/// Main error type for the comfort-rings-core library
#[derive(Error, Debug)]
pub enum Error {
    /// A taste vector dimension is outside {0.2, 0.5, 0.8}
    #[error("invalid value {value} for {dimension}, must be one of [0.2, 0.5, 0.8]")]
    InvalidVectorValue { dimension: String, value: f64 },

    /// Food not present in the catalog
    #[error("unknown food: {0}")]
    UnknownFood(String),

    /// Archetype name not recognized
    #[error("unknown archetype: {0}")]
    UnknownArchetype(String),

    /// Food registry failed validation
    #[error("food registry validation failed:\n{0}")]
    Registry(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type alias for comfort-rings-core
pub type Result<T> = std::result::Result<T, Error>;
