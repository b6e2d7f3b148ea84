//! Error types for the catalog engine.
//!
//! Every failure path in the interaction core degrades to an empty or
//! default state; the variants here cover the ambient layers (dataset
//! construction, configuration, hydration) where a caller can meaningfully
//! react.

use thiserror::Error;

/// Crate-wide error type.
#[derive(Debug, Error)]
pub enum Error {
    /// A coordinate fell outside plausible geographic bounds.
    #[error("coordinate out of bounds: lat {lat}, lon {lon}")]
    CoordinateOutOfBounds { lat: f64, lon: f64 },

    /// A record was constructed with an empty required field.
    #[error("record field '{field}' must be non-empty")]
    EmptyField { field: &'static str },

    /// Configuration loading or validation failed.
    #[error("configuration error: {0}")]
    Config(String),

    /// The one-shot tour fetch failed at the transport level.
    #[error("tour fetch failed: {0}")]
    Fetch(#[from] reqwest::Error),

    /// The tour payload could not be decoded.
    #[error("tour payload malformed: {0}")]
    Payload(#[from] serde_json::Error),
}

impl From<config::ConfigError> for Error {
    fn from(err: config::ConfigError) -> Self {
        Error::Config(err.to_string())
    }
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;
