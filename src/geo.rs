//! Geographic coordinates and viewport parameters.
//!
//! Positions drive the map-focus side effects; they are validated at
//! construction and immutable afterwards.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// A validated latitude/longitude pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    lat: f64,
    lon: f64,
}

impl GeoPoint {
    /// Construct a point, rejecting coordinates outside plausible bounds.
    pub fn new(lat: f64, lon: f64) -> Result<Self> {
        if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lon) {
            return Err(Error::CoordinateOutOfBounds { lat, lon });
        }
        Ok(GeoPoint { lat, lon })
    }

    /// Construct from compiled-in dataset literals.
    ///
    /// Callers must only pass in-bounds values; the dataset tests assert
    /// every literal round-trips through [`GeoPoint::new`].
    pub(crate) const fn from_dataset(lat: f64, lon: f64) -> Self {
        GeoPoint { lat, lon }
    }

    pub fn lat(&self) -> f64 {
        self.lat
    }

    pub fn lon(&self) -> f64 {
        self.lon
    }
}

/// A map viewport target: center and zoom level.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub center: GeoPoint,
    pub zoom: u8,
}
