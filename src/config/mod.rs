//! Engine configuration
//!
//! Layered configuration for the catalog engine: compiled defaults, an
//! optional TOML file, then `KORA_*` environment overrides. The defaults
//! reproduce the viewport and timing constants the views shipped with.

use crate::error::Result;
use crate::focus::FocusTuning;
use crate::geo::{GeoPoint, Viewport};
use crate::logging::LoggingConfig;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Initial map viewport.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapConfig {
    pub center_lat: f64,
    pub center_lon: f64,
    pub zoom: u8,
}

impl Default for MapConfig {
    fn default() -> Self {
        // Sikkim overview framing.
        MapConfig {
            center_lat: 27.533,
            center_lon: 88.512,
            zoom: 8,
        }
    }
}

impl MapConfig {
    /// The configured viewport, re-validated against geographic bounds.
    pub fn initial_viewport(&self) -> Result<Viewport> {
        Ok(Viewport {
            center: GeoPoint::new(self.center_lat, self.center_lon)?,
            zoom: self.zoom,
        })
    }
}

/// Focus transition timings and the search debounce window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FocusConfig {
    pub pick_zoom: u8,
    pub pick_duration_ms: u64,
    pub hover_zoom: u8,
    pub hover_duration_ms: u64,
    pub debounce_ms: u64,
}

impl Default for FocusConfig {
    fn default() -> Self {
        let tuning = FocusTuning::default();
        FocusConfig {
            pick_zoom: tuning.pick_zoom,
            pick_duration_ms: tuning.pick_duration_ms,
            hover_zoom: tuning.hover_zoom,
            hover_duration_ms: tuning.hover_duration_ms,
            debounce_ms: 100,
        }
    }
}

impl FocusConfig {
    pub fn tuning(&self) -> FocusTuning {
        FocusTuning {
            pick_zoom: self.pick_zoom,
            pick_duration_ms: self.pick_duration_ms,
            hover_zoom: self.hover_zoom,
            hover_duration_ms: self.hover_duration_ms,
        }
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

/// Tour-stop hydration settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToursConfig {
    pub url: String,
}

impl Default for ToursConfig {
    fn default() -> Self {
        ToursConfig {
            url: "/data/tours.json".to_string(),
        }
    }
}

/// Root configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KoraConfig {
    pub map: MapConfig,
    pub focus: FocusConfig,
    pub tours: ToursConfig,
    pub logging: LoggingConfig,
}

impl KoraConfig {
    /// Load configuration: defaults, then an optional TOML file, then
    /// `KORA_*` environment variables (`KORA_FOCUS__DEBOUNCE_MS=250`).
    pub fn load(file: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder().add_source(Config::try_from(&KoraConfig::default())?);
        if let Some(path) = file {
            builder = builder.add_source(File::from(path).required(false));
        }
        let merged = builder
            .add_source(Environment::with_prefix("KORA").separator("__"))
            .build()?;
        Ok(merged.try_deserialize()?)
    }

    /// Load from a specific file, which must exist and parse.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let merged = Config::builder()
            .add_source(Config::try_from(&KoraConfig::default())?)
            .add_source(File::from(path))
            .build()?;
        Ok(merged.try_deserialize()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_reproduce_view_constants() {
        let config = KoraConfig::default();
        assert_eq!(config.map.zoom, 8);
        assert_eq!(config.focus.pick_zoom, 12);
        assert_eq!(config.focus.pick_duration_ms, 1200);
        assert_eq!(config.focus.hover_zoom, 9);
        assert_eq!(config.focus.hover_duration_ms, 600);
        assert_eq!(config.tours.url, "/data/tours.json");

        let viewport = config.map.initial_viewport().unwrap();
        assert_eq!(viewport.center.lat(), 27.533);
    }

    #[test]
    fn test_file_overrides_defaults() {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .unwrap();
        writeln!(file, "[focus]\ndebounce_ms = 250\n\n[tours]\nurl = \"https://example.test/tours.json\"").unwrap();

        let config = KoraConfig::load_from_file(file.path()).unwrap();
        assert_eq!(config.focus.debounce(), Duration::from_millis(250));
        assert_eq!(config.tours.url, "https://example.test/tours.json");
        // Untouched sections keep their defaults.
        assert_eq!(config.map.zoom, 8);
    }

    #[test]
    fn test_missing_optional_file_falls_back_to_defaults() {
        let config = KoraConfig::load(Some(Path::new("/nonexistent/kora.toml"))).unwrap();
        assert_eq!(config, KoraConfig::default());
    }
}
