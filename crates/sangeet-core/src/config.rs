//! Configuration types for the map viewer

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, LatLng};
use crate::error::ConfigError;

/// Main viewer configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Map widget options
    pub map: MapOptions,

    /// Base tile layer
    pub tiles: TileLayerConfig,

    /// Where the Leaflet script and stylesheet are loaded from
    pub leaflet: LeafletAssets,

    /// Desktop window options
    pub window: WindowConfig,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            map: MapOptions::default(),
            tiles: TileLayerConfig::default(),
            leaflet: LeafletAssets::default(),
            window: WindowConfig::default(),
        }
    }
}

impl ViewerConfig {
    /// Reads a JSON config file. Missing fields take their defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Checks zoom levels and bounds for consistency.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let map = &self.map;
        if map.min_zoom > map.max_zoom {
            return Err(ConfigError::Invalid(format!(
                "min_zoom {} exceeds max_zoom {}",
                map.min_zoom, map.max_zoom
            )));
        }
        if !(map.min_zoom..=map.max_zoom).contains(&map.initial_zoom) {
            return Err(ConfigError::Invalid(format!(
                "initial_zoom {} outside {}..={}",
                map.initial_zoom, map.min_zoom, map.max_zoom
            )));
        }
        let [south_west, north_east] = map.max_bounds;
        if south_west.lat >= north_east.lat || south_west.lng >= north_east.lng {
            return Err(ConfigError::Invalid(
                "max_bounds must be [south-west, north-east]".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.tiles.opacity) {
            return Err(ConfigError::Invalid(format!(
                "tile opacity {} outside 0..=1",
                self.tiles.opacity
            )));
        }
        Ok(())
    }
}

/// Map widget options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapOptions {
    /// DOM id of the map container
    pub container_id: String,
    pub center: LatLng,
    pub initial_zoom: u8,
    pub min_zoom: u8,
    pub max_zoom: u8,
    /// Panning limit as `[south-west, north-east]`
    pub max_bounds: [LatLng; 2],
    /// Delay before recomputing the viewport size after first layout
    pub invalidate_delay_ms: u64,
}

impl Default for MapOptions {
    fn default() -> Self {
        Self {
            container_id: "leaflet-map".to_string(),
            center: Catalog::rajasthan().center,
            initial_zoom: 7,
            min_zoom: 6,
            max_zoom: 12,
            max_bounds: [LatLng::new(22.0, 68.0), LatLng::new(32.0, 80.0)],
            invalidate_delay_ms: 500,
        }
    }
}

/// Base tile layer configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TileLayerConfig {
    pub url_template: String,
    pub attribution: String,
    pub opacity: f32,
}

impl Default for TileLayerConfig {
    fn default() -> Self {
        Self {
            url_template: "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png".to_string(),
            attribution: r#"&copy; <a href="http://osm.org/copyright">OpenStreetMap</a> contributors"#
                .to_string(),
            opacity: 0.8,
        }
    }
}

/// Leaflet asset locations, declared in the window head at launch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LeafletAssets {
    pub script_url: String,
    pub stylesheet_url: String,
}

impl Default for LeafletAssets {
    fn default() -> Self {
        Self {
            script_url: "https://unpkg.com/leaflet@1.9.4/dist/leaflet.js".to_string(),
            stylesheet_url: "https://unpkg.com/leaflet@1.9.4/dist/leaflet.css".to_string(),
        }
    }
}

/// Desktop window configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Mhara Sangeet - Rajasthan Music Map".to_string(),
            width: 1400,
            height: 900,
        }
    }
}
