//! Core of the Mhara Sangeet regional music map.
//!
//! Holds the static region catalog, the selection state shared by the map
//! and detail views, marker appearance, the map-widget contract with its
//! controller, outbound link helpers, and viewer configuration. Nothing here
//! depends on the UI framework.

pub mod catalog;
pub mod config;
pub mod error;
pub mod links;
pub mod map;
pub mod marker;
pub mod selection;
pub mod theme;

pub use catalog::{Catalog, LatLng, Region, RegionId, Tradition};
pub use config::{LeafletAssets, MapOptions, TileLayerConfig, ViewerConfig, WindowConfig};
pub use error::{CatalogError, ConfigError, MapError, MapResult, Result, SangeetError};
pub use links::SearchImageBlock;
pub use map::{MapController, MapStatus, MapSurface, MarkerHandle};
pub use marker::{MarkerIcon, MarkerView, marker_views};
pub use selection::{DetailView, Selection};
pub use theme::ThemeToken;
