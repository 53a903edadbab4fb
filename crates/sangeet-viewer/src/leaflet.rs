//! Leaflet bridge.
//!
//! Leaflet runs inside the webview; every map operation is a small script
//! handed to `document::eval`. The map instance and its markers live on
//! `window.__sangeetMap` so later scripts can reach them.

use dioxus::prelude::*;
use serde::{Deserialize, Serialize};

use sangeet_core::{
    LatLng, MapError, MapOptions, MapResult, MapSurface, MarkerIcon, MarkerView, RegionId,
    TileLayerConfig,
};

/// Outcome reported by the map creation script.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
enum InitStatus {
    Ready,
    Missing,
    Failed,
}

#[derive(Debug, Clone, Deserialize)]
struct InitReport {
    status: InitStatus,
    message: Option<String>,
}

impl InitReport {
    fn into_result(self) -> MapResult<()> {
        let message = self.message.unwrap_or_default();
        match self.status {
            InitStatus::Ready => Ok(()),
            InitStatus::Missing => Err(MapError::LibraryUnavailable(message)),
            InitStatus::Failed => Err(MapError::Initialization(message)),
        }
    }
}

/// Map options as Leaflet expects them.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct LeafletMapOptions {
    max_bounds: [[f64; 2]; 2],
    min_zoom: u8,
    max_zoom: u8,
}

#[derive(Serialize)]
struct TileOptions<'a> {
    attribution: &'a str,
    opacity: f32,
}

#[derive(Serialize)]
struct IconOptions<'a> {
    #[serde(rename = "className")]
    class_name: &'a str,
    html: &'a str,
    #[serde(rename = "iconSize")]
    icon_size: [u32; 2],
    #[serde(rename = "iconAnchor")]
    icon_anchor: [u32; 2],
}

impl<'a> From<&'a MarkerIcon> for IconOptions<'a> {
    fn from(icon: &'a MarkerIcon) -> Self {
        Self {
            class_name: icon.class_name,
            html: &icon.html,
            icon_size: [icon.size, icon.size],
            icon_anchor: [icon.anchor, icon.anchor],
        }
    }
}

fn to_js<T: Serialize + ?Sized>(value: &T) -> MapResult<String> {
    serde_json::to_string(value).map_err(|e| MapError::Bridge(e.to_string()))
}

fn lat_lng(at: LatLng) -> String {
    format!("[{}, {}]", at.lat, at.lng)
}

/// Script builders. Each returns a self-contained snippet.
pub mod scripts {
    use super::*;

    /// Verifies Leaflet is present and creates the map on its container.
    /// Evaluates to an `InitReport`.
    pub fn create_map(options: &MapOptions) -> MapResult<String> {
        let [south_west, north_east] = options.max_bounds;
        let leaflet_options = LeafletMapOptions {
            max_bounds: [
                [south_west.lat, south_west.lng],
                [north_east.lat, north_east.lng],
            ],
            min_zoom: options.min_zoom,
            max_zoom: options.max_zoom,
        };
        Ok(format!(
            r#"
            if (typeof window.L === 'undefined') {{
                return {{ status: 'missing', message: 'window.L is undefined' }};
            }}
            try {{
                const container = document.getElementById({container});
                if (!container) {{
                    return {{ status: 'failed', message: 'map container not found' }};
                }}
                if (window.__sangeetMap) {{
                    window.__sangeetMap.map.remove();
                }}
                const map = L.map(container, {options}).setView({center}, {zoom});
                window.__sangeetMap = {{ map: map, markers: {{}} }};
                return {{ status: 'ready', message: null }};
            }} catch (e) {{
                return {{ status: 'failed', message: String(e) }};
            }}
            "#,
            container = to_js(&options.container_id)?,
            options = to_js(&leaflet_options)?,
            center = lat_lng(options.center),
            zoom = options.initial_zoom,
        ))
    }

    pub fn attach_tiles(tiles: &TileLayerConfig) -> MapResult<String> {
        let options = TileOptions {
            attribution: &tiles.attribution,
            opacity: tiles.opacity,
        };
        Ok(format!(
            "const s = window.__sangeetMap; if (s) {{ L.tileLayer({url}, {options}).addTo(s.map); }}",
            url = to_js(&tiles.url_template)?,
            options = to_js(&options)?,
        ))
    }

    pub fn place_marker(view: &MarkerView) -> MapResult<String> {
        Ok(format!(
            concat!(
                "const s = window.__sangeetMap; if (s) {{ ",
                "const m = L.marker({at}, {{ icon: L.divIcon({icon}), draggable: false, keyboard: false }}).addTo(s.map); ",
                "s.markers[{id}] = m; }}"
            ),
            at = lat_lng(view.location),
            icon = to_js(&IconOptions::from(&view.icon))?,
            id = view.id,
        ))
    }

    pub fn set_marker_icon(id: RegionId, icon: &MarkerIcon) -> MapResult<String> {
        Ok(format!(
            "const s = window.__sangeetMap; if (s && s.markers[{id}]) {{ s.markers[{id}].setIcon(L.divIcon({icon})); }}",
            id = id,
            icon = to_js(&IconOptions::from(icon))?,
        ))
    }

    pub fn pan_to(at: LatLng) -> String {
        format!(
            "const s = window.__sangeetMap; if (s) {{ s.map.panTo({}); }}",
            lat_lng(at)
        )
    }

    pub fn invalidate_size() -> String {
        "const s = window.__sangeetMap; if (s) { s.map.invalidateSize(); }".to_string()
    }

    /// Streams the region id of every clicked marker over the eval channel.
    pub fn subscribe_clicks() -> String {
        r#"
        const s = window.__sangeetMap;
        if (s) {
            for (const [id, marker] of Object.entries(s.markers)) {
                marker.off('click');
                marker.on('click', () => dioxus.send(Number(id)));
            }
        }
        await new Promise(() => {});
        "#
        .to_string()
    }
}

/// [`MapSurface`] backed by Leaflet in the webview.
#[derive(Debug)]
pub struct LeafletSurface {
    scripts_sent: usize,
}

impl LeafletSurface {
    /// Creates the map. Fails when Leaflet did not load or the container
    /// cannot host a map.
    pub async fn connect(options: &MapOptions) -> MapResult<Self> {
        let script = scripts::create_map(options)?;
        let report: InitReport = document::eval(&script)
            .join()
            .await
            .map_err(|e| MapError::Bridge(format!("{:?}", e)))?;
        report.into_result()?;
        tracing::info!(container = %options.container_id, "Leaflet map created");
        Ok(Self { scripts_sent: 1 })
    }

    /// Number of scripts issued against this map.
    pub fn scripts_sent(&self) -> usize {
        self.scripts_sent
    }

    fn run(&mut self, script: String) -> MapResult<()> {
        tracing::trace!(len = script.len(), "Evaluating map script");
        let _ = document::eval(&script);
        self.scripts_sent += 1;
        Ok(())
    }
}

impl MapSurface for LeafletSurface {
    fn attach_tiles(&mut self, tiles: &TileLayerConfig) -> MapResult<()> {
        self.run(scripts::attach_tiles(tiles)?)
    }

    fn place_marker(&mut self, marker: &MarkerView) -> MapResult<()> {
        self.run(scripts::place_marker(marker)?)
    }

    fn set_marker_icon(&mut self, id: RegionId, icon: &MarkerIcon) -> MapResult<()> {
        self.run(scripts::set_marker_icon(id, icon)?)
    }

    fn pan_to(&mut self, at: LatLng) -> MapResult<()> {
        self.run(scripts::pan_to(at))
    }

    fn invalidate_size(&mut self) -> MapResult<()> {
        self.run(scripts::invalidate_size())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sangeet_core::{Catalog, Selection};

    #[test]
    fn test_create_map_script() {
        let script = scripts::create_map(&MapOptions::default()).unwrap();
        assert!(script.contains(r#"document.getElementById("leaflet-map")"#));
        assert!(script.contains(r#""maxBounds":[[22.0,68.0],[32.0,80.0]]"#));
        assert!(script.contains(r#""minZoom":6"#));
        assert!(script.contains("setView([26.9124, 75.7873], 7)"));
    }

    #[test]
    fn test_place_marker_script_escapes_html() {
        let catalog = Catalog::rajasthan();
        let views = sangeet_core::marker_views(catalog, &Selection::new());
        let script = scripts::place_marker(&views[0]).unwrap();
        assert!(script.contains("s.markers[1] = m"));
        assert!(script.contains(r#""className":"custom-region-icon""#));
        assert!(script.contains(r#""iconAnchor":[110,110]"#));
        // HTML attribute quotes are JSON-escaped, not raw.
        assert!(script.contains(r#"class=\"region-icon-outer\""#));
    }

    #[test]
    fn test_tile_script() {
        let script = scripts::attach_tiles(&TileLayerConfig::default()).unwrap();
        assert!(
            script.contains(r#"L.tileLayer("https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png""#)
        );
        assert!(script.contains(r#""opacity":0.8"#));
    }

    #[test]
    fn test_init_report_mapping() {
        let missing = InitReport {
            status: InitStatus::Missing,
            message: Some("window.L is undefined".into()),
        };
        assert!(matches!(
            missing.into_result(),
            Err(MapError::LibraryUnavailable(_))
        ));

        let report: InitReport =
            serde_json::from_str(r#"{ "status": "failed", "message": "boom" }"#).unwrap();
        assert_eq!(
            report.into_result(),
            Err(MapError::Initialization("boom".into()))
        );
    }
}
