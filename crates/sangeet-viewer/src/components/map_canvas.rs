//! Interactive map panel.
//!
//! Owns the [`MapController`] and its markers. The controller is created once
//! per mount; marker clicks write the shared selection and every selection
//! change is pushed back to the markers.

use std::time::Duration;

use dioxus::prelude::*;

use sangeet_core::{MapController, MapStatus, RegionId, ViewerConfig};

use crate::leaflet::{LeafletSurface, scripts};
use crate::state::AppState;

/// Map panel with loading, error, and ready states.
#[component]
pub fn MapCanvas(state: Signal<AppState>, config: ViewerConfig) -> Element {
    let catalog = state.read().catalog;
    let mut controller = use_signal(move || MapController::<LeafletSurface>::new(catalog));

    // Push selection changes to the markers.
    use_effect(move || {
        let selection = state.read().selection;
        if let Err(err) = controller.write().sync(&selection) {
            tracing::warn!(error = %err, "Failed to update markers");
        }
    });

    let container_id = config.map.container_id.clone();

    let on_mounted = move |_| {
        let config = config.clone();
        spawn(async move {
            let surface = LeafletSurface::connect(&config.map).await;
            let selection = state.read().selection;
            let ready = controller
                .write()
                .initialize(surface, &config.tiles, &selection)
                .is_ready();
            if !ready {
                return;
            }

            spawn(listen_for_clicks(state));

            tokio::time::sleep(Duration::from_millis(config.map.invalidate_delay_ms)).await;
            if let Err(err) = controller.write().invalidate_size() {
                tracing::warn!(error = %err, "Failed to resize map");
            }
            let scripts = controller
                .read()
                .surface()
                .map(LeafletSurface::scripts_sent)
                .unwrap_or_default();
            tracing::debug!(scripts, "Map settled");
        });
    };

    let status = controller.read().status().clone();

    rsx! {
        div {
            class: "map-panel",

            match &status {
                MapStatus::Loading => rsx! {
                    div {
                        class: "map-overlay map-loading",
                        span { class: "map-spinner", "⟳" }
                        p { "Loading Map Assets..." }
                    }
                },
                MapStatus::Failed(err) => rsx! {
                    div {
                        class: "map-overlay map-error",
                        span { class: "map-error-icon", "📍" }
                        h3 { class: "map-error-title", "Map Loading Error" }
                        p { class: "map-error-message", "{err.user_message()}" }
                    }
                },
                MapStatus::Ready => rsx! {
                    div {
                        class: "map-instructions",
                        "📍 Click a colored label on the map to explore its music."
                    }
                },
            }

            if status.error().is_none() {
                div {
                    id: "{container_id}",
                    class: "map-container",
                    onmounted: on_mounted,
                }
            }
        }
    }
}

/// Forwards marker clicks from the webview into the selection.
async fn listen_for_clicks(mut state: Signal<AppState>) {
    let mut eval = document::eval(&scripts::subscribe_clicks());
    loop {
        match eval.recv::<RegionId>().await {
            Ok(id) => {
                if let Err(err) = state.write().select(id) {
                    tracing::warn!(error = %err, "Ignoring click on unknown marker");
                }
            }
            Err(err) => {
                tracing::debug!("Marker click channel closed: {:?}", err);
                break;
            }
        }
    }
}
