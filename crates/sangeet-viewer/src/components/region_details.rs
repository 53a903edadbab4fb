//! Detail panel for the selected region.

use dioxus::prelude::*;

use sangeet_core::links;

use crate::state::AppState;

use super::TraditionCard;

/// Side panel listing the traditions of the selected region.
#[component]
pub fn RegionDetails(state: Signal<AppState>) -> Element {
    let mut state_write = state;
    let state_read = state.read();
    let detail = state_read.detail();
    let theme = detail.theme();
    let context = state_read.catalog.search_context;
    let area = state_read.catalog.area_name;
    let selected = detail.region();

    rsx! {
        section {
            class: "region-details",

            div {
                class: "{theme.header_class()}",
                h2 { class: "region-title", "{detail.heading()}" }
            }

            div {
                class: "tradition-list",

                if detail.traditions().is_empty() {
                    PlaceholderCard { area: area.to_string() }
                } else {
                    for (index, tradition) in detail.traditions().iter().enumerate() {
                        TraditionCard {
                            key: "{index}",
                            tradition: tradition.clone(),
                            theme,
                            context: context.to_string(),
                        }
                    }
                }
            }

            if let Some(region) = selected {
                div {
                    class: "region-exploration",
                    p { class: "region-exploration-title", "General Region Exploration:" }
                    a {
                        class: "region-exploration-link",
                        href: "{links::region_documentary_url(region)}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        "Search for Documentaries and History on {region.display_name} Music"
                    }
                }

                button {
                    class: "{theme.button_class()}",
                    onclick: move |_| {
                        state_write.write().reset();
                    },
                    "Back to Map Overview"
                }
            }
        }
    }
}

/// Introductory card shown while nothing is selected.
#[component]
fn PlaceholderCard(area: String) -> Element {
    rsx! {
        div {
            class: "empty-state",
            span { class: "empty-state-icon", "📍" }
            h3 {
                class: "empty-state-title",
                "Select a Region Label to Begin"
            }
            p {
                class: "empty-state-message",
                "This interactive map explores the rich, regional folk music traditions of {area}. "
                "Click a colored label on the map to see its major musical styles, famous artists, and example songs."
            }
        }
    }
}
