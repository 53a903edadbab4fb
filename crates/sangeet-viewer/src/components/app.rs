//! Root application component for the map viewer.

use dioxus::prelude::*;

use sangeet_core::ViewerConfig;

use crate::state::AppState;
use crate::theme::ThemedRoot;

use super::{MapCanvas, RegionDetails};

/// Root application component.
#[component]
pub fn App(state: Signal<AppState>, config: ViewerConfig) -> Element {
    let accent = state.read().accent();
    let title = state.read().catalog.title;

    rsx! {
        ThemedRoot {
            accent,
            div {
                class: "sangeet-viewer",

                Header { title }

                main {
                    class: "main-content",

                    MapCanvas { state, config }

                    RegionDetails { state }
                }
            }
        }
    }
}

/// Page header with title and subtitle.
#[component]
fn Header(title: &'static str) -> Element {
    let (lead, rest) = split_title(title);

    rsx! {
        header {
            class: "header",
            h1 {
                class: "header-title",
                span { class: "header-title-lead", "{lead}" }
                " {rest}"
            }
            p {
                class: "header-subtitle",
                "Explore the deep, regional roots of the Desert State's musical heritage."
            }
        }
    }
}

/// Splits a title into its highlighted first word and the remainder.
fn split_title(title: &str) -> (&str, &str) {
    title.split_once(' ').unwrap_or((title, ""))
}
