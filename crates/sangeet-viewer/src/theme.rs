//! Accent theming for the map viewer.
//!
//! The page picks up the color token of the selected region through a
//! `data-accent` attribute and a `--accent` CSS variable.

use dioxus::prelude::*;

use sangeet_core::ThemeToken;

/// Root component that applies the accent token.
#[component]
pub fn ThemedRoot(accent: ThemeToken, children: Element) -> Element {
    rsx! {
        div {
            class: "themed-root",
            "data-accent": "{accent.css_value()}",
            style: "--accent: {accent.hex()};",
            {children}
        }
    }
}
