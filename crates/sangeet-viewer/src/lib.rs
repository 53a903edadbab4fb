//! Mhara Sangeet map viewer
//!
//! A Dioxus desktop application showing Rajasthan's regional folk music
//! traditions on an interactive Leaflet map.

pub mod components;
pub mod leaflet;
pub mod state;
pub mod theme;
