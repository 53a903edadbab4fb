//! UI components for the map viewer.

mod app;
mod map_canvas;
mod region_details;
mod tradition_card;

pub use app::*;
pub use map_canvas::*;
pub use region_details::*;
pub use tradition_card::*;
