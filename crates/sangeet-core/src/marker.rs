//! Marker appearance derived from the catalog and the current selection.

use serde::Serialize;

use crate::catalog::{Catalog, LatLng, Region, RegionId};
use crate::selection::Selection;

/// Edge length of the square icon box, in pixels. Large enough to hold the glow.
pub const ICON_SIZE: u32 = 220;

/// Blur applied to the glow disc, in pixels.
const GLOW_BLUR_PX: u32 = 18;

const GLOW_ALPHA_START: f32 = 0.45;
const GLOW_ALPHA_MID: f32 = 0.15;

/// A rendered marker icon: HTML plus the box geometry the map widget needs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarkerIcon {
    pub html: String,
    pub class_name: &'static str,
    pub size: u32,
    /// Anchor offset from the top-left corner; the icon is centered on its coordinate.
    pub anchor: u32,
    pub selected: bool,
}

impl MarkerIcon {
    /// Builds the pill-shaped label with a radial glow in the region's color.
    pub fn for_region(region: &Region, selected: bool) -> Self {
        let token = region.color_token;
        let color = token.hex();
        let glow_start = token.rgba(GLOW_ALPHA_START);
        let glow_mid = token.rgba(GLOW_ALPHA_MID);
        let (scale, shadow) = if selected {
            ("scale(1.1)", "0 8px 15px rgba(0,0,0,0.4)")
        } else {
            ("scale(1)", "0 4px 10px rgba(0,0,0,0.3)")
        };
        let radius = ICON_SIZE / 2;
        let label = region.short_label().to_uppercase();
        let selected_class = if selected { " selected" } else { "" };

        let html = format!(
            concat!(
                r#"<div class="region-icon-outer" style="position:relative; width:{size}px; height:{size}px; display:flex; align-items:center; justify-content:center;">"#,
                r#"<div class="region-glow" style="position:absolute; width:{size}px; height:{size}px; border-radius:{radius}px; background: radial-gradient(circle at 50% 45%, {glow_start} 0%, {glow_mid} 35%, rgba(0,0,0,0) 75%); filter: blur({blur}px); opacity:1;"></div>"#,
                r#"<div class="region-marker{selected_class}" style="background-color:{color}; border: 3px solid white; box-shadow: {shadow}; transform: {scale}; transition: transform 0.18s, box-shadow 0.18s; position:relative; z-index:2; display:flex; align-items:center; justify-content:center; padding:8px 16px; border-radius:20px;">"#,
                r#"<span class="region-label">{label}</span>"#,
                r#"</div></div>"#
            ),
            size = ICON_SIZE,
            radius = radius,
            glow_start = glow_start,
            glow_mid = glow_mid,
            blur = GLOW_BLUR_PX,
            selected_class = selected_class,
            color = color,
            shadow = shadow,
            scale = scale,
            label = escape_html(&label),
        );

        Self {
            html,
            class_name: "custom-region-icon",
            size: ICON_SIZE,
            anchor: radius,
            selected,
        }
    }
}

/// Desired state of one marker for the current selection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarkerView {
    pub id: RegionId,
    pub location: LatLng,
    pub selected: bool,
    pub icon: MarkerIcon,
}

impl MarkerView {
    pub fn new(region: &Region, selected: bool) -> Self {
        Self {
            id: region.id,
            location: region.location,
            selected,
            icon: MarkerIcon::for_region(region, selected),
        }
    }
}

/// One marker view per region, in catalog order.
pub fn marker_views(catalog: &Catalog, selection: &Selection) -> Vec<MarkerView> {
    catalog
        .regions
        .iter()
        .map(|region| MarkerView::new(region, selection.is_selected(region.id)))
        .collect()
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
