//! Color tokens used by regions.
//!
//! Every region is declared with one of these tokens, so the full set of
//! colors the UI can ask for is known at compile time.

use serde::{Deserialize, Serialize};

/// Closed set of region color tokens.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ThemeToken {
    Pink,
    Purple,
    Teal,
    Indigo,
    Cyan,
    Green,
    Amber,
    Lime,
    Red,
    Blue,
    Yellow,
    Sky,
    Emerald,
    /// Neutral token used when no region is selected.
    #[default]
    Gray,
}

impl ThemeToken {
    /// Hex color used for marker fills and glows.
    pub fn hex(&self) -> &'static str {
        match self {
            ThemeToken::Pink => "#db2777",
            ThemeToken::Purple => "#7e22ce",
            ThemeToken::Teal => "#0d9488",
            ThemeToken::Indigo => "#4338ca",
            ThemeToken::Cyan => "#0891b2",
            ThemeToken::Green => "#15803d",
            ThemeToken::Amber => "#b45309",
            ThemeToken::Lime => "#65a30d",
            ThemeToken::Red => "#b91c1c",
            ThemeToken::Blue => "#1d4ed8",
            ThemeToken::Yellow => "#ca8a04",
            ThemeToken::Sky => "#0369a1",
            ThemeToken::Emerald => "#047857",
            ThemeToken::Gray => "#374151",
        }
    }

    /// Token name as used in CSS class suffixes.
    pub fn css_value(&self) -> &'static str {
        match self {
            ThemeToken::Pink => "pink",
            ThemeToken::Purple => "purple",
            ThemeToken::Teal => "teal",
            ThemeToken::Indigo => "indigo",
            ThemeToken::Cyan => "cyan",
            ThemeToken::Green => "green",
            ThemeToken::Amber => "amber",
            ThemeToken::Lime => "lime",
            ThemeToken::Red => "red",
            ThemeToken::Blue => "blue",
            ThemeToken::Yellow => "yellow",
            ThemeToken::Sky => "sky",
            ThemeToken::Emerald => "emerald",
            ThemeToken::Gray => "gray",
        }
    }

    /// Class for the region header banner.
    pub fn header_class(&self) -> String {
        format!("region-header bg-{}", self.css_value())
    }

    /// Class for accented text (tradition titles, icons).
    pub fn text_class(&self) -> String {
        format!("text-{}", self.css_value())
    }

    /// Class for the reset button.
    pub fn button_class(&self) -> String {
        format!("reset-button btn-{}", self.css_value())
    }

    /// Parses `#rrggbb` into its components.
    pub fn rgb(&self) -> (u8, u8, u8) {
        let hex = self.hex().trim_start_matches('#');
        let value = u32::from_str_radix(hex, 16).unwrap_or(0);
        (
            ((value >> 16) & 0xff) as u8,
            ((value >> 8) & 0xff) as u8,
            (value & 0xff) as u8,
        )
    }

    /// `rgba(...)` string for this token at the given alpha.
    pub fn rgba(&self, alpha: f32) -> String {
        let (r, g, b) = self.rgb();
        format!("rgba({}, {}, {}, {})", r, g, b, alpha)
    }

    /// Returns all tokens.
    pub fn all() -> &'static [ThemeToken] {
        &[
            ThemeToken::Pink,
            ThemeToken::Purple,
            ThemeToken::Teal,
            ThemeToken::Indigo,
            ThemeToken::Cyan,
            ThemeToken::Green,
            ThemeToken::Amber,
            ThemeToken::Lime,
            ThemeToken::Red,
            ThemeToken::Blue,
            ThemeToken::Yellow,
            ThemeToken::Sky,
            ThemeToken::Emerald,
            ThemeToken::Gray,
        ]
    }
}
