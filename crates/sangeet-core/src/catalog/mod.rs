//! Static catalog of regions and their musical traditions.
//!
//! The catalog is declared as `static` data and never mutated. Lookups are a
//! linear scan over a small fixed slice.

mod data;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;
use crate::theme::ThemeToken;

/// Stable identifier of a region.
pub type RegionId = u32;

/// Geographic coordinate in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// A musical style within a region.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tradition {
    pub name: &'static str,
    pub description: &'static str,
    pub famous_artists: &'static [&'static str],
    pub example_song: &'static str,
    /// Video id of an embeddable recording, when one is known.
    pub media_reference_id: Option<&'static str>,
}

impl Tradition {
    /// First listed artist, if any.
    pub fn lead_artist(&self) -> Option<&'static str> {
        self.famous_artists.first().copied()
    }
}

/// A named area with one marker on the map.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Region {
    pub id: RegionId,
    pub display_name: &'static str,
    pub color_token: ThemeToken,
    pub location: LatLng,
    pub traditions: &'static [Tradition],
}

impl Region {
    /// Marker label: the first word of the display name.
    pub fn short_label(&self) -> &'static str {
        self.display_name
            .split_whitespace()
            .next()
            .unwrap_or(self.display_name)
    }
}

/// The complete region table plus the metadata the views need.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Catalog {
    pub title: &'static str,
    pub area_name: &'static str,
    /// Adjective appended to outbound search queries.
    pub search_context: &'static str,
    /// Heading shown in the detail panel when nothing is selected.
    pub placeholder_heading: &'static str,
    pub center: LatLng,
    pub regions: &'static [Region],
}

impl Catalog {
    /// The Rajasthan catalog.
    pub fn rajasthan() -> &'static Catalog {
        &data::RAJASTHAN
    }

    /// Looks up a region by id.
    pub fn region(&self, id: RegionId) -> Option<&'static Region> {
        self.regions.iter().find(|r| r.id == id)
    }

    /// Looks up a region by id, failing for unknown ids.
    pub fn require(&self, id: RegionId) -> Result<&'static Region, CatalogError> {
        self.region(id).ok_or(CatalogError::UnknownRegion(id))
    }

    pub fn contains(&self, id: RegionId) -> bool {
        self.region(id).is_some()
    }

    /// Region ids in catalog order.
    pub fn ids(&self) -> impl Iterator<Item = RegionId> + '_ {
        self.regions.iter().map(|r| r.id)
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// Total number of traditions across all regions.
    pub fn tradition_count(&self) -> usize {
        self.regions.iter().map(|r| r.traditions.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_region_ids_are_unique() {
        let catalog = Catalog::rajasthan();
        let ids: HashSet<_> = catalog.ids().collect();
        assert_eq!(ids.len(), catalog.len());
        assert_eq!(catalog.len(), 11);
    }

    #[test]
    fn test_every_region_has_traditions_and_artists() {
        for region in Catalog::rajasthan().regions {
            assert!(!region.traditions.is_empty(), "{}", region.display_name);
            for tradition in region.traditions {
                assert!(!tradition.famous_artists.is_empty(), "{}", tradition.name);
                assert!(!tradition.example_song.is_empty());
            }
        }
    }

    #[test]
    fn test_lookup_udaipur() {
        let region = Catalog::rajasthan().region(3).unwrap();
        assert_eq!(region.display_name, "Udaipur (Mewar)");
        assert_eq!(region.color_token, ThemeToken::Teal);
        let names: Vec<_> = region.traditions.iter().map(|t| t.name).collect();
        assert_eq!(names, vec!["Kalbelia Dance Music", "Panihari"]);
    }

    #[test]
    fn test_require_unknown_region() {
        let err = Catalog::rajasthan().require(42).unwrap_err();
        assert_eq!(err, CatalogError::UnknownRegion(42));
        assert!(!Catalog::rajasthan().contains(0));
    }

    #[test]
    fn test_short_label() {
        let catalog = Catalog::rajasthan();
        assert_eq!(catalog.region(1).unwrap().short_label(), "Jaipur");
        assert_eq!(catalog.region(11).unwrap().short_label(), "Jaisalmer");
    }

    #[test]
    fn test_locations_inside_state_bounds() {
        for region in Catalog::rajasthan().regions {
            assert!((22.0..=32.0).contains(&region.location.lat));
            assert!((68.0..=80.0).contains(&region.location.lng));
        }
    }
}
