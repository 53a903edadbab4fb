//! Selection state and the detail view derived from it.

use crate::catalog::{Catalog, Region, RegionId, Tradition};
use crate::error::CatalogError;
use crate::theme::ThemeToken;

/// The currently highlighted region, if any.
///
/// Only ever holds ids that exist in the catalog it was validated against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    current: Option<RegionId>,
}

impl Selection {
    /// Creates an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects a region, replacing any previous selection.
    pub fn select(&mut self, catalog: &Catalog, id: RegionId) -> Result<(), CatalogError> {
        let region = catalog.require(id)?;
        if self.current != Some(id) {
            tracing::info!(region = region.display_name, id, "Region selected");
        }
        self.current = Some(id);
        Ok(())
    }

    /// Clears the selection. Calling this repeatedly has no further effect.
    pub fn reset(&mut self) {
        if let Some(id) = self.current.take() {
            tracing::info!(id, "Selection cleared");
        }
    }

    pub fn current(&self) -> Option<RegionId> {
        self.current
    }

    pub fn is_selected(&self, id: RegionId) -> bool {
        self.current == Some(id)
    }

    pub fn is_empty(&self) -> bool {
        self.current.is_none()
    }
}

/// What the detail panel shows for a given selection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DetailView<'a> {
    /// Nothing selected; show the introductory placeholder.
    Placeholder { heading: &'a str },
    /// A region is selected; show its traditions.
    Region(&'a Region),
}

impl<'a> DetailView<'a> {
    /// Resolves the panel contents from the selection.
    pub fn resolve(catalog: &'a Catalog, selection: &Selection) -> Self {
        match selection.current().and_then(|id| catalog.region(id)) {
            Some(region) => DetailView::Region(region),
            None => DetailView::Placeholder {
                heading: catalog.placeholder_heading,
            },
        }
    }

    /// Traditions of the selected region in catalog order, or empty.
    pub fn traditions(&self) -> &'a [Tradition] {
        match *self {
            DetailView::Region(region) => region.traditions,
            DetailView::Placeholder { .. } => &[],
        }
    }

    pub fn heading(&self) -> &'a str {
        match *self {
            DetailView::Region(region) => region.display_name,
            DetailView::Placeholder { heading } => heading,
        }
    }

    pub fn theme(&self) -> ThemeToken {
        match *self {
            DetailView::Region(region) => region.color_token,
            DetailView::Placeholder { .. } => ThemeToken::Gray,
        }
    }

    pub fn region(&self) -> Option<&'a Region> {
        match *self {
            DetailView::Region(region) => Some(region),
            DetailView::Placeholder { .. } => None,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, DetailView::Placeholder { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_and_reset() {
        let catalog = Catalog::rajasthan();
        let mut selection = Selection::new();
        assert!(selection.is_empty());

        selection.select(catalog, 3).unwrap();
        assert_eq!(selection.current(), Some(3));
        assert!(selection.is_selected(3));
        assert!(!selection.is_selected(2));

        selection.reset();
        assert!(selection.is_empty());
        selection.reset();
        assert!(selection.is_empty());
    }

    #[test]
    fn test_select_unknown_keeps_previous() {
        let catalog = Catalog::rajasthan();
        let mut selection = Selection::new();
        selection.select(catalog, 5).unwrap();

        let err = selection.select(catalog, 99).unwrap_err();
        assert_eq!(err, CatalogError::UnknownRegion(99));
        assert_eq!(selection.current(), Some(5));
    }

    #[test]
    fn test_detail_view_placeholder() {
        let catalog = Catalog::rajasthan();
        let view = DetailView::resolve(catalog, &Selection::new());
        assert!(view.is_placeholder());
        assert!(view.traditions().is_empty());
        assert_eq!(view.heading(), "Mhara Sangeet: Digital Artifacts");
        assert_eq!(view.theme(), ThemeToken::Gray);
        assert!(view.region().is_none());
    }

    #[test]
    fn test_detail_view_for_region() {
        let catalog = Catalog::rajasthan();
        let mut selection = Selection::new();
        selection.select(catalog, 2).unwrap();

        let view = DetailView::resolve(catalog, &selection);
        assert_eq!(view.heading(), "Jodhpur (Marwar)");
        assert_eq!(view.theme(), ThemeToken::Purple);
        assert_eq!(view.traditions().len(), 2);
        assert_eq!(view.traditions()[1].name, "Manganiyar Lok Gayaki");
    }
}
