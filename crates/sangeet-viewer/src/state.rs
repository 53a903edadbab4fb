//! Application state for the map viewer.
//!
//! A single `AppState` lives in a signal owned by the root component and is
//! passed to both the map view and the detail view. Only UI event handlers
//! write to it.

use sangeet_core::{Catalog, CatalogError, DetailView, RegionId, Selection, ThemeToken};

/// Main application state.
#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    /// The region table being displayed.
    pub catalog: &'static Catalog,

    /// Currently selected region.
    pub selection: Selection,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Catalog::rajasthan())
    }
}

impl AppState {
    /// Creates a state with nothing selected.
    pub fn new(catalog: &'static Catalog) -> Self {
        Self {
            catalog,
            selection: Selection::new(),
        }
    }

    /// Creates a state with an initial selection, validated against the catalog.
    pub fn with_selection(
        catalog: &'static Catalog,
        initial: Option<RegionId>,
    ) -> Result<Self, CatalogError> {
        let mut state = Self::new(catalog);
        if let Some(id) = initial {
            state.select(id)?;
        }
        Ok(state)
    }

    /// Handles a marker click.
    pub fn select(&mut self, id: RegionId) -> Result<(), CatalogError> {
        self.selection.select(self.catalog, id)
    }

    /// Handles "Back to Map Overview".
    pub fn reset(&mut self) {
        self.selection.reset();
    }

    /// Contents of the detail panel.
    pub fn detail(&self) -> DetailView<'static> {
        DetailView::resolve(self.catalog, &self.selection)
    }

    /// Accent token for the page chrome.
    pub fn accent(&self) -> ThemeToken {
        self.detail().theme()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_selection() {
        let state = AppState::with_selection(Catalog::rajasthan(), Some(8)).unwrap();
        assert_eq!(state.detail().heading(), "Sikar (Shekhawati)");
        assert_eq!(state.accent(), ThemeToken::Lime);

        let err = AppState::with_selection(Catalog::rajasthan(), Some(0)).unwrap_err();
        assert_eq!(err, CatalogError::UnknownRegion(0));
    }

    #[test]
    fn test_select_then_reset() {
        let mut state = AppState::default();
        state.select(10).unwrap();
        assert_eq!(state.selection.current(), Some(10));

        state.reset();
        state.reset();
        assert!(state.detail().is_placeholder());
        assert_eq!(state.accent(), ThemeToken::Gray);
    }
}
