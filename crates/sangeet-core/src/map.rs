//! Map view controller.
//!
//! [`MapSurface`] is the contract the map widget must satisfy.
//! [`MapController`] owns the placed markers and keeps their appearance in
//! step with the [`Selection`] by re-issuing every icon on each sync.

use crate::catalog::{Catalog, LatLng, RegionId};
use crate::config::TileLayerConfig;
use crate::error::{MapError, MapResult};
use crate::marker::{MarkerIcon, MarkerView, marker_views};
use crate::selection::Selection;

/// Operations the map widget exposes to the controller.
///
/// An instance represents a map that was successfully created on its
/// container; construction failures are reported before a surface exists.
pub trait MapSurface {
    /// Attaches the base tile layer.
    fn attach_tiles(&mut self, tiles: &TileLayerConfig) -> MapResult<()>;

    /// Places a clickable marker.
    ///
    /// Implementations may only queue the placement; `Ok` does not confirm
    /// the marker is on the map.
    fn place_marker(&mut self, marker: &MarkerView) -> MapResult<()>;

    /// Replaces the icon of an already placed marker. May be queued like
    /// [`MapSurface::place_marker`].
    fn set_marker_icon(&mut self, id: RegionId, icon: &MarkerIcon) -> MapResult<()>;

    /// Pans the viewport to a coordinate.
    fn pan_to(&mut self, at: LatLng) -> MapResult<()>;

    /// Recomputes the viewport size after layout changes.
    fn invalidate_size(&mut self) -> MapResult<()>;
}

/// Association between a region and the marker placed for it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerHandle {
    pub region: RegionId,
    pub location: LatLng,
}

/// Lifecycle of the map view.
#[derive(Debug, Clone, PartialEq)]
pub enum MapStatus {
    Loading,
    Ready,
    /// Terminal; the view never leaves this state.
    Failed(MapError),
}

impl MapStatus {
    pub fn is_ready(&self) -> bool {
        matches!(self, MapStatus::Ready)
    }

    pub fn error(&self) -> Option<&MapError> {
        match self {
            MapStatus::Failed(err) => Some(err),
            _ => None,
        }
    }
}

/// Drives a [`MapSurface`] from the selection.
pub struct MapController<S: MapSurface> {
    surface: Option<S>,
    status: MapStatus,
    markers: Vec<MarkerHandle>,
    catalog: &'static Catalog,
    last_synced: Option<RegionId>,
}

impl<S: MapSurface> MapController<S> {
    /// Creates a controller waiting for its surface.
    pub fn new(catalog: &'static Catalog) -> Self {
        Self {
            surface: None,
            status: MapStatus::Loading,
            markers: Vec::new(),
            catalog,
            last_synced: None,
        }
    }

    /// Completes setup with the outcome of loading the map widget.
    ///
    /// A load error, or any failure while attaching tiles or placing markers,
    /// moves the controller to [`MapStatus::Failed`] for good.
    pub fn initialize(
        &mut self,
        surface: MapResult<S>,
        tiles: &TileLayerConfig,
        selection: &Selection,
    ) -> &MapStatus {
        if !matches!(self.status, MapStatus::Loading) {
            tracing::warn!(status = ?self.status, "Map already initialized; ignoring");
            return &self.status;
        }

        let mut surface = match surface {
            Ok(surface) => surface,
            Err(err) => {
                tracing::error!(error = %err, "Map library unavailable; markers not placed");
                self.status = MapStatus::Failed(err);
                return &self.status;
            }
        };

        match self.populate(&mut surface, tiles, selection) {
            Ok(()) => {
                tracing::info!(markers = self.markers.len(), "Map ready");
                self.surface = Some(surface);
                self.last_synced = selection.current();
                self.status = MapStatus::Ready;
            }
            Err(err) => {
                tracing::error!(error = %err, "Map initialization failed");
                self.markers.clear();
                self.status = MapStatus::Failed(err);
            }
        }
        &self.status
    }

    fn populate(
        &mut self,
        surface: &mut S,
        tiles: &TileLayerConfig,
        selection: &Selection,
    ) -> MapResult<()> {
        surface.attach_tiles(tiles)?;
        self.markers.clear();
        for view in marker_views(self.catalog, selection) {
            surface.place_marker(&view)?;
            self.markers.push(MarkerHandle {
                region: view.id,
                location: view.location,
            });
        }
        Ok(())
    }

    /// Re-issues every marker icon for the selection and pans to a newly
    /// selected marker. Does nothing unless the map is ready.
    ///
    /// A failing surface call does not stop the pass: every marker is still
    /// re-issued and the pan still happens. The first error is returned.
    pub fn sync(&mut self, selection: &Selection) -> MapResult<()> {
        let Some(surface) = self.surface.as_mut() else {
            return Ok(());
        };

        let mut first_error = None;
        for handle in &self.markers {
            if let Some(region) = self.catalog.region(handle.region) {
                let icon = MarkerIcon::for_region(region, selection.is_selected(handle.region));
                if let Err(err) = surface.set_marker_icon(handle.region, &icon) {
                    tracing::warn!(
                        region = handle.region,
                        error = %err,
                        "Failed to update marker icon"
                    );
                    first_error.get_or_insert(err);
                }
            }
        }

        let current = selection.current();
        if current != self.last_synced {
            if let Some(handle) =
                current.and_then(|id| self.markers.iter().find(|m| m.region == id))
            {
                tracing::debug!(region = handle.region, "Panning to selected marker");
                if let Err(err) = surface.pan_to(handle.location) {
                    first_error.get_or_insert(err);
                }
            }
            self.last_synced = current;
        }

        match first_error {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    /// Forwards a deferred size recalculation to the surface.
    pub fn invalidate_size(&mut self) -> MapResult<()> {
        match self.surface.as_mut() {
            Some(surface) => surface.invalidate_size(),
            None => Ok(()),
        }
    }

    pub fn status(&self) -> &MapStatus {
        &self.status
    }

    pub fn markers(&self) -> &[MarkerHandle] {
        &self.markers
    }

    pub fn surface(&self) -> Option<&S> {
        self.surface.as_ref()
    }

    pub fn surface_mut(&mut self) -> Option<&mut S> {
        self.surface.as_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct CountingSurface {
        placed: usize,
        icons: usize,
        pans: Vec<LatLng>,
        fail_on_place: bool,
    }

    impl MapSurface for CountingSurface {
        fn attach_tiles(&mut self, _tiles: &TileLayerConfig) -> MapResult<()> {
            Ok(())
        }

        fn place_marker(&mut self, _marker: &MarkerView) -> MapResult<()> {
            if self.fail_on_place {
                return Err(MapError::Initialization("container detached".into()));
            }
            self.placed += 1;
            Ok(())
        }

        fn set_marker_icon(&mut self, _id: RegionId, _icon: &MarkerIcon) -> MapResult<()> {
            self.icons += 1;
            Ok(())
        }

        fn pan_to(&mut self, at: LatLng) -> MapResult<()> {
            self.pans.push(at);
            Ok(())
        }

        fn invalidate_size(&mut self) -> MapResult<()> {
            Ok(())
        }
    }

    #[test]
    fn test_initialize_places_all_markers() {
        let catalog = Catalog::rajasthan();
        let mut controller = MapController::new(catalog);
        let status = controller.initialize(
            Ok(CountingSurface::default()),
            &TileLayerConfig::default(),
            &Selection::new(),
        );
        assert!(status.is_ready());
        assert_eq!(controller.markers().len(), catalog.len());
        assert_eq!(controller.surface().unwrap().placed, catalog.len());
    }

    #[test]
    fn test_failed_placement_is_terminal() {
        let catalog = Catalog::rajasthan();
        let mut controller = MapController::new(catalog);
        let surface = CountingSurface {
            fail_on_place: true,
            ..Default::default()
        };
        controller.initialize(Ok(surface), &TileLayerConfig::default(), &Selection::new());
        assert!(matches!(
            controller.status(),
            MapStatus::Failed(MapError::Initialization(_))
        ));
        assert!(controller.markers().is_empty());
        assert!(controller.surface().is_none());

        // A second attempt is ignored.
        controller.initialize(
            Ok(CountingSurface::default()),
            &TileLayerConfig::default(),
            &Selection::new(),
        );
        assert!(controller.status().error().is_some());
    }

    #[test]
    fn test_sync_pans_only_on_change() {
        let catalog = Catalog::rajasthan();
        let mut controller = MapController::new(catalog);
        let mut selection = Selection::new();
        controller.initialize(
            Ok(CountingSurface::default()),
            &TileLayerConfig::default(),
            &selection,
        );

        selection.select(catalog, 4).unwrap();
        controller.sync(&selection).unwrap();
        controller.sync(&selection).unwrap();

        let surface = controller.surface().unwrap();
        assert_eq!(surface.pans, vec![catalog.region(4).unwrap().location]);
        assert_eq!(surface.icons, catalog.len() * 2);
    }

    #[test]
    fn test_sync_before_ready_is_noop() {
        let mut controller: MapController<CountingSurface> =
            MapController::new(Catalog::rajasthan());
        assert_eq!(controller.status(), &MapStatus::Loading);
        assert!(controller.sync(&Selection::new()).is_ok());
        assert!(controller.invalidate_size().is_ok());
    }
}
