//! Selection and marker synchronization across the map and detail views.

use std::collections::HashMap;

use sangeet_core::{
    Catalog, DetailView, LatLng, MapController, MapError, MapResult, MapStatus, MapSurface,
    MarkerIcon, MarkerView, RegionId, Selection, TileLayerConfig,
};

/// Records every call the controller makes against the map widget.
#[derive(Debug, Default)]
struct RecordingSurface {
    tiles_attached: usize,
    placed: Vec<RegionId>,
    icon_selected: HashMap<RegionId, bool>,
    pans: Vec<LatLng>,
    fail_icon_for: Option<RegionId>,
}

impl RecordingSurface {
    fn selected_markers(&self) -> Vec<RegionId> {
        let mut ids: Vec<_> = self
            .icon_selected
            .iter()
            .filter(|(_, selected)| **selected)
            .map(|(id, _)| *id)
            .collect();
        ids.sort();
        ids
    }
}

impl MapSurface for RecordingSurface {
    fn attach_tiles(&mut self, _tiles: &TileLayerConfig) -> MapResult<()> {
        self.tiles_attached += 1;
        Ok(())
    }

    fn place_marker(&mut self, marker: &MarkerView) -> MapResult<()> {
        self.placed.push(marker.id);
        self.icon_selected.insert(marker.id, marker.icon.selected);
        Ok(())
    }

    fn set_marker_icon(&mut self, id: RegionId, icon: &MarkerIcon) -> MapResult<()> {
        if self.fail_icon_for == Some(id) {
            return Err(MapError::Bridge(format!("marker {id} not found")));
        }
        self.icon_selected.insert(id, icon.selected);
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

fn ready_controller(selection: &Selection) -> MapController<RecordingSurface> {
    let mut controller = MapController::new(Catalog::rajasthan());
    controller.initialize(
        Ok(RecordingSurface::default()),
        &TileLayerConfig::default(),
        selection,
    );
    assert!(controller.status().is_ready());
    controller
}

#[test]
fn test_every_region_detail_matches_catalog() {
    let catalog = Catalog::rajasthan();
    for region in catalog.regions {
        let mut selection = Selection::new();
        selection.select(catalog, region.id).unwrap();

        let view = DetailView::resolve(catalog, &selection);
        assert_eq!(view.traditions(), region.traditions);
        assert_eq!(view.heading(), region.display_name);
    }
}

#[test]
fn test_reset_restores_placeholder_and_markers() {
    let catalog = Catalog::rajasthan();
    let mut selection = Selection::new();
    let mut controller = ready_controller(&selection);

    selection.select(catalog, 9).unwrap();
    controller.sync(&selection).unwrap();
    assert_eq!(controller.surface().unwrap().selected_markers(), vec![9]);

    for _ in 0..2 {
        selection.reset();
        controller.sync(&selection).unwrap();

        assert!(DetailView::resolve(catalog, &selection).is_placeholder());
        let surface = controller.surface().unwrap();
        assert!(surface.selected_markers().is_empty());
        assert_eq!(surface.icon_selected.len(), catalog.len());
    }

    // Only the first selection panned the map.
    assert_eq!(controller.surface().unwrap().pans.len(), 1);
}

#[test]
fn test_switching_selection_leaves_one_marker_selected() {
    let catalog = Catalog::rajasthan();
    let mut selection = Selection::new();
    let mut controller = ready_controller(&selection);

    selection.select(catalog, 2).unwrap();
    controller.sync(&selection).unwrap();
    selection.select(catalog, 11).unwrap();
    controller.sync(&selection).unwrap();

    let surface = controller.surface().unwrap();
    assert_eq!(surface.selected_markers(), vec![11]);
    assert_eq!(
        surface.pans,
        vec![
            catalog.region(2).unwrap().location,
            catalog.region(11).unwrap().location,
        ]
    );
}

#[test]
fn test_icon_failure_still_leaves_one_marker_selected() {
    let catalog = Catalog::rajasthan();
    let mut selection = Selection::new();
    let mut controller = ready_controller(&selection);

    selection.select(catalog, 9).unwrap();
    controller.sync(&selection).unwrap();

    // Marker 5 sits between the old and new selection in placement order.
    controller.surface_mut().unwrap().fail_icon_for = Some(5);
    selection.select(catalog, 2).unwrap();
    let result = controller.sync(&selection);
    assert!(matches!(result, Err(MapError::Bridge(_))));

    let surface = controller.surface().unwrap();
    assert_eq!(surface.selected_markers(), vec![2]);
    assert_eq!(
        surface.pans.last(),
        Some(&catalog.region(2).unwrap().location)
    );

    // The failure does not cause a second pan once the surface recovers.
    controller.surface_mut().unwrap().fail_icon_for = None;
    controller.sync(&selection).unwrap();
    assert_eq!(controller.surface().unwrap().pans.len(), 2);
}

#[test]
fn test_library_load_failure_places_no_markers() {
    let mut controller: MapController<RecordingSurface> =
        MapController::new(Catalog::rajasthan());
    let err = MapError::LibraryUnavailable("window.L is undefined".into());

    let status = controller.initialize(
        Err(err.clone()),
        &TileLayerConfig::default(),
        &Selection::new(),
    );
    assert_eq!(status, &MapStatus::Failed(err));
    assert!(controller.markers().is_empty());
    assert!(controller.surface().is_none());

    // Later selection changes do not reach a surface.
    let mut selection = Selection::new();
    selection.select(Catalog::rajasthan(), 1).unwrap();
    assert!(controller.sync(&selection).is_ok());
    assert!(controller.status().error().is_some());
}

#[test]
fn test_udaipur_example() {
    let catalog = Catalog::rajasthan();
    let mut selection = Selection::new();
    let mut controller = ready_controller(&selection);

    selection.select(catalog, 3).unwrap();
    controller.sync(&selection).unwrap();

    let view = DetailView::resolve(catalog, &selection);
    assert_eq!(view.heading(), "Udaipur (Mewar)");
    let names: Vec<_> = view.traditions().iter().map(|t| t.name).collect();
    assert_eq!(names, vec!["Kalbelia Dance Music", "Panihari"]);

    selection.reset();
    controller.sync(&selection).unwrap();
    let view = DetailView::resolve(catalog, &selection);
    assert!(view.is_placeholder());
    assert!(view.traditions().is_empty());
}

#[test]
fn test_initial_selection_is_rendered_on_placement() {
    let catalog = Catalog::rajasthan();
    let mut selection = Selection::new();
    selection.select(catalog, 6).unwrap();

    let controller = ready_controller(&selection);
    let surface = controller.surface().unwrap();
    assert_eq!(surface.tiles_attached, 1);
    assert_eq!(surface.placed, catalog.ids().collect::<Vec<_>>());
    assert_eq!(surface.selected_markers(), vec![6]);
}
