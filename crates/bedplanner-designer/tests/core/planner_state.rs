use crate::common::{catalog, planner};
use bedplanner_core::PlannerEvent;
use bedplanner_designer::{ClickOutcome, CursorHint, MarkerHighlight, PlannerState, Point};
use bedplanner_settings::{Config, MemoryStore};

fn empty_planner() -> PlannerState {
    PlannerState::new(Config::default(), Box::new(MemoryStore::new()))
}

#[test]
fn test_catalog_selects_first_type() {
    let state = planner();
    assert_eq!(state.selected_type(), Some("Rose"));
    assert_eq!(state.diameter(), 45);
    assert_eq!(state.cursor_hint(), CursorHint::Crosshair);
}

#[test]
fn test_place_without_catalog_is_noop() {
    let mut state = empty_planner();
    assert_eq!(state.click(Point::new(10.0, 10.0)), ClickOutcome::Ignored);
    assert!(state.markers().is_empty());
    assert_eq!(state.cursor_hint(), CursorHint::NotAllowed);
}

#[test]
fn test_click_places_selected_type() {
    let mut state = planner();
    state.select_type("Lavendel");
    assert_eq!(state.click(Point::new(100.0, 80.0)), ClickOutcome::Placed);

    let m = &state.markers()[0];
    assert_eq!(m.type_name, "Lavendel");
    assert_eq!(m.radius, 30.0);
    assert_eq!(m.position, Point::new(100.0, 80.0));
}

#[test]
fn test_select_unknown_type_is_ignored() {
    let mut state = planner();
    assert!(!state.select_type("Tomate"));
    assert_eq!(state.selected_type(), Some("Rose"));
}

#[test]
fn test_set_diameter_clamps() {
    let mut state = planner();
    assert_eq!(state.set_diameter(5), 10);
    assert_eq!(state.set_diameter(500), 200);
    assert_eq!(state.set_diameter(80), 80);

    // Radius is captured at placement
    state.click(Point::new(0.0, 0.0));
    state.set_diameter(20);
    assert_eq!(state.markers()[0].radius, 40.0);
}

#[test]
fn test_set_diameter_with_inverted_range() {
    let mut config = Config::default();
    config.placement.min_diameter = 80;
    config.placement.max_diameter = 40;
    let mut state = PlannerState::new(config, Box::new(MemoryStore::new()));

    assert_eq!(state.set_diameter(10), 40);
    assert_eq!(state.set_diameter(60), 40);
    assert_eq!(state.set_diameter(100), 40);
}

#[test]
fn test_delete_mode_has_priority() {
    let mut state = planner();
    state.click(Point::new(50.0, 50.0));

    state.set_inspect_mode(true);
    assert_eq!(state.click(Point::new(50.0, 50.0)), ClickOutcome::Ignored);
    assert_eq!(state.markers().len(), 1);

    state.set_delete_mode(true);
    assert_eq!(state.cursor_hint(), CursorHint::Delete);
    assert!(matches!(
        state.click(Point::new(55.0, 50.0)),
        ClickOutcome::Deleted(_)
    ));
    assert!(state.markers().is_empty());
}

#[test]
fn test_preview_follows_pointer_and_modes() {
    let mut state = planner();
    assert!(state.preview().is_none());

    state.pointer_moved(Point::new(30.0, 40.0));
    let preview = state.preview().unwrap();
    assert_eq!(preview.position, Point::new(30.0, 40.0));
    assert_eq!(preview.radius, 22.5);
    assert_eq!(preview.type_name, "Rose");
    // Never stored
    assert!(state.markers().is_empty());

    state.set_delete_mode(true);
    assert!(state.preview().is_none());
    state.set_delete_mode(false);

    state.set_inspect_mode(true);
    assert!(state.preview().is_none());
    state.set_inspect_mode(false);

    state.pointer_left();
    assert!(state.preview().is_none());
}

#[test]
fn test_delete_highlight_tracks_pointer() {
    let mut state = planner();
    state.click(Point::new(0.0, 0.0));
    state.click(Point::new(100.0, 0.0));

    state.set_delete_mode(true);
    state.pointer_moved(Point::new(90.0, 0.0));
    assert_eq!(state.delete_target(), Some(1));
    assert_eq!(state.marker_highlight(1), MarkerHighlight::DeleteTarget);
    assert_eq!(state.marker_highlight(0), MarkerHighlight::None);

    state.pointer_moved(Point::new(50.0, 0.0));
    assert_eq!(state.delete_target(), None);
}

#[test]
fn test_inspect_highlight_and_page_jump() {
    let mut state = planner();
    for i in 0..7 {
        state.click(Point::new(f64::from(i) * 100.0, 50.0));
    }
    assert_eq!(state.page(), 0);

    state.set_inspect_mode(true);
    state.pointer_moved(Point::new(610.0, 50.0));
    assert_eq!(state.inspected(), Some(6));
    assert_eq!(state.marker_highlight(6), MarkerHighlight::Inspected);
    assert_eq!(state.page(), 1);

    state.set_inspect_mode(false);
    assert_eq!(state.inspected(), None);
}

#[test]
fn test_row_hover_highlights() {
    let mut state = planner();
    state.click(Point::new(0.0, 0.0));
    state.click(Point::new(100.0, 0.0));
    state.select_type("Lavendel");
    state.click(Point::new(200.0, 0.0));

    assert!(state.hover_row(1));
    assert_eq!(state.hovered_name(), Some("Rose"));
    assert_eq!(state.marker_highlight(1), MarkerHighlight::Individual);
    assert_eq!(state.marker_highlight(0), MarkerHighlight::Group);
    assert_eq!(state.marker_highlight(2), MarkerHighlight::None);

    state.clear_row_hover();
    assert_eq!(state.marker_highlight(1), MarkerHighlight::None);
    assert!(!state.hover_row(10));
}

#[test]
fn test_mutations_publish_events() {
    let mut state = planner();
    let mut rx = state.events().subscribe();

    state.click(Point::new(1.0, 1.0));
    state.clear();

    assert_eq!(rx.try_recv().unwrap(), PlannerEvent::MarkersChanged { count: 1 });
    assert_eq!(rx.try_recv().unwrap(), PlannerEvent::MarkersChanged { count: 0 });
}

#[test]
fn test_catalog_failure_disables_placement() {
    let mut state = empty_planner();
    let mut rx = state.events().subscribe();
    state.set_catalog_failed("network down");

    assert_eq!(state.catalog_error(), Some("network down"));
    assert!(!state.has_catalog());
    assert_eq!(state.click(Point::new(1.0, 1.0)), ClickOutcome::Ignored);
    assert_eq!(
        rx.try_recv().unwrap(),
        PlannerEvent::CatalogFailed("network down".to_string())
    );

    state.set_catalog(catalog());
    assert!(state.catalog_error().is_none());
    assert_eq!(state.click(Point::new(1.0, 1.0)), ClickOutcome::Placed);
}

#[test]
fn test_search_types_resolves_images() {
    let state = planner();
    let options = state.search_types("lav");
    assert_eq!(options.len(), 1);
    assert_eq!(options[0].name, "Lavendel");
    assert_eq!(options[0].default_diameter, 60);
}

#[test]
fn test_import_resets_page() {
    let mut state = planner();
    for i in 0..12 {
        state.click(Point::new(f64::from(i), 0.0));
    }
    state.set_page(2);
    assert_eq!(state.page(), 2);

    let count = state.import_csv("x,y,name,durchmesser\n1,2,\"Rose\",40");
    assert_eq!(count, 1);
    assert_eq!(state.page(), 0);
}

#[test]
fn test_snapshot_json() {
    let mut state = planner();
    state.click(Point::new(10.0, 20.0));
    let json = state.snapshot_json().unwrap();
    assert!(json.contains("\"selected_type\": \"Rose\""));
    assert!(json.contains("\"diameter\": 45"));
}
