use crate::common::catalog;
use bedplanner_core::PlannerEvent;
use bedplanner_designer::{ImageRef, PlannerState, Point, RecoverySlot};
use bedplanner_settings::{Config, FileStore, KeyValueStore, MemoryStore};

fn file_planner(dir: &std::path::Path) -> PlannerState {
    let mut config = Config::default();
    config.storage.directory = dir.to_path_buf();
    PlannerState::new(config, Box::new(FileStore::new(dir)))
}

#[test]
fn test_every_mutation_writes_slot() {
    let dir = tempfile::tempdir().unwrap();
    let mut state = file_planner(dir.path());
    state.set_catalog(catalog());
    let slot = dir.path().join("autosave.csv");

    state.click(Point::new(10.0, 20.0));
    let text = std::fs::read_to_string(&slot).unwrap();
    assert_eq!(text, "x,y,name,durchmesser\n10,20,\"Rose\",45");

    state.set_delete_mode(true);
    state.click(Point::new(10.0, 20.0));
    let text = std::fs::read_to_string(&slot).unwrap();
    assert_eq!(text, "x,y,name,durchmesser");
}

#[test]
fn test_restore_after_restart() {
    let dir = tempfile::tempdir().unwrap();
    {
        let mut state = file_planner(dir.path());
        state.set_catalog(catalog());
        state.click(Point::new(1.0, 2.0));
        state.click(Point::new(3.0, 4.0));
    }

    let mut state = file_planner(dir.path());
    let mut rx = state.events().subscribe();
    assert_eq!(state.check_recovery(), Some(2));
    assert_eq!(
        rx.try_recv().unwrap(),
        PlannerEvent::RecoveryAvailable { markers: 2 }
    );

    // Catalog arrives after the slot was read
    state.set_catalog(catalog());
    assert_eq!(state.restore_recovery(), Some(2));
    assert!(state.pending_recovery().is_none());
    assert_eq!(state.markers().len(), 2);
    assert_eq!(state.markers()[0].image, ImageRef::Asset("rose.png".to_string()));
    assert_eq!(state.page(), 0);
}

#[test]
fn test_empty_slot_does_not_prompt() {
    let dir = tempfile::tempdir().unwrap();
    {
        let mut state = file_planner(dir.path());
        state.clear();
    }
    assert!(dir.path().join("autosave.csv").exists());

    let mut state = file_planner(dir.path());
    assert_eq!(state.check_recovery(), None);
    assert!(state.pending_recovery().is_none());
}

#[test]
fn test_dismiss_keeps_slot() {
    let mut store = MemoryStore::new();
    store
        .set("autosave.csv", "x,y,name,durchmesser\n5,5,\"Rose\",30")
        .unwrap();

    let mut state = PlannerState::new(Config::default(), Box::new(store));
    assert_eq!(state.check_recovery(), Some(1));
    state.dismiss_recovery();
    assert!(state.pending_recovery().is_none());
    assert_eq!(state.restore_recovery(), None);
    assert!(state.markers().is_empty());
}

#[test]
fn test_slot_write_failure_is_not_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let mut slot = RecoverySlot::new(Box::new(FileStore::new(dir.path())), "../escape");
    slot.store(&[]);
    assert!(slot.read().is_err());
    assert!(slot.pending(None).is_none());
}
