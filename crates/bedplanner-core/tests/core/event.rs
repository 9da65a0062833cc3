use bedplanner_core::{EventDispatcher, PlannerEvent};

#[test]
fn test_publish_without_subscribers() {
    let dispatcher = EventDispatcher::default();
    assert_eq!(dispatcher.subscriber_count(), 0);
    assert_eq!(dispatcher.publish(PlannerEvent::MarkersChanged { count: 1 }), 0);
}

#[test]
fn test_subscriber_receives_events_in_order() {
    let dispatcher = EventDispatcher::new(8);
    let mut rx = dispatcher.subscribe();
    assert_eq!(dispatcher.subscriber_count(), 1);

    dispatcher.publish(PlannerEvent::CatalogLoaded { types: 3 });
    dispatcher.publish(PlannerEvent::MarkersChanged { count: 2 });

    assert_eq!(rx.try_recv().unwrap(), PlannerEvent::CatalogLoaded { types: 3 });
    assert_eq!(rx.try_recv().unwrap(), PlannerEvent::MarkersChanged { count: 2 });
    assert!(rx.try_recv().is_err());
}

#[test]
fn test_event_display() {
    assert_eq!(
        PlannerEvent::SelectionChanged(Some("Rose".to_string())).to_string(),
        "Selected: Rose"
    );
    assert_eq!(
        PlannerEvent::ModeChanged {
            delete: true,
            inspect: false
        }
        .to_string(),
        "Mode - delete: true, inspect: false"
    );
    assert_eq!(
        PlannerEvent::CatalogFailed("missing".to_string()).to_string(),
        "Catalog failed: missing"
    );
}
