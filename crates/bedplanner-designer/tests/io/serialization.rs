use crate::common::catalog;
use bedplanner_designer::serialization::{load_layout, save_layout};
use bedplanner_designer::{csv_to_markers, markers_to_csv, ImageRef, PlacedMarker, Point};
use proptest::prelude::*;

fn marker(name: &str, x: f64, y: f64, radius: f64) -> PlacedMarker {
    PlacedMarker::new(Point::new(x, y), radius, ImageRef::Placeholder, name)
}

#[test]
fn test_export_format() {
    let markers = vec![
        marker("Rose", 120.0, 80.5, 22.5),
        marker("Rose \"Red\"", -3.0, 0.0, 20.0),
    ];
    assert_eq!(
        markers_to_csv(&markers),
        "x,y,name,durchmesser\n120,80.5,\"Rose\",45\n-3,0,\"Rose \"\"Red\"\"\",40"
    );
}

#[test]
fn test_quoted_name_round_trips() {
    let markers = vec![marker("Rose \"Red\", tall", 1.0, 2.0, 10.0)];
    let parsed = csv_to_markers(&markers_to_csv(&markers), None);
    assert_eq!(parsed, markers);
}

#[test]
fn test_import_resolves_images_against_catalog() {
    let catalog = catalog();
    let parsed = csv_to_markers(
        "x,y,name,durchmesser\n1,2,\"Rose\",40\n3,4,\"Tomate\",40",
        Some(&catalog),
    );
    assert_eq!(parsed[0].image, ImageRef::Asset("rose.png".to_string()));
    assert_eq!(parsed[1].image, ImageRef::Placeholder);
}

#[test]
fn test_import_defaults_and_drops() {
    let text = "\"name\", \"durchmesser\",x,y,extra\r\n\
                Rose,,1,2,a\r\n\
                ,40,1,2,b\r\n\
                \r\n\
                Salbei,-5,3,4,c\r\n\
                Kohl,abc,,5,d";
    let parsed = csv_to_markers(text, None);

    let names: Vec<&str> = parsed.iter().map(|m| m.type_name.as_str()).collect();
    assert_eq!(names, vec!["Rose", "Salbei", "Kohl"]);
    assert!(parsed.iter().all(|m| m.radius == 30.0));
    assert_eq!(parsed[1].position, Point::new(3.0, 4.0));
    assert!(parsed[2].position.x.is_nan());
    assert_eq!(parsed[2].position.y, 5.0);
}

#[test]
fn test_import_reads_leading_numbers() {
    let text = "x,y,name,durchmesser\n12px,7,\"Rose\",45cm\ninf,nan,\"Kohl\",40";
    let parsed = csv_to_markers(text, None);

    assert_eq!(parsed.len(), 2);
    assert_eq!(parsed[0].position, Point::new(12.0, 7.0));
    assert_eq!(parsed[0].radius, 22.5);
    assert!(parsed[1].position.x.is_nan());
    assert!(parsed[1].position.y.is_nan());
    assert_eq!(parsed[1].radius, 20.0);
}

#[test]
fn test_missing_column_reads_as_nan() {
    let parsed = csv_to_markers("name,durchmesser\nRose,40", None);
    assert_eq!(parsed.len(), 1);
    assert!(parsed[0].position.x.is_nan());
    assert!(parsed[0].position.y.is_nan());
    assert_eq!(parsed[0].radius, 20.0);
}

#[test]
fn test_single_line_is_empty() {
    assert!(csv_to_markers("x,y,name,durchmesser", None).is_empty());
    assert!(csv_to_markers("1,2,\"Rose\",40", None).is_empty());
}

#[tokio::test]
async fn test_save_and_load_layout() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("beet.csv");
    let markers = vec![marker("Rose", 10.0, 20.0, 22.5)];

    save_layout(&path, &markers).await.unwrap();
    let loaded = load_layout(&path, Some(&catalog())).await.unwrap();

    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].position, Point::new(10.0, 20.0));
    assert_eq!(loaded[0].image, ImageRef::Asset("rose.png".to_string()));
}

#[tokio::test]
async fn test_load_missing_layout_fails() {
    let result = load_layout(std::path::Path::new("/nonexistent/beet.csv"), None).await;
    assert!(matches!(
        result,
        Err(bedplanner_designer::PersistenceError::Read { .. })
    ));
}

fn arb_marker() -> impl Strategy<Value = PlacedMarker> {
    (
        -2000.0f64..2000.0,
        -2000.0f64..2000.0,
        1u32..400,
        "[a-zA-Z ,\"äöü]{1,16}",
    )
        .prop_map(|(x, y, diameter, name)| {
            marker(&name, x, y, f64::from(diameter) / 2.0)
        })
}

proptest! {
    #[test]
    fn prop_export_import_export_is_stable(markers in prop::collection::vec(arb_marker(), 0..20)) {
        let first = markers_to_csv(&markers);
        let parsed = csv_to_markers(&first, None);
        prop_assert_eq!(parsed.len(), markers.len());
        prop_assert_eq!(markers_to_csv(&parsed), first);

        for (a, b) in markers.iter().zip(parsed.iter()) {
            prop_assert_eq!(&a.type_name, &b.type_name);
            prop_assert_eq!(a.position, b.position);
            prop_assert_eq!(a.radius, b.radius);
        }
    }
}
