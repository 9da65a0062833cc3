use bedplanner_settings::Config;
use bedplanner_ui::{start, Console, Flow, NoDialogs};
use std::path::Path;

const CATALOG: &str = "\
pflanzenname,bildname,durchmesser,hoehe
Rose,rose.jpg,40,120
Lavendel,lavendel.png,30,60
";

fn config(dir: &Path) -> Config {
    let catalog = dir.join("pflanzen.csv");
    std::fs::write(&catalog, CATALOG).unwrap();

    let mut config = Config::default();
    config.catalog.path = catalog;
    config.storage.directory = dir.join("store");
    config
}

fn output(console: Console<Vec<u8>>) -> String {
    String::from_utf8(console.into_output()).unwrap()
}

async fn run_lines(console: &mut Console<Vec<u8>>, lines: &[&str]) {
    for line in lines {
        console.handle_line(line).await.unwrap();
    }
}

#[tokio::test]
async fn test_place_and_export() {
    let dir = tempfile::tempdir().unwrap();
    let mut console = start(config(dir.path()), Box::new(NoDialogs), Vec::new())
        .await
        .unwrap();

    let export = dir.path().join("beet.csv");
    run_lines(
        &mut console,
        &[
            "select Lavendel",
            "click 10 20",
            "click 100 20",
            &format!("export {}", export.display()),
        ],
    )
    .await;

    let text = std::fs::read_to_string(&export).unwrap();
    assert_eq!(
        text,
        "x,y,name,durchmesser\n10,20,\"Lavendel\",30\n100,20,\"Lavendel\",30"
    );

    let out = output(console);
    assert!(out.contains("Loaded 2 plant types"));
    assert!(out.contains("Selected Lavendel (30)"));
}

#[tokio::test]
async fn test_delete_with_modifier() {
    let dir = tempfile::tempdir().unwrap();
    let mut console = start(config(dir.path()), Box::new(NoDialogs), Vec::new())
        .await
        .unwrap();

    run_lines(
        &mut console,
        &["click 50 50", "key delete down", "click 52 50", "key delete up"],
    )
    .await;
    assert!(console.state().markers().is_empty());
    assert!(output(console).contains("Removed Rose"));
}

#[tokio::test]
async fn test_recovery_prompt_on_restart() {
    let dir = tempfile::tempdir().unwrap();
    {
        let mut console = start(config(dir.path()), Box::new(NoDialogs), Vec::new())
            .await
            .unwrap();
        run_lines(&mut console, &["click 1 1", "click 2 2"]).await;
    }

    let mut console = start(config(dir.path()), Box::new(NoDialogs), Vec::new())
        .await
        .unwrap();
    assert_eq!(console.state().pending_recovery().map(<[_]>::len), Some(2));

    run_lines(&mut console, &["restore"]).await;
    assert_eq!(console.state().markers().len(), 2);

    let out = output(console);
    assert!(out.contains("autosaved layout with 2 markers"));
    assert!(out.contains("Restored 2 markers"));
}

#[tokio::test]
async fn test_missing_catalog_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = config(dir.path());
    config.catalog.path = dir.path().join("missing.csv");

    let mut console = start(config, Box::new(NoDialogs), Vec::new()).await.unwrap();
    run_lines(&mut console, &["click 10 10", "types"]).await;
    assert!(console.state().markers().is_empty());

    let out = output(console);
    assert!(out.contains("placement is disabled"));
    assert!(out.contains("Catalog unavailable"));
}

#[tokio::test]
async fn test_errors_do_not_end_session() {
    let dir = tempfile::tempdir().unwrap();
    let mut console = start(config(dir.path()), Box::new(NoDialogs), Vec::new())
        .await
        .unwrap();

    assert_eq!(console.handle_line("frobnicate").await.unwrap(), Flow::Continue);
    assert_eq!(console.handle_line("export").await.unwrap(), Flow::Continue);
    assert_eq!(console.handle_line("quit").await.unwrap(), Flow::Quit);

    let out = output(console);
    assert!(out.contains("error: unknown command 'frobnicate'"));
    assert!(out.contains("Export cancelled"));
}

#[tokio::test]
async fn test_table_and_svg() {
    let dir = tempfile::tempdir().unwrap();
    let mut console = start(config(dir.path()), Box::new(NoDialogs), Vec::new())
        .await
        .unwrap();
    let svg = dir.path().join("beet.svg");

    run_lines(
        &mut console,
        &[
            "click 10 10",
            "hover-row 1",
            "table",
            &format!("svg {}", svg.display()),
        ],
    )
    .await;

    let out = output(console);
    assert!(out.contains(">  1 Rose | 40 | 120"));
    assert!(out.contains("Page 1 of 1"));
    let svg = std::fs::read_to_string(svg).unwrap();
    assert!(svg.contains("stroke=\"#2196f3\" stroke-width=\"5\""));
}
