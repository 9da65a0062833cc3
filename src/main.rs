use bedplanner::{init_logging, load_config, BUILD_DATE, VERSION};
use std::path::PathBuf;

fn main() -> anyhow::Result<()> {
    init_logging()?;
    tracing::info!("BedPlanner {} (built {})", VERSION, BUILD_DATE);

    // Optional first argument: config file (JSON or TOML)
    let config_path = std::env::args_os().nth(1).map(PathBuf::from);
    let config = load_config(config_path.as_deref())?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    runtime.block_on(bedplanner_ui::run(config))
}
