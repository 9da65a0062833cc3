//! # BedPlanner
//!
//! A garden bed planner: pick a plant type from a catalog, place circular
//! plant markers on a bed, and export or import the layout as CSV.
//!
//! ## Architecture
//!
//! BedPlanner is organized as a workspace with multiple crates:
//!
//! 1. **bedplanner-core** - Point type, constants, errors, planner events
//! 2. **bedplanner-settings** - Configuration files and the key-value store
//! 3. **bedplanner-designer** - Catalog, markers, layout rows, recovery, planner state
//! 4. **bedplanner-ui** - Interactive console front-end
//! 5. **bedplanner** - Main binary that integrates all crates

pub use bedplanner_core::{CatalogError, EventDispatcher, PlannerEvent, Point, StorageError};
pub use bedplanner_designer::{
    Canvas, Catalog, ImageRef, PlacedMarker, PlannerState, PlantType, RecoverySlot,
};
pub use bedplanner_settings::{Config, FileStore, KeyValueStore, MemoryStore};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Pretty formatting on stderr, so logs do not mix with console output
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::builder()
        .with_default_directive(tracing::Level::INFO.into())
        .from_env_lossy();

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}

/// Load the configuration from `path`, or from the platform default
/// location when no path is given. A missing file yields defaults.
pub fn load_config(path: Option<&std::path::Path>) -> anyhow::Result<Config> {
    use anyhow::Context;

    let path = match path {
        Some(path) => path.to_path_buf(),
        None => Config::default_path()?,
    };
    let config = Config::load_or_default(&path)
        .with_context(|| format!("Loading configuration from {}", path.display()))?;
    tracing::debug!("Using configuration {:?}", config);
    Ok(config)
}
