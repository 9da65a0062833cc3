//! # BedPlanner Designer
//!
//! The placement model of BedPlanner: a plant catalog, circular plant
//! markers placed on a rectangular bed, and the operations around them.
//!
//! ## Core Components
//!
//! - **Catalog**: plant types loaded from delimited text, with validated images
//! - **Canvas**: the ordered working set of placed markers
//! - **Hit testing**: nearest-marker lookup for deletion, point-in-circle for inspection
//! - **Serialization**: layout import/export as `x,y,name,durchmesser` rows
//! - **Recovery**: a single key-value slot rewritten after every change
//! - **Planner state**: pointer, modifiers, selection and table state for a front-end
//! - **Table**: placed plants joined with their catalog rows, paginated
//! - **SVG renderer**: a snapshot of the bed with highlights and preview
//!
//! ## Architecture
//!
//! ```text
//! PlannerState
//!   ├── Catalog (plant types)
//!   ├── Canvas (placed markers)
//!   │     └── hit testing
//!   ├── RecoverySlot (autosave)
//!   └── Table view model
//!
//! Serialization (layout rows)
//! SVG renderer (reads PlannerState)
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use bedplanner_designer::PlannerState;
//! use bedplanner_settings::{Config, MemoryStore};
//!
//! let mut state = PlannerState::new(Config::default(), Box::new(MemoryStore::new()));
//! state.load_catalog("data/pflanzen.csv").await?;
//! state.click(Point::new(120.0, 80.0));
//! println!("{}", state.export_csv());
//! ```

pub mod canvas;
pub mod catalog;
pub mod delimited;
pub mod error;
pub mod marker;
pub mod planner_state;
pub mod recovery;
pub mod serialization;
pub mod svg_renderer;
pub mod table;

pub use canvas::Canvas;
pub use catalog::{normalize_image_name, Catalog, ImageRef, PlantType};
pub use error::{PersistenceError, PersistenceResult};
pub use marker::PlacedMarker;
pub use planner_state::{
    ClickOutcome, CursorHint, MarkerHighlight, PlannerSnapshot, PlannerState, TypeOption,
};
pub use recovery::RecoverySlot;
pub use serialization::{csv_to_markers, markers_to_csv};
pub use svg_renderer::render_svg;
pub use table::{RowHighlight, TableRow};

pub use bedplanner_core::Point;
