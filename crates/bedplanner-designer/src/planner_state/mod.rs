//! Planner state for UI integration.
//! Holds everything the front-end shows and routes pointer, keyboard and
//! file events into the placement model.
//!
//! This module is split into submodules:
//! - `selection`: catalog, plant type selection and diameter
//! - `interaction`: pointer, modifier keys, clicks and highlights
//! - `file_io`: catalog loading, layout import/export and recovery

mod file_io;
mod interaction;
mod selection;

pub use interaction::{ClickOutcome, CursorHint, MarkerHighlight};
pub use selection::TypeOption;

use crate::canvas::Canvas;
use crate::catalog::Catalog;
use crate::marker::PlacedMarker;
use crate::recovery::RecoverySlot;
use crate::table::{self, RowHighlight, TableRow};
use bedplanner_core::{EventDispatcher, PlannerEvent, Point};
use bedplanner_settings::{Config, KeyValueStore};
use serde::Serialize;

/// Serializable view of the planner for observers and scripting.
#[derive(Debug, Clone, Serialize)]
pub struct PlannerSnapshot {
    pub selected_type: Option<String>,
    pub diameter: u32,
    pub delete_mode: bool,
    pub inspect_mode: bool,
    pub markers: Vec<PlacedMarker>,
    pub page: usize,
    pub page_count: usize,
    pub rows: Vec<TableRow>,
}

/// Planner state
pub struct PlannerState {
    pub(crate) config: Config,
    pub(crate) catalog: Option<Catalog>,
    pub(crate) catalog_error: Option<String>,
    pub(crate) selected_type: Option<String>,
    pub(crate) diameter: u32,
    pub(crate) pointer: Option<Point>,
    pub(crate) delete_mode: bool,
    pub(crate) inspect_mode: bool,
    /// Marker under the pointer while inspecting
    pub(crate) inspected: Option<usize>,
    /// Marker of the hovered table row
    pub(crate) hovered_row: Option<usize>,
    pub(crate) hovered_name: Option<String>,
    pub(crate) page: usize,
    pub(crate) canvas: Canvas,
    pub(crate) recovery: RecoverySlot,
    pub(crate) pending_recovery: Option<Vec<PlacedMarker>>,
    pub(crate) events: EventDispatcher,
}

impl PlannerState {
    /// Creates a planner with an empty working set. `store` backs the
    /// recovery slot.
    pub fn new(config: Config, store: Box<dyn KeyValueStore>) -> Self {
        let recovery = RecoverySlot::new(store, config.storage.autosave_key.clone());
        let diameter = config.placement.default_diameter;
        Self {
            config,
            catalog: None,
            catalog_error: None,
            selected_type: None,
            diameter,
            pointer: None,
            delete_mode: false,
            inspect_mode: false,
            inspected: None,
            hovered_row: None,
            hovered_name: None,
            page: 0,
            canvas: Canvas::new(),
            recovery,
            pending_recovery: None,
            events: EventDispatcher::default(),
        }
    }

    /// Active configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Event dispatcher observers subscribe to
    pub fn events(&self) -> &EventDispatcher {
        &self.events
    }

    /// Loaded catalog, if any
    pub fn catalog(&self) -> Option<&Catalog> {
        self.catalog.as_ref()
    }

    /// Why the catalog failed to load, if it did
    pub fn catalog_error(&self) -> Option<&str> {
        self.catalog_error.as_deref()
    }

    /// Catalog loaded with at least one entry
    pub fn has_catalog(&self) -> bool {
        self.catalog.as_ref().is_some_and(|c| !c.is_empty())
    }

    /// Placed markers in drawing order
    pub fn markers(&self) -> &[PlacedMarker] {
        self.canvas.markers()
    }

    /// The working set
    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// Hovered table row's marker
    pub fn hovered_row(&self) -> Option<usize> {
        self.hovered_row
    }

    /// Hovered table row's plant name
    pub fn hovered_name(&self) -> Option<&str> {
        self.hovered_name.as_deref()
    }

    /// Marker under the pointer while inspect mode is held
    pub fn inspected(&self) -> Option<usize> {
        self.inspected
    }

    /// Markers waiting to be restored from the recovery slot
    pub fn pending_recovery(&self) -> Option<&[PlacedMarker]> {
        self.pending_recovery.as_deref()
    }

    /// Table rows for the whole working set
    pub fn table_rows(&self) -> Vec<TableRow> {
        match &self.catalog {
            Some(catalog) => table::build_rows(&self.canvas, catalog),
            None => Vec::new(),
        }
    }

    /// Number of table pages
    pub fn page_count(&self) -> usize {
        table::page_count(self.table_rows().len(), self.config.table.rows_per_page)
    }

    /// Current table page, clamped to the last page
    pub fn page(&self) -> usize {
        self.page.min(self.page_count() - 1)
    }

    /// Rows on the current page
    pub fn page_rows(&self) -> Vec<TableRow> {
        let rows = self.table_rows();
        table::page_slice(&rows, self.page(), self.config.table.rows_per_page).to_vec()
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page.min(self.page_count() - 1);
    }

    pub fn next_page(&mut self) {
        self.set_page(self.page() + 1);
    }

    pub fn previous_page(&mut self) {
        self.set_page(self.page().saturating_sub(1));
    }

    /// Emphasis for a table row.
    pub fn row_highlight(&self, row: &TableRow) -> RowHighlight {
        let inspected = self.inspected.filter(|_| self.inspect_mode);
        if inspected == Some(row.marker_index) || self.hovered_row == Some(row.marker_index) {
            return RowHighlight::Individual;
        }

        let group = inspected
            .and_then(|i| self.canvas.get(i))
            .map(|m| m.type_name.as_str())
            .or(self.hovered_name.as_deref());
        if group == Some(row.name.as_str()) {
            RowHighlight::Group
        } else {
            RowHighlight::None
        }
    }

    /// Hover a table row by its position in [`table_rows`](Self::table_rows).
    pub fn hover_row(&mut self, row: usize) -> bool {
        match self.table_rows().into_iter().nth(row) {
            Some(row) => {
                self.hovered_row = Some(row.marker_index);
                self.hovered_name = Some(row.name);
                true
            }
            None => false,
        }
    }

    pub fn clear_row_hover(&mut self) {
        self.hovered_row = None;
        self.hovered_name = None;
    }

    /// Capture the state observers render from.
    pub fn snapshot(&self) -> PlannerSnapshot {
        PlannerSnapshot {
            selected_type: self.selected_type().map(str::to_string),
            diameter: self.diameter,
            delete_mode: self.delete_mode,
            inspect_mode: self.inspect_mode,
            markers: self.canvas.markers().to_vec(),
            page: self.page(),
            page_count: self.page_count(),
            rows: self.page_rows(),
        }
    }

    /// [`snapshot`](Self::snapshot) as pretty-printed JSON
    pub fn snapshot_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.snapshot())
    }

    /// Record a working-set change: write the recovery slot, drop stale
    /// hover state and notify observers.
    pub(crate) fn commit(&mut self) {
        self.recovery.store(self.canvas.markers());

        // Marker indices shift on removal
        self.clear_row_hover();
        self.refresh_inspected();

        self.events.publish(PlannerEvent::MarkersChanged {
            count: self.canvas.len(),
        });
    }
}

impl std::fmt::Debug for PlannerState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlannerState")
            .field("catalog_types", &self.catalog.as_ref().map(Catalog::len))
            .field("selected_type", &self.selected_type)
            .field("diameter", &self.diameter)
            .field("markers", &self.canvas.len())
            .field("delete_mode", &self.delete_mode)
            .field("inspect_mode", &self.inspect_mode)
            .finish()
    }
}
