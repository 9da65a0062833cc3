//! Placed-plants table view model.
//!
//! One row per placed marker, joined to the catalog row of the same plant
//! name. Markers whose name is not in the catalog have no row. The
//! `durchmesser` cell always shows the placed diameter, not the catalog
//! default.

use crate::canvas::Canvas;
use crate::catalog::Catalog;
use bedplanner_core::constants::{DIAMETER_COLUMN, DISPLAY_COLUMNS};
use serde::Serialize;

/// A table row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableRow {
    /// Index of the marker this row describes
    pub marker_index: usize,
    /// Plant name
    pub name: String,
    /// Cells in [`DISPLAY_COLUMNS`] order; missing catalog values are empty
    pub cells: Vec<String>,
}

impl TableRow {
    /// Cell value by column name
    pub fn cell(&self, column: &str) -> Option<&str> {
        DISPLAY_COLUMNS
            .iter()
            .position(|c| *c == column)
            .and_then(|i| self.cells.get(i))
            .map(String::as_str)
    }
}

/// Row emphasis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RowHighlight {
    /// The hovered row, or the row of the inspected marker
    Individual,
    /// Same plant as the inspected marker or the hovered row
    Group,
    None,
}

/// Build rows for every marker that has a catalog entry.
pub fn build_rows(canvas: &Canvas, catalog: &Catalog) -> Vec<TableRow> {
    canvas
        .markers()
        .iter()
        .enumerate()
        .filter_map(|(marker_index, marker)| {
            let plant = catalog.get(&marker.type_name)?;
            let cells = DISPLAY_COLUMNS
                .iter()
                .map(|column| {
                    if *column == DIAMETER_COLUMN {
                        marker.diameter().to_string()
                    } else {
                        plant.details.get(*column).cloned().unwrap_or_default()
                    }
                })
                .collect();
            Some(TableRow {
                marker_index,
                name: marker.type_name.clone(),
                cells,
            })
        })
        .collect()
}

/// Number of pages for `rows` rows. An empty table still has one page.
pub fn page_count(rows: usize, rows_per_page: usize) -> usize {
    rows.div_ceil(rows_per_page.max(1)).max(1)
}

/// The rows on `page`, clamped to the last page.
pub fn page_slice(rows: &[TableRow], page: usize, rows_per_page: usize) -> &[TableRow] {
    let per_page = rows_per_page.max(1);
    let page = page.min(page_count(rows.len(), per_page) - 1);
    let start = (page * per_page).min(rows.len());
    let end = (start + per_page).min(rows.len());
    &rows[start..end]
}
