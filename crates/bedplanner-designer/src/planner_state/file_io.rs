//! File I/O operations (catalog, import, export, recovery) for planner state.

use super::PlannerState;
use crate::catalog::Catalog;
use crate::marker::PlacedMarker;
use crate::serialization;
use anyhow::Context;
use bedplanner_core::{CatalogError, PlannerEvent};
use std::path::Path;

impl PlannerState {
    /// Load the catalog from `path`.
    ///
    /// On failure the planner continues with an empty catalog and the
    /// error is both published and returned.
    pub async fn load_catalog(&mut self, path: impl AsRef<Path>) -> Result<usize, CatalogError> {
        match Catalog::load_from_path(path).await {
            Ok(catalog) => {
                let types = catalog.len();
                self.set_catalog(catalog);
                Ok(types)
            }
            Err(e) => {
                self.set_catalog_failed(e.to_string());
                Err(e)
            }
        }
    }

    /// Layout text of the working set
    pub fn export_csv(&self) -> String {
        serialization::markers_to_csv(self.canvas.markers())
    }

    /// Write the layout to `path`.
    pub async fn export_to_file(&self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let path = path.as_ref();
        serialization::save_layout(path, self.canvas.markers())
            .await
            .with_context(|| format!("Exporting layout to {}", path.display()))
    }

    /// Replace the working set with the markers parsed from `text`.
    pub fn import_csv(&mut self, text: &str) -> usize {
        let markers = serialization::csv_to_markers(text, self.catalog.as_ref());
        self.replace_markers(markers)
    }

    /// Replace the working set with the layout in `path`.
    pub async fn import_from_file(&mut self, path: impl AsRef<Path>) -> anyhow::Result<usize> {
        let path = path.as_ref();
        let markers = serialization::load_layout(path, self.catalog.as_ref())
            .await
            .with_context(|| format!("Importing layout from {}", path.display()))?;
        Ok(self.replace_markers(markers))
    }

    /// Remove every marker.
    pub fn clear(&mut self) {
        self.canvas.clear();
        self.commit();
    }

    fn replace_markers(&mut self, markers: Vec<PlacedMarker>) -> usize {
        let count = markers.len();
        self.canvas.replace(markers);
        self.page = 0;
        self.commit();
        count
    }

    /// Read the recovery slot once. Returns the number of markers offered
    /// for restore, `None` when there is nothing to restore.
    pub fn check_recovery(&mut self) -> Option<usize> {
        let markers = self.recovery.pending(self.catalog.as_ref())?;
        let count = markers.len();
        tracing::info!("Recovery slot holds {} markers", count);
        self.pending_recovery = Some(markers);
        self.events
            .publish(PlannerEvent::RecoveryAvailable { markers: count });
        Some(count)
    }

    /// Replace the working set with the pending recovery markers.
    pub fn restore_recovery(&mut self) -> Option<usize> {
        let mut markers = self.pending_recovery.take()?;
        // The catalog may have loaded after the slot was read
        if let Some(catalog) = &self.catalog {
            for marker in &mut markers {
                marker.image = catalog.resolve_image(&marker.type_name);
            }
        }
        Some(self.replace_markers(markers))
    }

    /// Decline the restore prompt. The slot itself is kept.
    pub fn dismiss_recovery(&mut self) {
        self.pending_recovery = None;
    }
}
