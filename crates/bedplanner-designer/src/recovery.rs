//! Crash-recovery slot.
//!
//! Holds the export text of the working set under a single key in a
//! [`KeyValueStore`]. The slot is overwritten after every working-set
//! change and read once at startup.

use crate::catalog::Catalog;
use crate::error::PersistenceResult;
use crate::marker::PlacedMarker;
use crate::serialization::{csv_to_markers, markers_to_csv};
use bedplanner_settings::KeyValueStore;

/// Single-key recovery slot.
pub struct RecoverySlot {
    store: Box<dyn KeyValueStore>,
    key: String,
}

impl RecoverySlot {
    pub fn new(store: Box<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    /// Overwrite the slot with `markers`.
    ///
    /// Failures are logged and otherwise ignored; the working set stays
    /// authoritative.
    pub fn store(&mut self, markers: &[PlacedMarker]) {
        if let Err(e) = self.store.set(&self.key, &markers_to_csv(markers)) {
            tracing::warn!("Failed to write recovery slot '{}': {}", self.key, e);
        }
    }

    /// Raw slot contents
    pub fn read(&self) -> PersistenceResult<Option<String>> {
        Ok(self.store.get(&self.key)?)
    }

    /// Markers worth offering for restore. `None` when the slot is missing,
    /// unreadable, or holds no marker.
    pub fn pending(&self, catalog: Option<&Catalog>) -> Option<Vec<PlacedMarker>> {
        let text = match self.read() {
            Ok(Some(text)) => text,
            Ok(None) => return None,
            Err(e) => {
                tracing::warn!("Failed to read recovery slot '{}': {}", self.key, e);
                return None;
            }
        };

        let markers = csv_to_markers(&text, catalog);
        if markers.is_empty() {
            None
        } else {
            Some(markers)
        }
    }
}

impl std::fmt::Debug for RecoverySlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecoverySlot").field("key", &self.key).finish()
    }
}
