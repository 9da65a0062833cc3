//! Canvas holding the working set of placed markers.
//!
//! Markers are kept in insertion order, which is also the drawing order.
//! The set is only changed by appending, removing one marker, clearing, or
//! replacing it wholesale.


use crate::catalog::Catalog;
use crate::marker::PlacedMarker;
use bedplanner_core::Point;

/// Working set of placed markers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Canvas {
    markers: Vec<PlacedMarker>,
}

impl Canvas {
    /// Creates an empty canvas.
    pub fn new() -> Self {
        Self::default()
    }

    /// Places a marker of `type_name` at `position`.
    ///
    /// Returns `false` without changing anything when the type is not in
    /// the catalog. The image is resolved now and falls back to the
    /// placeholder. No bounds or overlap checks are made.
    pub fn place(
        &mut self,
        catalog: &Catalog,
        type_name: &str,
        position: Point,
        diameter: u32,
    ) -> bool {
        if !catalog.contains(type_name) {
            tracing::debug!("Ignoring placement of unknown type '{}'", type_name);
            return false;
        }

        let image = catalog.resolve_image(type_name);
        self.push(PlacedMarker::new(
            position,
            f64::from(diameter) / 2.0,
            image,
            type_name,
        ));
        true
    }

    /// Appends a marker as-is.
    pub fn push(&mut self, marker: PlacedMarker) {
        self.markers.push(marker);
    }

    /// Removes the marker at `index`.
    pub fn remove(&mut self, index: usize) -> Option<PlacedMarker> {
        if index < self.markers.len() {
            Some(self.markers.remove(index))
        } else {
            None
        }
    }

    /// Removes every marker.
    pub fn clear(&mut self) {
        self.markers.clear();
    }

    /// Replaces the working set wholesale.
    pub fn replace(&mut self, markers: Vec<PlacedMarker>) {
        self.markers = markers;
    }

    /// Markers in drawing order.
    pub fn markers(&self) -> &[PlacedMarker] {
        &self.markers
    }

    /// Gets a marker by index.
    pub fn get(&self, index: usize) -> Option<&PlacedMarker> {
        self.markers.get(index)
    }

    /// Returns the number of markers.
    pub fn len(&self) -> usize {
        self.markers.len()
    }

    /// Checks if the canvas has no markers.
    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }
}
