//! Pointer, modifier key and click handling.

use super::PlannerState;
use crate::marker::PlacedMarker;
use bedplanner_core::{PlannerEvent, Point};

/// Result of a click on the canvas.
#[derive(Debug, Clone, PartialEq)]
pub enum ClickOutcome {
    /// A marker was appended
    Placed,
    /// The nearest marker was removed
    Deleted(PlacedMarker),
    /// Nothing changed
    Ignored,
}

/// Pointer cursor the front-end should show over the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorHint {
    Delete,
    Inspect,
    Crosshair,
    NotAllowed,
}

/// Emphasis of a marker on the canvas, strongest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerHighlight {
    /// Would be removed by a delete click
    DeleteTarget,
    /// Under the pointer while inspecting
    Inspected,
    /// Marker of the hovered table row
    Individual,
    /// Same plant as the hovered table row
    Group,
    None,
}

impl PlannerState {
    pub fn pointer(&self) -> Option<Point> {
        self.pointer
    }

    /// Pointer moved over the canvas.
    pub fn pointer_moved(&mut self, point: Point) {
        self.pointer = Some(point);
        self.refresh_inspected();
    }

    /// Pointer left the canvas.
    pub fn pointer_left(&mut self) {
        self.pointer = None;
        self.inspected = None;
    }

    pub fn delete_mode(&self) -> bool {
        self.delete_mode
    }

    pub fn inspect_mode(&self) -> bool {
        self.inspect_mode
    }

    /// Delete modifier pressed or released.
    pub fn set_delete_mode(&mut self, held: bool) {
        if self.delete_mode != held {
            self.delete_mode = held;
            self.publish_mode();
        }
    }

    /// Inspect modifier pressed or released.
    pub fn set_inspect_mode(&mut self, held: bool) {
        if self.inspect_mode != held {
            self.inspect_mode = held;
            self.refresh_inspected();
            self.publish_mode();
        }
    }

    fn publish_mode(&self) {
        self.events.publish(PlannerEvent::ModeChanged {
            delete: self.delete_mode,
            inspect: self.inspect_mode,
        });
    }

    /// Recompute the inspected marker and move the table to its page.
    pub(crate) fn refresh_inspected(&mut self) {
        self.inspected = match (self.inspect_mode, self.pointer) {
            (true, Some(point)) => self.canvas.marker_at(&point),
            _ => None,
        };

        if let Some(index) = self.inspected {
            let per_page = self.config.table.rows_per_page.max(1);
            if let Some(row) = self
                .table_rows()
                .iter()
                .position(|r| r.marker_index == index)
            {
                self.page = row / per_page;
            }
        }
    }

    /// Click on the canvas at `point`.
    ///
    /// Delete mode removes the nearest marker within the threshold. Inspect
    /// mode alone ignores the click. Otherwise a marker of the selected
    /// type is placed.
    pub fn click(&mut self, point: Point) -> ClickOutcome {
        self.pointer = Some(point);

        if self.delete_mode {
            let threshold = self.config.placement.delete_threshold;
            return match self.canvas.delete_nearest(&point, threshold) {
                Some(marker) => {
                    tracing::debug!("Deleted '{}' at {}", marker.type_name, marker.position);
                    self.commit();
                    ClickOutcome::Deleted(marker)
                }
                None => ClickOutcome::Ignored,
            };
        }

        if self.inspect_mode {
            return ClickOutcome::Ignored;
        }

        if self.add_marker(point) {
            ClickOutcome::Placed
        } else {
            ClickOutcome::Ignored
        }
    }

    /// Place a marker of the selected type at `point` with the current
    /// diameter. No-op without a catalog or selection.
    pub fn add_marker(&mut self, point: Point) -> bool {
        let (Some(catalog), Some(name)) = (self.catalog.as_ref(), self.selected_type.as_deref())
        else {
            tracing::debug!("Placement ignored: no catalog or selection");
            return false;
        };

        if !self.canvas.place(catalog, name, point, self.diameter) {
            return false;
        }
        self.commit();
        true
    }

    /// Marker a delete click would remove right now.
    pub fn delete_target(&self) -> Option<usize> {
        if !self.delete_mode {
            return None;
        }
        let point = self.pointer?;
        self.canvas
            .delete_target(&point, self.config.placement.delete_threshold)
    }

    /// The marker that would be placed by a click, derived from current
    /// state and never stored.
    pub fn preview(&self) -> Option<PlacedMarker> {
        if self.delete_mode || self.inspect_mode {
            return None;
        }
        let pointer = self.pointer?;
        let plant = self.selected_plant_type()?;
        let catalog = self.catalog.as_ref()?;

        Some(PlacedMarker::new(
            pointer,
            f64::from(self.diameter) / 2.0,
            catalog.resolve_image(&plant.name),
            plant.name.clone(),
        ))
    }

    pub fn cursor_hint(&self) -> CursorHint {
        if self.delete_mode {
            CursorHint::Delete
        } else if self.inspect_mode {
            CursorHint::Inspect
        } else if self.selected_plant_type().is_some() {
            CursorHint::Crosshair
        } else {
            CursorHint::NotAllowed
        }
    }

    /// Emphasis of the marker at `index`.
    pub fn marker_highlight(&self, index: usize) -> MarkerHighlight {
        let Some(marker) = self.canvas.get(index) else {
            return MarkerHighlight::None;
        };

        if self.delete_target() == Some(index) {
            return MarkerHighlight::DeleteTarget;
        }
        if self.inspect_mode && self.inspected == Some(index) {
            return MarkerHighlight::Inspected;
        }

        let hovered = self.hovered_row.and_then(|i| self.canvas.get(i));
        if hovered.is_some_and(|h| h.same_placement(marker)) {
            MarkerHighlight::Individual
        } else if self.hovered_name.as_deref() == Some(marker.type_name.as_str()) {
            MarkerHighlight::Group
        } else {
            MarkerHighlight::None
        }
    }
}
