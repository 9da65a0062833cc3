//! Placed plant markers.

use crate::catalog::ImageRef;
use bedplanner_core::Point;
use serde::{Deserialize, Serialize};

/// A plant placed on the bed.
///
/// The radius is captured when the marker is created; later changes to
/// the catalog default or the diameter control do not resize it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedMarker {
    /// Centre in canvas units
    pub position: Point,
    /// Radius in canvas units
    pub radius: f64,
    /// Image drawn inside the circle
    pub image: ImageRef,
    /// Catalog name the marker was placed as
    pub type_name: String,
}

impl PlacedMarker {
    pub fn new(position: Point, radius: f64, image: ImageRef, type_name: impl Into<String>) -> Self {
        Self {
            position,
            radius,
            image,
            type_name: type_name.into(),
        }
    }

    /// Diameter as written to exports and shown in the table.
    pub fn diameter(&self) -> i64 {
        (self.radius * 2.0).round() as i64
    }

    /// Point-in-circle test, boundary inclusive.
    pub fn contains(&self, point: &Point) -> bool {
        self.position.distance_to(point) <= self.radius
    }

    /// Same type, position and radius. Used to highlight a marker picked
    /// from the table.
    pub fn same_placement(&self, other: &PlacedMarker) -> bool {
        self.type_name == other.type_name
            && self.position == other.position
            && self.radius == other.radius
    }
}
