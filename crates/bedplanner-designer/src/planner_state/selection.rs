//! Catalog, plant type selection and diameter control.

use super::PlannerState;
use crate::catalog::{Catalog, ImageRef};
use bedplanner_core::PlannerEvent;

/// An entry of the plant type dropdown.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeOption {
    pub name: String,
    pub image: ImageRef,
    pub default_diameter: u32,
}

impl PlannerState {
    /// Install a loaded catalog. When nothing valid is selected the first
    /// entry becomes the selection.
    pub fn set_catalog(&mut self, catalog: Catalog) {
        let types = catalog.len();
        let first = catalog.first().map(|t| t.name.clone());
        self.catalog = Some(catalog);
        self.catalog_error = None;
        self.events.publish(PlannerEvent::CatalogLoaded { types });

        if self.selected_plant_type().is_none() {
            match first {
                Some(name) => {
                    self.select_type(&name);
                }
                None => self.selected_type = None,
            }
        }
    }

    /// Record a catalog failure. Placement stays disabled until a catalog
    /// loads.
    pub fn set_catalog_failed(&mut self, reason: impl Into<String>) {
        let reason = reason.into();
        tracing::error!("Catalog unavailable: {}", reason);
        self.catalog = Some(Catalog::new());
        self.selected_type = None;
        self.catalog_error = Some(reason.clone());
        self.events.publish(PlannerEvent::CatalogFailed(reason));
    }

    /// Select a plant type by exact name and take over its default
    /// diameter. Unknown names are ignored.
    pub fn select_type(&mut self, name: &str) -> bool {
        let Some(default_diameter) = self
            .catalog
            .as_ref()
            .and_then(|c| c.get(name))
            .map(|t| t.default_diameter)
        else {
            tracing::debug!("Cannot select unknown plant type '{}'", name);
            return false;
        };

        self.selected_type = Some(name.to_string());
        self.diameter = default_diameter;
        self.events
            .publish(PlannerEvent::SelectionChanged(self.selected_type.clone()));
        self.events
            .publish(PlannerEvent::DiameterChanged(self.diameter));
        true
    }

    /// Selected type name, if it is in the catalog
    pub fn selected_type(&self) -> Option<&str> {
        self.selected_plant_type().map(|t| t.name.as_str())
    }

    pub(crate) fn selected_plant_type(&self) -> Option<&crate::catalog::PlantType> {
        let name = self.selected_type.as_deref()?;
        self.catalog.as_ref()?.get(name)
    }

    /// Diameter for the next placement
    pub fn diameter(&self) -> u32 {
        self.diameter
    }

    /// Set the diameter, clamped to the configured range. Returns the value
    /// actually applied. With an inverted range the maximum wins.
    pub fn set_diameter(&mut self, diameter: u32) -> u32 {
        let placement = &self.config.placement;
        self.diameter = diameter
            .max(placement.min_diameter)
            .min(placement.max_diameter);
        self.events
            .publish(PlannerEvent::DiameterChanged(self.diameter));
        self.diameter
    }

    /// Dropdown entries matching `query` in catalog order.
    pub fn search_types(&self, query: &str) -> Vec<TypeOption> {
        let Some(catalog) = &self.catalog else {
            return Vec::new();
        };
        catalog
            .search(query)
            .into_iter()
            .map(|t| TypeOption {
                name: t.name.clone(),
                image: catalog.resolve_image(&t.name),
                default_diameter: t.default_diameter,
            })
            .collect()
    }
}
