//! Plant catalog
//!
//! Loads the plant types a user can place from delimited text with the
//! header columns `pflanzenname`, `bildname` and `durchmesser`. Other
//! columns are kept per entry for the placed-plants table.
//!
//! Loading never fails on individual rows:
//! - name and image are trimmed; rows where either is empty are dropped
//! - the diameter is read like a leading integer and falls back to 60
//! - `.jpg`/`.jpeg` image names are rewritten to `.png`
//! - a repeated name keeps its first row
//!
//! The canonical image names of all kept entries form the validated image
//! set; any image outside it is replaced by the placeholder.

use crate::delimited::{parse_records, HeaderIndex};
use bedplanner_core::constants::{
    CANONICAL_IMAGE_EXTENSION, CATALOG_IMAGE_COLUMN, CATALOG_NAME_COLUMN, DEFAULT_DIAMETER,
    DIAMETER_COLUMN, RASTER_EXTENSIONS,
};
use bedplanner_core::CatalogError;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::num::IntErrorKind;
use std::path::Path;

/// Reference to the image drawn for a plant.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ImageRef {
    /// A catalog image, by canonical filename
    Asset(String),
    /// The placeholder image
    Placeholder,
}

impl ImageRef {
    /// Resolve to an href: `<base>/<file>` for assets, `placeholder` otherwise.
    pub fn href(&self, base: &str, placeholder: &str) -> String {
        match self {
            ImageRef::Asset(file) => format!("{}/{}", base.trim_end_matches('/'), file),
            ImageRef::Placeholder => placeholder.to_string(),
        }
    }

    /// Check if this is the placeholder
    pub fn is_placeholder(&self) -> bool {
        matches!(self, ImageRef::Placeholder)
    }
}

/// A plant type available for placement.
#[derive(Debug, Clone, PartialEq)]
pub struct PlantType {
    /// Unique display name
    pub name: String,
    /// Canonical image filename
    pub image: String,
    /// Default diameter in canvas units
    pub default_diameter: u32,
    /// Full catalog row, column name to value
    pub details: BTreeMap<String, String>,
}

/// Rewrite raster image extensions to the canonical one.
///
/// `rose.JPG` and `rose.jpeg` both become `rose.png`; other names are
/// returned unchanged.
pub fn normalize_image_name(name: &str) -> String {
    if let Some((stem, ext)) = name.rsplit_once('.') {
        if RASTER_EXTENSIONS
            .iter()
            .any(|raster| ext.eq_ignore_ascii_case(raster))
        {
            return format!("{}.{}", stem, CANONICAL_IMAGE_EXTENSION);
        }
    }
    name.to_string()
}

/// Read a diameter the way a leading-integer parse would: optional sign,
/// then digits up to the first non-digit. Values too large for `u32`
/// saturate. Anything unusable or not positive yields the default.
fn coerce_diameter(raw: Option<&str>) -> u32 {
    let text = raw.unwrap_or_default().trim_start();
    let (negative, rest) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text.strip_prefix('+').unwrap_or(text)),
    };
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());

    let value = match rest[..end].parse::<u32>() {
        Ok(value) => value,
        Err(e) if *e.kind() == IntErrorKind::PosOverflow => u32::MAX,
        Err(_) => 0,
    };
    if value > 0 && !negative {
        value
    } else {
        DEFAULT_DIAMETER
    }
}

/// The loaded plant catalog.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    types: Vec<PlantType>,
    valid_images: HashSet<String>,
}

impl Catalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse catalog text. Rows that fail validation are dropped.
    pub fn from_csv(text: &str) -> Self {
        let mut records = parse_records(text).into_iter();
        let Some(header) = records.next() else {
            return Self::new();
        };
        let index = HeaderIndex::new(&header);

        let mut catalog = Self::new();
        let mut dropped = 0usize;

        for record in records {
            let name = index
                .get(&record, CATALOG_NAME_COLUMN)
                .unwrap_or_default()
                .trim()
                .to_string();
            let image = index
                .get(&record, CATALOG_IMAGE_COLUMN)
                .unwrap_or_default()
                .trim();

            if name.is_empty() || image.is_empty() {
                dropped += 1;
                continue;
            }
            if catalog.get(&name).is_some() {
                tracing::debug!("Duplicate catalog entry '{}' ignored", name);
                dropped += 1;
                continue;
            }

            let mut details = BTreeMap::new();
            for (column, value) in index.names().iter().zip(record.iter()) {
                if !column.is_empty() {
                    details
                        .entry(column.clone())
                        .or_insert_with(|| value.clone());
                }
            }

            let plant = PlantType {
                name,
                image: normalize_image_name(image),
                default_diameter: coerce_diameter(index.get(&record, DIAMETER_COLUMN)),
                details,
            };
            catalog.valid_images.insert(plant.image.clone());
            catalog.types.push(plant);
        }

        if dropped > 0 {
            tracing::debug!("Dropped {} catalog rows", dropped);
        }
        catalog
    }

    /// Read and parse a catalog file.
    ///
    /// Fails if the file cannot be read or yields no usable entry.
    pub async fn load_from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let text = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| CatalogError::Unreadable {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;

        if parse_records(&text).is_empty() {
            return Err(CatalogError::MissingHeader);
        }

        let catalog = Self::from_csv(&text);
        if catalog.is_empty() {
            return Err(CatalogError::NoEntries);
        }

        tracing::info!(
            "Loaded {} plant types from {}",
            catalog.len(),
            path.display()
        );
        Ok(catalog)
    }

    /// All plant types in file order
    pub fn types(&self) -> &[PlantType] {
        &self.types
    }

    /// Look up a plant type by exact name
    pub fn get(&self, name: &str) -> Option<&PlantType> {
        self.types.iter().find(|t| t.name == name)
    }

    /// Check if a plant type exists
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// The entry selected by default (the first one)
    pub fn first(&self) -> Option<&PlantType> {
        self.types.first()
    }

    /// Canonical filenames of all trusted images
    pub fn valid_images(&self) -> &HashSet<String> {
        &self.valid_images
    }

    /// Check whether an image filename is trusted (after normalisation)
    pub fn is_valid_image(&self, image: &str) -> bool {
        self.valid_images.contains(&normalize_image_name(image))
    }

    /// Resolve the image for a plant type name, falling back to the
    /// placeholder when the type is unknown, has no image, or its image is
    /// not in the validated set.
    pub fn resolve_image(&self, name: &str) -> ImageRef {
        match self.get(name) {
            Some(plant) if !plant.image.is_empty() && self.is_valid_image(&plant.image) => {
                ImageRef::Asset(normalize_image_name(&plant.image))
            }
            _ => ImageRef::Placeholder,
        }
    }

    /// Search names (case-insensitive substring), keeping catalog order.
    /// An empty query returns every entry.
    pub fn search(&self, query: &str) -> Vec<&PlantType> {
        let query = query.trim().to_lowercase();
        self.types
            .iter()
            .filter(|t| query.is_empty() || t.name.to_lowercase().contains(&query))
            .collect()
    }

    /// Number of plant types
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Check if the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}
