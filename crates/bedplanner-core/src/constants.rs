//! Application-wide constants.
//!
//! Defaults here are the values used when no configuration file overrides
//! them. Column names are the German headers of the catalog and export files.

/// Bed width in canvas units.
pub const BED_WIDTH: u32 = 1280;

/// Bed height in canvas units.
pub const BED_HEIGHT: u32 = 200;

/// Diameter used when a catalog row or import row has no usable diameter.
pub const DEFAULT_DIAMETER: u32 = 60;

/// Smallest diameter the diameter control accepts.
pub const MIN_DIAMETER: u32 = 10;

/// A delete click only removes the nearest marker if it is strictly closer than this.
pub const DELETE_THRESHOLD: f64 = 30.0;

/// Table rows shown per page.
pub const ROWS_PER_PAGE: usize = 5;

/// Key of the crash-recovery slot in the key-value store.
pub const AUTOSAVE_KEY: &str = "autosave.csv";

/// Suggested filename for exports.
pub const DEFAULT_EXPORT_FILENAME: &str = "pflanzen_status.csv";

/// Catalog column holding the plant name.
pub const CATALOG_NAME_COLUMN: &str = "pflanzenname";

/// Catalog column holding the image filename.
pub const CATALOG_IMAGE_COLUMN: &str = "bildname";

/// Catalog and export column holding the diameter.
pub const DIAMETER_COLUMN: &str = "durchmesser";

/// Header row of the export format.
pub const EXPORT_HEADER: &str = "x,y,name,durchmesser";

/// Extensions rewritten to [`CANONICAL_IMAGE_EXTENSION`].
pub const RASTER_EXTENSIONS: &[&str] = &["jpg", "jpeg"];

/// Extension every catalog image reference is normalised to.
pub const CANONICAL_IMAGE_EXTENSION: &str = "png";

/// Path prefix for catalog images.
pub const IMAGE_BASE: &str = "/plants";

/// Image shown wherever a catalog image cannot be trusted.
pub const PLACEHOLDER_IMAGE: &str = "/plants/placeholder.svg";

/// Catalog columns shown in the placed-plants table, in display order.
pub const DISPLAY_COLUMNS: &[&str] = &[
    "pflanzenname",
    "durchmesser",
    "hoehe",
    "bluetezeit",
    "standort",
    "erntezeit",
    "wuchsgeschwindigkeit",
    "laub",
    "laubfarbe",
    "boden",
    "wurzelsystem",
    "wuchs",
    "verfuegbarkeit",
    "lieferzeit",
    "preis",
    "url",
];
