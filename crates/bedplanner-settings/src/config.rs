//! Configuration and settings management for BedPlanner
//!
//! Provides configuration file handling and validation.
//! Supports JSON and TOML file formats stored in platform-specific directories.
//!
//! Configuration is organized into logical sections:
//! - Bed dimensions
//! - Placement defaults (diameter range, delete threshold)
//! - Catalog source and image paths
//! - Storage for the recovery slot
//! - Table pagination

use crate::error::{ConfigError, SettingsError, SettingsResult};
use bedplanner_core::constants;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Bed canvas dimensions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BedSettings {
    /// Bed width in canvas units
    pub width: u32,
    /// Bed height in canvas units
    pub height: u32,
}

impl Default for BedSettings {
    fn default() -> Self {
        Self {
            width: constants::BED_WIDTH,
            height: constants::BED_HEIGHT,
        }
    }
}

/// Marker placement settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlacementSettings {
    /// Diameter used before any type is selected
    pub default_diameter: u32,
    /// Lower bound of the diameter control
    pub min_diameter: u32,
    /// Upper bound of the diameter control
    pub max_diameter: u32,
    /// Maximum distance (exclusive) for delete-nearest
    pub delete_threshold: f64,
}

impl Default for PlacementSettings {
    fn default() -> Self {
        Self {
            default_diameter: constants::DEFAULT_DIAMETER,
            min_diameter: constants::MIN_DIAMETER,
            max_diameter: constants::BED_HEIGHT,
            delete_threshold: constants::DELETE_THRESHOLD,
        }
    }
}

/// Catalog source settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogSettings {
    /// Path of the catalog CSV file
    pub path: PathBuf,
    /// Prefix joined with catalog image filenames
    pub image_base: String,
    /// Image reference used when a catalog image is missing or untrusted
    pub placeholder: String,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            path: PathBuf::from("data").join("pflanzen.csv"),
            image_base: constants::IMAGE_BASE.to_string(),
            placeholder: constants::PLACEHOLDER_IMAGE.to_string(),
        }
    }
}

/// Recovery slot storage settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageSettings {
    /// Directory backing the key-value store
    pub directory: PathBuf,
    /// Key of the recovery slot
    pub autosave_key: String,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            directory: Config::default_data_dir(),
            autosave_key: constants::AUTOSAVE_KEY.to_string(),
        }
    }
}

/// Placed-plants table settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableSettings {
    /// Rows per page
    pub rows_per_page: usize,
}

impl Default for TableSettings {
    fn default() -> Self {
        Self {
            rows_per_page: constants::ROWS_PER_PAGE,
        }
    }
}

/// Complete application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Bed dimensions
    pub bed: BedSettings,
    /// Placement defaults
    pub placement: PlacementSettings,
    /// Catalog source
    pub catalog: CatalogSettings,
    /// Recovery storage
    pub storage: StorageSettings,
    /// Table pagination
    pub table: TableSettings,
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Platform config file location (`<config dir>/bedplanner/config.toml`)
    pub fn default_path() -> SettingsResult<PathBuf> {
        let mut path = dirs::config_dir().ok_or_else(|| {
            SettingsError::ConfigDirectory("no platform config directory".to_string())
        })?;
        path.push("bedplanner");
        path.push("config.toml");
        Ok(path)
    }

    /// Platform data directory for the recovery store
    pub fn default_data_dir() -> PathBuf {
        dirs::data_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."))
            .join("bedplanner")
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| SettingsError::LoadError(format!("{}: {}", path.display(), e)))?;

        let config: Self = match Self::format_of(path)? {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        Ok(config)
    }

    /// Load config from file, falling back to defaults when it does not exist
    pub fn load_or_default(path: &Path) -> SettingsResult<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            tracing::info!("No config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match Self::format_of(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .map_err(|e| SettingsError::ConfigDirectory(e.to_string()))?;
            }
        }

        std::fs::write(path, content)
            .map_err(|e| SettingsError::SaveError(format!("{}: {}", path.display(), e)))?;

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.bed.width == 0 {
            return Err(out_of_range("bed.width", self.bed.width));
        }
        if self.bed.height == 0 {
            return Err(out_of_range("bed.height", self.bed.height));
        }

        let placement = &self.placement;
        if placement.min_diameter == 0 {
            return Err(out_of_range("placement.min_diameter", placement.min_diameter));
        }
        if placement.max_diameter < placement.min_diameter {
            return Err(out_of_range("placement.max_diameter", placement.max_diameter));
        }
        if placement.default_diameter == 0 {
            return Err(out_of_range(
                "placement.default_diameter",
                placement.default_diameter,
            ));
        }
        if !placement.delete_threshold.is_finite() || placement.delete_threshold <= 0.0 {
            return Err(out_of_range(
                "placement.delete_threshold",
                placement.delete_threshold,
            ));
        }

        if self.catalog.placeholder.trim().is_empty() {
            return Err(ConfigError::MissingKey("catalog.placeholder".to_string()));
        }
        if self.storage.autosave_key.trim().is_empty() {
            return Err(ConfigError::MissingKey("storage.autosave_key".to_string()));
        }
        if self.table.rows_per_page == 0 {
            return Err(out_of_range("table.rows_per_page", self.table.rows_per_page));
        }

        Ok(())
    }

    fn format_of(path: &Path) -> Result<Format, ConfigError> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Format::Json),
            Some("toml") => Ok(Format::Toml),
            other => Err(ConfigError::UnsupportedFormat(
                other.unwrap_or_default().to_string(),
            )),
        }
    }
}

enum Format {
    Json,
    Toml,
}

fn out_of_range(key: &str, value: impl std::fmt::Display) -> ConfigError {
    ConfigError::ValueOutOfRange {
        key: key.to_string(),
        value: value.to_string(),
    }
}
