//! BedPlanner Settings Crate
//!
//! Handles application configuration and the key-value persistence
//! substrate behind the crash-recovery slot.

pub mod config;
pub mod error;
pub mod persistence;

pub use config::{BedSettings, CatalogSettings, Config, PlacementSettings, StorageSettings, TableSettings};
pub use error::{ConfigError, SettingsError, SettingsResult};
pub use persistence::{FileStore, KeyValueStore, MemoryStore};
