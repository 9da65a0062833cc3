//! # BedPlanner Core
//!
//! Core types, constants and utilities for BedPlanner.
//! Provides the point type shared by the canvas and renderer, the error
//! types used across crates, and the planner event dispatcher observers
//! subscribe to.

pub mod constants;
pub mod core;
pub mod error;
pub mod types;

pub use core::event::{EventDispatcher, PlannerEvent};

pub use error::{CatalogError, StorageError};

pub use types::Point;
