//! # BedPlanner UI
//!
//! Console front-end for BedPlanner. Pointer, keyboard and file events are
//! typed as commands and applied to the planner state; the canvas can be
//! rendered to SVG at any time.

pub mod app;
pub mod command;
pub mod console;
pub mod dialogs;

pub use app::{run, start};
pub use command::{Command, Modifier, PageMove};
pub use console::{Console, Flow};
pub use dialogs::{FilePicker, NativeDialogs, NoDialogs};
