//! Native file dialogs for commands given without a path.

use bedplanner_core::constants::DEFAULT_EXPORT_FILENAME;
use rfd::FileDialog;
use std::path::PathBuf;

/// Source of file paths when a command omits one.
pub trait FilePicker {
    /// Layout file to import
    fn open_layout(&self) -> Option<PathBuf>;
    /// Destination of a layout export
    fn save_layout(&self) -> Option<PathBuf>;
    /// Destination of an SVG snapshot
    fn save_svg(&self) -> Option<PathBuf>;
}

/// Native dialogs
#[derive(Debug, Default, Clone)]
pub struct NativeDialogs;

impl FilePicker for NativeDialogs {
    fn open_layout(&self) -> Option<PathBuf> {
        FileDialog::new()
            .set_title("Load layout")
            .add_filter("CSV Files", &["csv"])
            .pick_file()
    }

    fn save_layout(&self) -> Option<PathBuf> {
        FileDialog::new()
            .set_title("Export layout")
            .set_file_name(DEFAULT_EXPORT_FILENAME)
            .add_filter("CSV Files", &["csv"])
            .save_file()
    }

    fn save_svg(&self) -> Option<PathBuf> {
        FileDialog::new()
            .set_title("Save bed snapshot")
            .set_file_name("beet.svg")
            .add_filter("SVG Files", &["svg"])
            .save_file()
    }
}

/// Picker that never yields a path, for non-interactive sessions.
#[derive(Debug, Default, Clone)]
pub struct NoDialogs;

impl FilePicker for NoDialogs {
    fn open_layout(&self) -> Option<PathBuf> {
        None
    }

    fn save_layout(&self) -> Option<PathBuf> {
        None
    }

    fn save_svg(&self) -> Option<PathBuf> {
        None
    }
}
