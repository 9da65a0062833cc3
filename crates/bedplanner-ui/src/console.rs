//! Console front-end.
//!
//! Executes parsed commands against a [`PlannerState`] and prints the
//! results. All state lives in the planner; the console only formats it.

use crate::command::{Command, Modifier, PageMove, HELP};
use crate::dialogs::FilePicker;
use anyhow::{Context, Result};
use bedplanner_core::constants::DISPLAY_COLUMNS;
use bedplanner_designer::{render_svg, ClickOutcome, PlannerState, RowHighlight};
use std::io::Write;
use std::path::PathBuf;

/// Whether the session continues after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Console session over a planner.
pub struct Console<W: Write> {
    state: PlannerState,
    picker: Box<dyn FilePicker>,
    out: W,
}

impl<W: Write> Console<W> {
    pub fn new(state: PlannerState, picker: Box<dyn FilePicker>, out: W) -> Self {
        Self { state, picker, out }
    }

    pub fn state(&self) -> &PlannerState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut PlannerState {
        &mut self.state
    }

    /// Consume the console, returning the output sink.
    pub fn into_output(self) -> W {
        self.out
    }

    /// Write one line of output.
    pub fn say(&mut self, message: impl std::fmt::Display) -> Result<()> {
        writeln!(self.out, "{}", message)?;
        Ok(())
    }

    /// Parse and execute one input line. Parse and command errors are
    /// printed, not returned; only output failures end the session.
    pub async fn handle_line(&mut self, line: &str) -> Result<Flow> {
        let outcome = match Command::parse(line) {
            Ok(Some(command)) => self.execute(command).await,
            Ok(None) => Ok(Flow::Continue),
            Err(e) => Err(e),
        };

        match outcome {
            Ok(flow) => Ok(flow),
            Err(e) => {
                tracing::debug!("Command failed: {:#}", e);
                self.say(format!("error: {:#}", e))?;
                Ok(Flow::Continue)
            }
        }
    }

    /// Execute a command.
    pub async fn execute(&mut self, command: Command) -> Result<Flow> {
        match command {
            Command::Types(query) => self.list_types(query.as_deref())?,
            Command::Select(name) => {
                if self.state.select_type(&name) {
                    let message = format!("Selected {} ({})", name, self.state.diameter());
                    self.say(message)?;
                } else {
                    self.say(format!("Unknown plant type '{}'", name))?;
                }
            }
            Command::Diameter(d) => {
                let applied = self.state.set_diameter(d);
                self.say(format!("Diameter {}", applied))?;
            }
            Command::Move(point) => self.state.pointer_moved(point),
            Command::Leave => self.state.pointer_left(),
            Command::Click(point) => match self.state.click(point) {
                ClickOutcome::Placed => {
                    let count = self.state.markers().len();
                    self.say(format!("Placed at {} ({} markers)", point, count))?;
                }
                ClickOutcome::Deleted(marker) => {
                    self.say(format!("Removed {} at {}", marker.type_name, marker.position))?;
                }
                ClickOutcome::Ignored => self.say("Nothing happened")?,
            },
            Command::Key { modifier, pressed } => match modifier {
                Modifier::Delete => self.state.set_delete_mode(pressed),
                Modifier::Inspect => self.state.set_inspect_mode(pressed),
            },
            Command::HoverRow(row) => {
                if !self.state.hover_row(row - 1) {
                    self.say(format!("No table row {}", row))?;
                }
            }
            Command::UnhoverRow => self.state.clear_row_hover(),
            Command::Page(PageMove::Next) => self.state.next_page(),
            Command::Page(PageMove::Previous) => self.state.previous_page(),
            Command::Page(PageMove::Goto(page)) => self.state.set_page(page - 1),
            Command::Table => self.print_table()?,
            Command::Markers => self.list_markers()?,
            Command::Export(path) => {
                let Some(path) = path.or_else(|| self.picker.save_layout()) else {
                    self.say("Export cancelled")?;
                    return Ok(Flow::Continue);
                };
                self.state.export_to_file(&path).await?;
                self.say(format!("Exported to {}", path.display()))?;
            }
            Command::Load(path) => {
                let Some(path) = path.or_else(|| self.picker.open_layout()) else {
                    self.say("Load cancelled")?;
                    return Ok(Flow::Continue);
                };
                let count = self.state.import_from_file(&path).await?;
                self.say(format!("Loaded {} markers", count))?;
            }
            Command::Restore => match self.state.restore_recovery() {
                Some(count) => self.say(format!("Restored {} markers", count))?,
                None => self.say("Nothing to restore")?,
            },
            Command::Dismiss => self.state.dismiss_recovery(),
            Command::Clear => {
                self.state.clear();
                self.say("Cleared")?;
            }
            Command::Svg(path) => self.write_svg(path).await?,
            Command::Status { json } => self.print_status(json)?,
            Command::Help => self.say(HELP)?,
            Command::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    fn list_types(&mut self, query: Option<&str>) -> Result<()> {
        if !self.state.has_catalog() {
            let reason = self
                .state
                .catalog_error()
                .map(|e| format!("Catalog unavailable: {}", e))
                .unwrap_or_else(|| "Catalog not loaded".to_string());
            return self.say(reason);
        }

        let selected = self.state.selected_type().map(str::to_string);
        let config = self.state.config().catalog.clone();
        for option in self.state.search_types(query.unwrap_or_default()) {
            let mark = if selected.as_deref() == Some(option.name.as_str()) {
                '*'
            } else {
                ' '
            };
            let href = option.image.href(&config.image_base, &config.placeholder);
            writeln!(
                self.out,
                "{} {} ({}) {}",
                mark, option.name, option.default_diameter, href
            )?;
        }
        Ok(())
    }

    fn list_markers(&mut self) -> Result<()> {
        if self.state.markers().is_empty() {
            return self.say("No markers placed");
        }
        let lines: Vec<String> = self
            .state
            .markers()
            .iter()
            .enumerate()
            .map(|(i, m)| format!("{:>3} {} at {} d={}", i + 1, m.type_name, m.position, m.diameter()))
            .collect();
        for line in lines {
            self.say(line)?;
        }
        Ok(())
    }

    fn print_table(&mut self) -> Result<()> {
        let rows = self.state.table_rows();
        if rows.is_empty() {
            return self.say("No placed plants with catalog entries");
        }

        let per_page = self.state.config().table.rows_per_page.max(1);
        let page = self.state.page();
        let mut lines = vec![format!("   # {}", DISPLAY_COLUMNS.join(" | "))];
        for (offset, row) in self.state.page_rows().iter().enumerate() {
            let mark = match self.state.row_highlight(row) {
                RowHighlight::Individual => '>',
                RowHighlight::Group => '~',
                RowHighlight::None => ' ',
            };
            lines.push(format!(
                "{}{:>3} {}",
                mark,
                page * per_page + offset + 1,
                row.cells.join(" | ")
            ));
        }
        lines.push(format!("Page {} of {}", page + 1, self.state.page_count()));

        for line in lines {
            self.say(line)?;
        }
        Ok(())
    }

    async fn write_svg(&mut self, path: Option<PathBuf>) -> Result<()> {
        let svg = render_svg(&self.state);
        match path.or_else(|| self.picker.save_svg()) {
            Some(path) => {
                tokio::fs::write(&path, svg)
                    .await
                    .with_context(|| format!("Writing SVG to {}", path.display()))?;
                self.say(format!("Wrote {}", path.display()))
            }
            None => self.say(svg.trim_end()),
        }
    }

    fn print_status(&mut self, json: bool) -> Result<()> {
        if json {
            let snapshot = self.state.snapshot_json()?;
            return self.say(snapshot);
        }

        let state = &self.state;
        let mut lines = vec![
            format!(
                "Catalog: {}",
                match (state.catalog(), state.catalog_error()) {
                    (_, Some(e)) => format!("unavailable ({})", e),
                    (Some(c), None) => format!("{} types", c.len()),
                    (None, None) => "not loaded".to_string(),
                }
            ),
            format!("Selected: {}", state.selected_type().unwrap_or("-")),
            format!("Diameter: {}", state.diameter()),
            format!("Markers: {}", state.markers().len()),
            format!(
                "Modes: delete={} inspect={}",
                state.delete_mode(),
                state.inspect_mode()
            ),
            format!("Cursor: {:?}", state.cursor_hint()),
        ];
        if let Some(pointer) = state.pointer() {
            lines.push(format!("Pointer: {}", pointer));
        }
        if let Some(preview) = state.preview() {
            lines.push(format!("Preview: {} r={}", preview.type_name, preview.radius));
        }
        if let Some(pending) = state.pending_recovery() {
            lines.push(format!(
                "Recovery: {} markers waiting (restore/dismiss)",
                pending.len()
            ));
        }

        for line in lines {
            self.say(line)?;
        }
        Ok(())
    }
}
