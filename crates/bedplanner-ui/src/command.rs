//! Console command parsing.
//!
//! Each line of input maps to one pointer, keyboard or file event of the
//! planner. Coordinates are canvas units.

use anyhow::{anyhow, bail, Context, Result};
use bedplanner_core::Point;
use std::path::PathBuf;

/// Modifier keys the canvas reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modifier {
    Delete,
    Inspect,
}

/// Table page navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageMove {
    Next,
    Previous,
    /// 1-based page number
    Goto(usize),
}

/// A parsed console command.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Types(Option<String>),
    Select(String),
    Diameter(u32),
    Move(Point),
    Leave,
    Click(Point),
    Key { modifier: Modifier, pressed: bool },
    /// 1-based table row number
    HoverRow(usize),
    UnhoverRow,
    Page(PageMove),
    Table,
    Markers,
    Export(Option<PathBuf>),
    Load(Option<PathBuf>),
    Restore,
    Dismiss,
    Clear,
    Svg(Option<PathBuf>),
    Status { json: bool },
    Help,
    Quit,
}

pub const HELP: &str = "\
Commands:
  types [query]             list plant types, optionally filtered
  select <name>             select a plant type
  diameter <n>              set the placement diameter
  move <x> <y>              move the pointer over the bed
  leave                     move the pointer off the bed
  click <x> <y>             click on the bed
  key delete|inspect down|up
                            press or release a modifier
  hover-row <n>             hover table row n
  unhover-row               stop hovering the table
  page next|prev|<n>        change table page
  table                     show the placed-plants table
  markers                   list placed markers
  export [path]             export the layout
  load [path]               import a layout
  restore | dismiss         answer the recovery prompt
  clear                     remove all markers
  svg [path]                render the bed as SVG
  status [--json]           show planner state
  help | quit";

impl Command {
    /// Parse one input line. Blank lines yield `None`.
    pub fn parse(line: &str) -> Result<Option<Self>> {
        let line = line.trim();
        let Some((word, rest)) = split_word(line) else {
            return Ok(None);
        };
        let args: Vec<&str> = rest.split_whitespace().collect();

        let command = match word {
            "types" => Command::Types(non_empty(rest)),
            "select" => Command::Select(
                non_empty(rest).ok_or_else(|| anyhow!("select needs a plant name"))?,
            ),
            "diameter" => Command::Diameter(
                one_arg(&args, "diameter <n>")?
                    .parse()
                    .context("diameter must be a positive integer")?,
            ),
            "move" => Command::Move(point(&args, "move <x> <y>")?),
            "leave" => Command::Leave,
            "click" => Command::Click(point(&args, "click <x> <y>")?),
            "key" => {
                let [modifier, state] = args.as_slice() else {
                    bail!("usage: key delete|inspect down|up");
                };
                let modifier = match *modifier {
                    "delete" => Modifier::Delete,
                    "inspect" => Modifier::Inspect,
                    other => bail!("unknown modifier '{}'", other),
                };
                let pressed = match *state {
                    "down" => true,
                    "up" => false,
                    other => bail!("key state must be down or up, got '{}'", other),
                };
                Command::Key { modifier, pressed }
            }
            "hover-row" => {
                let row: usize = one_arg(&args, "hover-row <n>")?
                    .parse()
                    .context("row must be a number")?;
                if row == 0 {
                    bail!("rows are numbered from 1");
                }
                Command::HoverRow(row)
            }
            "unhover-row" => Command::UnhoverRow,
            "page" => Command::Page(match one_arg(&args, "page next|prev|<n>")? {
                "next" => PageMove::Next,
                "prev" => PageMove::Previous,
                n => {
                    let page: usize = n.parse().context("page must be next, prev or a number")?;
                    PageMove::Goto(page.max(1))
                }
            }),
            "table" => Command::Table,
            "markers" => Command::Markers,
            "export" => Command::Export(non_empty(rest).map(PathBuf::from)),
            "load" => Command::Load(non_empty(rest).map(PathBuf::from)),
            "restore" => Command::Restore,
            "dismiss" => Command::Dismiss,
            "clear" => Command::Clear,
            "svg" => Command::Svg(non_empty(rest).map(PathBuf::from)),
            "status" => Command::Status {
                json: args.first() == Some(&"--json"),
            },
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            other => bail!("unknown command '{}', try 'help'", other),
        };
        Ok(Some(command))
    }
}

fn split_word(line: &str) -> Option<(&str, &str)> {
    if line.is_empty() {
        return None;
    }
    Some(match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    })
}

fn non_empty(rest: &str) -> Option<String> {
    let rest = rest.trim();
    (!rest.is_empty()).then(|| rest.to_string())
}

fn one_arg<'a>(args: &[&'a str], usage: &str) -> Result<&'a str> {
    match args {
        [arg] => Ok(*arg),
        _ => bail!("usage: {}", usage),
    }
}

fn point(args: &[&str], usage: &str) -> Result<Point> {
    let [x, y] = args else {
        bail!("usage: {}", usage);
    };
    let x: f64 = x.parse().with_context(|| format!("invalid x '{}'", x))?;
    let y: f64 = y.parse().with_context(|| format!("invalid y '{}'", y))?;
    Ok(Point::new(x, y))
}
