//! Layout import and export.
//!
//! A layout is flat comma-separated text with the header
//! `x,y,name,durchmesser` and one row per marker in drawing order:
//!
//! ```text
//! x,y,name,durchmesser
//! 120,80,"Rose ""Red""",46
//! ```
//!
//! Names are always quoted. The diameter is written as `round(2 * radius)`.
//! On import, columns are found by header name, so extra or reordered
//! columns are fine. Images are never stored; they are re-resolved against
//! the catalog current at import time.

use crate::catalog::{Catalog, ImageRef};
use crate::delimited::{parse_records, quote_field, HeaderIndex};
use crate::error::{PersistenceError, PersistenceResult};
use crate::marker::PlacedMarker;
use bedplanner_core::constants::{DEFAULT_DIAMETER, DIAMETER_COLUMN, EXPORT_HEADER};
use bedplanner_core::Point;
use std::path::Path;

/// Format a coordinate so that parsing it back yields the same value.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value == f64::INFINITY {
        "Infinity".to_string()
    } else if value == f64::NEG_INFINITY {
        "-Infinity".to_string()
    } else {
        format!("{}", value)
    }
}

/// Parse the leading number of a cell, ignoring anything after it.
///
/// Accepts an optional sign followed by `Infinity` or a decimal literal
/// with optional fraction and exponent, so `12px` reads as 12. Cells
/// without a leading number, including `inf` and `nan`, read as NaN.
fn parse_number(cell: Option<&str>) -> f64 {
    let text = cell.unwrap_or_default().trim_start();
    let (sign, rest) = match text.as_bytes().first() {
        Some(b'-') => (-1.0, &text[1..]),
        Some(b'+') => (1.0, &text[1..]),
        _ => (1.0, text),
    };
    if rest.starts_with("Infinity") {
        return sign * f64::INFINITY;
    }

    let bytes = rest.as_bytes();
    let digits = |from: usize| {
        bytes
            .get(from..)
            .unwrap_or_default()
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count()
    };

    let int_len = digits(0);
    let mut end = int_len;
    let mut frac_len = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_len = digits(end + 1);
        end += 1 + frac_len;
    }
    if int_len + frac_len == 0 {
        return f64::NAN;
    }

    let mut literal = String::with_capacity(end + 8);
    literal.push_str(if int_len == 0 { "0" } else { &rest[..int_len] });
    if frac_len > 0 {
        literal.push('.');
        literal.push_str(&rest[int_len + 1..end]);
    }
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_start = end + 1;
        if matches!(bytes.get(exp_start), Some(b'+' | b'-')) {
            exp_start += 1;
        }
        let exp_len = digits(exp_start);
        if exp_len > 0 {
            literal.push_str(&rest[end..exp_start + exp_len]);
        }
    }

    literal
        .parse::<f64>()
        .map(|value| sign * value)
        .unwrap_or(f64::NAN)
}

/// Serialize markers to layout text, without a trailing newline.
pub fn markers_to_csv(markers: &[PlacedMarker]) -> String {
    let mut lines = Vec::with_capacity(markers.len() + 1);
    lines.push(EXPORT_HEADER.to_string());
    lines.extend(markers.iter().map(|m| {
        format!(
            "{},{},{},{}",
            format_number(m.position.x),
            format_number(m.position.y),
            quote_field(&m.type_name),
            m.diameter()
        )
    }));
    lines.join("\n")
}

/// Parse layout text into markers.
///
/// Rows without a name are dropped. A missing, non-numeric or non-positive
/// diameter becomes 60. Names unknown to `catalog` (or any name when no
/// catalog is loaded) get the placeholder image.
pub fn csv_to_markers(text: &str, catalog: Option<&Catalog>) -> Vec<PlacedMarker> {
    let mut records = parse_records(text).into_iter();
    let Some(header) = records.next() else {
        return Vec::new();
    };
    let index = HeaderIndex::new(&header);

    let mut dropped = 0usize;
    let markers: Vec<PlacedMarker> = records
        .filter_map(|record| {
            let name = index.get(&record, "name").unwrap_or_default();
            if name.is_empty() {
                dropped += 1;
                return None;
            }

            let diameter = parse_number(index.get(&record, DIAMETER_COLUMN));
            let diameter = if diameter.is_finite() && diameter > 0.0 {
                diameter
            } else {
                f64::from(DEFAULT_DIAMETER)
            };

            let image = catalog
                .map(|c| c.resolve_image(name))
                .unwrap_or(ImageRef::Placeholder);

            Some(PlacedMarker::new(
                Point::new(
                    parse_number(index.get(&record, "x")),
                    parse_number(index.get(&record, "y")),
                ),
                diameter / 2.0,
                image,
                name,
            ))
        })
        .collect();

    if dropped > 0 {
        tracing::debug!("Dropped {} layout rows without a name", dropped);
    }
    markers
}

/// Write a layout file.
pub async fn save_layout(path: &Path, markers: &[PlacedMarker]) -> PersistenceResult<()> {
    tokio::fs::write(path, markers_to_csv(markers))
        .await
        .map_err(|source| PersistenceError::Write {
            path: path.to_path_buf(),
            source,
        })?;
    tracing::info!("Exported {} markers to {}", markers.len(), path.display());
    Ok(())
}

/// Read and parse a layout file.
pub async fn load_layout(
    path: &Path,
    catalog: Option<&Catalog>,
) -> PersistenceResult<Vec<PlacedMarker>> {
    let text = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| PersistenceError::Read {
            path: path.to_path_buf(),
            source,
        })?;
    let markers = csv_to_markers(&text, catalog);
    tracing::info!("Imported {} markers from {}", markers.len(), path.display());
    Ok(markers)
}
