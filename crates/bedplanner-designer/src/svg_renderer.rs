//! SVG snapshot of the bed canvas
//! Features:
//! - Each marker as a circular-clipped image with a stroked outline
//! - Stroke colour and width follow the marker highlight
//! - Dashed, translucent preview of the next placement drawn last

use crate::marker::PlacedMarker;
use crate::planner_state::{MarkerHighlight, PlannerState};

/// Outline stroke for a marker.
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    pub color: &'static str,
    pub width: f64,
}

/// Stroke for a highlight on a marker of `radius`.
pub fn stroke_for(highlight: MarkerHighlight, radius: f64) -> Stroke {
    let (color, width) = match highlight {
        MarkerHighlight::DeleteTarget => ("#c00", radius * 0.2 + 4.0),
        MarkerHighlight::Inspected => ("#2196f3", 8.0),
        MarkerHighlight::Individual => ("#2196f3", 5.0),
        MarkerHighlight::Group => ("#FFD700", 4.0),
        MarkerHighlight::None => ("#800", 2.0),
    };
    Stroke { color, width }
}

/// Escape text for use in an attribute value.
pub fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

/// Render the bed, all markers and the preview as an SVG document.
pub fn render_svg(state: &PlannerState) -> String {
    let config = state.config();
    let (width, height) = (config.bed.width, config.bed.height);
    let mut svg = String::new();

    svg.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = width,
        h = height
    ));
    svg.push('\n');

    for (i, marker) in state.markers().iter().enumerate() {
        // Imported rows without coordinates cannot be drawn
        if !marker.position.x.is_finite() || !marker.position.y.is_finite() {
            continue;
        }
        let stroke = stroke_for(state.marker_highlight(i), marker.radius);
        let clip_id = format!("plant-clip-{}", i);
        write_marker(&mut svg, state, marker, &clip_id, "", &stroke, "");
    }

    if let Some(preview) = state.preview() {
        let stroke = Stroke {
            color: "#000",
            width: 2.0,
        };
        write_marker(
            &mut svg,
            state,
            &preview,
            "preview-clip",
            r#" opacity="0.6""#,
            &stroke,
            r#" stroke-dasharray="8 6""#,
        );
    }

    svg.push_str("</svg>\n");
    svg
}

fn write_marker(
    svg: &mut String,
    state: &PlannerState,
    marker: &PlacedMarker,
    clip_id: &str,
    image_extra: &str,
    stroke: &Stroke,
    circle_extra: &str,
) {
    let catalog = &state.config().catalog;
    let href = marker.image.href(&catalog.image_base, &catalog.placeholder);
    let (x, y, r) = (marker.position.x, marker.position.y, marker.radius);

    svg.push_str("  <g>\n");
    svg.push_str(&format!(
        "    <clipPath id=\"{}\"><circle cx=\"{}\" cy=\"{}\" r=\"{}\"/></clipPath>\n",
        clip_id, x, y, r
    ));
    svg.push_str(&format!(
        "    <image href=\"{}\" x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\"{} clip-path=\"url(#{})\" preserveAspectRatio=\"xMidYMid slice\"/>\n",
        escape_attr(&href),
        x - r,
        y - r,
        r * 2.0,
        r * 2.0,
        image_extra,
        clip_id
    ));
    svg.push_str(&format!(
        "    <circle cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"none\" stroke=\"{}\" stroke-width=\"{}\"{}/>\n",
        x, y, r, stroke.color, stroke.width, circle_extra
    ));
    svg.push_str("  </g>\n");
}
