//! # Kerfbox SVG
//!
//! Serializes a packed [`BoxLayout`] into an SVG drawing. The document
//! carries two logically distinct layers, because they need different tool
//! settings downstream:
//!
//! - `cut-layer`: every outline and internal cut, stroked red, never filled
//! - `engrave-layer`: every surface mark, stroked black; text is emitted as
//!   stroked glyphs with any rotation anchored at a translation point
//!
//! All geometry is vector (stroke present, fill absent) so the laser driver
//! interprets it as paths, not raster fills.

use std::fmt::Write;

use kerfbox_core::CutConfig;
use kerfbox_geom::{BoxLayout, Cut, Engrave, Outline, Panel, Placement, Point};
use tracing::debug;

const CUT_STROKE: &str = "red";
const ENGRAVE_STROKE: &str = "black";
const STROKE_WIDTH: f64 = 0.1;

/// Render the layout into a complete SVG document.
pub fn render(layout: &BoxLayout, cfg: &CutConfig) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"no\"?>"
    );
    let _ = writeln!(
        out,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{:.4}mm\" height=\"{:.4}mm\" viewBox=\"0 0 {:.4} {:.4}\">",
        layout.sheet_w, layout.sheet_h, layout.sheet_w, layout.sheet_h
    );
    let _ = writeln!(
        out,
        "<rect x=\"0\" y=\"0\" width=\"100%\" height=\"100%\" fill=\"white\" />"
    );

    let _ = writeln!(out, "<g id=\"cut-layer\">");
    for (panel, placement) in placed_panels(layout) {
        render_outline(&mut out, panel, placement);
        for cut in &panel.cuts {
            render_cut(&mut out, cut, placement);
        }
    }
    let _ = writeln!(out, "</g>");

    let _ = writeln!(out, "<g id=\"engrave-layer\">");
    for (panel, placement) in placed_panels(layout) {
        for engrave in &panel.engraves {
            render_engrave(&mut out, engrave, placement, cfg);
        }
    }
    let _ = writeln!(out, "</g>");

    let _ = writeln!(out, "</svg>");
    debug!(bytes = out.len(), "rendered drawing");
    out
}

/// Panels in construction order paired with their placements.
fn placed_panels<'a>(
    layout: &'a BoxLayout,
) -> impl Iterator<Item = (&'a Panel, &'a Placement)> + 'a {
    layout.panels.iter().filter_map(move |panel| {
        layout
            .placements
            .iter()
            .find(|pl| pl.role == panel.role)
            .map(|pl| (panel, pl))
    })
}

fn render_outline(out: &mut String, panel: &Panel, pl: &Placement) {
    match &panel.outline {
        Outline::Rect { w, h } => {
            let _ = writeln!(
                out,
                "<rect x=\"{:.4}\" y=\"{:.4}\" width=\"{:.4}\" height=\"{:.4}\" fill=\"none\" stroke=\"{}\" stroke-width=\"{}\" />",
                pl.x, pl.y, w, h, CUT_STROKE, STROKE_WIDTH
            );
        }
        Outline::Path(points) => render_path(out, points, pl.x, pl.y, CUT_STROKE),
    }
}

fn render_cut(out: &mut String, cut: &Cut, pl: &Placement) {
    match cut {
        Cut::Rect(r) => {
            let _ = writeln!(
                out,
                "<rect x=\"{:.4}\" y=\"{:.4}\" width=\"{:.4}\" height=\"{:.4}\" fill=\"none\" stroke=\"{}\" stroke-width=\"{}\" />",
                pl.x + r.x, pl.y + r.y, r.w, r.h, CUT_STROKE, STROKE_WIDTH
            );
        }
        Cut::Circle { cx, cy, r } => {
            let _ = writeln!(
                out,
                "<circle cx=\"{:.4}\" cy=\"{:.4}\" r=\"{:.4}\" fill=\"none\" stroke=\"{}\" stroke-width=\"{}\" />",
                pl.x + cx, pl.y + cy, r, CUT_STROKE, STROKE_WIDTH
            );
        }
        Cut::Path(points) => render_path(out, points, pl.x, pl.y, CUT_STROKE),
    }
}

fn render_engrave(out: &mut String, engrave: &Engrave, pl: &Placement, cfg: &CutConfig) {
    match engrave {
        Engrave::Path(points) => render_path(out, points, pl.x, pl.y, ENGRAVE_STROKE),
        Engrave::Text(text) => {
            let x = pl.x + text.x;
            let y = pl.y + text.y;
            let attrs = format!(
                "font-family=\"{}\" font-size=\"{:.4}mm\" text-anchor=\"middle\" dominant-baseline=\"middle\" fill=\"none\" stroke=\"{}\" stroke-width=\"{}\"",
                cfg.text_font_family, text.font_size, ENGRAVE_STROKE, STROKE_WIDTH
            );
            let content = escape_xml(&text.content);
            if text.rotation != 0.0 {
                // rotation is anchored at the translation point
                let _ = writeln!(
                    out,
                    "<g transform=\"translate({:.4},{:.4}) rotate({})\"><text x=\"0\" y=\"0\" {}>{}</text></g>",
                    x, y, text.rotation, attrs, content
                );
            } else {
                let _ = writeln!(
                    out,
                    "<text x=\"{:.4}\" y=\"{:.4}\" {}>{}</text>",
                    x, y, attrs, content
                );
            }
        }
    }
}

fn render_path(out: &mut String, points: &[Point], dx: f64, dy: f64, stroke: &str) {
    if points.is_empty() {
        return;
    }
    let mut d = String::new();
    for (i, p) in points.iter().enumerate() {
        let cmd = if i == 0 { 'M' } else { 'L' };
        let _ = write!(d, "{} {:.4} {:.4} ", cmd, p.x + dx, p.y + dy);
    }
    d.push('Z');
    let _ = writeln!(
        out,
        "<path d=\"{}\" fill=\"none\" stroke=\"{}\" stroke-width=\"{}\" />",
        d, stroke, STROKE_WIDTH
    );
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use kerfbox_geom::{generate, validate_inputs, RawBoxInputs, WallDecorInput};

    fn rendered(raw: &RawBoxInputs) -> String {
        let cfg = CutConfig::default();
        let params = validate_inputs(raw, &cfg).unwrap();
        let layout = generate(&params, &cfg).unwrap();
        render(&layout, &cfg)
    }

    fn text_box() -> RawBoxInputs {
        RawBoxInputs {
            length_in: 6.0,
            width_in: 4.0,
            height_in: 3.0,
            left: WallDecorInput {
                text: true,
                text_content: "A&B <tight>".to_string(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_document_has_two_layers() {
        let svg = rendered(&text_box());
        assert!(svg.contains("<g id=\"cut-layer\">"));
        assert!(svg.contains("<g id=\"engrave-layer\">"));
        assert!(svg.starts_with("<?xml"));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn test_cut_geometry_is_stroked_not_filled() {
        let svg = rendered(&text_box());
        for line in svg.lines() {
            if line.starts_with("<path") || line.starts_with("<circle") {
                assert!(line.contains("fill=\"none\""), "filled geometry: {}", line);
                assert!(line.contains("stroke="), "unstroked geometry: {}", line);
            }
        }
    }

    #[test]
    fn test_rotated_text_transform_and_escaping() {
        let svg = rendered(&text_box());
        // left wall text carries a rotate anchored at a translate
        assert!(svg.contains(") rotate(90)"));
        // glyphs are stroked, not filled
        assert!(svg.contains("<text x=\"0\" y=\"0\" font-family=\"Arial\""));
        assert!(svg.contains("stroke=\"black\""));
        // content is XML-escaped
        assert!(svg.contains("A&amp;B &lt;tight&gt;"));
        assert!(!svg.contains("A&B <tight>"));
    }

    #[test]
    fn test_sheet_dimensions_in_header() {
        let svg = rendered(&text_box());
        assert!(svg.contains("width=\"304.8000mm\""));
        assert!(svg.contains("height=\"457.2000mm\""));
        assert!(svg.contains("viewBox=\"0 0 304.8000 457.2000\""));
    }
}
