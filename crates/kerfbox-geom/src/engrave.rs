//! Engraving layout: safe zones, auto-fit text, and fractal fill.
//!
//! Engraving is best-effort. Each decorated wall gets a safe region clear of
//! joints and fasteners; when that region collapses the decoration is
//! silently skipped, never escalated to an error.

use kerfbox_core::CutConfig;
use tracing::{debug, warn};

use crate::builder::find_panel_mut;
use crate::joints::corner_centers;
use crate::kerf;
use crate::model::{Engrave, Panel, Point, Rect, TextMark};
use crate::sierpinski;
use crate::validate::{DecorMode, PhysicalParams, Wall};

/// Vertical clearance added around the corner fastener features.
const FASTENER_CLEARANCE: f64 = 6.0;
/// Extra buffer so text never crowds the fastener band.
const BAND_BUFFER: f64 = 2.0;
/// Additional margin between the fastener band and the safe region.
const BAND_MARGIN: f64 = 6.0;
/// Extra horizontal margin on side walls, tolerating rotated-text overflow.
const ROTATED_TEXT_MARGIN: f64 = 3.0;

/// Fraction of the safe region the text box may occupy.
const TEXT_BOX_WIDTH_FRACTION: f64 = 0.75;
const TEXT_BOX_HEIGHT_FRACTION: f64 = 0.50;
/// Unrotated text sits this fraction of its font size above the safe-region
/// bottom.
const TEXT_BASELINE_LIFT: f64 = 0.3;

/// Safe engraving region for a wall: the base rectangle inset by the
/// engraving margin, vertically shrunk to exclude the two corner joint /
/// fastener bands, with extra horizontal margin on the side walls. Returns
/// `None` when no room remains.
pub fn safe_region(
    wall: Wall,
    base_w: f64,
    base_h: f64,
    cfg: &CutConfig,
    kerf_mm: f64,
) -> Option<Rect> {
    let margin = cfg.engrave_margin;
    let fw = kerf::finger_feature_w_draw(cfg, kerf_mm);
    let ys = corner_centers(base_h, fw, cfg.min_edge_margin);
    let fastener_size = fw + FASTENER_CLEARANCE;

    let mut x_min = margin;
    let mut x_max = base_w - margin;
    let y_min = ys[0] + fastener_size / 2.0 + BAND_BUFFER + BAND_MARGIN;
    let y_max = ys[1] - fastener_size / 2.0 - BAND_BUFFER - BAND_MARGIN;

    if matches!(wall, Wall::Left | Wall::Right) {
        x_min += ROTATED_TEXT_MARGIN;
        x_max -= ROTATED_TEXT_MARGIN;
    }

    let w = x_max - x_min;
    let h = y_max - y_min;
    if w <= 0.0 || h <= 0.0 {
        return None;
    }
    Some(Rect::new(x_min, y_min, w, h))
}

/// Largest font size whose estimated footprint fits the box, stepping down
/// from the configured maximum and flooring at the minimum. The footprint
/// estimate (chars x size x width ratio, size x height ratio) is calibrated,
/// not measured from glyphs.
pub fn auto_font_size(text: &str, box_w: f64, box_h: f64, cfg: &CutConfig) -> f64 {
    let chars = text.chars().count();
    if chars == 0 {
        return cfg.text_max_font_size;
    }

    let mut size = cfg.text_max_font_size;
    while size >= cfg.text_min_font_size {
        let text_w = chars as f64 * size * cfg.text_char_width_ratio;
        let text_h = size * cfg.text_height_ratio;
        if text_w <= box_w && text_h <= box_h {
            return size;
        }
        size -= cfg.text_font_step;
    }
    cfg.text_min_font_size
}

/// Rotation for text on a wall: side walls read floor-to-top.
fn text_rotation(wall: Wall) -> f64 {
    match wall {
        Wall::Left => 90.0,
        Wall::Right => -90.0,
        Wall::Front | Wall::Back => 0.0,
    }
}

fn engrave_text(panel: &mut Panel, wall: Wall, content: &str, safe: &Rect, cfg: &CutConfig) {
    let rotation = text_rotation(wall);

    // For rotated text the box extents swap before the fractions apply:
    // the safe height bounds the text width and vice versa.
    let (calc_w, calc_h) = if rotation != 0.0 {
        (safe.h, safe.w)
    } else {
        (safe.w, safe.h)
    };
    let box_w = calc_w * TEXT_BOX_WIDTH_FRACTION;
    let box_h = calc_h * TEXT_BOX_HEIGHT_FRACTION;

    let font_size = auto_font_size(content, box_w, box_h, cfg);
    debug!(wall = wall.name(), font_size, "fitted engraving text");

    let (x, y) = if rotation == 0.0 {
        // horizontally centered, lifted off the safe-region bottom
        (
            safe.x + safe.w / 2.0,
            safe.y + safe.h - font_size * TEXT_BASELINE_LIFT,
        )
    } else {
        // rotated text centers in the safe region
        (safe.x + safe.w / 2.0, safe.y + safe.h / 2.0)
    };

    panel.engraves.push(Engrave::Text(TextMark {
        content: content.to_string(),
        x,
        y,
        font_size,
        rotation,
    }));
}

fn engrave_fractal(panel: &mut Panel, safe: &Rect, cfg: &CutConfig) {
    // Keepouts guard the wall's real cuts (T-slot traps and stems, clearance
    // holes, divider slots), expanded by the configured pad. Leaves are
    // dropped whole, never clipped.
    let keepouts: Vec<Rect> = panel
        .cuts
        .iter()
        .map(|c| c.bbox().expand(cfg.fractal_keepout_pad))
        .collect();

    let leaves =
        sierpinski::leaf_triangles_clipped(safe, cfg.fractal_depth, cfg.fractal_inset, &keepouts);
    debug!(
        panel = %panel.role.name(),
        kept = leaves.len(),
        "fractal engraving generated"
    );
    for tri in leaves {
        panel.engraves.push(Engrave::Path(tri.to_path()));
    }
}

/// Engrave every decorated wall. Walls without room are skipped.
pub fn apply_engraving(panels: &mut [Panel], params: &PhysicalParams, cfg: &CutConfig) {
    for wall in Wall::ALL {
        let decor = params.decor(wall).clone();
        if decor.mode == DecorMode::None {
            continue;
        }

        let Some(panel) = find_panel_mut(panels, wall.role()) else {
            continue;
        };
        let Some(safe) = safe_region(wall, panel.base_w, panel.base_h, cfg, params.kerf) else {
            warn!(wall = wall.name(), "no room for engraving, skipping");
            continue;
        };

        match decor.mode {
            DecorMode::Text => engrave_text(panel, wall, &decor.text, &safe, cfg),
            DecorMode::Fractal => engrave_fractal(panel, &safe, cfg),
            DecorMode::None => {}
        }
    }
}

/// Debug aid: engrave the safe-zone outline itself so it can be inspected in
/// the output drawing.
pub fn push_safe_zone_outline(panel: &mut Panel, wall: Wall, cfg: &CutConfig, kerf_mm: f64) {
    if let Some(safe) = safe_region(wall, panel.base_w, panel.base_h, cfg, kerf_mm) {
        panel.engraves.push(Engrave::Path(vec![
            Point::new(safe.x, safe.y),
            Point::new(safe.x + safe.w, safe.y),
            Point::new(safe.x + safe.w, safe.y + safe.h),
            Point::new(safe.x, safe.y + safe.h),
            Point::new(safe.x, safe.y),
        ]));
    }
}
