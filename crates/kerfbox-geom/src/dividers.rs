//! Divider slot placement.
//!
//! Divider panels run front-to-back. For each divider position (measured
//! from the left inner wall) a vertical slot is cut into the front and back
//! walls and a full-depth slit is cut through the floor spanning the
//! interior width. Position validity (wall distance, mutual spacing) is the
//! validator's responsibility; this stage assumes it.

use kerfbox_core::CutConfig;

use crate::builder::find_panel_mut;
use crate::kerf;
use crate::model::{Cut, Panel, PanelRole, Rect};
use crate::validate::PhysicalParams;

/// Cut the wall slots and floor slits for every divider. No-op when the
/// divider count is zero.
pub fn apply_divider_slots(panels: &mut [Panel], params: &PhysicalParams, cfg: &CutConfig) {
    if params.divider_positions.is_empty() {
        return;
    }

    let slot_w = kerf::divider_slot_draw_w(cfg, params.kerf);

    // Wall slots run from just below the top edge down to just above the
    // floor joint.
    let y0 = cfg.slot_top_cap;
    let y1 = params.outer_h - cfg.slot_bottom_margin;
    let slot_h = (y1 - y0).max(0.0);

    for &pos in &params.divider_positions {
        let x_center = params.thickness + pos;
        let x_slot = x_center - slot_w / 2.0;

        for role in [PanelRole::WallFront, PanelRole::WallBack] {
            if let Some(wall) = find_panel_mut(panels, role) {
                wall.cuts.push(Cut::Rect(Rect::new(x_slot, y0, slot_w, slot_h)));
            }
        }

        if let Some(floor) = find_panel_mut(panels, PanelRole::Floor) {
            floor.cuts.push(Cut::Rect(Rect::new(
                x_slot,
                params.thickness,
                slot_w,
                params.inner_w,
            )));
        }
    }
}
