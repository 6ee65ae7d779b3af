//! Panel construction.
//!
//! Produces the base panel set — four walls, the floor, and zero to two
//! dividers — with nominal rectangle outlines. Later stages overwrite the
//! outlines with joint paths and append cuts/engraves. Construction order is
//! fixed so downstream output is reproducible.

use kerfbox_core::CutConfig;

use crate::kerf;
use crate::model::{Panel, PanelRole};
use crate::validate::PhysicalParams;

/// Build the base panels for one request.
pub fn build_panels(params: &PhysicalParams, cfg: &CutConfig) -> Vec<Panel> {
    let tab_d = kerf::finger_tab_depth_draw(cfg, params.kerf);

    let mut panels = Vec::with_capacity(5 + params.divider_positions.len());

    // Walls keep their nominal size as the base rectangle; the bounding box
    // grows by one tab depth for the right-edge and bottom-edge tabs.
    for (role, base_w) in [
        (PanelRole::WallFront, params.outer_l),
        (PanelRole::WallBack, params.outer_l),
        (PanelRole::WallLeft, params.outer_w),
        (PanelRole::WallRight, params.outer_w),
    ] {
        let mut panel = Panel::new_rect(role, base_w, params.outer_h);
        panel.w = base_w + tab_d;
        panel.h = params.outer_h + tab_d;
        panels.push(panel);
    }

    // Floor carries only pockets and through-cuts, nothing protrudes.
    panels.push(Panel::new_rect(
        PanelRole::Floor,
        params.outer_l,
        params.outer_w,
    ));

    // Dividers run front-to-back across the interior width, one thickness
    // shorter than the walls so the top edge sits flush.
    for i in 0..params.divider_positions.len() {
        panels.push(Panel::new_rect(
            PanelRole::Divider(i as u8),
            params.inner_w,
            params.outer_h - params.thickness,
        ));
    }

    panels
}

/// Borrow one panel by role. Builder output always contains the structural
/// panels, so a `None` here means a stage was called out of order.
pub(crate) fn find_panel_mut(panels: &mut [Panel], role: PanelRole) -> Option<&mut Panel> {
    panels.iter_mut().find(|p| p.role == role)
}
