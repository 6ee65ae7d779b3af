//! Captive-nut T-slot fastener placement.
//!
//! A T-slot is a square nut-trap pocket plus a narrow stem channel running
//! to the nearest panel edge, so a screw shank can slide in and the nut
//! cannot spin. The trap always lives on the tab side of a joint; the mating
//! panel gets only a clearance hole at the same joint position — never both
//! features on one panel.
//!
//! Wall-to-wall fastening follows the corner chain front→right→back→left→
//! front (the right edge of each wall mates with the left edge of the next).
//! Wall-to-floor fastening puts the traps in the floor, two near each edge
//! with stems opening toward that edge, and clearance holes in each wall's
//! bottom tabs.

use kerfbox_core::CutConfig;

use crate::builder::find_panel_mut;
use crate::joints::{corner_centers, EdgeDir};
use crate::kerf;
use crate::model::{Cut, Panel, PanelRole, Rect};
use crate::validate::PhysicalParams;

/// Backoff keeping the nut pocket (or hole) fully surrounded by material
/// just inside the base rectangle.
const EDGE_BACKOFF: f64 = 0.8;

/// T-slot on the right-edge region of a wall: pocket just inside the base
/// rectangle, stem running out through the tabs to the outermost edge.
fn add_tslot_on_right_edge(wall: &mut Panel, cfg: &CutConfig, kerf_mm: f64, y: f64) {
    let tab_d = kerf::finger_tab_depth_draw(cfg, kerf_mm);
    let nut_w = kerf::nut_pocket_draw_w(cfg, kerf_mm);
    let stem_w = kerf::screw_hole_draw_d(cfg, kerf_mm);

    let cx = wall.base_w - (nut_w / 2.0 + EDGE_BACKOFF);
    wall.cuts.push(Cut::Rect(Rect::new(
        cx - nut_w / 2.0,
        y - nut_w / 2.0,
        nut_w,
        nut_w,
    )));

    // Stem spans from the outermost edge back toward the pocket center,
    // clamped by the material available.
    let outer_x = wall.base_w + tab_d;
    let stem_len = cfg.stem_length.min(outer_x - cx).max(0.0);
    wall.cuts.push(Cut::Rect(Rect::new(
        outer_x - stem_len,
        y - stem_w / 2.0,
        stem_len,
        stem_w,
    )));
}

/// Clearance hole on the left-edge region of the mating wall, aligned to the
/// T-slot on the other side of the joint.
fn add_clearance_hole_on_left_edge(wall: &mut Panel, cfg: &CutConfig, kerf_mm: f64, y: f64) {
    let hole_d = kerf::screw_hole_draw_d(cfg, kerf_mm);
    let pocket_d = kerf::finger_pocket_depth_draw(cfg, kerf_mm);

    let cx = pocket_d + hole_d / 2.0 + EDGE_BACKOFF;
    wall.cuts.push(Cut::Circle {
        cx,
        cy: y,
        r: hole_d / 2.0,
    });
}

/// Floor T-slot at (x, y), stem opening toward the given floor edge and
/// clamped to the material between the pocket center and that edge.
fn add_floor_tslot(
    floor: &mut Panel,
    cfg: &CutConfig,
    kerf_mm: f64,
    x: f64,
    y: f64,
    toward: EdgeDir,
) {
    let nut_w = kerf::nut_pocket_draw_w(cfg, kerf_mm);
    let stem_w = kerf::screw_hole_draw_d(cfg, kerf_mm);

    floor.cuts.push(Cut::Rect(Rect::new(
        x - nut_w / 2.0,
        y - nut_w / 2.0,
        nut_w,
        nut_w,
    )));

    let (w, h) = (floor.base_w, floor.base_h);
    let stem = match toward {
        EdgeDir::Top => {
            let len = cfg.stem_length.min(y).max(0.0);
            Rect::new(x - stem_w / 2.0, 0.0, stem_w, len)
        }
        EdgeDir::Bottom => {
            let len = cfg.stem_length.min(h - y).max(0.0);
            Rect::new(x - stem_w / 2.0, h - len, stem_w, len)
        }
        EdgeDir::Left => {
            let len = cfg.stem_length.min(x).max(0.0);
            Rect::new(0.0, y - stem_w / 2.0, len, stem_w)
        }
        EdgeDir::Right => {
            let len = cfg.stem_length.min(w - x).max(0.0);
            Rect::new(w - len, y - stem_w / 2.0, len, stem_w)
        }
    };
    floor.cuts.push(Cut::Rect(stem));
}

/// Place every fastener: the wall-to-wall chain, the floor traps, and the
/// wall bottom-tab clearance holes.
pub fn apply_fasteners(panels: &mut [Panel], params: &PhysicalParams, cfg: &CutConfig) {
    let kerf_mm = params.kerf;
    let fw = kerf::finger_feature_w_draw(cfg, kerf_mm);
    let m = cfg.min_edge_margin;

    // Wall-to-wall: right edge of the first wall mates with the left edge of
    // the second; two fasteners per joint reusing the corner-center heights.
    let chain = [
        (PanelRole::WallFront, PanelRole::WallRight),
        (PanelRole::WallRight, PanelRole::WallBack),
        (PanelRole::WallBack, PanelRole::WallLeft),
        (PanelRole::WallLeft, PanelRole::WallFront),
    ];
    for (tab_role, mate_role) in chain {
        let heights = {
            let tab_h = panels
                .iter()
                .find(|p| p.role == tab_role)
                .map(|p| p.base_h);
            let mate_h = panels
                .iter()
                .find(|p| p.role == mate_role)
                .map(|p| p.base_h);
            match (tab_h, mate_h) {
                (Some(a), Some(b)) => corner_centers(a.min(b), fw, m),
                _ => continue,
            }
        };
        for y in heights {
            if let Some(tab_wall) = find_panel_mut(panels, tab_role) {
                add_tslot_on_right_edge(tab_wall, cfg, kerf_mm, y);
            }
            if let Some(mate_wall) = find_panel_mut(panels, mate_role) {
                add_clearance_hole_on_left_edge(mate_wall, cfg, kerf_mm, y);
            }
        }
    }

    // Wall-to-floor: traps in the floor, two near each edge at the same
    // corner centers the bottom tabs use.
    if let Some(floor) = find_panel_mut(panels, PanelRole::Floor) {
        let xs = corner_centers(floor.base_w, fw, m);
        let ys = corner_centers(floor.base_h, fw, m);
        let inset = m + fw / 2.0;
        let (fw_floor, fh_floor) = (floor.base_w, floor.base_h);

        for x in xs {
            add_floor_tslot(floor, cfg, kerf_mm, x, inset, EdgeDir::Top);
            add_floor_tslot(floor, cfg, kerf_mm, x, fh_floor - inset, EdgeDir::Bottom);
        }
        for y in ys {
            add_floor_tslot(floor, cfg, kerf_mm, inset, y, EdgeDir::Left);
            add_floor_tslot(floor, cfg, kerf_mm, fw_floor - inset, y, EdgeDir::Right);
        }
    }

    // Clearance holes through each wall's two bottom tabs.
    let tab_d = kerf::finger_tab_depth_draw(cfg, kerf_mm);
    let hole_d = kerf::screw_hole_draw_d(cfg, kerf_mm);
    for role in [
        PanelRole::WallFront,
        PanelRole::WallBack,
        PanelRole::WallLeft,
        PanelRole::WallRight,
    ] {
        if let Some(wall) = find_panel_mut(panels, role) {
            let xs = corner_centers(wall.base_w, fw, m);
            let cy = wall.base_h + tab_d / 2.0;
            for x in xs {
                wall.cuts.push(Cut::Circle {
                    cx: x,
                    cy,
                    r: hole_d / 2.0,
                });
            }
        }
    }
}
