//! Kerf-aware dimension rules.
//!
//! The beam removes roughly one kerf of material from every cut edge, with
//! opposite effect on the two cut classes:
//! - internal voids (holes/slots/pockets) end up LARGER by ~kerf, so the
//!   drawn dimension is `target - kerf`;
//! - external protrusions (tabs) end up SMALLER by ~kerf, so the drawn
//!   dimension is `target + kerf`.
//!
//! These two compensations are intentionally NOT inverses of each other;
//! both shift in the direction the beam errs for that cut class. They were
//! calibrated against physical clearance tests and must be re-tuned per
//! machine/material via [`CutConfig`], not "corrected" here.

use kerfbox_core::CutConfig;

/// Draw size for an internal void (hole/slot/pocket) of physical size
/// `target_physical`.
pub fn internal_cut_draw(target_physical: f64, kerf: f64) -> f64 {
    target_physical - kerf
}

/// Draw size for an external protrusion (tab/tongue) of physical size
/// `target_physical`.
pub fn external_cut_draw(target_physical: f64, kerf: f64) -> f64 {
    target_physical + kerf
}

/// Drawn width of a divider slot, targeting a snug fit on the material
/// thickness.
pub fn divider_slot_draw_w(cfg: &CutConfig, kerf: f64) -> f64 {
    internal_cut_draw(cfg.thickness + cfg.divider_slot_clearance, kerf)
}

/// Drawn width of the square nut-trap pocket.
pub fn nut_pocket_draw_w(cfg: &CutConfig, kerf: f64) -> f64 {
    internal_cut_draw(cfg.nut_width + cfg.nut_pocket_clearance, kerf)
}

/// Drawn diameter of a screw clearance hole; also the T-slot stem width.
pub fn screw_hole_draw_d(cfg: &CutConfig, kerf: f64) -> f64 {
    internal_cut_draw(cfg.screw_hole_diameter, kerf)
}

/// Drawn protrusion depth of a finger tab.
pub fn finger_tab_depth_draw(cfg: &CutConfig, kerf: f64) -> f64 {
    external_cut_draw(cfg.finger_depth, kerf)
}

/// Drawn indentation depth of a finger pocket.
pub fn finger_pocket_depth_draw(cfg: &CutConfig, kerf: f64) -> f64 {
    internal_cut_draw(cfg.finger_depth, kerf)
}

/// Drawn width of a finger feature along the perimeter. Width runs along the
/// edge rather than across the cut, so it is kept at design intent.
pub fn finger_feature_w_draw(cfg: &CutConfig, _kerf: f64) -> f64 {
    cfg.finger_width
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_internal_and_external_signs() {
        assert_eq!(internal_cut_draw(3.0, 0.1), 2.9);
        assert_eq!(external_cut_draw(3.0, 0.1), 3.1);
        assert_eq!(internal_cut_draw(3.0, 0.0), 3.0);
        assert_eq!(external_cut_draw(3.0, 0.0), 3.0);
    }

    #[test]
    fn test_compensations_do_not_round_trip() {
        // The two rules compensate different cut classes and are NOT
        // inverses: treating an external draw size as a new physical target
        // for an internal cut lands back at the original, but chaining them
        // as "undo" operations on the same feature would be wrong. The
        // asymmetry below is the documented behavior.
        let p = 3.0;
        let k = 0.1;
        let tab = external_cut_draw(p, k);
        let pocket = internal_cut_draw(p, k);
        assert!((tab - pocket - 2.0 * k).abs() < 1e-12);
    }

    #[test]
    fn test_derived_sizes_route_through_primitives() {
        let cfg = CutConfig::default();
        let k = cfg.kerf;
        // divider slot: thickness 3.0 with -0.10 clearance, minus kerf
        assert!((divider_slot_draw_w(&cfg, k) - 2.80).abs() < 1e-9);
        // nut pocket: 4.7752 - 0.08 - 0.10
        assert!((nut_pocket_draw_w(&cfg, k) - 4.5952).abs() < 1e-9);
        // screw hole: 2.50 - 0.10
        assert!((screw_hole_draw_d(&cfg, k) - 2.40).abs() < 1e-9);
        // tab grows, pocket shrinks
        assert!((finger_tab_depth_draw(&cfg, k) - 3.10).abs() < 1e-9);
        assert!((finger_pocket_depth_draw(&cfg, k) - 2.90).abs() < 1e-9);
        // feature width is design intent, kerf-independent
        assert_eq!(finger_feature_w_draw(&cfg, k), 12.0);
    }
}
