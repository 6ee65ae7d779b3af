//! Calibration configuration.
//!
//! Every dimension the cutter removes material from needs kerf compensation,
//! and several fits (divider slots, nut pockets) carry clearances calibrated
//! against physical test cuts. All of those numbers live here in one
//! immutable struct that is threaded through every pipeline stage, so two
//! generation requests with different calibrations never interfere.
//!
//! The defaults were calibrated on 3 mm acrylic (clearance test cuts,
//! 2026-02-04):
//! - divider slot test: best fit labeled "2.80" => clearance -0.10 with
//!   kerf 0.10 and thickness 3.0
//! - nut socket test: best fit labeled "-0.08" => pocket clearance -0.08
//!
//! Clearances are physical-target adjustments; the kerf sign conventions
//! themselves live in `kerfbox_geom::kerf`.

use crate::units::INCH_TO_MM;
use serde::{Deserialize, Serialize};

/// Immutable calibration set for one generation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CutConfig {
    /// Material thickness (mm).
    pub thickness: f64,
    /// Default kerf when the caller does not supply one (mm).
    pub kerf: f64,

    /// Stock sheet width (mm). One sheet per box.
    pub sheet_w: f64,
    /// Stock sheet height (mm).
    pub sheet_h: f64,
    /// Gap between packed parts, also the leading sheet margin (mm).
    pub part_gap: f64,

    /// Minimum distance of any joint feature from a panel corner (mm).
    pub min_edge_margin: f64,
    /// Inset of the engraving safe region from panel edges (mm).
    pub engrave_margin: f64,
    /// Minimum divider distance from walls and from other dividers (mm).
    pub divider_min_gap: f64,

    /// Physical clearance added to the divider-slot width target (mm).
    pub divider_slot_clearance: f64,
    /// Physical clearance added to the nut-pocket width target (mm).
    pub nut_pocket_clearance: f64,
    /// Screw shank clearance hole diameter, physical target (mm).
    pub screw_hole_diameter: f64,
    /// Square nut width across flats (mm).
    pub nut_width: f64,
    /// T-slot stem channel length along which the screw slides (mm).
    pub stem_length: f64,

    /// How far finger tabs protrude past the panel edge, physical (mm).
    /// Usually equal to the material thickness.
    pub finger_depth: f64,
    /// Width of each finger feature along an edge, physical (mm).
    pub finger_width: f64,

    /// Divider slot stops this far below the wall top edge (mm).
    pub slot_top_cap: f64,
    /// Divider slot starts this far above the wall bottom edge (mm).
    pub slot_bottom_margin: f64,

    /// Engraving font family.
    pub text_font_family: String,
    /// Auto-fit search starts at this font size (mm).
    pub text_max_font_size: f64,
    /// Auto-fit floor; used when nothing larger fits (mm).
    pub text_min_font_size: f64,
    /// Auto-fit step between attempts (mm).
    pub text_font_step: f64,
    /// Estimated glyph advance as a fraction of font size.
    pub text_char_width_ratio: f64,
    /// Estimated line height (ascenders + descenders) as a fraction of font size.
    pub text_height_ratio: f64,

    /// Sierpinski subdivision depth.
    pub fractal_depth: u32,
    /// Extra inset of the fractal inside the safe region (mm).
    pub fractal_inset: f64,
    /// Pad added around cut features when building fractal keepouts (mm).
    pub fractal_keepout_pad: f64,
}

impl Default for CutConfig {
    fn default() -> Self {
        let thickness: f64 = 3.0;
        let margin = (2.0 * thickness).max(6.0);
        Self {
            thickness,
            kerf: 0.10,
            sheet_w: 12.0 * INCH_TO_MM,
            sheet_h: 18.0 * INCH_TO_MM,
            part_gap: 2.0,
            min_edge_margin: margin,
            engrave_margin: margin,
            divider_min_gap: margin,
            divider_slot_clearance: -0.10,
            nut_pocket_clearance: -0.08,
            screw_hole_diameter: 2.50,
            nut_width: 0.188 * INCH_TO_MM,
            stem_length: 10.0,
            finger_depth: thickness,
            finger_width: 12.0,
            slot_top_cap: margin,
            slot_bottom_margin: margin,
            text_font_family: "Arial".to_string(),
            text_max_font_size: 10.0,
            text_min_font_size: 3.0,
            text_font_step: 0.5,
            text_char_width_ratio: 0.55,
            text_height_ratio: 1.2,
            fractal_depth: 4,
            fractal_inset: thickness,
            fractal_keepout_pad: 2.0,
        }
    }
}
