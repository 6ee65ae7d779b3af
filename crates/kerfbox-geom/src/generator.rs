//! The generation pipeline.
//!
//! Stages run strictly in order — panel construction, joint outlines,
//! fasteners, divider slots, engraving, packing — each consuming only the
//! validated parameters and the calibration config. The whole pipeline is
//! synchronous and side-effect-free; identical inputs yield identical
//! output, byte for byte.

use kerfbox_core::CutConfig;
use tracing::debug;

use crate::builder;
use crate::dividers;
use crate::engrave;
use crate::error::GenerateResult;
use crate::fasteners;
use crate::joints;
use crate::model::{Panel, Placement};
use crate::packer;
use crate::validate::PhysicalParams;

/// A fully generated, packed panel set.
#[derive(Debug, Clone)]
pub struct BoxLayout {
    /// Panels in construction order.
    pub panels: Vec<Panel>,
    /// One placement per panel, in packing order.
    pub placements: Vec<Placement>,
    pub sheet_w: f64,
    pub sheet_h: f64,
}

/// Run the pipeline. The only error it can raise itself is layout
/// infeasibility; parameter problems are caught upstream by the validator.
pub fn generate(params: &PhysicalParams, cfg: &CutConfig) -> GenerateResult<BoxLayout> {
    let mut panels = builder::build_panels(params, cfg);
    debug!(count = panels.len(), "panels built");

    joints::apply_joint_outlines(&mut panels, params, cfg);
    fasteners::apply_fasteners(&mut panels, params, cfg);
    dividers::apply_divider_slots(&mut panels, params, cfg);
    engrave::apply_engraving(&mut panels, params, cfg);

    let placements = packer::shelf_pack(&panels, cfg.sheet_w, cfg.sheet_h, cfg.part_gap)?;
    debug!(count = placements.len(), "panels packed");

    Ok(BoxLayout {
        panels,
        placements,
        sheet_w: cfg.sheet_w,
        sheet_h: cfg.sheet_h,
    })
}
