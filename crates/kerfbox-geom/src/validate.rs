//! Parameter validation.
//!
//! Normalizes raw user inputs (dimensions in inches, decoration flags,
//! divider positions) into a [`PhysicalParams`] record in millimeters. The
//! rest of the pipeline assumes this record is valid and does not
//! re-validate.
//!
//! Divider convention: positions are measured along the interior LENGTH from
//! the left inner wall. Divider panels run front-to-back (spanning the
//! interior width); slots are cut into the front/back walls and the floor.

use kerfbox_core::{CutConfig, INCH_TO_MM};
use serde::{Deserialize, Serialize};

use crate::error::{ParameterError, ParameterResult};
use crate::model::PanelRole;

/// Walls in fixed pipeline order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Wall {
    Front,
    Back,
    Left,
    Right,
}

impl Wall {
    pub const ALL: [Wall; 4] = [Wall::Front, Wall::Back, Wall::Left, Wall::Right];

    pub fn name(&self) -> &'static str {
        match self {
            Wall::Front => "front",
            Wall::Back => "back",
            Wall::Left => "left",
            Wall::Right => "right",
        }
    }

    pub fn role(&self) -> PanelRole {
        match self {
            Wall::Front => PanelRole::WallFront,
            Wall::Back => PanelRole::WallBack,
            Wall::Left => PanelRole::WallLeft,
            Wall::Right => PanelRole::WallRight,
        }
    }
}

/// Per-wall decoration mode. Text and fractal are mutually exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DecorMode {
    None,
    Text,
    Fractal,
}

/// Validated decoration for one wall.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WallDecor {
    pub mode: DecorMode,
    pub text: String,
}

impl WallDecor {
    fn none() -> Self {
        Self {
            mode: DecorMode::None,
            text: String::new(),
        }
    }
}

/// Raw per-wall decoration flags as entered by the user.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WallDecorInput {
    pub text: bool,
    pub fractal: bool,
    pub text_content: String,
}

/// Raw user inputs, dimensions in inches. Deserializable so a saved
/// parameter file can be replayed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RawBoxInputs {
    pub length_in: f64,
    pub width_in: f64,
    pub height_in: f64,
    /// Overrides the calibrated default when set.
    pub kerf_mm: Option<f64>,
    pub front: WallDecorInput,
    pub back: WallDecorInput,
    pub left: WallDecorInput,
    pub right: WallDecorInput,
    pub num_dividers: u32,
    pub divider_pos1_in: Option<f64>,
    pub divider_pos2_in: Option<f64>,
}

impl RawBoxInputs {
    fn wall_input(&self, wall: Wall) -> &WallDecorInput {
        match wall {
            Wall::Front => &self.front,
            Wall::Back => &self.back,
            Wall::Left => &self.left,
            Wall::Right => &self.right,
        }
    }
}

/// Validated physical parameter set, all lengths in millimeters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhysicalParams {
    pub outer_l: f64,
    pub outer_w: f64,
    pub outer_h: f64,
    pub inner_l: f64,
    pub inner_w: f64,
    pub thickness: f64,
    pub kerf: f64,
    /// Decoration per wall, indexed in [`Wall::ALL`] order.
    pub decor: [WallDecor; 4],
    /// Strictly increasing, measured from the left inner wall.
    pub divider_positions: Vec<f64>,
}

impl PhysicalParams {
    pub fn decor(&self, wall: Wall) -> &WallDecor {
        match wall {
            Wall::Front => &self.decor[0],
            Wall::Back => &self.decor[1],
            Wall::Left => &self.decor[2],
            Wall::Right => &self.decor[3],
        }
    }
}

/// Validate raw inputs and derive the physical parameter set.
pub fn validate_inputs(raw: &RawBoxInputs, cfg: &CutConfig) -> ParameterResult<PhysicalParams> {
    for (name, value) in [
        ("length", raw.length_in),
        ("width", raw.width_in),
        ("height", raw.height_in),
    ] {
        if value <= 0.0 {
            return Err(ParameterError::NonPositive {
                name: name.to_string(),
            });
        }
    }

    let outer_l = raw.length_in * INCH_TO_MM;
    let outer_w = raw.width_in * INCH_TO_MM;
    let outer_h = raw.height_in * INCH_TO_MM;

    let t = cfg.thickness;
    let kerf = raw.kerf_mm.unwrap_or(cfg.kerf);

    let inner_l = outer_l - 2.0 * t;
    let inner_w = outer_w - 2.0 * t;
    if inner_l <= 0.0 || inner_w <= 0.0 {
        return Err(ParameterError::InteriorTooSmall);
    }

    let mut decor = [
        WallDecor::none(),
        WallDecor::none(),
        WallDecor::none(),
        WallDecor::none(),
    ];
    for (i, wall) in Wall::ALL.iter().enumerate() {
        let input = raw.wall_input(*wall);
        if input.text && input.fractal {
            return Err(ParameterError::ConflictingDecor {
                wall: wall.name().to_string(),
            });
        }
        let mode = if input.text {
            DecorMode::Text
        } else if input.fractal {
            DecorMode::Fractal
        } else {
            DecorMode::None
        };
        if mode == DecorMode::Text && input.text_content.trim().is_empty() {
            return Err(ParameterError::MissingText {
                wall: wall.name().to_string(),
            });
        }
        decor[i] = WallDecor {
            mode,
            text: input.text_content.clone(),
        };
    }

    if raw.num_dividers > 2 {
        return Err(ParameterError::DividerCount(raw.num_dividers));
    }

    let mut divider_positions = Vec::new();
    if raw.num_dividers >= 1 {
        let pos = raw
            .divider_pos1_in
            .ok_or_else(|| ParameterError::Missing("divider_pos1_in".to_string()))?;
        divider_positions.push(pos * INCH_TO_MM);
    }
    if raw.num_dividers == 2 {
        let pos = raw
            .divider_pos2_in
            .ok_or_else(|| ParameterError::Missing("divider_pos2_in".to_string()))?;
        divider_positions.push(pos * INCH_TO_MM);
    }

    if divider_positions.len() == 2 && divider_positions[0] >= divider_positions[1] {
        return Err(ParameterError::DividerOrder);
    }

    let min_gap = cfg.divider_min_gap;
    for &pos in &divider_positions {
        if pos < min_gap || pos > inner_l - min_gap {
            return Err(ParameterError::DividerWallGap { min_gap });
        }
    }
    if divider_positions.len() == 2 && divider_positions[1] - divider_positions[0] < min_gap {
        return Err(ParameterError::DividerSpacing { min_gap });
    }

    Ok(PhysicalParams {
        outer_l,
        outer_w,
        outer_h,
        inner_l,
        inner_w,
        thickness: t,
        kerf,
        decor,
        divider_positions,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn basic_raw() -> RawBoxInputs {
        RawBoxInputs {
            length_in: 6.0,
            width_in: 4.0,
            height_in: 3.0,
            ..Default::default()
        }
    }

    #[test]
    fn test_dimensions_converted_to_mm() {
        let params = validate_inputs(&basic_raw(), &CutConfig::default()).unwrap();
        assert!((params.outer_l - 152.4).abs() < 1e-9);
        assert!((params.outer_w - 101.6).abs() < 1e-9);
        assert!((params.outer_h - 76.2).abs() < 1e-9);
        assert!((params.inner_l - 146.4).abs() < 1e-9);
        assert_eq!(params.kerf, 0.10);
    }

    #[test]
    fn test_rejects_non_positive_dimension() {
        let mut raw = basic_raw();
        raw.width_in = 0.0;
        let err = validate_inputs(&raw, &CutConfig::default()).unwrap_err();
        assert!(matches!(err, ParameterError::NonPositive { .. }));
    }

    #[test]
    fn test_rejects_collapsed_interior() {
        let mut raw = basic_raw();
        raw.length_in = 0.2; // 5.08mm outer, walls eat 6mm
        let err = validate_inputs(&raw, &CutConfig::default()).unwrap_err();
        assert!(matches!(err, ParameterError::InteriorTooSmall));
    }

    #[test]
    fn test_rejects_conflicting_decor() {
        let mut raw = basic_raw();
        raw.front.text = true;
        raw.front.fractal = true;
        raw.front.text_content = "hi".to_string();
        let err = validate_inputs(&raw, &CutConfig::default()).unwrap_err();
        assert!(matches!(err, ParameterError::ConflictingDecor { .. }));
    }

    #[test]
    fn test_rejects_blank_text() {
        let mut raw = basic_raw();
        raw.left.text = true;
        raw.left.text_content = "   ".to_string();
        let err = validate_inputs(&raw, &CutConfig::default()).unwrap_err();
        assert!(matches!(err, ParameterError::MissingText { .. }));
    }

    #[test]
    fn test_divider_positions_and_gaps() {
        let mut raw = basic_raw();
        raw.num_dividers = 2;
        raw.divider_pos1_in = Some(2.0);
        raw.divider_pos2_in = Some(4.0);
        let params = validate_inputs(&raw, &CutConfig::default()).unwrap();
        assert_eq!(params.divider_positions.len(), 2);
        assert!(params.divider_positions[0] < params.divider_positions[1]);

        // too close together
        raw.divider_pos2_in = Some(2.1);
        let err = validate_inputs(&raw, &CutConfig::default()).unwrap_err();
        assert!(matches!(err, ParameterError::DividerSpacing { .. }));

        // out of order
        raw.divider_pos2_in = Some(1.0);
        let err = validate_inputs(&raw, &CutConfig::default()).unwrap_err();
        assert!(matches!(err, ParameterError::DividerOrder));

        // too close to a wall
        raw.num_dividers = 1;
        raw.divider_pos1_in = Some(0.1);
        let err = validate_inputs(&raw, &CutConfig::default()).unwrap_err();
        assert!(matches!(err, ParameterError::DividerWallGap { .. }));
    }

    #[test]
    fn test_missing_divider_position() {
        let mut raw = basic_raw();
        raw.num_dividers = 1;
        let err = validate_inputs(&raw, &CutConfig::default()).unwrap_err();
        assert!(matches!(err, ParameterError::Missing(_)));
    }
}
