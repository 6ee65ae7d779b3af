//! # Kerfbox Geometry
//!
//! The panel-geometry pipeline for laser-cut boxes: from a validated
//! parameter set to a packed set of 2D panels ready for rendering.
//!
//! ## Pipeline stages
//!
//! - **Validator**: raw user inputs → [`validate::PhysicalParams`]
//! - **Panel Builder**: base wall/floor/divider rectangles
//! - **Joint Geometry**: finger-joint tab/pocket outlines
//! - **Fastener Placement**: captive-nut T-slots and clearance holes
//! - **Divider Slots**: wall slots and floor slits per divider
//! - **Engraving Layout**: safe zones, auto-fit text, Sierpinski fill
//! - **Packer**: shelf layout onto one stock sheet, or infeasibility
//!
//! All dimensions are millimeters. Every stage takes the immutable
//! [`kerfbox_core::CutConfig`] calibration; nothing reads global state.

pub mod builder;
pub mod dividers;
pub mod engrave;
pub mod error;
pub mod fasteners;
pub mod generator;
pub mod joints;
pub mod kerf;
pub mod model;
pub mod packer;
pub mod sierpinski;
pub mod validate;

pub use error::{GenerateError, GenerateResult, ParameterError, ParameterResult};
pub use generator::{generate, BoxLayout};
pub use model::{Cut, Engrave, Outline, Panel, PanelRole, Placement, Point, Rect, TextMark};
pub use validate::{
    validate_inputs, DecorMode, PhysicalParams, RawBoxInputs, Wall, WallDecor, WallDecorInput,
};
