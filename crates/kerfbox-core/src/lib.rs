//! # Kerfbox Core
//!
//! Core types and utilities for kerfbox:
//! unit conversion between inches and millimeters (including fractional-inch
//! input) and the immutable calibration configuration shared by every
//! pipeline stage.

pub mod config;
pub mod units;

pub use config::CutConfig;
pub use units::{format_length, get_unit_label, parse_length, MeasurementSystem, INCH_TO_MM};
