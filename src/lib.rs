//! # Kerfbox
//!
//! Kerf-aware laser-cut box generator. From outer dimensions, decoration
//! choices, and divider positions to a single-sheet SVG drawing with finger
//! joints, captive-nut T-slot fasteners, divider slots, and text or fractal
//! engraving.
//!
//! ## Architecture
//!
//! The workspace is organized as multiple crates:
//!
//! 1. **kerfbox-core** - units and the calibration configuration
//! 2. **kerfbox-geom** - the geometry pipeline (validation through packing)
//! 3. **kerfbox-svg** - drawing serialization
//! 4. **kerfbox** - the interactive CLI binary

pub use kerfbox_core::{CutConfig, MeasurementSystem};
pub use kerfbox_geom::{
    generate, validate_inputs, BoxLayout, GenerateError, ParameterError, PhysicalParams,
    RawBoxInputs,
};
pub use kerfbox_svg::render;

/// Initialize logging with the default configuration
///
/// Sets up structured logging with console output and RUST_LOG environment
/// variable support.
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer().with_target(true).with_level(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    Ok(())
}
