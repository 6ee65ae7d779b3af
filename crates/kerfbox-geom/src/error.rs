//! Error types for the geometry pipeline.
//!
//! Invalid configuration is rejected by the validator before any geometry is
//! built; once the pipeline runs, the only failure it can raise itself is an
//! infeasible sheet layout. Engraving degeneracies are not errors (the
//! feature is skipped instead).

use thiserror::Error;

/// Errors raised while validating raw user inputs.
#[derive(Error, Debug)]
pub enum ParameterError {
    /// A required input was not provided.
    #[error("Missing required input: {0}")]
    Missing(String),

    /// A dimension that must be strictly positive was not.
    #[error("{name} must be > 0")]
    NonPositive { name: String },

    /// Interior dimensions collapsed after subtracting the walls.
    #[error("Box too small: interior length/width must be positive after subtracting walls")]
    InteriorTooSmall,

    /// A wall was flagged for both text and fractal decoration.
    #[error("{wall}: cannot have both text and fractal")]
    ConflictingDecor { wall: String },

    /// A wall was flagged for text but no content was given.
    #[error("{wall}: text enabled but no content given")]
    MissingText { wall: String },

    /// Divider count outside the supported range.
    #[error("Divider count must be 0, 1, or 2 (got {0})")]
    DividerCount(u32),

    /// Divider positions not strictly increasing.
    #[error("Divider positions must be strictly increasing")]
    DividerOrder,

    /// A divider sits too close to an interior wall.
    #[error("Divider too close to a wall (violates {min_gap}mm minimum gap)")]
    DividerWallGap { min_gap: f64 },

    /// Two dividers sit too close to each other.
    #[error("Dividers too close to each other (violates {min_gap}mm minimum gap)")]
    DividerSpacing { min_gap: f64 },
}

/// Errors raised by the generation pipeline itself.
#[derive(Error, Debug)]
pub enum GenerateError {
    /// The built panel set does not fit on one stock sheet.
    #[error("Parts do not fit on one {sheet_w:.0}x{sheet_h:.0}mm sheet")]
    LayoutInfeasible { sheet_w: f64, sheet_h: f64 },

    /// A parameter validation error.
    #[error("Invalid parameters: {0}")]
    Parameter(#[from] ParameterError),
}

/// Result type alias for parameter validation.
pub type ParameterResult<T> = Result<T, ParameterError>;

/// Result type alias for pipeline operations.
pub type GenerateResult<T> = Result<T, GenerateError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parameter_error_display() {
        let err = ParameterError::Missing("length".to_string());
        assert_eq!(err.to_string(), "Missing required input: length");

        let err = ParameterError::NonPositive {
            name: "height".to_string(),
        };
        assert_eq!(err.to_string(), "height must be > 0");

        let err = ParameterError::DividerWallGap { min_gap: 6.0 };
        assert_eq!(
            err.to_string(),
            "Divider too close to a wall (violates 6mm minimum gap)"
        );
    }

    #[test]
    fn test_generate_error_display() {
        let err = GenerateError::LayoutInfeasible {
            sheet_w: 304.8,
            sheet_h: 457.2,
        };
        assert_eq!(err.to_string(), "Parts do not fit on one 305x457mm sheet");
    }

    #[test]
    fn test_error_conversion() {
        let param_err = ParameterError::DividerOrder;
        let gen_err: GenerateError = param_err.into();
        assert!(matches!(gen_err, GenerateError::Parameter(_)));
    }
}
