//! Unit conversion utilities
//!
//! All geometry in kerfbox is computed in millimeters; box dimensions are
//! entered in inches. Supports decimal and fractional inch parsing
//! (e.g. "5 1/8") and formatting.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Millimeters per inch.
pub const INCH_TO_MM: f64 = 25.4;

/// Measurement system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MeasurementSystem {
    /// Metric system (mm)
    Metric,
    /// Imperial system (inches)
    Imperial,
}

impl Default for MeasurementSystem {
    fn default() -> Self {
        Self::Metric
    }
}

impl fmt::Display for MeasurementSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Metric => write!(f, "Metric"),
            Self::Imperial => write!(f, "Imperial"),
        }
    }
}

impl FromStr for MeasurementSystem {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "metric" | "mm" => Ok(Self::Metric),
            "imperial" | "inch" | "in" => Ok(Self::Imperial),
            _ => Err(format!("Unknown measurement system: {}", s)),
        }
    }
}

/// Format a length in millimeters for display in the given system.
pub fn format_length(value_mm: f64, system: MeasurementSystem) -> String {
    match system {
        MeasurementSystem::Metric => format!("{:.3}", value_mm),
        MeasurementSystem::Imperial => format!("{:.3}", value_mm / INCH_TO_MM),
    }
}

/// Parse a length string to millimeters.
///
/// Metric input is a plain decimal. Imperial input may be decimal inches,
/// a bare fraction ("1/4"), or whole-plus-fraction ("5 1/8").
pub fn parse_length(input: &str, system: MeasurementSystem) -> Result<f64, String> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(0.0);
    }

    match system {
        MeasurementSystem::Metric => input.parse::<f64>().map_err(|e| e.to_string()),
        MeasurementSystem::Imperial => {
            if input.contains('/') {
                let mut total_inches = 0.0;
                for part in input.split_whitespace() {
                    if part.contains('/') {
                        let frac: Vec<&str> = part.split('/').collect();
                        if frac.len() != 2 {
                            return Err("Invalid fraction format".to_string());
                        }
                        let num = frac[0].parse::<f64>().map_err(|_| "Invalid numerator")?;
                        let den = frac[1].parse::<f64>().map_err(|_| "Invalid denominator")?;
                        if den == 0.0 {
                            return Err("Division by zero".to_string());
                        }
                        total_inches += num / den;
                    } else {
                        total_inches += part.parse::<f64>().map_err(|_| "Invalid number part")?;
                    }
                }
                Ok(total_inches * INCH_TO_MM)
            } else {
                let inches = input.parse::<f64>().map_err(|e| e.to_string())?;
                Ok(inches * INCH_TO_MM)
            }
        }
    }
}

/// Get the unit label for the given system ("mm" or "in")
pub fn get_unit_label(system: MeasurementSystem) -> &'static str {
    match system {
        MeasurementSystem::Metric => "mm",
        MeasurementSystem::Imperial => "in",
    }
}
