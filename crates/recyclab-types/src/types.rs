//! Shared presentation-neutral types

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Placeholder shown wherever a calculation has no defined result
pub const UNDEFINED_PLACEHOLDER: &str = "-";

/// Output format for results
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Format an optional value with fixed decimals, or the undefined placeholder.
pub fn format_optional(value: Option<f64>, decimals: usize) -> String {
    match value {
        Some(v) => format!("{:.*}", decimals, v),
        None => UNDEFINED_PLACEHOLDER.to_string(),
    }
}

/// Round to `decimals` places, ties to even on the scaled value.
///
/// Matches how the lab spreadsheets round: 0.125 becomes 0.12, 0.375 becomes 0.38.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round_ties_even() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_optional_defined() {
        assert_eq!(format_optional(Some(45.0), 2), "45.00");
        assert_eq!(format_optional(Some(0.0), 2), "0.00");
    }

    #[test]
    fn test_format_optional_undefined_is_placeholder() {
        assert_eq!(format_optional(None, 2), "-");
    }

    #[test]
    fn test_round_to() {
        assert!((round_to(7.0710678, 2) - 7.07).abs() < 1e-12);
        assert!((round_to(0.123456, 4) - 0.1235).abs() < 1e-12);
        assert!((round_to(-0.123456, 4) + 0.1235).abs() < 1e-12);
    }

    #[test]
    fn test_round_to_ties_to_even() {
        assert_eq!(round_to(0.125, 2), 0.12);
        assert_eq!(round_to(0.375, 2), 0.38);
        assert_eq!(round_to(2.5, 0), 2.0);
        assert_eq!(round_to(-0.125, 2), -0.12);
    }

    #[test]
    fn test_output_format_display() {
        assert_eq!(OutputFormat::Table.to_string(), "table");
        assert_eq!(OutputFormat::Json.to_string(), "json");
    }
}
