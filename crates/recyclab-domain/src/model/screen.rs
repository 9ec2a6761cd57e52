//! Screen measurements for stock consistency and reject determination

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Weighings of one screen or filtration step (g).
///
/// `tin_or_filter_mass` is the filter paper for stock consistency and the
/// tin for coarse/fine rejects. `input_mass` is only read by stock
/// consistency; reject paths divide by a fixed reference sample mass.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScreenMeasurement {
    #[serde(default)]
    pub tin_or_filter_mass: f64,
    #[serde(default)]
    pub input_mass: f64,
    #[serde(default)]
    pub output_mass: f64,
}

impl ScreenMeasurement {
    pub fn new(tin_or_filter_mass: f64, input_mass: f64, output_mass: f64) -> Self {
        Self {
            tin_or_filter_mass,
            input_mass,
            output_mass,
        }
    }

    /// Reject weighing: tin and output only
    pub fn reject(tin_mass: f64, output_mass: f64) -> Self {
        Self::new(tin_mass, 0.0, output_mass)
    }
}

/// Stock, coarse and fine screen measurements of one sample
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScreenSet {
    #[serde(default)]
    pub stock: ScreenMeasurement,
    #[serde(default)]
    pub coarse: ScreenMeasurement,
    #[serde(default)]
    pub fine: ScreenMeasurement,
}

/// How a reject calculation treats a tin mass of exactly zero
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TarePolicy {
    /// A zero (or missing) tin mass means "no data": the reject is 0 %
    ZeroMeansMissing,
    /// Always subtract the tin mass, even when it is zero
    AlwaysSubtract,
}

impl TarePolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            TarePolicy::ZeroMeansMissing => "zero-means-missing",
            TarePolicy::AlwaysSubtract => "always-subtract",
        }
    }
}

impl std::fmt::Display for TarePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TarePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "zero-means-missing" => Ok(TarePolicy::ZeroMeansMissing),
            "always-subtract" => Ok(TarePolicy::AlwaysSubtract),
            other => Err(format!(
                "unknown tare policy '{}' (expected zero-means-missing or always-subtract)",
                other
            )),
        }
    }
}
