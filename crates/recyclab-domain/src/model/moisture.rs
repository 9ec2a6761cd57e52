//! Moisture test replicates

use serde::{Deserialize, Serialize};

/// One moisture-test replicate: the sample weighed before and after oven drying
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct MassPair {
    /// Air dry mass (g)
    #[serde(default)]
    pub air_dry_mass: f64,
    /// Oven dry mass (g)
    #[serde(default)]
    pub oven_dry_mass: f64,
}

impl MassPair {
    pub fn new(air_dry_mass: f64, oven_dry_mass: f64) -> Self {
        Self {
            air_dry_mass,
            oven_dry_mass,
        }
    }

    /// Oven/air ratio, or `None` when the air dry mass is zero, missing or
    /// not a number.
    pub fn dry_ratio(&self) -> Option<f64> {
        if self.air_dry_mass > 0.0 && self.oven_dry_mass.is_finite() {
            Some(self.oven_dry_mass / self.air_dry_mass)
        } else {
            None
        }
    }
}

/// A named sample component ("Main", "Lid", ...) with its replicates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoistureComponent {
    pub name: String,
    #[serde(default = "blank_replicates")]
    pub replicates: Vec<MassPair>,
}

fn blank_replicates() -> Vec<MassPair> {
    vec![MassPair::default(), MassPair::default()]
}

impl MoistureComponent {
    pub fn new(name: impl Into<String>, replicates: Vec<MassPair>) -> Self {
        Self {
            name: name.into(),
            replicates,
        }
    }

    /// Blank component with two zeroed replicates, as the moisture form starts
    pub fn blank(name: impl Into<String>) -> Self {
        Self::new(name, blank_replicates())
    }
}
