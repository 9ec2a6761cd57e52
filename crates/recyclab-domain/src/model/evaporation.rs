//! Filtrate and water evaporation samples

use serde::{Deserialize, Serialize};

/// The four fixed evaporation sample slots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvaporationRole {
    Filtrate1,
    Filtrate2,
    Water1,
    Water2,
}

impl EvaporationRole {
    /// Display order of the evaporation table
    pub const ORDER: [EvaporationRole; 4] = [
        EvaporationRole::Filtrate1,
        EvaporationRole::Filtrate2,
        EvaporationRole::Water1,
        EvaporationRole::Water2,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            EvaporationRole::Filtrate1 => "Filtrate 1",
            EvaporationRole::Filtrate2 => "Filtrate 2",
            EvaporationRole::Water1 => "Water 1",
            EvaporationRole::Water2 => "Water 2",
        }
    }
}

impl std::fmt::Display for EvaporationRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Tin, input and output weighings of one evaporation sample (g)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EvaporationSample {
    #[serde(default)]
    pub tin_mass: f64,
    #[serde(default)]
    pub input_mass: f64,
    #[serde(default)]
    pub output_mass: f64,
}

impl EvaporationSample {
    pub fn new(tin_mass: f64, input_mass: f64, output_mass: f64) -> Self {
        Self {
            tin_mass,
            input_mass,
            output_mass,
        }
    }
}

/// One sample per fixed role
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EvaporationSet {
    #[serde(default)]
    pub filtrate_1: EvaporationSample,
    #[serde(default)]
    pub filtrate_2: EvaporationSample,
    #[serde(default)]
    pub water_1: EvaporationSample,
    #[serde(default)]
    pub water_2: EvaporationSample,
}

impl EvaporationSet {
    pub fn get(&self, role: EvaporationRole) -> &EvaporationSample {
        match role {
            EvaporationRole::Filtrate1 => &self.filtrate_1,
            EvaporationRole::Filtrate2 => &self.filtrate_2,
            EvaporationRole::Water1 => &self.water_1,
            EvaporationRole::Water2 => &self.water_2,
        }
    }
}
