//! Everything one sample's lab forms capture

use serde::{Deserialize, Serialize};

use super::evaporation::EvaporationSet;
use super::macrostickies::MacrostickiesRow;
use super::moisture::MoistureComponent;
use super::sample::SampleInfo;
use super::screen::ScreenSet;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MacrostickiesSet {
    #[serde(default = "MacrostickiesRow::blank_rows")]
    pub area: Vec<MacrostickiesRow>,
    #[serde(default = "MacrostickiesRow::blank_rows")]
    pub number: Vec<MacrostickiesRow>,
}

impl Default for MacrostickiesSet {
    fn default() -> Self {
        Self {
            area: MacrostickiesRow::blank_rows(),
            number: MacrostickiesRow::blank_rows(),
        }
    }
}

/// Measurement sheet of a single sample
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LabSheet {
    #[serde(default)]
    pub info: SampleInfo,
    #[serde(default)]
    pub evaporation: EvaporationSet,
    #[serde(default)]
    pub screens: ScreenSet,
    #[serde(default)]
    pub moisture: Vec<MoistureComponent>,
    #[serde(default)]
    pub macrostickies: MacrostickiesSet,
}

impl LabSheet {
    /// Blank sheet matching the initial state of the forms
    pub fn template() -> Self {
        Self {
            moisture: vec![MoistureComponent::blank("Main")],
            ..Default::default()
        }
    }
}
