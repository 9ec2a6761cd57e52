//! Filtrate/water evaporation residue calculation

use log::debug;
use recyclab_types::{round_to, Result};
use serde::{Deserialize, Serialize};

use super::validation::{ensure_mass, ensure_number, usable_divisor};
use crate::model::{EvaporationRole, EvaporationSet};

const DECIMALS: i32 = 4;

/// One row of the evaporation table, rounded to 4 decimals
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EvaporationRow {
    pub role: EvaporationRole,
    /// Tin mass minus output mass (g); may be negative
    pub residue: f64,
    /// Residue per gram of input sample
    pub evaporation_residue_ratio: f64,
}

/// Residue and residue ratio for the four fixed sample slots, in table order.
///
/// A zero or missing input mass yields a ratio of exactly 0 rather than an
/// undefined value.
pub fn compute_evaporation_table(samples: &EvaporationSet) -> Result<Vec<EvaporationRow>> {
    EvaporationRole::ORDER
        .iter()
        .map(|&role| -> Result<EvaporationRow> {
            let sample = samples.get(role);
            let prefix = role.label();
            ensure_number(&format!("{} tin mass", prefix), sample.tin_mass)?;
            ensure_mass(&format!("{} input mass", prefix), sample.input_mass)?;
            ensure_number(&format!("{} output mass", prefix), sample.output_mass)?;

            let residue = sample.tin_mass - sample.output_mass;
            let ratio = match usable_divisor(sample.input_mass) {
                Some(input) => residue / input,
                None => {
                    debug!("{}: no input mass, evaporation residue set to 0", prefix);
                    0.0
                }
            };

            Ok(EvaporationRow {
                role,
                residue: round_to(residue, DECIMALS),
                evaporation_residue_ratio: round_to(ratio, DECIMALS),
            })
        })
        .collect()
}
