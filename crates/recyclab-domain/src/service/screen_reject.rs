//! Stock consistency and coarse/fine reject calculation

use log::{debug, warn};
use recyclab_types::{Error, Result};
use serde::{Deserialize, Serialize};

use super::validation::{ensure_mass, ensure_number, ensure_reference, usable_divisor};
use crate::model::{ScreenMeasurement, ScreenRejectSettings, TarePolicy};

/// Non-fatal conditions the presentation layer should surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScreenWarning {
    /// Stock input mass is zero or missing
    StockConsistencyUndefined,
}

impl std::fmt::Display for ScreenWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScreenWarning::StockConsistencyUndefined => write!(
                f,
                "Input Weight is zero or missing - cannot calculate stock consistency."
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreenRejectResult {
    /// `None` when the stock input mass is zero or missing
    pub stock_consistency_pct: Option<f64>,
    pub coarse_reject_pct: f64,
    pub fine_reject_pct: f64,
    #[serde(default)]
    pub warnings: Vec<ScreenWarning>,
}

/// Stock consistency plus coarse and fine reject percentages.
///
/// Stock consistency is `(output - filter) / input * 100`. Rejects are
/// `(output - tin) / reference * 100`, with the tin mass treated according to
/// the per-screen [`TarePolicy`].
pub fn compute_screen_rejects(
    stock: &ScreenMeasurement,
    coarse: &ScreenMeasurement,
    fine: &ScreenMeasurement,
    settings: &ScreenRejectSettings,
) -> Result<ScreenRejectResult> {
    ensure_reference("coarse_reference_g", settings.coarse_reference_g)?;
    ensure_reference("fine_reference_g", settings.fine_reference_g)?;

    ensure_number("stock filter paper mass", stock.tin_or_filter_mass)?;
    ensure_mass("stock input mass", stock.input_mass)?;
    ensure_number("stock output mass", stock.output_mass)?;

    let mut warnings = Vec::new();
    let stock_consistency_pct = match usable_divisor(stock.input_mass) {
        Some(input) => Some((stock.output_mass - stock.tin_or_filter_mass) / input * 100.0),
        None => {
            warn!("stock input mass is zero or missing; stock consistency undefined");
            warnings.push(ScreenWarning::StockConsistencyUndefined);
            None
        }
    };

    let coarse_reject = reject_mass("coarse", coarse, settings.coarse_tare_policy)?;
    let fine_reject = reject_mass("fine", fine, settings.fine_tare_policy)?;

    Ok(ScreenRejectResult {
        stock_consistency_pct,
        coarse_reject_pct: coarse_reject / settings.coarse_reference_g * 100.0,
        fine_reject_pct: fine_reject / settings.fine_reference_g * 100.0,
        warnings,
    })
}

fn reject_mass(screen: &str, m: &ScreenMeasurement, policy: TarePolicy) -> Result<f64> {
    let tin_field = format!("{} tin mass", screen);
    let output_field = format!("{} output mass", screen);
    ensure_mass(&tin_field, m.tin_or_filter_mass)?;
    ensure_mass(&output_field, m.output_mass)?;

    match policy {
        TarePolicy::ZeroMeansMissing => match usable_divisor(m.tin_or_filter_mass) {
            Some(tin) => {
                ensure_number(&output_field, m.output_mass)?;
                Ok(m.output_mass - tin)
            }
            None => {
                debug!("{} tin mass is zero or missing; reject counted as 0", screen);
                Ok(0.0)
            }
        },
        TarePolicy::AlwaysSubtract => {
            if m.tin_or_filter_mass.is_nan() {
                return Err(Error::invalid_input(tin_field, "value is not a number"));
            }
            ensure_number(&output_field, m.output_mass)?;
            Ok(m.output_mass - m.tin_or_filter_mass)
        }
    }
}
