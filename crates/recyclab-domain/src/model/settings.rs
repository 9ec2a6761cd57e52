//! Reference masses and per-field zero policies used by the calculators

use serde::{Deserialize, Serialize};

use super::screen::TarePolicy;

/// Nominal sample mass the bone-dry equivalent is scaled to (g)
pub const BONE_DRY_REFERENCE_G: f64 = 50.0;
/// Sample mass put over the coarse screen (g)
pub const COARSE_REFERENCE_G: f64 = 50.0;
/// Sample mass put over the fine screen (g)
pub const FINE_REFERENCE_G: f64 = 20.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScreenRejectSettings {
    pub coarse_reference_g: f64,
    pub fine_reference_g: f64,
    pub coarse_tare_policy: TarePolicy,
    pub fine_tare_policy: TarePolicy,
}

impl Default for ScreenRejectSettings {
    fn default() -> Self {
        Self {
            coarse_reference_g: COARSE_REFERENCE_G,
            fine_reference_g: FINE_REFERENCE_G,
            coarse_tare_policy: TarePolicy::ZeroMeansMissing,
            fine_tare_policy: TarePolicy::AlwaysSubtract,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalculationSettings {
    pub bone_dry_reference_g: f64,
    pub screen: ScreenRejectSettings,
}

impl Default for CalculationSettings {
    fn default() -> Self {
        Self {
            bone_dry_reference_g: BONE_DRY_REFERENCE_G,
            screen: ScreenRejectSettings::default(),
        }
    }
}
