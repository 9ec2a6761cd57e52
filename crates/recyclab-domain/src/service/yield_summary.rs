//! Total yield after screening

use serde::{Deserialize, Serialize};

/// Percentage of the sample left after coarse and fine rejects.
///
/// Not clamped: inconsistent inputs can give a negative yield or one above 100.
pub fn compute_total_yield(coarse_reject_pct: f64, fine_reject_pct: f64) -> f64 {
    100.0 - coarse_reject_pct - fine_reject_pct
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YieldSummary {
    pub coarse_reject_pct: f64,
    pub fine_reject_pct: f64,
    pub total_yield_pct: f64,
}

impl YieldSummary {
    pub fn from_rejects(coarse_reject_pct: f64, fine_reject_pct: f64) -> Self {
        Self {
            coarse_reject_pct,
            fine_reject_pct,
            total_yield_pct: compute_total_yield(coarse_reject_pct, fine_reject_pct),
        }
    }
}
