//! Evaluation Service - runs the lab calculation engine on stored inputs
//!
//! 1. Load the sheet or pasted screening data
//! 2. Apply the configured reference masses and zero policies
//! 3. Run the calculators
//! 4. Surface non-fatal warnings through the log

use log::{info, warn};
use recyclab_domain::model::{CalculationSettings, LabSheet};
use recyclab_domain::service::{
    compute_macrostickies_table, evaluate_sheet, LabReport, MacrostickiesTable,
};
use recyclab_infra::macrostickies_paste::load_screening_file;
use recyclab_infra::sheet_loader::load_sheet;
use recyclab_types::Result;
use std::path::Path;

use crate::config::Config;

#[derive(Debug, Clone, Copy, Default)]
pub struct EvaluationService {
    settings: CalculationSettings,
}

impl EvaluationService {
    pub fn new(config: &Config) -> Self {
        Self::with_settings(config.calculation_settings())
    }

    pub fn with_settings(settings: CalculationSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &CalculationSettings {
        &self.settings
    }

    /// Evaluate an in-memory sheet
    pub fn evaluate(&self, sheet: &LabSheet) -> Result<LabReport> {
        let report = evaluate_sheet(sheet, &self.settings)?;
        for warning in &report.screens.warnings {
            warn!("{}: {}", sheet.info.sample_name, warning);
        }
        info!(
            "evaluated '{}': total yield {:.2} %",
            report.info.sample_name, report.yield_summary.total_yield_pct
        );
        Ok(report)
    }

    /// Load a TOML/JSON sheet and evaluate it
    pub fn evaluate_file(&self, path: &Path) -> Result<LabReport> {
        let sheet = load_sheet(path)?;
        self.evaluate(&sheet)
    }

    /// Statistics table for screening data pasted into a file
    pub fn macrostickies_from_file(&self, path: &Path) -> Result<MacrostickiesTable> {
        let rows = load_screening_file(path)?;
        compute_macrostickies_table(&rows)
    }
}
