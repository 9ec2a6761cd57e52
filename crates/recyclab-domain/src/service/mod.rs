//! Domain services

pub mod evaporation;
pub mod lab_report;
pub mod macrostickies;
pub mod moisture;
pub mod screen_reject;
mod validation;
pub mod yield_summary;

pub use evaporation::{compute_evaporation_table, EvaporationRow};
pub use lab_report::{evaluate_sheet, generate_lab_report, LabReport};
pub use macrostickies::{
    compute_macrostickies_table, reconcile_macrostickies_rows, render_macrostickies_table,
    MacrostickiesResultRow, MacrostickiesTable,
};
pub use moisture::{
    compute_moisture, compute_moisture_table, ComponentMoisture, MoistureResult,
    MoistureTableResult,
};
pub use screen_reject::{compute_screen_rejects, ScreenRejectResult, ScreenWarning};
pub use yield_summary::{compute_total_yield, YieldSummary};
