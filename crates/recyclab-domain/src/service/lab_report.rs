//! Whole-sheet evaluation and text report

use log::debug;
use recyclab_types::{format_optional, Result};
use serde::{Deserialize, Serialize};

use super::evaporation::{compute_evaporation_table, EvaporationRow};
use super::macrostickies::{
    compute_macrostickies_table, render_macrostickies_table, MacrostickiesTable,
};
use super::moisture::{compute_moisture_table, MoistureTableResult};
use super::screen_reject::{compute_screen_rejects, ScreenRejectResult};
use super::yield_summary::YieldSummary;
use crate::model::macrostickies::is_total_label;
use crate::model::{
    CalculationSettings, LabSheet, MacrostickiesDataset, MacrostickiesRow, SampleInfo,
};

/// Every derived figure of one sample
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabReport {
    pub info: SampleInfo,
    pub settings: CalculationSettings,
    pub moisture: MoistureTableResult,
    pub evaporation: Vec<EvaporationRow>,
    pub screens: ScreenRejectResult,
    pub yield_summary: YieldSummary,
    pub macrostickies_area: MacrostickiesTable,
    pub macrostickies_number: MacrostickiesTable,
}

/// Sheet grids may carry the total slot the form displays; it is always recomputed.
fn sheet_data_rows(
    dataset: MacrostickiesDataset,
    rows: &[MacrostickiesRow],
) -> Vec<MacrostickiesRow> {
    rows.iter()
        .filter(|row| {
            let total = is_total_label(&row.size_class);
            if total {
                debug!("ignoring entered total row in {}", dataset.label());
            }
            !total
        })
        .cloned()
        .collect()
}

/// Run every calculator over one sheet
pub fn evaluate_sheet(sheet: &LabSheet, settings: &CalculationSettings) -> Result<LabReport> {
    debug!("evaluating sheet '{}'", sheet.info.sample_name);

    let moisture = compute_moisture_table(&sheet.moisture, settings.bone_dry_reference_g)?;
    let evaporation = compute_evaporation_table(&sheet.evaporation)?;
    let screens = compute_screen_rejects(
        &sheet.screens.stock,
        &sheet.screens.coarse,
        &sheet.screens.fine,
        &settings.screen,
    )?;
    let yield_summary = YieldSummary::from_rejects(screens.coarse_reject_pct, screens.fine_reject_pct);
    let macrostickies_area = compute_macrostickies_table(&sheet_data_rows(
        MacrostickiesDataset::Area,
        &sheet.macrostickies.area,
    ))?;
    let macrostickies_number = compute_macrostickies_table(&sheet_data_rows(
        MacrostickiesDataset::Number,
        &sheet.macrostickies.number,
    ))?;

    Ok(LabReport {
        info: sheet.info.clone(),
        settings: *settings,
        moisture,
        evaporation,
        screens,
        yield_summary,
        macrostickies_area,
        macrostickies_number,
    })
}

fn section(report: &mut String, title: &str) {
    report.push_str(&format!("【{}】\n", title));
}

pub fn generate_lab_report(report: &LabReport) -> String {
    let mut out = String::new();
    out.push_str("==================================================\n");
    out.push_str("          Recyclability Laboratory Test           \n");
    out.push_str("==================================================\n\n");

    section(&mut out, "Overview");
    out.push_str(&format!("  Sample Name:      {}\n", report.info.sample_name));
    out.push_str(&format!("  Order Number:     {}\n", report.info.order_number));
    out.push_str(&format!("  Date of Testing:  {}\n\n", report.info.date_label()));

    section(&mut out, "Dry Content & Sample Prep");
    out.push_str(&format!("  {:<16}", "Component"));
    let slots = report
        .moisture
        .components
        .iter()
        .map(|c| c.result.per_replicate_pct.len())
        .max()
        .unwrap_or(0);
    for slot in 1..=slots {
        out.push_str(&format!(" {:>12}", format!("Test {} (%)", slot)));
    }
    out.push('\n');
    for component in &report.moisture.components {
        out.push_str(&format!("  {:<16}", component.name));
        for slot in 0..slots {
            let pct = component.result.per_replicate_pct.get(slot).copied().flatten();
            out.push_str(&format!(" {:>12}", format_optional(pct, 2)));
        }
        out.push('\n');
    }
    let average = report
        .moisture
        .average_pct
        .map(|v| format!("{:.2}%", v))
        .unwrap_or_else(|| format_optional(None, 2));
    out.push_str(&format!("  Average Dry Content (%):               {}\n", average));
    out.push_str(&format!(
        "  Average {}g Bone Dry Equivalent (g):   {}\n\n",
        report.settings.bone_dry_reference_g,
        format_optional(report.moisture.bone_dry_equivalent_g, 2)
    ));

    section(&mut out, "Filtrate Analysis");
    out.push_str(&format!(
        "  {:<12} {:>12} {:>20}\n",
        "Sample", "Residue (g)", "Evaporation Residue"
    ));
    for row in &report.evaporation {
        out.push_str(&format!(
            "  {:<12} {:>12.4} {:>20.4}\n",
            row.role.label(),
            row.residue,
            row.evaporation_residue_ratio
        ));
    }
    out.push('\n');

    section(&mut out, "Coarse Screen");
    match report.screens.stock_consistency_pct {
        Some(v) => out.push_str(&format!("  Stock Consistency: {:.2} %\n", v)),
        None => out.push_str(&format!(
            "  Stock Consistency: {}\n",
            format_optional(None, 2)
        )),
    }
    for warning in &report.screens.warnings {
        out.push_str(&format!("  Warning: {}\n", warning));
    }
    out.push_str(&format!(
        "  Coarse: {:.2} %\n\n",
        report.screens.coarse_reject_pct
    ));

    section(&mut out, "Fine Screen");
    out.push_str(&format!("  Fine: {:.2} %\n\n", report.screens.fine_reject_pct));

    section(&mut out, "Total Yield");
    out.push_str(&format!(
        "  100 - {:.2} - {:.2} = {:.2} %\n\n",
        report.yield_summary.coarse_reject_pct,
        report.yield_summary.fine_reject_pct,
        report.yield_summary.total_yield_pct
    ));

    section(&mut out, "Macrostickies");
    out.push_str(&render_macrostickies_table(
        MacrostickiesDataset::Area,
        &report.macrostickies_area,
    ));
    out.push('\n');
    out.push_str(&render_macrostickies_table(
        MacrostickiesDataset::Number,
        &report.macrostickies_number,
    ));

    out.push_str("==================================================\n");
    out
}
