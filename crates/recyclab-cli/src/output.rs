//! Output formatting module

use recyclab_domain::model::MacrostickiesDataset;
use recyclab_domain::service::{
    generate_lab_report, render_macrostickies_table, LabReport, MacrostickiesTable, YieldSummary,
};
use recyclab_types::{OutputFormat, Result};

pub fn output_report(output_format: OutputFormat, report: &LabReport) -> Result<()> {
    match output_format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(report)?),
        OutputFormat::Table => println!("{}", generate_lab_report(report)),
    }
    Ok(())
}

pub fn output_macrostickies(
    output_format: OutputFormat,
    dataset: MacrostickiesDataset,
    table: &MacrostickiesTable,
) -> Result<()> {
    match output_format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(table)?),
        OutputFormat::Table => println!("{}", render_macrostickies_table(dataset, table)),
    }
    Ok(())
}

pub fn output_yield(output_format: OutputFormat, summary: &YieldSummary) -> Result<()> {
    match output_format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(summary)?),
        OutputFormat::Table => {
            println!("\nTotal Yield");
            println!("===========");
            println!("Coarse rejects:  {:.2} %", summary.coarse_reject_pct);
            println!("Fine rejects:    {:.2} %", summary.fine_reject_pct);
            println!("Total yield:     {:.2} %", summary.total_yield_pct);
        }
    }
    Ok(())
}
