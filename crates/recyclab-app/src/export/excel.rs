//! Excel export functionality

use log::info;
use recyclab_domain::model::MacrostickiesDataset;
use recyclab_domain::service::{LabReport, MacrostickiesTable};
use recyclab_types::{Error, Result, UNDEFINED_PLACEHOLDER};
use rust_xlsxwriter::{Format, Workbook, Worksheet, XlsxError};
use std::path::Path;

fn xlsx_err(e: XlsxError) -> Error {
    Error::Excel(e.to_string())
}

/// Export a lab report to an Excel file
pub fn export_to_excel(report: &LabReport, output_path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();

    write_summary_sheet(workbook.add_worksheet(), report)?;
    write_moisture_sheet(workbook.add_worksheet(), report)?;
    write_evaporation_sheet(workbook.add_worksheet(), report)?;
    write_macrostickies_sheet(
        workbook.add_worksheet(),
        MacrostickiesDataset::Area,
        &report.macrostickies_area,
    )?;
    write_macrostickies_sheet(
        workbook.add_worksheet(),
        MacrostickiesDataset::Number,
        &report.macrostickies_number,
    )?;

    workbook.save(output_path).map_err(xlsx_err)?;
    info!("exported report to {}", output_path.display());
    Ok(())
}

/// Number cell, or the placeholder when the value is undefined
fn write_optional(sheet: &mut Worksheet, row: u32, col: u16, value: Option<f64>) -> Result<()> {
    match value {
        Some(v) => sheet.write_number(row, col, v).map_err(xlsx_err)?,
        None => sheet
            .write_string(row, col, UNDEFINED_PLACEHOLDER)
            .map_err(xlsx_err)?,
    };
    Ok(())
}

fn write_summary_sheet(sheet: &mut Worksheet, report: &LabReport) -> Result<()> {
    sheet.set_name("Summary").map_err(xlsx_err)?;
    let header_format = Format::new().set_bold();

    sheet
        .write_string_with_format(0, 0, "Recyclability Laboratory Test", &header_format)
        .map_err(xlsx_err)?;

    let text_rows = [
        ("Sample Name:", report.info.sample_name.clone()),
        ("Order Number:", report.info.order_number.clone()),
        ("Date of Testing:", report.info.date_label()),
    ];
    for (idx, (label, value)) in text_rows.iter().enumerate() {
        let row = 2 + idx as u32;
        sheet.write_string(row, 0, *label).map_err(xlsx_err)?;
        sheet.write_string(row, 1, value).map_err(xlsx_err)?;
    }

    let numeric_rows = [
        ("Average Dry Content (%)", report.moisture.average_pct),
        (
            "Average Bone Dry Equivalent (g)",
            report.moisture.bone_dry_equivalent_g,
        ),
        ("Stock Consistency (%)", report.screens.stock_consistency_pct),
        ("Coarse Rejects (%)", Some(report.screens.coarse_reject_pct)),
        ("Fine Rejects (%)", Some(report.screens.fine_reject_pct)),
        ("Total Yield (%)", Some(report.yield_summary.total_yield_pct)),
    ];
    sheet
        .write_string_with_format(6, 0, "Results", &header_format)
        .map_err(xlsx_err)?;
    for (idx, (label, value)) in numeric_rows.iter().enumerate() {
        let row = 7 + idx as u32;
        sheet.write_string(row, 0, *label).map_err(xlsx_err)?;
        write_optional(sheet, row, 1, *value)?;
    }

    sheet.set_column_width(0, 34).map_err(xlsx_err)?;
    sheet.set_column_width(1, 20).map_err(xlsx_err)?;
    Ok(())
}

fn write_moisture_sheet(sheet: &mut Worksheet, report: &LabReport) -> Result<()> {
    sheet.set_name("Moisture").map_err(xlsx_err)?;
    let header_format = Format::new().set_bold();

    let slots = report
        .moisture
        .components
        .iter()
        .map(|c| c.result.per_replicate_pct.len())
        .max()
        .unwrap_or(0);

    sheet
        .write_string_with_format(0, 0, "Component", &header_format)
        .map_err(xlsx_err)?;
    for slot in 0..slots {
        sheet
            .write_string_with_format(
                0,
                1 + slot as u16,
                format!("Dry Content (%) {}", slot + 1),
                &header_format,
            )
            .map_err(xlsx_err)?;
    }
    let avg_col = 1 + slots as u16;
    sheet
        .write_string_with_format(0, avg_col, "Average (%)", &header_format)
        .map_err(xlsx_err)?;
    sheet
        .write_string_with_format(0, avg_col + 1, "Bone Dry Equivalent (g)", &header_format)
        .map_err(xlsx_err)?;

    for (idx, component) in report.moisture.components.iter().enumerate() {
        let row = 1 + idx as u32;
        sheet.write_string(row, 0, &component.name).map_err(xlsx_err)?;
        for slot in 0..slots {
            let pct = component.result.per_replicate_pct.get(slot).copied().flatten();
            write_optional(sheet, row, 1 + slot as u16, pct)?;
        }
        write_optional(sheet, row, avg_col, component.result.average_pct)?;
        write_optional(sheet, row, avg_col + 1, component.result.bone_dry_equivalent_g)?;
    }

    let total_row = 1 + report.moisture.components.len() as u32;
    sheet
        .write_string_with_format(total_row, 0, "All components", &header_format)
        .map_err(xlsx_err)?;
    write_optional(sheet, total_row, avg_col, report.moisture.average_pct)?;
    write_optional(sheet, total_row, avg_col + 1, report.moisture.bone_dry_equivalent_g)?;

    sheet.set_column_width(0, 20).map_err(xlsx_err)?;
    Ok(())
}

fn write_evaporation_sheet(sheet: &mut Worksheet, report: &LabReport) -> Result<()> {
    sheet.set_name("Evaporation").map_err(xlsx_err)?;
    let header_format = Format::new().set_bold();

    for (col, header) in ["Sample", "Residue (g)", "Evaporation Residue"]
        .iter()
        .enumerate()
    {
        sheet
            .write_string_with_format(0, col as u16, *header, &header_format)
            .map_err(xlsx_err)?;
    }
    for (idx, row) in report.evaporation.iter().enumerate() {
        let r = 1 + idx as u32;
        sheet.write_string(r, 0, row.role.label()).map_err(xlsx_err)?;
        sheet.write_number(r, 1, row.residue).map_err(xlsx_err)?;
        sheet
            .write_number(r, 2, row.evaporation_residue_ratio)
            .map_err(xlsx_err)?;
    }

    sheet.set_column_width(0, 14).map_err(xlsx_err)?;
    sheet.set_column_width(2, 20).map_err(xlsx_err)?;
    Ok(())
}

fn write_macrostickies_sheet(
    sheet: &mut Worksheet,
    dataset: MacrostickiesDataset,
    table: &MacrostickiesTable,
) -> Result<()> {
    let name = match dataset {
        MacrostickiesDataset::Area => "Macrostickies Area",
        MacrostickiesDataset::Number => "Macrostickies Number",
    };
    sheet.set_name(name).map_err(xlsx_err)?;
    let header_format = Format::new().set_bold();
    let number_format = Format::new().set_num_format("0.00");

    let headers = ["Set Number", "Screening 1", "Screening 2", "Mean", "Std Dev"];
    for (col, header) in headers.iter().enumerate() {
        sheet
            .write_string_with_format(0, col as u16, *header, &header_format)
            .map_err(xlsx_err)?;
    }

    let last = table.rows.len().saturating_sub(1);
    for (idx, row) in table.rows.iter().enumerate() {
        let r = 1 + idx as u32;
        if idx == last {
            sheet
                .write_string_with_format(r, 0, &row.size_class, &header_format)
                .map_err(xlsx_err)?;
        } else {
            sheet.write_string(r, 0, &row.size_class).map_err(xlsx_err)?;
        }
        let values = [row.screening_1, row.screening_2, row.mean, row.std_dev];
        for (col, value) in values.iter().enumerate() {
            sheet
                .write_number_with_format(r, 1 + col as u16, *value, &number_format)
                .map_err(xlsx_err)?;
        }
    }

    sheet.set_column_width(0, 20).map_err(xlsx_err)?;
    Ok(())
}
