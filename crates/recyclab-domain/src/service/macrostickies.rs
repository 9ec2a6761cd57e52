//! Macrostickies statistics per size class
//!
//! Each data row gets the mean and sample standard deviation of its two
//! screenings, both rounded to 2 decimals. The last row is always a computed
//! total: screening columns hold the exact column sums, while the mean and
//! standard deviation cells hold the sum of the rows' already rounded cells
//! (not statistics recomputed over the raw data).

use log::debug;
use recyclab_types::{round_to, Result};
use serde::{Deserialize, Serialize};

use super::validation::ensure_number;
use crate::model::macrostickies::is_total_label;
use crate::model::{MacrostickiesDataset, MacrostickiesRow, SizeClass, TOTAL_SIZE_LABEL};

const DECIMALS: i32 = 2;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MacrostickiesResultRow {
    pub size_class: String,
    pub screening_1: f64,
    pub screening_2: f64,
    pub mean: f64,
    pub std_dev: f64,
}

/// Data rows followed by exactly one total row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MacrostickiesTable {
    pub rows: Vec<MacrostickiesResultRow>,
}

impl MacrostickiesTable {
    pub fn data_rows(&self) -> &[MacrostickiesResultRow] {
        &self.rows[..self.rows.len().saturating_sub(1)]
    }

    pub fn total(&self) -> Option<&MacrostickiesResultRow> {
        self.rows.last()
    }
}

fn row_stats(index: usize, row: &MacrostickiesRow) -> Result<MacrostickiesResultRow> {
    let field = |column: &str| format!("macrostickies[{}] ({}) {}", index, row.size_class, column);
    ensure_number(&field("screening_1"), row.screening_1)?;
    ensure_number(&field("screening_2"), row.screening_2)?;

    let mean = (row.screening_1 + row.screening_2) / 2.0;
    // sample standard deviation (N - 1 = 1) of two values
    let std_dev = (row.screening_1 - row.screening_2).abs() / std::f64::consts::SQRT_2;

    Ok(MacrostickiesResultRow {
        size_class: row.size_class.clone(),
        screening_1: row.screening_1,
        screening_2: row.screening_2,
        mean: round_to(mean, DECIMALS),
        std_dev: round_to(std_dev, DECIMALS),
    })
}

fn total_row(rows: &[MacrostickiesResultRow]) -> MacrostickiesResultRow {
    let sum = |f: fn(&MacrostickiesResultRow) -> f64| rows.iter().map(f).sum::<f64>();
    MacrostickiesResultRow {
        size_class: TOTAL_SIZE_LABEL.to_string(),
        screening_1: sum(|r| r.screening_1),
        screening_2: sum(|r| r.screening_2),
        mean: round_to(sum(|r| r.mean), DECIMALS),
        std_dev: round_to(sum(|r| r.std_dev), DECIMALS),
    }
}

/// Mean/std-dev columns for every data row plus the appended total row.
///
/// Any number of data rows is accepted; the form normally has one per
/// [`SizeClass`]. Negative or non-numeric screenings are rejected.
pub fn compute_macrostickies_table(rows: &[MacrostickiesRow]) -> Result<MacrostickiesTable> {
    if rows.len() != SizeClass::ALL.len() {
        debug!(
            "macrostickies table has {} data rows (expected {})",
            rows.len(),
            SizeClass::ALL.len()
        );
    }
    let mut computed = rows
        .iter()
        .enumerate()
        .map(|(idx, row)| row_stats(idx, row))
        .collect::<Result<Vec<_>>>()?;
    let total = total_row(&computed);
    computed.push(total);
    Ok(MacrostickiesTable { rows: computed })
}

/// Rebuild a table after an edit of the full grid.
///
/// The last position is the total slot: whatever it holds is discarded and
/// replaced by a freshly computed total over the rows before it, however many
/// rows were added or removed.
pub fn reconcile_macrostickies_rows(edited: &[MacrostickiesRow]) -> Result<MacrostickiesTable> {
    let data = match edited.split_last() {
        Some((last, rest)) => {
            if !is_total_label(&last.size_class) {
                debug!(
                    "overwriting last macrostickies row '{}' with the total",
                    last.size_class
                );
            }
            rest
        }
        None => edited,
    };
    compute_macrostickies_table(data)
}

/// Fixed-width text rendering of a computed table
pub fn render_macrostickies_table(
    dataset: MacrostickiesDataset,
    table: &MacrostickiesTable,
) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", dataset.label()));
    out.push_str(&"-".repeat(66));
    out.push('\n');
    out.push_str(&format!(
        "{:<18} {:>11} {:>11} {:>11} {:>11}\n",
        "Set Number", "Screening 1", "Screening 2", "Mean", "Std Dev"
    ));
    out.push_str(&"-".repeat(66));
    out.push('\n');
    for (idx, row) in table.rows.iter().enumerate() {
        if idx + 1 == table.rows.len() {
            out.push_str(&"-".repeat(66));
            out.push('\n');
        }
        out.push_str(&format!(
            "{:<18} {:>11.2} {:>11.2} {:>11.2} {:>11.2}\n",
            row.size_class, row.screening_1, row.screening_2, row.mean, row.std_dev
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use recyclab_types::Error;

    fn filled_rows() -> Vec<MacrostickiesRow> {
        SizeClass::ALL
            .iter()
            .enumerate()
            .map(|(i, c)| MacrostickiesRow::new(c.label(), i as f64 * 1.5, i as f64 * 2.25 + 0.1))
            .collect()
    }

    #[test]
    fn test_known_pair() {
        let table =
            compute_macrostickies_table(&[MacrostickiesRow::new("150 - 200 µm", 10.0, 20.0)])
                .unwrap();
        assert!((table.rows[0].mean - 15.00).abs() < 1e-12);
        assert!((table.rows[0].std_dev - 7.07).abs() < 1e-12);
    }

    #[test]
    fn test_fifteen_rows_with_total_last() {
        let table = compute_macrostickies_table(&MacrostickiesRow::blank_rows()).unwrap();
        assert_eq!(table.rows.len(), 15);
        assert_eq!(table.data_rows().len(), 14);
        let total = table.total().unwrap();
        assert_eq!(total.size_class, TOTAL_SIZE_LABEL);
        assert_eq!(total.screening_1, 0.0);
        assert_eq!(total.screening_2, 0.0);
        assert_eq!(total.mean, 0.0);
        assert_eq!(total.std_dev, 0.0);
    }

    #[test]
    fn test_total_screenings_are_exact_sums() {
        let rows = filled_rows();
        let table = compute_macrostickies_table(&rows).unwrap();
        let total = table.total().unwrap();
        let s1: f64 = rows.iter().map(|r| r.screening_1).sum();
        let s2: f64 = rows.iter().map(|r| r.screening_2).sum();
        assert_eq!(total.screening_1, s1);
        assert_eq!(total.screening_2, s2);
    }

    #[test]
    fn test_total_stats_sum_rounded_cells() {
        let rows = vec![
            MacrostickiesRow::new("150 - 200 µm", 1.0, 2.0),
            MacrostickiesRow::new("200 - 300 µm", 1.0, 2.0),
            MacrostickiesRow::new("300 - 400 µm", 1.0, 2.0),
        ];
        let table = compute_macrostickies_table(&rows).unwrap();
        // each row: 1/sqrt(2) = 0.7071 -> 0.71; the total sums rounded cells
        assert!((table.total().unwrap().std_dev - 2.13).abs() < 1e-12);
        assert!((table.total().unwrap().mean - 4.5).abs() < 1e-12);
    }

    #[test]
    fn test_large_disparity() {
        let table =
            compute_macrostickies_table(&[MacrostickiesRow::new("50000 - 200000µm", 0.0, 1000.0)])
                .unwrap();
        assert!((table.rows[0].mean - 500.0).abs() < 1e-12);
        assert!((table.rows[0].std_dev - 707.11).abs() < 1e-9);
    }

    #[test]
    fn test_negative_count_rejected() {
        let err = compute_macrostickies_table(&[MacrostickiesRow::new("150 - 200 µm", -1.0, 2.0)])
            .unwrap_err();
        assert!(matches!(err, Error::InvalidInput { .. }));
    }

    #[test]
    fn test_reconcile_overwrites_last_row() {
        let mut edited = MacrostickiesRow::blank_rows();
        edited[0].screening_1 = 4.0;
        edited[0].screening_2 = 6.0;
        edited.push(MacrostickiesRow::new(TOTAL_SIZE_LABEL, 999.0, 999.0));
        let table = reconcile_macrostickies_rows(&edited).unwrap();
        assert_eq!(table.rows.len(), 15);
        let total = table.total().unwrap();
        assert_eq!(total.screening_1, 4.0);
        assert_eq!(total.screening_2, 6.0);
        assert!((total.mean - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_reconcile_with_added_rows() {
        let mut edited = MacrostickiesRow::blank_rows();
        edited.push(MacrostickiesRow::new("extra", 3.0, 3.0));
        edited.push(MacrostickiesRow::new("whatever was here", 50.0, 50.0));
        let table = reconcile_macrostickies_rows(&edited).unwrap();
        assert_eq!(table.rows.len(), 16);
        assert_eq!(table.total().unwrap().screening_1, 3.0);
        assert_eq!(table.total().unwrap().size_class, TOTAL_SIZE_LABEL);
    }

    #[test]
    fn test_reconcile_empty_grid() {
        let table = reconcile_macrostickies_rows(&[]).unwrap();
        assert_eq!(table.rows.len(), 1);
        assert_eq!(table.total().unwrap().screening_1, 0.0);
    }

    #[test]
    fn test_render_contains_rows() {
        let table =
            compute_macrostickies_table(&[MacrostickiesRow::new("150 - 200 µm", 10.0, 20.0)])
                .unwrap();
        let text = render_macrostickies_table(MacrostickiesDataset::Area, &table);
        assert!(text.contains("Macrostickies AREA Data"));
        assert!(text.contains("7.07"));
        assert!(text.contains(TOTAL_SIZE_LABEL));
    }
}
