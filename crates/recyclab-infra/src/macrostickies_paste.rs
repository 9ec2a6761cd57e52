//! Pasted macrostickies screening data
//!
//! Accepts what a technician copies out of the image-analysis export or a
//! spreadsheet: comma, semicolon or tab separated, with or without a header
//! line. Rows are either `label, screening 1, screening 2` or just the two
//! screenings, in which case labels follow the fixed size-class order.
//!
//! A row labelled as the total (or the 15th unlabelled row) is the total
//! slot and is dropped; the engine recomputes it.

use csv::{ReaderBuilder, StringRecord, Trim};
use log::{debug, info};
use recyclab_domain::model::macrostickies::is_total_label;
use recyclab_domain::model::{MacrostickiesRow, SizeClass};
use recyclab_types::{Error, Result};
use std::fs;
use std::path::Path;

fn detect_delimiter(text: &str) -> u8 {
    if text.contains('\t') {
        b'\t'
    } else if text.contains(';') {
        b';'
    } else {
        b','
    }
}

fn parse_number(raw: &str, delimiter: u8) -> Option<f64> {
    let cleaned = if delimiter == b',' {
        raw.trim().to_string()
    } else {
        // decimal comma is only unambiguous when comma is not the delimiter
        raw.trim().replace(',', ".")
    };
    if cleaned.is_empty() {
        return Some(0.0);
    }
    cleaned.parse().ok()
}

enum PastedRow {
    Labelled(MacrostickiesRow),
    Unlabelled(f64, f64),
}

fn parse_record(record: &StringRecord, delimiter: u8) -> Option<PastedRow> {
    let fields: Vec<&str> = record.iter().collect();
    match fields.as_slice() {
        [s1, s2] => Some(PastedRow::Unlabelled(
            parse_number(s1, delimiter)?,
            parse_number(s2, delimiter)?,
        )),
        [label, s1, s2, ..] => Some(PastedRow::Labelled(MacrostickiesRow::new(
            label.trim(),
            parse_number(s1, delimiter)?,
            parse_number(s2, delimiter)?,
        ))),
        _ => None,
    }
}

/// Parse pasted screening data into data rows (total row excluded)
pub fn parse_screening_paste(text: &str) -> Result<Vec<MacrostickiesRow>> {
    let delimiter = detect_delimiter(text);
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .delimiter(delimiter)
        .from_reader(text.as_bytes());

    let mut rows = Vec::new();
    let mut unlabelled = 0usize;
    let mut first = true;

    for record in reader.records() {
        let record = record?;
        if record.iter().all(|f| f.is_empty()) {
            continue;
        }
        let line = record.position().map(|p| p.line()).unwrap_or(0);
        let is_first = std::mem::replace(&mut first, false);

        let parsed = match parse_record(&record, delimiter) {
            Some(parsed) => parsed,
            None if is_first => {
                debug!("skipping header line {}", line);
                continue;
            }
            None => {
                return Err(Error::invalid_input(
                    format!("pasted screening data line {}", line),
                    "expected `label, screening 1, screening 2` or `screening 1, screening 2`",
                ))
            }
        };

        match parsed {
            PastedRow::Labelled(row) => {
                if is_total_label(&row.size_class) {
                    debug!("dropping pasted total row at line {}", line);
                    continue;
                }
                rows.push(row);
            }
            PastedRow::Unlabelled(s1, s2) => {
                match SizeClass::ALL.get(unlabelled) {
                    Some(class) => rows.push(MacrostickiesRow::new(class.label(), s1, s2)),
                    None if unlabelled == SizeClass::ALL.len() => {
                        debug!("dropping unlabelled total slot at line {}", line);
                    }
                    None => {
                        return Err(Error::invalid_input(
                            format!("pasted screening data line {}", line),
                            format!(
                                "more than {} unlabelled rows; add size-class labels",
                                SizeClass::ALL.len() + 1
                            ),
                        ))
                    }
                }
                unlabelled += 1;
            }
        }
    }

    Ok(rows)
}

/// Load pasted screening data saved to a file
pub fn load_screening_file(path: &Path) -> Result<Vec<MacrostickiesRow>> {
    if !path.exists() {
        return Err(Error::FileNotFound(format!(
            "Screening data file not found: {}",
            path.display()
        )));
    }
    let content = fs::read_to_string(path)?;
    let rows = parse_screening_paste(&content)?;
    info!("loaded {} screening rows from {}", rows.len(), path.display());
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labelled_tab_separated_with_header() {
        let text = "Set Number\tScreening 1\tScreening 2\n\
                    150 - 200 µm\t10\t20\n\
                    200 - 300 µm\t1,5\t2,5\n\
                    150 - 200000µm\t11,5\t22,5\n";
        let rows = parse_screening_paste(text).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].size_class, "150 - 200 µm");
        assert_eq!(rows[0].screening_2, 20.0);
        assert_eq!(rows[1].screening_1, 1.5);
    }

    #[test]
    fn test_unlabelled_rows_follow_size_classes() {
        let text = "1.0,2.0\n3.0,4.0\n";
        let rows = parse_screening_paste(text).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].size_class, SizeClass::ALL[0].label());
        assert_eq!(rows[1].size_class, SizeClass::ALL[1].label());
        assert_eq!(rows[1].screening_2, 4.0);
    }

    #[test]
    fn test_fifteenth_unlabelled_row_is_total_slot() {
        let text: String = (0..15).map(|i| format!("{};{}\n", i, i)).collect();
        let rows = parse_screening_paste(&text).unwrap();
        assert_eq!(rows.len(), 14);
        assert_eq!(rows[13].screening_1, 13.0);
    }

    #[test]
    fn test_too_many_unlabelled_rows() {
        let text: String = (0..16).map(|i| format!("{},{}\n", i, i)).collect();
        assert!(parse_screening_paste(&text).is_err());
    }

    #[test]
    fn test_blank_cells_are_zero() {
        let rows = parse_screening_paste("150 - 200 µm,,3\n").unwrap();
        assert_eq!(rows[0].screening_1, 0.0);
        assert_eq!(rows[0].screening_2, 3.0);
    }

    #[test]
    fn test_garbage_after_first_line_rejected() {
        let err = parse_screening_paste("1,2\nabc\n").unwrap_err();
        assert!(err.to_string().contains("line 2"));
    }

    #[test]
    fn test_skips_empty_lines() {
        let rows = parse_screening_paste("\n1,2\n\n3,4\n").unwrap();
        assert_eq!(rows.len(), 2);
    }
}
