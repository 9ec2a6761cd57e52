//! Sample overview data

use chrono::NaiveDate;
use recyclab_types::UNDEFINED_PLACEHOLDER;
use serde::{Deserialize, Serialize};

/// Identification of the tested sample
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SampleInfo {
    #[serde(default)]
    pub sample_name: String,
    #[serde(default)]
    pub order_number: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_tested: Option<NaiveDate>,
}

impl SampleInfo {
    /// Date of testing as DD-MM-YYYY
    pub fn date_label(&self) -> String {
        self.date_tested
            .map(|d| d.format("%d-%m-%Y").to_string())
            .unwrap_or_else(|| UNDEFINED_PLACEHOLDER.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_label_format() {
        let info = SampleInfo {
            sample_name: "Cup A".to_string(),
            order_number: "ORD-7".to_string(),
            date_tested: NaiveDate::from_ymd_opt(2024, 3, 5),
        };
        assert_eq!(info.date_label(), "05-03-2024");
    }

    #[test]
    fn test_missing_date_label() {
        assert_eq!(SampleInfo::default().date_label(), "-");
    }
}
