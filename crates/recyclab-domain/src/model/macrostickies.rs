//! Macrostickies screening data

use serde::{Deserialize, Serialize};

/// Label of the synthetic total row covering every size class
pub const TOTAL_SIZE_LABEL: &str = "150 - 200000µm";

/// Fixed micron-range classes of the macrostickies evaluation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SizeClass {
    From150To200,
    From200To300,
    From300To400,
    From400To500,
    From500To600,
    From600To1000,
    From1000To1500,
    From1500To2000,
    From2000To3000,
    From3000To5000,
    From5000To10000,
    From10000To20000,
    From20000To50000,
    From50000To200000,
}

impl SizeClass {
    pub const ALL: [SizeClass; 14] = [
        SizeClass::From150To200,
        SizeClass::From200To300,
        SizeClass::From300To400,
        SizeClass::From400To500,
        SizeClass::From500To600,
        SizeClass::From600To1000,
        SizeClass::From1000To1500,
        SizeClass::From1500To2000,
        SizeClass::From2000To3000,
        SizeClass::From3000To5000,
        SizeClass::From5000To10000,
        SizeClass::From10000To20000,
        SizeClass::From20000To50000,
        SizeClass::From50000To200000,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SizeClass::From150To200 => "150 - 200 µm",
            SizeClass::From200To300 => "200 - 300 µm",
            SizeClass::From300To400 => "300 - 400 µm",
            SizeClass::From400To500 => "400 - 500 µm",
            SizeClass::From500To600 => "500 - 600 µm",
            SizeClass::From600To1000 => "600 - 1000 µm",
            SizeClass::From1000To1500 => "1000 - 1500µm",
            SizeClass::From1500To2000 => "1500 - 2000µm",
            SizeClass::From2000To3000 => "2000 - 3000µm",
            SizeClass::From3000To5000 => "3000 - 5000µm",
            SizeClass::From5000To10000 => "5000 - 10000µm",
            SizeClass::From10000To20000 => "10000 - 20000µm",
            SizeClass::From20000To50000 => "20000 - 50000µm",
            SizeClass::From50000To200000 => "50000 - 200000µm",
        }
    }

    /// Look up a class by label, ignoring whitespace differences
    pub fn from_label(label: &str) -> Option<SizeClass> {
        let wanted = compact(label);
        Self::ALL.into_iter().find(|c| compact(c.label()) == wanted)
    }
}

fn compact(label: &str) -> String {
    label.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Whether a label names the total row
pub fn is_total_label(label: &str) -> bool {
    compact(label) == compact(TOTAL_SIZE_LABEL)
}

/// The two independent macrostickies datasets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MacrostickiesDataset {
    /// Contaminant area (mm²/kg)
    Area,
    /// Contaminant count (per kg)
    Number,
}

impl MacrostickiesDataset {
    pub fn label(&self) -> &'static str {
        match self {
            MacrostickiesDataset::Area => "Macrostickies AREA Data",
            MacrostickiesDataset::Number => "Macrostickies Number Data",
        }
    }
}

/// One entered size-class row with its two screenings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MacrostickiesRow {
    pub size_class: String,
    #[serde(default)]
    pub screening_1: f64,
    #[serde(default)]
    pub screening_2: f64,
}

impl MacrostickiesRow {
    pub fn new(size_class: impl Into<String>, screening_1: f64, screening_2: f64) -> Self {
        Self {
            size_class: size_class.into(),
            screening_1,
            screening_2,
        }
    }

    /// The 14 fixed size classes, all screenings zero
    pub fn blank_rows() -> Vec<MacrostickiesRow> {
        SizeClass::ALL
            .iter()
            .map(|class| MacrostickiesRow::new(class.label(), 0.0, 0.0))
            .collect()
    }
}
