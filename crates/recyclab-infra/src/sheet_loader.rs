//! Lab sheet loader (TOML or JSON)
//!
//! The format is chosen by file extension: `.toml` or `.json`.

use log::info;
use recyclab_domain::model::LabSheet;
use recyclab_types::{Error, Result};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetFormat {
    Toml,
    Json,
}

impl SheetFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .as_deref()
        {
            Some("toml") => Ok(SheetFormat::Toml),
            Some("json") => Ok(SheetFormat::Json),
            _ => Err(Error::UnsupportedFormat(format!(
                "{} (expected .toml or .json)",
                path.display()
            ))),
        }
    }
}

/// Load a lab sheet from a TOML or JSON file
pub fn load_sheet(path: &Path) -> Result<LabSheet> {
    if !path.exists() {
        return Err(Error::FileNotFound(format!(
            "Sheet file not found: {}",
            path.display()
        )));
    }
    let format = SheetFormat::from_path(path)?;
    let content = fs::read_to_string(path)?;
    let sheet = parse_sheet(&content, format)?;
    info!(
        "loaded sheet '{}' from {}",
        sheet.info.sample_name,
        path.display()
    );
    Ok(sheet)
}

pub fn parse_sheet(content: &str, format: SheetFormat) -> Result<LabSheet> {
    match format {
        SheetFormat::Toml => Ok(toml::from_str(content)?),
        SheetFormat::Json => Ok(serde_json::from_str(content)?),
    }
}

/// Serialize a sheet in the given format
pub fn render_sheet(sheet: &LabSheet, format: SheetFormat) -> Result<String> {
    match format {
        SheetFormat::Toml => Ok(toml::to_string_pretty(sheet)?),
        SheetFormat::Json => Ok(serde_json::to_string_pretty(sheet)?),
    }
}
