//! Loaders feeding the lab calculation engine

pub mod macrostickies_paste;
pub mod sheet_loader;
