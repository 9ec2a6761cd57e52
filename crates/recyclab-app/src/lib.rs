//! Application service layer - config, sheet evaluation, export

pub mod app;
pub mod config;
pub mod export;
