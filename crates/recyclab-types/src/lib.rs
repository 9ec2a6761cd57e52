//! Core types for the recyclability lab calculations

mod error;
mod types;

pub use error::*;
pub use types::*;
