//! Lab calculation engine for recyclability testing
//!
//! `model` holds the immutable measurement records a technician enters,
//! `service` the pure calculators deriving dry content, evaporation
//! residues, screen rejects, macrostickies statistics and total yield.
//! Nothing in this crate performs I/O or keeps state between calls.

pub mod model;
pub mod service;
