//! Domain model types

pub mod evaporation;
pub mod macrostickies;
pub mod moisture;
pub mod sample;
pub mod screen;
pub mod settings;
pub mod sheet;

pub use evaporation::{EvaporationRole, EvaporationSample, EvaporationSet};
pub use macrostickies::{MacrostickiesDataset, MacrostickiesRow, SizeClass, TOTAL_SIZE_LABEL};
pub use moisture::{MassPair, MoistureComponent};
pub use sample::SampleInfo;
pub use screen::{ScreenMeasurement, ScreenSet, TarePolicy};
pub use settings::{CalculationSettings, ScreenRejectSettings};
pub use sheet::{LabSheet, MacrostickiesSet};
