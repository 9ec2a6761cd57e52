//! CLI definition using clap

use clap::{Parser, Subcommand, ValueEnum};
use recyclab_domain::model::{MacrostickiesDataset, TarePolicy};
use recyclab_types::OutputFormat;
use std::path::PathBuf;

/// Which macrostickies dataset pasted data belongs to
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum DatasetArg {
    #[default]
    Area,
    Number,
}

impl From<DatasetArg> for MacrostickiesDataset {
    fn from(arg: DatasetArg) -> Self {
        match arg {
            DatasetArg::Area => MacrostickiesDataset::Area,
            DatasetArg::Number => MacrostickiesDataset::Number,
        }
    }
}

#[derive(Parser)]
#[command(name = "recyclab")]
#[command(version)]
#[command(about = "Recyclability laboratory test calculations")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Evaluate a lab sheet (TOML or JSON)
    Evaluate {
        /// Path to sheet file
        sheet: PathBuf,

        /// Also export the report to an Excel file
        #[arg(long, short = 'o')]
        export: Option<PathBuf>,

        /// Bone-dry reference mass in g (overrides config)
        #[arg(long)]
        bone_dry_reference: Option<f64>,

        /// Coarse screen sample mass in g (overrides config)
        #[arg(long)]
        coarse_reference: Option<f64>,

        /// Fine screen sample mass in g (overrides config)
        #[arg(long)]
        fine_reference: Option<f64>,
    },

    /// Print a blank lab sheet to fill in
    Template {
        /// Emit JSON instead of TOML
        #[arg(long)]
        json: bool,
    },

    /// Mean / std dev table for pasted macrostickies screening data
    Macrostickies {
        /// File with the pasted Screening 1 / Screening 2 columns
        file: PathBuf,

        /// Dataset the data belongs to
        #[arg(long, short = 'd', value_enum, default_value_t = DatasetArg::Area)]
        dataset: DatasetArg,
    },

    /// Total yield from coarse and fine reject percentages
    Yield {
        /// Coarse reject (%)
        #[arg(long, allow_hyphen_values = true)]
        coarse: f64,

        /// Fine reject (%)
        #[arg(long, allow_hyphen_values = true)]
        fine: f64,
    },

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Set bone-dry reference mass (g)
        #[arg(long)]
        set_bone_dry_reference: Option<f64>,

        /// Set coarse screen sample mass (g)
        #[arg(long)]
        set_coarse_reference: Option<f64>,

        /// Set fine screen sample mass (g)
        #[arg(long)]
        set_fine_reference: Option<f64>,

        /// Set coarse tin policy (zero-means-missing, always-subtract)
        #[arg(long)]
        set_coarse_policy: Option<TarePolicy>,

        /// Set fine tin policy (zero-means-missing, always-subtract)
        #[arg(long)]
        set_fine_policy: Option<TarePolicy>,

        /// Set default log level (error, warn, info, debug, trace)
        #[arg(long)]
        set_log_level: Option<String>,

        /// Reset to defaults
        #[arg(long)]
        reset: bool,
    },
}
