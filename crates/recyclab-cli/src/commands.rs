//! Command handlers

use crate::cli::{Cli, Commands};
use crate::logging::init_logging;
use crate::output::{output_macrostickies, output_report, output_yield};
use log::{debug, warn};
use recyclab_app::app::EvaluationService;
use recyclab_app::config::Config;
use recyclab_app::export::export_to_excel;
use recyclab_domain::model::{LabSheet, MacrostickiesDataset, TarePolicy};
use recyclab_domain::service::YieldSummary;
use recyclab_infra::sheet_loader::{render_sheet, SheetFormat};
use recyclab_types::{OutputFormat, Result};
use std::path::PathBuf;

pub fn execute(cli: Cli) -> Result<()> {
    // Load config
    let config = Config::load()?;
    let _logger = init_logging(cli.verbose, &config.log_level);
    let output_format = cli.format.unwrap_or(config.output_format);

    match cli.command {
        Commands::Evaluate {
            sheet,
            export,
            bone_dry_reference,
            coarse_reference,
            fine_reference,
        } => {
            // CLI overrides apply to this run only
            let mut run_config = config.clone();
            if let Some(v) = bone_dry_reference {
                run_config.bone_dry_reference_g = v;
            }
            if let Some(v) = coarse_reference {
                run_config.coarse_reference_g = v;
            }
            if let Some(v) = fine_reference {
                run_config.fine_reference_g = v;
            }
            cmd_evaluate(&run_config, sheet, export, output_format)
        }

        Commands::Template { json } => cmd_template(json),

        Commands::Macrostickies { file, dataset } => {
            cmd_macrostickies(&config, file, dataset.into(), output_format)
        }

        Commands::Yield { coarse, fine } => {
            output_yield(output_format, &YieldSummary::from_rejects(coarse, fine))
        }

        Commands::Config {
            show,
            set_output,
            set_bone_dry_reference,
            set_coarse_reference,
            set_fine_reference,
            set_coarse_policy,
            set_fine_policy,
            set_log_level,
            reset,
        } => cmd_config(
            config,
            show,
            ConfigUpdate {
                output: set_output,
                bone_dry_reference: set_bone_dry_reference,
                coarse_reference: set_coarse_reference,
                fine_reference: set_fine_reference,
                coarse_policy: set_coarse_policy,
                fine_policy: set_fine_policy,
                log_level: set_log_level,
            },
            reset,
        ),
    }
}

fn cmd_evaluate(
    config: &Config,
    sheet: PathBuf,
    export: Option<PathBuf>,
    output_format: OutputFormat,
) -> Result<()> {
    let service = EvaluationService::new(config);
    debug!("calculation settings: {:?}", service.settings());

    let report = service.evaluate_file(&sheet)?;
    output_report(output_format, &report)?;

    if let Some(path) = export {
        export_to_excel(&report, &path)?;
        eprintln!("Exported to: {}", path.display());
    }

    Ok(())
}

fn cmd_template(json: bool) -> Result<()> {
    let format = if json {
        SheetFormat::Json
    } else {
        SheetFormat::Toml
    };
    println!("{}", render_sheet(&LabSheet::template(), format)?);
    Ok(())
}

fn cmd_macrostickies(
    config: &Config,
    file: PathBuf,
    dataset: MacrostickiesDataset,
    output_format: OutputFormat,
) -> Result<()> {
    let table = EvaluationService::new(config).macrostickies_from_file(&file)?;
    output_macrostickies(output_format, dataset, &table)
}

/// Requested config edits
struct ConfigUpdate {
    output: Option<OutputFormat>,
    bone_dry_reference: Option<f64>,
    coarse_reference: Option<f64>,
    fine_reference: Option<f64>,
    coarse_policy: Option<TarePolicy>,
    fine_policy: Option<TarePolicy>,
    log_level: Option<String>,
}

impl ConfigUpdate {
    /// Apply to `config`, returning whether anything changed
    fn apply(self, config: &mut Config) -> bool {
        let mut modified = false;

        if let Some(output_format) = self.output {
            config.output_format = output_format;
            modified = true;
        }
        if let Some(v) = self.bone_dry_reference {
            config.bone_dry_reference_g = v;
            modified = true;
        }
        if let Some(v) = self.coarse_reference {
            config.coarse_reference_g = v;
            modified = true;
        }
        if let Some(v) = self.fine_reference {
            config.fine_reference_g = v;
            modified = true;
        }
        if let Some(policy) = self.coarse_policy {
            config.coarse_tare_policy = policy;
            modified = true;
        }
        if let Some(policy) = self.fine_policy {
            config.fine_tare_policy = policy;
            modified = true;
        }
        if let Some(level) = self.log_level {
            config.log_level = level;
            modified = true;
        }

        modified
    }
}

fn cmd_config(mut config: Config, show: bool, update: ConfigUpdate, reset: bool) -> Result<()> {
    if reset {
        let config = Config::default();
        config.save()?;
        println!("Configuration reset to defaults");
        println!("\n{}", config);
        return Ok(());
    }

    let modified = update.apply(&mut config);

    if modified {
        for (name, value) in [
            ("bone dry reference", config.bone_dry_reference_g),
            ("coarse reference", config.coarse_reference_g),
            ("fine reference", config.fine_reference_g),
        ] {
            if !(value.is_finite() && value > 0.0) {
                warn!("{} of {} g will make calculations fail", name, value);
            }
        }
        config.save()?;
        println!("Configuration saved");
    }

    if show || !modified {
        println!("{}", config);
    }

    Ok(())
}
