//! Command routing and execution
//!
//! Loads configuration, applies command-line overrides on top of it and
//! dispatches to the command implementations.

use anyhow::Result;
use std::path::PathBuf;
use tracing::debug;

use crate::app::AppConfig;
use crate::cli::args::{Cli, Commands, RecordArgs};
use crate::cli::commands::{run_classify, run_cleanup, run_split, run_split_ranges};
use crate::cli::validation::{validate_input_file, validate_output_dir};
use crate::config::{load_config, Config};

/// Execute a CLI command based on the parsed arguments
pub fn execute_command(cli: Cli, app: &AppConfig) -> Result<()> {
    let config_path = cli.config;
    let load = || load_config(config_path.as_deref(), &app.working_dir);

    match cli.command {
        Commands::Classify { disciplines } => {
            println!("{}", run_classify(&disciplines));
        }
        Commands::Split {
            input,
            output_dir,
            records,
        } => {
            let mut config = load()?;
            apply_race_overrides(&mut config, input, output_dir, records);
            check(&config)?;
            validate_input_file(&config.races.file, "races")?;

            let summary = run_split(&config)?;
            print!("{}", summary);
        }
        Commands::SplitRanges {
            input,
            output_dir,
            boundaries,
            open_ended,
            records,
        } => {
            let mut config = load()?;
            apply_race_overrides(&mut config, input, output_dir, records);
            if let Some(boundaries) = boundaries {
                config.ranges.boundaries = boundaries;
            }
            if open_ended {
                config.ranges.open_ended = true;
            }
            check(&config)?;
            config.range_spec()?;
            validate_input_file(&config.races.file, "races")?;

            let summary = run_split_ranges(&config)?;
            print!("{}", summary);
        }
        Commands::Cleanup {
            athletes,
            races,
            output,
            records,
        } => {
            let mut config = load()?;
            if let Some(path) = athletes {
                config.cleanup.athletes_file = path;
            }
            if let Some(path) = races {
                config.cleanup.canonical_file = path;
            }
            if let Some(path) = output {
                config.cleanup.output_file = path;
            }
            apply_record_overrides(&mut config, records);
            check(&config)?;
            validate_input_file(&config.cleanup.canonical_file, "races")?;
            validate_input_file(&config.cleanup.athletes_file, "athletes")?;

            let summary = run_cleanup(&config, app.show_progress())?;
            print!("{}", summary);
        }
    }

    Ok(())
}

fn apply_race_overrides(
    config: &mut Config,
    input: Option<PathBuf>,
    output_dir: Option<PathBuf>,
    records: RecordArgs,
) {
    if let Some(path) = input {
        config.races.file = path;
    }
    if let Some(dir) = output_dir {
        config.output.dir = dir;
    }
    apply_record_overrides(config, records);
}

fn apply_record_overrides(config: &mut Config, records: RecordArgs) {
    if let Some(policy) = records.on_missing_field {
        config.records.on_missing_field = policy;
    }
}

fn check(config: &Config) -> Result<()> {
    config.validate()?;
    validate_output_dir(&config.output.dir)?;
    debug!("Effective configuration: {:?}", config);
    Ok(())
}
