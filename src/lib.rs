//! edfslice - Clean EEG segment extraction CLI tool.
//!
//! Reads clinical EEG recordings in EDF format, detects bad time ranges
//! (flat signal, hyperventilation, photic stimulation, the first minute),
//! and exports the requested number of fixed-length clean segments as new
//! EDF files.

#![warn(missing_docs)]

pub mod cli;
pub mod config;
pub mod constants;
pub mod dsp;
pub mod edf;
pub mod error;
pub mod export;
pub mod intervals;
pub mod pipeline;

use std::path::PathBuf;

use clap::Parser;
use tracing::{error, info, warn};

use cli::{Cli, Command, ConfigAction, ExtractArgs};
use config::{Config, load_default_config, save_default_config, validate_config};
use pipeline::{ProcessCheck, collect_input_files, output_dir_for, process_file, should_process};

pub use error::{Error, Result};

/// Main entry point for the edfslice CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.extract.verbose, cli.extract.quiet);

    if let Some(command) = cli.command {
        return handle_command(command);
    }

    if cli.inputs.is_empty() {
        return Err(Error::NoInputFiles);
    }

    let mut config = load_default_config()?;
    apply_overrides(&mut config, &cli.extract);

    // Parameter errors are configuration-time failures: caught once here,
    // before any file is touched.
    validate_config(&config)?;

    extract_files(&cli.inputs, &cli.extract, &config)
}

/// Process all input files with the given options.
fn extract_files(inputs: &[PathBuf], args: &ExtractArgs, config: &Config) -> Result<()> {
    use pipeline::progress;
    use std::time::Instant;

    let total_start = Instant::now();

    let mut files = collect_input_files(inputs)?;
    if files.is_empty() {
        return Err(Error::NoInputFiles);
    }
    if let Some(cap) = args.max_files {
        files.truncate(cap);
    }

    info!("Found {} EDF file(s) to process", files.len());

    let progress_enabled = !args.quiet && !args.no_progress;
    let file_progress = progress::create_file_progress(files.len(), progress_enabled);

    let mut processed = 0;
    let mut skipped = 0;
    let mut errors = 0;
    let mut partial = 0;
    let mut total_segments = 0;

    for file in &files {
        let file_output_dir = output_dir_for(file, args.output_dir.as_deref());

        match should_process(file, &file_output_dir, args.force) {
            ProcessCheck::SkipExists => {
                info!("Skipping (output exists): {}", file.display());
                skipped += 1;
                progress::inc_progress(file_progress.as_ref());
                continue;
            }
            ProcessCheck::Process => {}
        }

        match process_file(file, &file_output_dir, config, args.report) {
            Ok(result) => {
                processed += 1;
                total_segments += result.segments_written;
                if !result.is_complete() {
                    partial += 1;
                }
            }
            Err(e) => {
                // One file's failure never halts the batch unless asked to.
                error!("Failed to process {}: {}", file.display(), e);
                errors += 1;
                if args.fail_fast {
                    progress::finish_progress(file_progress, "Failed");
                    return Err(e);
                }
            }
        }
        progress::inc_progress(file_progress.as_ref());
    }

    progress::finish_progress(file_progress, "Complete");

    let total_duration = total_start.elapsed().as_secs_f64();
    info!(
        "Complete: {} processed, {} skipped, {} errors, {} segment(s) written in {:.2}s",
        processed, skipped, errors, total_segments, total_duration
    );
    if partial > 0 {
        warn!(
            "{} file(s) had less clean time than requested and produced fewer segments",
            partial
        );
    }
    if errors > 0 && !args.fail_fast {
        warn!("{} file(s) had errors", errors);
    }

    Ok(())
}

/// Apply CLI overrides on top of the loaded configuration.
fn apply_overrides(config: &mut Config, args: &ExtractArgs) {
    if let Some(freq) = args.target_frequency {
        config.extraction.target_frequency = freq;
    }
    if let Some(length) = args.segment_length {
        config.extraction.segment_length_secs = length;
    }
    if let Some(count) = args.segment_count {
        config.extraction.segment_count = count;
    }
    if let Some(low) = args.band_low {
        config.extraction.band_low_hz = low;
    }
    if let Some(high) = args.band_high {
        config.extraction.band_high_hz = high;
    }
}

fn init_logging(verbose: u8, quiet: bool) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter_str = if quiet {
        "warn".to_string()
    } else {
        match verbose {
            0 => "info".to_string(),
            1 => "debug".to_string(),
            _ => "trace".to_string(),
        }
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&filter_str));

    fmt().with_env_filter(filter).init();
}

#[allow(clippy::print_stdout)]
fn handle_command(command: Command) -> Result<()> {
    match command {
        Command::Config { action } => match action {
            ConfigAction::Init => {
                let path = config::config_file_path()?;
                if path.exists() {
                    println!("Configuration file already exists: {}", path.display());
                } else {
                    let saved_path = save_default_config(&Config::default())?;
                    println!("Created configuration file: {}", saved_path.display());
                }
                Ok(())
            }
            ConfigAction::Show => {
                let config = load_default_config()?;
                println!("{config:#?}");
                Ok(())
            }
            ConfigAction::Path => {
                let path = config::config_file_path()?;
                println!("{}", path.display());
                Ok(())
            }
        },
    }
}
