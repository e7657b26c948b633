//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Clean EEG segment extraction from clinical EDF recordings.
#[derive(Debug, Parser)]
#[command(name = "edfslice")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Input EDF files or directories to process.
    pub inputs: Vec<PathBuf>,

    /// Common options for extraction.
    #[command(flatten)]
    pub extract: ExtractArgs,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage configuration.
    Config {
        /// Configuration action to perform.
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config subcommand actions.
#[derive(Debug, Clone, Copy, Subcommand)]
pub enum ConfigAction {
    /// Create default configuration file.
    Init,
    /// Display current configuration.
    Show,
    /// Print configuration file path.
    Path,
}

/// Arguments for the extraction run.
#[derive(Debug, Args)]
#[allow(clippy::struct_excessive_bools)]
pub struct ExtractArgs {
    /// Output directory (default: same as input).
    #[arg(short, long, env = "EDFSLICE_OUTPUT_DIR")]
    pub output_dir: Option<PathBuf>,

    /// Target sampling rate in Hz after resampling.
    #[arg(short = 'f', long, env = "EDFSLICE_TARGET_FREQUENCY")]
    pub target_frequency: Option<f64>,

    /// Length of each extracted segment in seconds.
    #[arg(short = 'l', long, env = "EDFSLICE_SEGMENT_LENGTH")]
    pub segment_length: Option<f64>,

    /// Number of segments to extract per recording.
    #[arg(short = 'n', long, env = "EDFSLICE_SEGMENT_COUNT")]
    pub segment_count: Option<usize>,

    /// Lower band-pass cutoff in Hz.
    #[arg(long)]
    pub band_low: Option<f64>,

    /// Upper band-pass cutoff in Hz.
    #[arg(long)]
    pub band_high: Option<f64>,

    /// Stop after processing this many files.
    #[arg(long)]
    pub max_files: Option<usize>,

    /// Reprocess files whose outputs already exist.
    #[arg(long)]
    pub force: bool,

    /// Stop the batch at the first failing file.
    #[arg(long)]
    pub fail_fast: bool,

    /// Also write an interval report CSV per input file.
    #[arg(long)]
    pub report: bool,

    /// Increase log verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-error output.
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable the progress bar.
    #[arg(long)]
    pub no_progress: bool,
}
