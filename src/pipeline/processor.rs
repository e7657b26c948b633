//! Single file processing pipeline.
//!
//! Strictly sequential per recording: read, condition, detect, merge,
//! select, export. Every stage takes the previous stage's output by value
//! or reference and returns a new value; nothing is shared across files.

use std::path::Path;

use tracing::{debug, info, warn};

use crate::config::Config;
use crate::constants::output::REPORT_SUFFIX;
use crate::dsp::{ConditionerConfig, condition};
use crate::edf::read_recording;
use crate::error::{Error, Result};
use crate::export::{plan_exports, write_report, write_segment};
use crate::intervals::{DetectorConfig, complement, detect, merge, select};
use crate::pipeline::output_stem_for;

/// Result of processing a single file.
#[derive(Debug)]
pub struct ProcessResult {
    /// Number of segments written.
    pub segments_written: usize,
    /// Number of segments that were requested.
    pub segments_requested: usize,
}

impl ProcessResult {
    /// Whether the requested segment count was achieved.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.segments_written == self.segments_requested
    }
}

/// Process a single EDF file and write extracted segments.
///
/// # Arguments
///
/// * `input_path` - Path to the input EDF file
/// * `output_dir` - Directory for segment files
/// * `config` - Extraction and detection settings
/// * `report` - Whether to also write the interval report CSV
pub fn process_file(
    input_path: &Path,
    output_dir: &Path,
    config: &Config,
    report: bool,
) -> Result<ProcessResult> {
    info!("Processing: {}", input_path.display());

    let recording = read_recording(input_path)?;
    info!(
        "Read {} channels, {:.1}s at {} Hz",
        recording.n_channels(),
        recording.duration_secs(),
        recording.sample_rate
    );

    let recording = condition(
        recording,
        &ConditionerConfig {
            target_frequency: config.extraction.target_frequency,
            band_low_hz: config.extraction.band_low_hz,
            band_high_hz: config.extraction.band_high_hz,
        },
    )?;

    let detector_config = DetectorConfig {
        leading_exclusion_secs: config.detection.leading_exclusion_secs,
        flat_tolerance: config.detection.flat_tolerance,
        flat_min_duration_secs: config.detection.flat_min_duration_secs,
        flat_channel_quorum: config.detection.flat_channel_quorum,
    };
    let bad = detect(&recording, &detector_config)?;
    let merged = merge(&bad);
    let clean = complement(&merged, recording.n_samples());
    debug!(
        "{} bad interval(s) merged to {}, {} clean interval(s)",
        bad.len(),
        merged.len(),
        clean.len()
    );

    let target_length = recording.secs_to_samples(config.extraction.segment_length_secs);
    let selection = select(&clean, target_length, config.extraction.segment_count)?;
    if !selection.is_complete() {
        warn!(
            "insufficient clean time in {}: {} of {} segment(s) available",
            input_path.display(),
            selection.segments.len(),
            selection.requested
        );
    }

    std::fs::create_dir_all(output_dir).map_err(|e| Error::OutputDirCreateFailed {
        path: output_dir.to_path_buf(),
        source: e,
    })?;

    let stem = output_stem_for(input_path);
    let plan = plan_exports(&stem, &selection.segments);
    for entry in &plan {
        let path = output_dir.join(&entry.file_name);
        write_segment(&path, &recording, entry.segment.interval)?;
        info!("Wrote {}", path.display());
    }

    if report {
        let report_path = output_dir.join(format!("{stem}{REPORT_SUFFIX}"));
        write_report(&report_path, &bad, &clean, recording.sample_rate)?;
        info!("Wrote {}", report_path.display());
    }

    Ok(ProcessResult {
        segments_written: plan.len(),
        segments_requested: selection.requested,
    })
}
