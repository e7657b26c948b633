//! Bad-interval detection.
//!
//! Scans a conditioned recording for the three sources of bad time:
//! flat-signal runs, annotated clinical procedures (hyperventilation and
//! photic stimulation), and the mandatory leading exclusion window.
//! Emitted intervals may overlap; the merger collapses them afterwards.

use tracing::debug;

use super::interval::{Interval, IntervalSource, TaggedInterval};
use crate::constants::{flat, procedure_labels as labels};
use crate::edf::Recording;
use crate::error::Result;

/// Tunable thresholds for bad-interval detection.
#[derive(Debug, Clone)]
pub struct DetectorConfig {
    /// Length of the always-bad window at the recording start, in seconds.
    pub leading_exclusion_secs: f64,
    /// Amplitude tolerance band around zero for flat detection.
    pub flat_tolerance: f64,
    /// Minimum duration in seconds for a flat run to qualify.
    pub flat_min_duration_secs: f64,
    /// Fraction of channels that must be simultaneously flat.
    pub flat_channel_quorum: f64,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            leading_exclusion_secs: crate::constants::DEFAULT_LEADING_EXCLUSION_SECS,
            flat_tolerance: flat::DEFAULT_TOLERANCE,
            flat_min_duration_secs: flat::DEFAULT_MIN_DURATION_SECS,
            flat_channel_quorum: flat::DEFAULT_CHANNEL_QUORUM,
        }
    }
}

/// Detect all bad intervals in a recording.
///
/// The returned set may contain overlapping intervals; every interval is
/// clipped to `[0, total_samples)` and tagged with its source.
///
/// # Errors
///
/// Returns [`crate::Error::InvalidRecording`] when the recording has no
/// data or a non-positive sample rate.
pub fn detect(recording: &Recording, config: &DetectorConfig) -> Result<Vec<TaggedInterval>> {
    recording.validate()?;

    let total = recording.n_samples();
    let mut bad = Vec::new();

    let lead_end = recording.secs_to_samples(config.leading_exclusion_secs);
    if let Some(iv) = Interval::new(0, lead_end).and_then(|iv| iv.clip(total)) {
        bad.push(TaggedInterval::new(iv, IntervalSource::LeadingExclusion));
    }

    for iv in flat_intervals(recording, config) {
        bad.push(TaggedInterval::new(iv, IntervalSource::Flat));
    }

    for iv in hyperventilation(recording)
        .into_iter()
        .chain(photic_stimulation(recording))
    {
        if let Some(iv) = iv.clip(total) {
            bad.push(TaggedInterval::new(iv, IntervalSource::Procedure));
        }
    }

    debug!("detected {} bad interval(s)", bad.len());
    Ok(bad)
}

/// Find runs where the signal stays within the tolerance band on enough
/// channels at once.
///
/// A sample counts as flat when at least `quorum * n_channels` channels
/// are within `±tolerance` at that instant; contiguous flat runs shorter
/// than the minimum duration are discarded.
fn flat_intervals(recording: &Recording, config: &DetectorConfig) -> Vec<Interval> {
    let n_channels = recording.n_channels();
    let total = recording.n_samples();

    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let quorum = ((config.flat_channel_quorum * n_channels as f64).ceil() as usize).max(1);
    let min_run = recording
        .secs_to_samples(config.flat_min_duration_secs)
        .max(1);

    let mut intervals = Vec::new();
    let mut run_start: Option<usize> = None;

    for t in 0..total {
        let flat_channels = recording
            .data
            .column(t)
            .iter()
            .filter(|v| v.abs() <= config.flat_tolerance)
            .count();

        if flat_channels >= quorum {
            run_start.get_or_insert(t);
        } else if let Some(start) = run_start.take() {
            if t - start >= min_run {
                if let Some(iv) = Interval::new(start, t) {
                    intervals.push(iv);
                }
            }
        }
    }
    if let Some(start) = run_start {
        if total - start >= min_run {
            if let Some(iv) = Interval::new(start, total) {
                intervals.push(iv);
            }
        }
    }

    intervals
}

/// Map hyperventilation annotations to a bad interval.
///
/// The procedure window is reconstructed from clinical marker labels: the
/// one-minute marker sits 90 s after the true start, post markers carry
/// their offset from the end in the label, and begin/end markers act as
/// fallbacks. A window is only emitted when both ends resolve.
fn hyperventilation(recording: &Recording) -> Option<Interval> {
    let mut start_secs: Option<f64> = None;
    let mut end_secs: Option<f64> = None;

    for ann in &recording.annotations {
        if labels::HV_ONE_MIN.contains(&ann.label.as_str()) {
            start_secs = Some(ann.onset_secs - labels::HV_ONE_MIN_LEAD_SECS);
        }
        if labels::POST_HV.contains(&ann.label.as_str()) {
            if let Some(elapsed) = post_hv_elapsed_secs(&ann.label) {
                end_secs = Some(ann.onset_secs + (labels::POST_HV_REFERENCE_SECS - elapsed));
            }
        }
    }

    if start_secs.is_none() {
        for ann in &recording.annotations {
            if labels::HV_BEGIN.contains(&ann.label.as_str()) {
                start_secs = Some(ann.onset_secs - labels::HV_BEGIN_LEAD_SECS);
            }
        }
    }
    if end_secs.is_none() {
        for ann in &recording.annotations {
            if labels::HV_END.contains(&ann.label.as_str()) {
                end_secs = Some(ann.onset_secs + labels::HV_END_TAIL_SECS);
            }
        }
    }

    match (start_secs, end_secs) {
        (Some(start), Some(end)) => Interval::new(
            recording.secs_to_samples(start),
            recording.secs_to_samples(end),
        ),
        _ => None,
    }
}

/// Extract the elapsed-seconds number from a "Post HV N Sec" label.
fn post_hv_elapsed_secs(label: &str) -> Option<f64> {
    label.split_whitespace().nth(2)?.parse().ok()
}

/// Map photic stimulation annotations to a bad interval.
///
/// Strobe markers carry the flash frequency in the label ("5 Hz", "10 Hz",
/// ...); the bad window spans from the first marker to the end of the
/// last one. A single marker is not treated as a stimulation run.
fn photic_stimulation(recording: &Recording) -> Option<Interval> {
    let markers: Vec<&crate::edf::Annotation> = recording
        .annotations
        .iter()
        .filter(|a| a.label.contains(labels::PHOTIC_MARKER))
        .collect();

    if markers.len() < 2 {
        return None;
    }

    let first = markers.first()?;
    let last = markers.last()?;
    Interval::new(
        recording.secs_to_samples(first.onset_secs),
        recording.secs_to_samples(last.onset_secs + last.duration_secs),
    )
}
