//! Application-wide constants.
//!
//! All magic numbers and strings are defined here to ensure consistency
//! and make changes easy to track.

/// Application name used for config directories and user-facing messages.
pub const APP_NAME: &str = "edfslice";

/// Default target sampling rate in Hz after resampling.
pub const DEFAULT_TARGET_FREQUENCY: f64 = 500.0;

/// Default band-pass filter bounds in Hz.
pub mod band {
    /// Default lower cutoff frequency.
    pub const DEFAULT_LOW_HZ: f64 = 0.5;
    /// Default upper cutoff frequency.
    pub const DEFAULT_HIGH_HZ: f64 = 55.0;
}

/// Default length of each extracted segment in seconds.
pub const DEFAULT_SEGMENT_LENGTH_SECS: f64 = 60.0;

/// Default number of segments to extract per recording.
pub const DEFAULT_SEGMENT_COUNT: usize = 5;

/// Default leading exclusion window in seconds.
///
/// Physician setup time at the start of a clinical recording is assumed
/// unreliable, so the first minute is always excluded.
pub const DEFAULT_LEADING_EXCLUSION_SECS: f64 = 60.0;

/// Flat-signal detection defaults.
pub mod flat {
    /// Amplitude tolerance band around zero, in the recording's physical
    /// unit (microvolts for EEG). Runs staying within this band count as
    /// flat signal.
    pub const DEFAULT_TOLERANCE: f64 = 1e-6;

    /// Minimum duration in seconds for a flat run to qualify as bad.
    pub const DEFAULT_MIN_DURATION_SECS: f64 = 10.0;

    /// Fraction of channels that must be simultaneously flat before a
    /// window is considered globally bad. A single disconnected electrode
    /// must not flag the whole recording.
    pub const DEFAULT_CHANNEL_QUORUM: f64 = 0.5;
}

/// Annotation label constants for clinical procedure detection.
pub mod procedure_labels {
    /// Hyperventilation one-minute markers.
    pub const HV_ONE_MIN: &[&str] = &["HV 1Min", "HV 1 Min"];
    /// Post-hyperventilation markers. The number is seconds elapsed since
    /// the end of the procedure.
    pub const POST_HV: &[&str] = &["Post HV 30 Sec", "Post HV 60 Sec", "Post HV 90 Sec"];
    /// Hyperventilation begin markers (fallback when no 1-minute marker).
    pub const HV_BEGIN: &[&str] = &["HV Begin", "Begin HV"];
    /// Hyperventilation end markers (fallback when no post marker).
    pub const HV_END: &[&str] = &["HV End", "End HV"];

    /// Seconds before an "HV 1Min" marker that hyperventilation started.
    pub const HV_ONE_MIN_LEAD_SECS: f64 = 90.0;
    /// Seconds before an "HV Begin" marker that hyperventilation started.
    pub const HV_BEGIN_LEAD_SECS: f64 = 30.0;
    /// Seconds after an "HV End" marker that effects are assumed to last.
    pub const HV_END_TAIL_SECS: f64 = 90.0;
    /// Reference offset for "Post HV N Sec" markers.
    pub const POST_HV_REFERENCE_SECS: f64 = 90.0;

    /// Photic stimulation markers carry the strobe frequency in the label.
    pub const PHOTIC_MARKER: &str = "Hz";
}

/// Output file naming.
pub mod output {
    /// Extension for exported segment files.
    pub const SEGMENT_EXTENSION: &str = "edf";
    /// Suffix for the interval report file.
    pub const REPORT_SUFFIX: &str = ".intervals.csv";
}

/// EDF input file extension.
pub const EDF_EXTENSION: &str = "edf";

/// Units per second in EDF+ time fields (100 ns resolution).
pub const EDF_TIME_UNITS_PER_SEC: f64 = 10_000_000.0;
