//! Configuration type definitions.

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_LEADING_EXCLUSION_SECS, DEFAULT_SEGMENT_COUNT, DEFAULT_SEGMENT_LENGTH_SECS,
    DEFAULT_TARGET_FREQUENCY, band, flat,
};

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Extraction settings.
    #[serde(default)]
    pub extraction: ExtractionConfig,

    /// Bad-interval detection settings.
    #[serde(default)]
    pub detection: DetectionConfig,
}

/// Segment extraction settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Target sampling rate in Hz after resampling.
    pub target_frequency: f64,

    /// Lower band-pass cutoff in Hz.
    pub band_low_hz: f64,

    /// Upper band-pass cutoff in Hz.
    pub band_high_hz: f64,

    /// Length of each extracted segment in seconds.
    pub segment_length_secs: f64,

    /// Number of segments to extract per recording.
    pub segment_count: usize,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            target_frequency: DEFAULT_TARGET_FREQUENCY,
            band_low_hz: band::DEFAULT_LOW_HZ,
            band_high_hz: band::DEFAULT_HIGH_HZ,
            segment_length_secs: DEFAULT_SEGMENT_LENGTH_SECS,
            segment_count: DEFAULT_SEGMENT_COUNT,
        }
    }
}

/// Bad-interval detection settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectionConfig {
    /// Always-bad window at the start of the recording, in seconds.
    pub leading_exclusion_secs: f64,

    /// Amplitude tolerance band around zero for flat-signal detection.
    pub flat_tolerance: f64,

    /// Minimum duration in seconds for a flat run to count as bad.
    pub flat_min_duration_secs: f64,

    /// Fraction of channels that must be simultaneously flat (0, 1].
    pub flat_channel_quorum: f64,
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            leading_exclusion_secs: DEFAULT_LEADING_EXCLUSION_SECS,
            flat_tolerance: flat::DEFAULT_TOLERANCE,
            flat_min_duration_secs: flat::DEFAULT_MIN_DURATION_SECS,
            flat_channel_quorum: flat::DEFAULT_CHANNEL_QUORUM,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extraction_defaults() {
        let cfg = ExtractionConfig::default();
        assert!((cfg.target_frequency - 500.0).abs() < f64::EPSILON);
        assert!((cfg.segment_length_secs - 60.0).abs() < f64::EPSILON);
        assert_eq!(cfg.segment_count, 5);
    }

    #[test]
    fn test_detection_defaults() {
        let cfg = DetectionConfig::default();
        assert!((cfg.leading_exclusion_secs - 60.0).abs() < f64::EPSILON);
        assert!((cfg.flat_channel_quorum - 0.5).abs() < f64::EPSILON);
    }
}
