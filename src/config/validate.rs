//! Configuration validation.
//!
//! Parameter errors are configuration-time failures: they are caught here,
//! before any file is processed, rather than per recording.

use crate::config::Config;
use crate::error::{Error, Result};

/// Validate the entire configuration.
pub fn validate_config(config: &Config) -> Result<()> {
    validate_extraction(config)?;
    validate_detection(config)?;
    Ok(())
}

fn validate_extraction(config: &Config) -> Result<()> {
    let ext = &config.extraction;

    if ext.target_frequency <= 0.0 {
        return Err(Error::InvalidParameters {
            message: format!(
                "target_frequency must be positive, got {}",
                ext.target_frequency
            ),
        });
    }

    if ext.segment_length_secs <= 0.0 {
        return Err(Error::InvalidParameters {
            message: format!(
                "segment_length_secs must be positive, got {}",
                ext.segment_length_secs
            ),
        });
    }

    if ext.segment_count == 0 {
        return Err(Error::InvalidParameters {
            message: "segment_count must be at least 1".to_string(),
        });
    }

    if ext.band_low_hz <= 0.0 || ext.band_high_hz <= ext.band_low_hz {
        return Err(Error::InvalidParameters {
            message: format!(
                "band [{}, {}] Hz must satisfy 0 < low < high",
                ext.band_low_hz, ext.band_high_hz
            ),
        });
    }

    if ext.band_high_hz >= ext.target_frequency / 2.0 {
        return Err(Error::InvalidParameters {
            message: format!(
                "band_high_hz {} must be below the target nyquist {}",
                ext.band_high_hz,
                ext.target_frequency / 2.0
            ),
        });
    }

    Ok(())
}

fn validate_detection(config: &Config) -> Result<()> {
    let det = &config.detection;

    if det.leading_exclusion_secs < 0.0 {
        return Err(Error::InvalidParameters {
            message: format!(
                "leading_exclusion_secs must be non-negative, got {}",
                det.leading_exclusion_secs
            ),
        });
    }

    if det.flat_tolerance < 0.0 {
        return Err(Error::InvalidParameters {
            message: format!("flat_tolerance must be non-negative, got {}", det.flat_tolerance),
        });
    }

    if det.flat_min_duration_secs <= 0.0 {
        return Err(Error::InvalidParameters {
            message: format!(
                "flat_min_duration_secs must be positive, got {}",
                det.flat_min_duration_secs
            ),
        });
    }

    if det.flat_channel_quorum <= 0.0 || det.flat_channel_quorum > 1.0 {
        return Err(Error::InvalidParameters {
            message: format!(
                "flat_channel_quorum must be in (0, 1], got {}",
                det.flat_channel_quorum
            ),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&Config::default()).is_ok());
    }

    #[test]
    fn test_zero_segment_count_rejected() {
        let mut config = Config::default();
        config.extraction.segment_count = 0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_non_positive_segment_length_rejected() {
        let mut config = Config::default();
        config.extraction.segment_length_secs = 0.0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_inverted_band_rejected() {
        let mut config = Config::default();
        config.extraction.band_low_hz = 55.0;
        config.extraction.band_high_hz = 0.5;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_band_above_nyquist_rejected() {
        let mut config = Config::default();
        config.extraction.target_frequency = 100.0;
        // default band_high_hz = 55 >= nyquist 50
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_quorum_out_of_range_rejected() {
        let mut config = Config::default();
        config.detection.flat_channel_quorum = 0.0;
        assert!(validate_config(&config).is_err());
        config.detection.flat_channel_quorum = 1.5;
        assert!(validate_config(&config).is_err());
    }
}
