//! Signal conditioning: band-pass filtering and resampling.
//!
//! Runs before interval detection. The interval engine treats the output
//! as opaque numeric data; conditioning failures surface as-is and are
//! never retried.

mod bandpass;
mod resample;

pub use bandpass::{bandpass, design_bandpass};
pub use resample::resample;

use tracing::debug;

use crate::edf::Recording;
use crate::error::Result;

/// Conditioning parameters.
#[derive(Debug, Clone, Copy)]
pub struct ConditionerConfig {
    /// Target sampling rate in Hz.
    pub target_frequency: f64,
    /// Lower band-pass cutoff in Hz.
    pub band_low_hz: f64,
    /// Upper band-pass cutoff in Hz.
    pub band_high_hz: f64,
}

/// Band-pass filter and resample a recording.
///
/// Filtering happens at the source rate, before resampling, so the band
/// edges stay below the original nyquist. Annotations carry through
/// unchanged because their onsets are stored in seconds.
pub fn condition(recording: Recording, config: &ConditionerConfig) -> Result<Recording> {
    recording.validate()?;

    let Recording {
        channels,
        mut data,
        sample_rate,
        annotations,
    } = recording;

    debug!(
        "band-pass {}-{} Hz at {} Hz source rate",
        config.band_low_hz, config.band_high_hz, sample_rate
    );
    bandpass(&mut data, sample_rate, config.band_low_hz, config.band_high_hz)?;

    let data = resample(data, sample_rate, config.target_frequency)?;

    Ok(Recording {
        channels,
        data,
        sample_rate: config.target_frequency,
        annotations,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::edf::ChannelInfo;
    use ndarray::Array2;

    fn recording(n_samples: usize, rate: f64) -> Recording {
        Recording {
            channels: vec![ChannelInfo {
                label: "EEG F3".to_string(),
                physical_dimension: "uV".to_string(),
                physical_min: -200.0,
                physical_max: 200.0,
                digital_min: -32768,
                digital_max: 32767,
                transducer: String::new(),
                prefilter: String::new(),
            }],
            data: Array2::from_shape_fn((1, n_samples), |(_, t)| {
                #[allow(clippy::cast_precision_loss)]
                (t as f64 * 0.05).sin()
            }),
            sample_rate: rate,
            annotations: Vec::new(),
        }
    }

    #[test]
    fn test_condition_updates_rate() {
        let rec = recording(10_000, 1000.0);
        let out = condition(
            rec,
            &ConditionerConfig {
                target_frequency: 500.0,
                band_low_hz: 0.5,
                band_high_hz: 55.0,
            },
        )
        .unwrap();
        assert!((out.sample_rate - 500.0).abs() < f64::EPSILON);
        assert!(out.n_samples() > 4000 && out.n_samples() < 5500);
    }

    #[test]
    fn test_condition_rejects_empty() {
        let rec = Recording {
            channels: Vec::new(),
            data: Array2::zeros((0, 0)),
            sample_rate: 500.0,
            annotations: Vec::new(),
        };
        assert!(
            condition(
                rec,
                &ConditionerConfig {
                    target_frequency: 500.0,
                    band_low_hz: 0.5,
                    band_high_hz: 55.0,
                }
            )
            .is_err()
        );
    }
}
