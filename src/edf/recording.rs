//! In-memory recording representation.

use ndarray::Array2;

use crate::error::{Error, Result};

/// Per-channel metadata carried through from the EDF header, needed again
/// at export time.
#[derive(Debug, Clone)]
pub struct ChannelInfo {
    /// Channel label (e.g. "EEG Fp1").
    pub label: String,
    /// Physical unit (e.g. "uV").
    pub physical_dimension: String,
    /// Physical minimum for digital scaling.
    pub physical_min: f64,
    /// Physical maximum for digital scaling.
    pub physical_max: f64,
    /// Digital minimum.
    pub digital_min: i32,
    /// Digital maximum.
    pub digital_max: i32,
    /// Transducer description.
    pub transducer: String,
    /// Prefilter description.
    pub prefilter: String,
}

/// A recording annotation: `(onset, duration, label)` in seconds.
#[derive(Debug, Clone)]
pub struct Annotation {
    /// Onset time in seconds from recording start.
    pub onset_secs: f64,
    /// Duration in seconds; zero for instantaneous markers.
    pub duration_secs: f64,
    /// Free-text label as stored in the EDF+ TAL stream.
    pub label: String,
}

/// A multi-channel recording with uniform sample rate and annotations.
///
/// Owned by a single file's pipeline run and read-only once conditioning
/// has produced it; every later stage takes it by reference and returns
/// new values.
#[derive(Debug, Clone)]
pub struct Recording {
    /// Channel metadata, one entry per row of `data`.
    pub channels: Vec<ChannelInfo>,
    /// Signal samples, shape `[channels, time]`.
    pub data: Array2<f64>,
    /// Sampling rate in Hz.
    pub sample_rate: f64,
    /// Annotations in onset order.
    pub annotations: Vec<Annotation>,
}

impl Recording {
    /// Number of channels.
    #[must_use]
    pub fn n_channels(&self) -> usize {
        self.data.nrows()
    }

    /// Number of samples per channel.
    #[must_use]
    pub fn n_samples(&self) -> usize {
        self.data.ncols()
    }

    /// Total duration in seconds.
    #[must_use]
    pub fn duration_secs(&self) -> f64 {
        #[allow(clippy::cast_precision_loss)]
        let n = self.n_samples() as f64;
        n / self.sample_rate
    }

    /// Convert a time in seconds to a sample index, clamping negative
    /// times to zero.
    #[must_use]
    pub fn secs_to_samples(&self, secs: f64) -> usize {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let idx = (secs.max(0.0) * self.sample_rate).round() as usize;
        idx
    }

    /// Check that the recording is processable.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRecording`] when the signal array is empty
    /// or the sample rate is not positive.
    pub fn validate(&self) -> Result<()> {
        if self.n_channels() == 0 || self.n_samples() == 0 {
            return Err(Error::InvalidRecording {
                reason: "empty signal array".to_string(),
            });
        }
        if self.sample_rate <= 0.0 {
            return Err(Error::InvalidRecording {
                reason: format!("non-positive sample rate {}", self.sample_rate),
            });
        }
        Ok(())
    }
}
