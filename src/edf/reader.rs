//! EDF file reading via the edfplus crate.

use std::path::Path;

use edfplus::EdfReader;
use ndarray::Array2;
use tracing::{debug, warn};

use super::recording::{Annotation, ChannelInfo, Recording};
use crate::constants::EDF_TIME_UNITS_PER_SEC;
use crate::error::{Error, Result};

/// Read an EDF+ file into a [`Recording`].
///
/// EDF allows a different sampling rate per signal; channels whose rate
/// differs from the first signal's rate (typically auxiliary or event
/// channels) are skipped with a warning so that the resulting array is
/// rectangular.
///
/// # Errors
///
/// Returns [`Error::EdfRead`] when the file cannot be opened or decoded,
/// and [`Error::InvalidRecording`] when no usable signals remain.
pub fn read_recording(path: &Path) -> Result<Recording> {
    let mut reader = EdfReader::open(path).map_err(|e| Error::EdfRead {
        path: path.to_path_buf(),
        source: Box::new(e),
    })?;

    let annotations: Vec<Annotation> = reader
        .annotations()
        .iter()
        .map(|a| {
            #[allow(clippy::cast_precision_loss)]
            let onset_secs = a.onset as f64 / EDF_TIME_UNITS_PER_SEC;
            // Negative durations occasionally appear in malformed TALs.
            #[allow(clippy::cast_precision_loss)]
            let duration_secs = if a.duration >= 0 {
                a.duration as f64 / EDF_TIME_UNITS_PER_SEC
            } else {
                0.0
            };
            Annotation {
                onset_secs,
                duration_secs,
                label: a.description.clone(),
            }
        })
        .collect();

    let signals = reader.header().signals.clone();
    if signals.is_empty() {
        return Err(Error::InvalidRecording {
            reason: "EDF file contains no signals".to_string(),
        });
    }

    // EDF data records are one second long in clinical exports, so the
    // per-record sample count is the sampling rate.
    let samples_per_record = signals[0].samples_per_record;
    let sample_rate = f64::from(samples_per_record);

    let mut channels = Vec::new();
    let mut rows: Vec<Vec<f64>> = Vec::new();
    let mut n_samples = usize::MAX;

    for (idx, signal) in signals.iter().enumerate() {
        if signal.samples_per_record != samples_per_record {
            warn!(
                "skipping channel '{}' with mismatched rate ({} vs {} samples/record)",
                signal.label, signal.samples_per_record, samples_per_record
            );
            continue;
        }

        let count = usize::try_from(signal.samples_in_file).unwrap_or(0);
        let samples = reader
            .read_physical_samples(idx, count)
            .map_err(|e| Error::EdfRead {
                path: path.to_path_buf(),
                source: Box::new(e),
            })?;

        n_samples = n_samples.min(samples.len());
        channels.push(ChannelInfo {
            label: signal.label.clone(),
            physical_dimension: signal.physical_dimension.clone(),
            physical_min: signal.physical_min,
            physical_max: signal.physical_max,
            digital_min: signal.digital_min,
            digital_max: signal.digital_max,
            transducer: signal.transducer.clone(),
            prefilter: signal.prefilter.clone(),
        });
        rows.push(samples);
    }

    if rows.is_empty() || n_samples == 0 || n_samples == usize::MAX {
        return Err(Error::InvalidRecording {
            reason: "no usable signal data in EDF file".to_string(),
        });
    }

    // Truncate every channel to the shortest one so the array stays
    // rectangular even when a record was cut short.
    let mut data = Array2::zeros((rows.len(), n_samples));
    for (ch, samples) in rows.iter().enumerate() {
        for (t, &v) in samples.iter().take(n_samples).enumerate() {
            data[[ch, t]] = v;
        }
    }

    debug!(
        "read {} channels x {} samples at {} Hz, {} annotation(s)",
        data.nrows(),
        data.ncols(),
        sample_rate,
        annotations.len()
    );

    Ok(Recording {
        channels,
        data,
        sample_rate,
        annotations,
    })
}
