//! Signal resampling using rubato.

use audioadapter_buffers::direct::SequentialSlice;
use ndarray::Array2;
use rubato::{Fft, FixedSync, Resampler};

use crate::error::{Error, Result};

/// Resample every channel of `data` to the target rate.
///
/// Returns the input unchanged if already at the target rate (within
/// 1 mHz). Channels are resampled independently with identical resampler
/// settings, so all output rows have the same length.
pub fn resample(data: Array2<f64>, from_rate: f64, to_rate: f64) -> Result<Array2<f64>> {
    if (from_rate - to_rate).abs() < 1e-3 {
        return Ok(data);
    }
    if from_rate <= 0.0 || to_rate <= 0.0 {
        return Err(Error::Resample {
            reason: format!("non-positive sample rate ({from_rate} -> {to_rate})"),
        });
    }

    let rows: Vec<Vec<f64>> = data
        .rows()
        .into_iter()
        .map(|row| resample_channel(&row.to_vec(), from_rate, to_rate))
        .collect::<Result<_>>()?;

    let n_samples = rows.iter().map(Vec::len).min().unwrap_or(0);
    let mut out = Array2::zeros((rows.len(), n_samples));
    for (ch, row) in rows.iter().enumerate() {
        for (t, &v) in row.iter().take(n_samples).enumerate() {
            out[[ch, t]] = v;
        }
    }
    Ok(out)
}

/// Resample a single channel with an FFT-based synchronous resampler.
fn resample_channel(samples: &[f64], from_rate: f64, to_rate: f64) -> Result<Vec<f64>> {
    let chunk_size = 1024;
    let sub_chunks = 1;
    let channels = 1;

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let mut resampler = Fft::<f64>::new(
        from_rate.round() as usize,
        to_rate.round() as usize,
        chunk_size,
        sub_chunks,
        channels,
        FixedSync::Both,
    )
    .map_err(|e| Error::Resample {
        reason: e.to_string(),
    })?;

    let input_frames_needed = resampler.input_frames_next();
    let mut output = Vec::with_capacity(estimate_output_len(samples.len(), from_rate, to_rate));

    // Process in chunks
    let mut pos = 0;
    while pos + input_frames_needed <= samples.len() {
        let chunk = &samples[pos..pos + input_frames_needed];
        let input_adapter =
            SequentialSlice::new(chunk, channels, input_frames_needed).map_err(|e| {
                Error::Resample {
                    reason: format!("failed to create input adapter: {e}"),
                }
            })?;

        let resampled =
            resampler
                .process(&input_adapter, 0, None)
                .map_err(|e| Error::Resample {
                    reason: e.to_string(),
                })?;

        output.extend_from_slice(&resampled.take_data());
        pos += input_frames_needed;
    }

    // Handle remaining samples by padding
    if pos < samples.len() {
        let remaining = samples.len() - pos;
        let mut padded = samples[pos..].to_vec();
        padded.resize(input_frames_needed, 0.0);

        let input_adapter =
            SequentialSlice::new(&padded, channels, input_frames_needed).map_err(|e| {
                Error::Resample {
                    reason: format!("failed to create input adapter: {e}"),
                }
            })?;

        let resampled =
            resampler
                .process(&input_adapter, 0, None)
                .map_err(|e| Error::Resample {
                    reason: e.to_string(),
                })?;

        // Only take the proportional amount of output
        #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let output_frames = (remaining as f64 * to_rate / from_rate).ceil() as usize;

        let output_data = resampled.take_data();
        let take_count = output_frames.min(output_data.len());
        output.extend_from_slice(&output_data[..take_count]);
    }

    Ok(output)
}

/// Estimate output length after resampling.
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn estimate_output_len(input_len: usize, from_rate: f64, to_rate: f64) -> usize {
    ((input_len as f64) * to_rate / from_rate).ceil() as usize + 1024
}
