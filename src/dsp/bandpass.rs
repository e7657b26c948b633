//! Zero-phase FIR band-pass filtering.
//!
//! Windowed-sinc design (Hamming window) built as the difference of two
//! lowpass kernels; zero phase comes from compensating the group delay of
//! the linear-phase kernel rather than filtering twice. Edge transients
//! are suppressed with reflected padding.

use std::f64::consts::PI;

use ndarray::Array2;

use crate::error::{Error, Result};

/// Upper bound on kernel length; keeps direct convolution tractable for
/// long clinical recordings.
const MAX_TAPS: usize = 4097;

/// Apply a zero-phase band-pass filter to each channel of `data` in place.
///
/// # Errors
///
/// Returns [`Error::Filter`] when the band edges are not ordered or lie
/// outside `(0, nyquist)`.
pub fn bandpass(
    data: &mut Array2<f64>,
    sample_rate: f64,
    low_hz: f64,
    high_hz: f64,
) -> Result<()> {
    let nyquist = sample_rate / 2.0;
    if low_hz <= 0.0 || high_hz <= low_hz || high_hz >= nyquist {
        return Err(Error::Filter {
            reason: format!(
                "band [{low_hz}, {high_hz}] Hz is invalid for nyquist {nyquist} Hz"
            ),
        });
    }

    let kernel = design_bandpass(low_hz, high_hz, sample_rate);
    for mut row in data.rows_mut() {
        let filtered = filter_zero_phase(&row.to_vec(), &kernel);
        for (dst, src) in row.iter_mut().zip(filtered) {
            *dst = src;
        }
    }
    Ok(())
}

/// Design a band-pass FIR kernel as `lowpass(high) - lowpass(low)`.
///
/// Transition bandwidth follows the firwin auto rule on the lower edge
/// (`min(max(0.25 * f, 2.0), f)`); length is `ceil(3.3 / trans_bw * sfreq)`
/// rounded to odd and capped.
pub fn design_bandpass(low_hz: f64, high_hz: f64, sample_rate: f64) -> Vec<f64> {
    let trans_bw = (0.25 * low_hz).max(2.0).min(low_hz);
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let mut n = (3.3 / trans_bw * sample_rate).ceil() as usize;
    n = n.min(MAX_TAPS);
    if n % 2 == 0 {
        n += 1;
    }

    let lp_high = lowpass_kernel(n, high_hz, sample_rate);
    let lp_low = lowpass_kernel(n, low_hz, sample_rate);
    lp_high
        .iter()
        .zip(&lp_low)
        .map(|(&h, &l)| h - l)
        .collect()
}

/// Hamming-windowed sinc lowpass with unit DC gain. `n` must be odd.
fn lowpass_kernel(n: usize, cutoff_hz: f64, sample_rate: f64) -> Vec<f64> {
    #[allow(clippy::cast_precision_loss)]
    let alpha = (n - 1) as f64 / 2.0;
    let fc = cutoff_hz / (sample_rate / 2.0);

    let mut h: Vec<f64> = (0..n)
        .map(|i| {
            #[allow(clippy::cast_precision_loss)]
            let x = i as f64 - alpha;
            let sinc = if x == 0.0 {
                fc
            } else {
                (PI * fc * x).sin() / (PI * x)
            };
            sinc * hamming(i, n)
        })
        .collect();

    let sum: f64 = h.iter().sum();
    h.iter_mut().for_each(|v| *v /= sum);
    h
}

/// Hamming window coefficient `i` of `n`.
fn hamming(i: usize, n: usize) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    let phase = 2.0 * PI * i as f64 / (n - 1) as f64;
    0.54 - 0.46 * phase.cos()
}

/// Convolve with the kernel and drop the group delay, padding the edges
/// by reflection so the output has the same length as the input.
fn filter_zero_phase(x: &[f64], kernel: &[f64]) -> Vec<f64> {
    let n = x.len();
    if n == 0 {
        return Vec::new();
    }
    let half = (kernel.len() - 1) / 2;

    let padded: Vec<f64> = reflect_pad(x, half);
    (0..n)
        .map(|t| {
            kernel
                .iter()
                .enumerate()
                .map(|(k, &c)| c * padded[t + k])
                .sum()
        })
        .collect()
}

/// Pad a signal with `pad` reflected samples on each side.
fn reflect_pad(x: &[f64], pad: usize) -> Vec<f64> {
    let n = x.len();
    let mut out = Vec::with_capacity(n + 2 * pad);
    for i in (0..pad).rev() {
        out.push(x[(i + 1).min(n - 1)]);
    }
    out.extend_from_slice(x);
    for i in 0..pad {
        out.push(x[n - 1 - (i + 1).min(n - 1)]);
    }
    out
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_bandpass_rejects_bad_band() {
        let mut data = Array2::zeros((1, 100));
        assert!(bandpass(&mut data, 500.0, 0.0, 55.0).is_err());
        assert!(bandpass(&mut data, 500.0, 55.0, 0.5).is_err());
        assert!(bandpass(&mut data, 100.0, 0.5, 55.0).is_err());
    }

    #[test]
    fn test_kernel_is_odd_and_capped() {
        let kernel = design_bandpass(0.5, 55.0, 500.0);
        assert_eq!(kernel.len() % 2, 1);
        assert!(kernel.len() <= MAX_TAPS);
    }

    #[test]
    fn test_dc_is_rejected() {
        // Band-pass kernels sum to ~0: constant signals are removed.
        let kernel = design_bandpass(1.0, 20.0, 200.0);
        let sum: f64 = kernel.iter().sum();
        assert!(sum.abs() < 1e-6);
    }

    #[test]
    fn test_in_band_tone_passes() {
        let rate = 200.0;
        #[allow(clippy::cast_precision_loss)]
        let mut data = Array2::from_shape_fn((1, 2000), |(_, t)| {
            (2.0 * PI * 10.0 * t as f64 / rate).sin()
        });
        bandpass(&mut data, rate, 1.0, 40.0).unwrap();
        // Interior amplitude should stay near 1.
        let peak = data
            .row(0)
            .iter()
            .skip(500)
            .take(1000)
            .fold(0.0_f64, |m, &v| m.max(v.abs()));
        assert!(peak > 0.8, "in-band tone attenuated to {peak}");
    }

    #[test]
    fn test_constant_signal_removed() {
        let mut data = Array2::from_elem((1, 2000), 5.0);
        bandpass(&mut data, 200.0, 1.0, 40.0).unwrap();
        let peak = data
            .row(0)
            .iter()
            .skip(500)
            .take(1000)
            .fold(0.0_f64, |m, &v| m.max(v.abs()));
        assert!(peak < 0.1, "DC leaked through: {peak}");
    }

    #[test]
    fn test_output_length_preserved() {
        let mut data = Array2::zeros((3, 777));
        bandpass(&mut data, 500.0, 0.5, 55.0).unwrap();
        assert_eq!(data.dim(), (3, 777));
    }
}
