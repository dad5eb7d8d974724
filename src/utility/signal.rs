// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the rust-heartrate project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

//! Generic array operations used by the heart rate pipeline
//!
//! All functions work on `f64` slices and allocate their output. They are
//! direct (time-domain) implementations: the windows analysed by the
//! pipeline are a few hundred samples long, so an FFT would not pay off and
//! the direct sums keep integer inputs exact.
//!
//! # Examples
//!
//! ```
//! use rust_heartrate::utility::signal::{autocorrelation, convolution, ConvolutionMode};
//!
//! let acf = autocorrelation(&[1.0, 2.0, 3.0]);
//! assert_eq!(acf, vec![3.0, 8.0, 14.0, 8.0, 3.0]);
//!
//! let same = convolution(&[1.0, 2.0, 3.0], &[1.0, 1.0, 1.0], ConvolutionMode::Same);
//! assert_eq!(same, vec![3.0, 6.0, 5.0]);
//! ```

/// Output alignment for [`convolution`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConvolutionMode {
    /// The complete result, `len(u) + len(v) - 1` samples
    Full,
    /// The central part of the full result with the length of `u`
    Same,
}

/// Full cross-correlation of a signal with itself.
///
/// The result has `2n - 1` samples and is symmetric about index `n - 1`,
/// which holds the sum of squares (lag 0). An empty input gives an empty
/// output.
pub fn autocorrelation(x: &[f64]) -> Vec<f64> {
    let n = x.len();
    if n == 0 {
        return Vec::new();
    }

    let mut result = vec![0.0; 2 * n - 1];
    for lag in 0..n {
        let value: f64 = x[..n - lag]
            .iter()
            .zip(&x[lag..])
            .map(|(a, b)| a * b)
            .sum();
        result[n - 1 + lag] = value;
        result[n - 1 - lag] = value;
    }
    result
}

/// Discrete convolution of `u` and `v`.
///
/// In [`ConvolutionMode::Same`] the result keeps `len(u)` samples taken from
/// the full convolution starting at index `len(v) / 2`.
pub fn convolution(u: &[f64], v: &[f64], mode: ConvolutionMode) -> Vec<f64> {
    if u.is_empty() || v.is_empty() {
        return Vec::new();
    }

    let mut full = vec![0.0; u.len() + v.len() - 1];
    for (i, &a) in u.iter().enumerate() {
        for (j, &b) in v.iter().enumerate() {
            full[i + j] += a * b;
        }
    }

    match mode {
        ConvolutionMode::Full => full,
        ConvolutionMode::Same => {
            let start = v.len() / 2;
            full[start..start + u.len()].to_vec()
        }
    }
}

/// Prepend `count` zeros to `x`
pub fn zero_pad_before(x: &[f64], count: usize) -> Vec<f64> {
    let mut padded = vec![0.0; count];
    padded.extend_from_slice(x);
    padded
}

/// Append `count` zeros to `x`
pub fn zero_pad_after(x: &[f64], count: usize) -> Vec<f64> {
    let mut padded = Vec::with_capacity(x.len() + count);
    padded.extend_from_slice(x);
    padded.resize(x.len() + count, 0.0);
    padded
}

/// Centered moving average of `order` samples.
///
/// Samples closer than `order / 2` to either boundary have no complete
/// neighbourhood and are dropped, so the output holds
/// `len(x) - (order - 1)` values; output `i` is the mean of
/// `x[i..i + order]`. Returns an empty vector when `order` is zero or longer
/// than the input.
pub fn moving_mean_filter(x: &[f64], order: usize) -> Vec<f64> {
    if order == 0 || x.len() < order {
        return Vec::new();
    }
    x.windows(order)
        .map(|window| window.iter().sum::<f64>() / order as f64)
        .collect()
}

/// Arithmetic mean, `None` for an empty slice
pub fn mean(x: &[f64]) -> Option<f64> {
    if x.is_empty() {
        None
    } else {
        Some(x.iter().sum::<f64>() / x.len() as f64)
    }
}

/// Split `x` into complete windows of `window_len` samples, one every `step`.
///
/// `step == window_len` gives back-to-back windows; a smaller step makes
/// them overlap. A trailing partial window is not returned.
pub fn chunk_samples(x: &[f64], window_len: usize, step: usize) -> Vec<&[f64]> {
    if window_len == 0 || step == 0 || x.len() < window_len {
        return Vec::new();
    }
    (0..=x.len() - window_len)
        .step_by(step)
        .map(|start| &x[start..start + window_len])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp(n: usize) -> Vec<f64> {
        (1..=n).map(|i| i as f64).collect()
    }

    #[test]
    fn test_autocorrelation_reference() {
        let expected = vec![
            10.0, 29.0, 56.0, 90.0, 130.0, 175.0, 224.0, 276.0, 330.0, 385.0, 330.0, 276.0, 224.0,
            175.0, 130.0, 90.0, 56.0, 29.0, 10.0,
        ];
        assert_eq!(autocorrelation(&ramp(10)), expected);
    }

    #[test]
    fn test_autocorrelation_empty_and_single() {
        assert!(autocorrelation(&[]).is_empty());
        assert_eq!(autocorrelation(&[3.0]), vec![9.0]);
    }

    #[test]
    fn test_convolution_same_reference() {
        let result = convolution(&ramp(10), &ramp(15), ConvolutionMode::Same);
        assert_eq!(
            result,
            vec![120.0, 165.0, 220.0, 275.0, 330.0, 385.0, 440.0, 495.0, 534.0, 556.0]
        );
    }

    #[test]
    fn test_convolution_full_length() {
        let result = convolution(&ramp(4), &ramp(3), ConvolutionMode::Full);
        assert_eq!(result, vec![1.0, 4.0, 10.0, 16.0, 17.0, 12.0]);
    }

    #[test]
    fn test_convolution_empty_input() {
        assert!(convolution(&[], &ramp(3), ConvolutionMode::Full).is_empty());
        assert!(convolution(&ramp(3), &[], ConvolutionMode::Same).is_empty());
    }

    #[test]
    fn test_zero_padding() {
        assert_eq!(zero_pad_before(&[1.0, 2.0], 2), vec![0.0, 0.0, 1.0, 2.0]);
        assert_eq!(zero_pad_after(&[1.0, 2.0], 3), vec![1.0, 2.0, 0.0, 0.0, 0.0]);
        assert_eq!(zero_pad_after(&[], 0), Vec::<f64>::new());
    }

    #[test]
    fn test_moving_mean_filter_drops_edges() {
        let result = moving_mean_filter(&ramp(7), 3);
        assert_eq!(result, vec![2.0, 3.0, 4.0, 5.0, 6.0]);
        assert_eq!(result.len(), 7 - (3 - 1));

        assert!(moving_mean_filter(&ramp(2), 3).is_empty());
        assert!(moving_mean_filter(&ramp(5), 0).is_empty());
    }

    #[test]
    fn test_chunk_samples() {
        let x = ramp(10);
        let windows = chunk_samples(&x, 4, 4);
        assert_eq!(windows.len(), 2);
        assert_eq!(windows[1], &[5.0, 6.0, 7.0, 8.0]);

        let overlapping = chunk_samples(&x, 4, 2);
        assert_eq!(overlapping.len(), 4);
        assert_eq!(overlapping[3], &[7.0, 8.0, 9.0, 10.0]);

        assert!(chunk_samples(&x, 11, 1).is_empty());
    }

    #[test]
    fn test_mean() {
        assert_eq!(mean(&[1.0, 2.0, 3.0]), Some(2.0));
        assert_eq!(mean(&[]), None);
    }
}
