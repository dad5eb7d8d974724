// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the rust-heartrate project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

//! Window preprocessing and dominant peak search
//!
//! A filtered window is turned into its normalized autocorrelation over the
//! lags that correspond to plausible heart rates. The dominant peak of the
//! smoothed autocorrelation gives the initial heart rate guess.

use crate::utility::signal::{autocorrelation, mean, moving_mean_filter};

/// Range of autocorrelation lags (in samples) searched for a heart beat
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LagRange {
    /// Lag of the highest heart rate, `floor(fs·60 / max_hr)`
    pub min_lag: usize,
    /// Lag of the lowest heart rate, `ceil(fs·60 / min_hr)`
    pub max_lag: usize,
}

impl LagRange {
    /// Lag range for a sampling rate and heart rate limits in BPM.
    ///
    /// Returns `None` for non-positive or non-finite inputs, when the limits
    /// are reversed, or when the range collapses to a single lag.
    pub fn new(sampling_rate: f64, min_heart_rate: f64, max_heart_rate: f64) -> Option<Self> {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        if !valid(sampling_rate) || !valid(min_heart_rate) || !valid(max_heart_rate) {
            return None;
        }
        if min_heart_rate >= max_heart_rate {
            return None;
        }

        let min_lag = (sampling_rate * 60.0 / max_heart_rate).floor() as usize;
        let max_lag = (sampling_rate * 60.0 / min_heart_rate).ceil() as usize;
        if min_lag >= max_lag {
            return None;
        }
        Some(Self { min_lag, max_lag })
    }
}

/// Normalized autocorrelation of one analysis window
#[derive(Debug, Clone, PartialEq)]
pub struct PreprocessedWindow {
    /// Autocorrelation for lags `0..=max_lag`, `x[0] == 1`
    pub x: Vec<f64>,
    /// 3-point moving mean of `x`, first and last values copied from `x`
    pub y: Vec<f64>,
    pub min_lag: usize,
    pub max_lag: usize,
}

/// Dominant peak of the smoothed autocorrelation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub y_min: f64,
    pub y_max: f64,
    pub y_max_pos: usize,
    /// `60·fs / y_max_pos`
    pub hr_initial_guess: f64,
}

/// Prepare a filtered window for the peak search.
///
/// The chunk is mean-centered, autocorrelated and normalized by its energy.
/// Returns `None` when the chunk does not cover `max_lag`, when the sampling
/// rate is invalid or when the chunk is constant.
pub fn preprocess(chunk: &[f64], sampling_rate: f64, lags: LagRange) -> Option<PreprocessedWindow> {
    if !sampling_rate.is_finite() || sampling_rate <= 0.0 {
        return None;
    }
    if chunk.len() <= lags.max_lag {
        return None;
    }

    let chunk_mean = mean(chunk)?;
    let centered: Vec<f64> = chunk.iter().map(|v| v - chunk_mean).collect();
    let acf = autocorrelation(&centered);
    let zero_lag = chunk.len() - 1;
    let energy = acf[zero_lag];
    if !energy.is_finite() || energy <= 0.0 {
        return None;
    }

    let x: Vec<f64> = acf[zero_lag..=zero_lag + lags.max_lag]
        .iter()
        .map(|v| v / energy)
        .collect();

    let mut y = Vec::with_capacity(x.len());
    y.push(x[0]);
    y.extend(moving_mean_filter(&x, 3));
    if x.len() > 1 {
        y.push(x[x.len() - 1]);
    }

    Some(PreprocessedWindow {
        x,
        y,
        min_lag: lags.min_lag,
        max_lag: lags.max_lag,
    })
}

/// Locate the highest value of `y` between `min_lag` and `max_lag`.
///
/// Ties go to the smallest lag. Returns `None` when the search range is
/// empty or starts at lag 0.
pub fn get_bounds(y: &[f64], sampling_rate: f64, lags: LagRange) -> Option<Bounds> {
    if lags.min_lag == 0 || y.is_empty() {
        return None;
    }
    let upper = lags.max_lag.min(y.len() - 1);
    if lags.min_lag > upper {
        return None;
    }

    let mut y_max_pos = lags.min_lag;
    let mut y_max = y[lags.min_lag];
    let mut y_min = y[lags.min_lag];
    for (lag, &value) in y.iter().enumerate().take(upper + 1).skip(lags.min_lag) {
        if value > y_max {
            y_max = value;
            y_max_pos = lag;
        }
        if value < y_min {
            y_min = value;
        }
    }

    Some(Bounds {
        y_min,
        y_max,
        y_max_pos,
        hr_initial_guess: 60.0 * sampling_rate / y_max_pos as f64,
    })
}

/// Highest value of `x` within `max(1, lag/10)` samples of `lag`.
///
/// The neighbourhood is clamped to the lag range and to `x`. Returns the
/// position and value of the first maximum.
pub fn local_peak(x: &[f64], lag: usize, lags: LagRange) -> Option<(usize, f64)> {
    if x.is_empty() {
        return None;
    }
    let tolerance = (lag / 10).max(1);
    let lower = lag.saturating_sub(tolerance).max(lags.min_lag);
    let upper = (lag + tolerance).min(lags.max_lag).min(x.len() - 1);
    if lower > upper {
        return None;
    }

    let mut best = (lower, x[lower]);
    for (pos, &value) in x.iter().enumerate().take(upper + 1).skip(lower) {
        if value > best.1 {
            best = (pos, value);
        }
    }
    Some(best)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn sine(period: f64, n: usize) -> Vec<f64> {
        (0..n)
            .map(|i| (2.0 * std::f64::consts::PI * i as f64 / period).sin())
            .collect()
    }

    #[test]
    fn test_lag_range() {
        assert_eq!(
            LagRange::new(60.0, 40.0, 240.0),
            Some(LagRange { min_lag: 15, max_lag: 90 })
        );
        assert_eq!(
            LagRange::new(9.0, 40.0, 240.0),
            Some(LagRange { min_lag: 2, max_lag: 14 })
        );
        assert_eq!(LagRange::new(0.0, 40.0, 240.0), None);
        assert_eq!(LagRange::new(60.0, 240.0, 40.0), None);
        assert_eq!(LagRange::new(60.0, f64::NAN, 240.0), None);
    }

    #[test]
    fn test_preprocess_normalization() {
        let lags = LagRange::new(30.0, 40.0, 240.0).unwrap();
        let window = preprocess(&sine(25.0, 300), 30.0, lags).unwrap();
        assert_eq!(window.x.len(), lags.max_lag + 1);
        assert_eq!(window.y.len(), window.x.len());
        assert_relative_eq!(window.x[0], 1.0);
        assert_eq!(window.y[0], window.x[0]);
        assert_eq!(window.y[lags.max_lag], window.x[lags.max_lag]);
        assert_relative_eq!(
            window.y[10],
            (window.x[9] + window.x[10] + window.x[11]) / 3.0,
            epsilon = 1e-12
        );
        assert!(window.x.iter().all(|v| v.abs() <= 1.0 + 1e-12));
    }

    #[test]
    fn test_preprocess_rejects_degenerate_chunks() {
        let lags = LagRange::new(30.0, 40.0, 240.0).unwrap();
        // max_lag = 45
        assert!(preprocess(&sine(25.0, 45), 30.0, lags).is_none());
        assert!(preprocess(&sine(25.0, 46), 30.0, lags).is_some());
        assert!(preprocess(&[3.0; 100], 30.0, lags).is_none());
        assert!(preprocess(&sine(25.0, 100), f64::NAN, lags).is_none());
        assert!(preprocess(&[], 30.0, lags).is_none());
    }

    #[test]
    fn test_bounds_find_period() {
        let lags = LagRange::new(60.0, 40.0, 240.0).unwrap();
        let window = preprocess(&sine(50.0, 600), 60.0, lags).unwrap();
        let bounds = get_bounds(&window.y, 60.0, lags).unwrap();
        assert_eq!(bounds.y_max_pos, 50);
        assert_relative_eq!(bounds.hr_initial_guess, 72.0);
        assert!(bounds.y_min < 0.0);
        assert!(bounds.y_max > 0.8);
    }

    #[test]
    fn test_bounds_first_maximum_wins() {
        let lags = LagRange { min_lag: 2, max_lag: 6 };
        let y = [1.0, 0.5, 0.1, 0.7, 0.2, 0.7, 0.0];
        let bounds = get_bounds(&y, 10.0, lags).unwrap();
        assert_eq!(bounds.y_max_pos, 3);
        assert_eq!(bounds.y_min, 0.0);
    }

    #[test]
    fn test_bounds_empty_range() {
        let lags = LagRange { min_lag: 5, max_lag: 9 };
        assert!(get_bounds(&[1.0, 0.5, 0.2], 30.0, lags).is_none());
        assert!(get_bounds(&[], 30.0, lags).is_none());
        let zero = LagRange { min_lag: 0, max_lag: 9 };
        assert!(get_bounds(&[1.0; 10], 30.0, zero).is_none());
    }

    #[test]
    fn test_local_peak() {
        let lags = LagRange { min_lag: 2, max_lag: 40 };
        let mut x = vec![0.0; 41];
        x[21] = 0.9;
        assert_eq!(local_peak(&x, 20, lags), Some((21, 0.9)));
        assert_eq!(local_peak(&x, 30, lags), Some((27, 0.0)));
        // clamped at min_lag
        assert_eq!(local_peak(&x, 2, lags).map(|p| p.0), Some(2));
    }
}
