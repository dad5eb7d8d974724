// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the rust-heartrate project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

//! Aliased autocorrelation peaks
//!
//! A periodic signal with period `P` samples has autocorrelation peaks at
//! every multiple of `P`. When the dominant peak was found at lag `L`, the
//! true period may be `L / k` (the dominant peak is a harmonic) and further
//! peaks are expected at `L · k`.

use serde::Serialize;

/// Lags at which aliases of a dominant peak are expected
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AliasedPeakResult {
    /// Dominant peak plus every alias in range
    pub n_peaks: usize,
    /// `round(L / k)` for `k ≥ 2`, decreasing, never below `min_lag`
    pub earlier: Vec<usize>,
    /// `L · k` for `k ≥ 2`, increasing, never above `max_lag`
    pub later: Vec<usize>,
}

/// Compute the aliases of the peak found at `actual_lag`.
///
/// `heart_rate` is the rate implied by `actual_lag` and must be positive, as
/// must `sampling_rate` and `actual_lag`.
///
/// # Examples
///
/// ```
/// use rust_heartrate::estimation::aliasing::get_aliasing_peak_location;
///
/// let result = get_aliasing_peak_location(60.0, 60, 60.0, 15, 90).unwrap();
/// assert_eq!(result.earlier, vec![30, 20, 15]);
/// assert!(result.later.is_empty());
/// assert_eq!(result.n_peaks, 4);
/// ```
pub fn get_aliasing_peak_location(
    heart_rate: f64,
    actual_lag: usize,
    sampling_rate: f64,
    min_lag: usize,
    max_lag: usize,
) -> Option<AliasedPeakResult> {
    let valid = |v: f64| v.is_finite() && v > 0.0;
    if !valid(heart_rate) || !valid(sampling_rate) || actual_lag == 0 {
        return None;
    }

    let mut earlier: Vec<usize> = Vec::new();
    for k in 2.. {
        // integer division rounding half up
        let candidate = (actual_lag + k / 2) / k;
        if candidate == 0 || candidate < min_lag {
            break;
        }
        if earlier.last() != Some(&candidate) {
            earlier.push(candidate);
        }
    }

    let later: Vec<usize> = (2..)
        .map(|k| actual_lag * k)
        .take_while(|&lag| lag <= max_lag)
        .collect();

    Some(AliasedPeakResult {
        n_peaks: 1 + earlier.len() + later.len(),
        earlier,
        later,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_harmonic_aliases_only() {
        let result = get_aliasing_peak_location(150.0, 24, 60.0, 15, 90).unwrap();
        assert_eq!(result.n_peaks, 3);
        assert!(result.earlier.is_empty());
        assert_eq!(result.later, vec![48, 72]);
    }

    #[test]
    fn test_sub_harmonic_aliases_only() {
        let result = get_aliasing_peak_location(60.0, 60, 60.0, 15, 90).unwrap();
        assert_eq!(result.n_peaks, 4);
        assert_eq!(result.earlier, vec![30, 20, 15]);
        assert!(result.later.is_empty());
    }

    #[test]
    fn test_rounded_divisors_are_unique() {
        let result = get_aliasing_peak_location(40.0, 45, 30.0, 7, 45).unwrap();
        // 45/2 -> 23, 45/3 -> 15, 45/4 -> 11, 45/5 -> 9, 45/6 -> 8, 45/7 -> 6 stops
        assert_eq!(result.earlier, vec![23, 15, 11, 9, 8]);
        assert!(result.earlier.windows(2).all(|w| w[0] > w[1]));
    }

    #[test]
    fn test_zero_min_lag_terminates() {
        let result = get_aliasing_peak_location(60.0, 4, 4.0, 0, 4).unwrap();
        assert_eq!(result.earlier, vec![2, 1]);
        assert_eq!(result.n_peaks, 3);
    }

    #[test]
    fn test_invalid_inputs() {
        assert!(get_aliasing_peak_location(0.0, 24, 60.0, 15, 90).is_none());
        assert!(get_aliasing_peak_location(-72.0, 24, 60.0, 15, 90).is_none());
        assert!(get_aliasing_peak_location(f64::NAN, 24, 60.0, 15, 90).is_none());
        assert!(get_aliasing_peak_location(72.0, 0, 60.0, 15, 90).is_none());
        assert!(get_aliasing_peak_location(72.0, 24, 0.0, 15, 90).is_none());
    }
}
