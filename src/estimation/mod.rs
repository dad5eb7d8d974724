// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the rust-heartrate project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

//! Heart rate estimation module
//!
//! This module turns a window of filtered channel values into a heart rate
//! and a confidence score:
//!
//! 1. the window is preprocessed into its normalized autocorrelation
//!    ([`autocorrelation::preprocess`])
//! 2. the dominant peak of the smoothed autocorrelation gives a first guess
//!    ([`autocorrelation::get_bounds`])
//! 3. the aliases of that peak are enumerated
//!    ([`aliasing::get_aliasing_peak_location`]); a strong peak at a shorter
//!    lag means the dominant peak was a harmonic of the real period
//! 4. the confidence is the autocorrelation at the retained period; when
//!    the dominant peak has aliases in range (`n_peaks > 1`) it is weighted
//!    by how many of the expected harmonics are present
//!
//! # Examples
//!
//! ```
//! use rust_heartrate::estimation::{EstimationOutcome, HeartRateEstimator};
//!
//! let estimator = HeartRateEstimator::default();
//! let outcome = estimator.get_hr(&[0.0; 10], 30.0);
//! assert_eq!(outcome, EstimationOutcome::InsufficientData);
//! assert_eq!(outcome.bpm_and_confidence(), (0.0, 0.0));
//! ```

pub mod aliasing;
pub mod autocorrelation;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::acquisition::{Channel, PixelSample};
use crate::config::HeartRateConfig;
use crate::error::Result;
use crate::preprocessing::{filter_delay, filter_signal, is_valid_sampling_rate};
use crate::processing::calculate_sampling_rate;
use crate::utility::signal::chunk_samples;

use aliasing::get_aliasing_peak_location;
use autocorrelation::{local_peak, Bounds, LagRange, PreprocessedWindow};

/// A successful estimate
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeartRateEstimate {
    /// Beats per minute
    pub bpm: f64,
    /// Confidence in `[0, 1]`
    pub confidence: f64,
}

/// Result of analysing one window
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum EstimationOutcome {
    Estimated(HeartRateEstimate),
    /// The window is too short, constant, or has no usable peak
    InsufficientData,
    /// No filter coefficients exist for the measured rate
    UnsupportedRate { sampling_rate: f64 },
}

impl EstimationOutcome {
    /// `(bpm, confidence)`, or `(0, 0)` when nothing was estimated
    pub fn bpm_and_confidence(&self) -> (f64, f64) {
        match self {
            EstimationOutcome::Estimated(estimate) => (estimate.bpm, estimate.confidence),
            _ => (0.0, 0.0),
        }
    }

    pub fn estimate(&self) -> Option<HeartRateEstimate> {
        match self {
            EstimationOutcome::Estimated(estimate) => Some(*estimate),
            _ => None,
        }
    }

    pub fn is_estimated(&self) -> bool {
        matches!(self, EstimationOutcome::Estimated(_))
    }
}

/// Autocorrelation based heart rate estimator
#[derive(Debug, Clone, PartialEq)]
pub struct HeartRateEstimator {
    min_heart_rate: f64,
    max_heart_rate: f64,
    alias_peak_ratio: f64,
    harmonic_support_ratio: f64,
    window_seconds: f64,
}

impl Default for HeartRateEstimator {
    fn default() -> Self {
        let config = HeartRateConfig::default();
        Self {
            min_heart_rate: config.min_heart_rate,
            max_heart_rate: config.max_heart_rate,
            alias_peak_ratio: config.alias_peak_ratio,
            harmonic_support_ratio: config.harmonic_support_ratio,
            window_seconds: config.window_seconds,
        }
    }
}

impl HeartRateEstimator {
    /// Create an estimator from a validated configuration
    pub fn new(config: &HeartRateConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            min_heart_rate: config.min_heart_rate,
            max_heart_rate: config.max_heart_rate,
            alias_peak_ratio: config.alias_peak_ratio,
            harmonic_support_ratio: config.harmonic_support_ratio,
            window_seconds: config.window_seconds,
        })
    }

    /// Autocorrelation lags matching the configured heart rate limits
    pub fn lag_range(&self, sampling_rate: f64) -> Option<LagRange> {
        LagRange::new(sampling_rate, self.min_heart_rate, self.max_heart_rate)
    }

    /// Samples per analysis window at `sampling_rate`
    pub fn window_len(&self, sampling_rate: f64) -> usize {
        let len = (self.window_seconds * sampling_rate).round();
        if len.is_finite() && len > 0.0 {
            len as usize
        } else {
            0
        }
    }

    pub fn preprocess(&self, chunk: &[f64], sampling_rate: f64) -> Option<PreprocessedWindow> {
        autocorrelation::preprocess(chunk, sampling_rate, self.lag_range(sampling_rate)?)
    }

    pub fn get_bounds(&self, y: &[f64], sampling_rate: f64) -> Option<Bounds> {
        autocorrelation::get_bounds(y, sampling_rate, self.lag_range(sampling_rate)?)
    }

    /// Estimate the heart rate of one filtered window
    pub fn get_hr(&self, chunk: &[f64], sampling_rate: f64) -> EstimationOutcome {
        let Some(window) = self.preprocess(chunk, sampling_rate) else {
            return EstimationOutcome::InsufficientData;
        };
        let lags = LagRange {
            min_lag: window.min_lag,
            max_lag: window.max_lag,
        };
        let Some(bounds) = autocorrelation::get_bounds(&window.y, sampling_rate, lags) else {
            return EstimationOutcome::InsufficientData;
        };
        let Some(aliases) = get_aliasing_peak_location(
            bounds.hr_initial_guess,
            bounds.y_max_pos,
            sampling_rate,
            lags.min_lag,
            lags.max_lag,
        ) else {
            return EstimationOutcome::InsufficientData;
        };

        // The shortest lag with a strong enough peak is the real period
        let dominant = window.x[bounds.y_max_pos];
        let (fundamental, peak) = aliases
            .earlier
            .iter()
            .rev()
            .filter_map(|&candidate| local_peak(&window.x, candidate, lags))
            .find(|&(_, value)| value >= self.alias_peak_ratio * dominant)
            .unwrap_or((bounds.y_max_pos, dominant));

        // A lone peak has no harmonic to check and keeps its full value
        let (supported, harmonics) = if aliases.n_peaks == 1 {
            (0, 0)
        } else {
            self.harmonic_support(&window.x, fundamental, peak, lags)
        };

        let confidence =
            peak.clamp(0.0, 1.0) * (1 + supported) as f64 / (1 + harmonics) as f64;
        let bpm = 60.0 * sampling_rate / fundamental as f64;
        debug!(
            "Dominant lag {} ({} peaks), period {} samples, {}/{} harmonics: {:.1} BPM, confidence {:.3}",
            bounds.y_max_pos, aliases.n_peaks, fundamental, supported, harmonics, bpm, confidence
        );

        EstimationOutcome::Estimated(HeartRateEstimate { bpm, confidence })
    }

    /// Count the multiples of `period` in range and those with a strong peak
    fn harmonic_support(
        &self,
        x: &[f64],
        period: usize,
        peak: f64,
        lags: LagRange,
    ) -> (usize, usize) {
        let mut harmonics = 0usize;
        let mut supported = 0usize;
        for lag in (2..)
            .map(|k| period * k)
            .take_while(|&lag| lag <= lags.max_lag)
        {
            harmonics += 1;
            if local_peak(x, lag, lags)
                .is_some_and(|(_, value)| value >= self.harmonic_support_ratio * peak)
            {
                supported += 1;
            }
        }
        (supported, harmonics)
    }

    /// Estimate every complete window of a recording.
    ///
    /// The whole recording is filtered at its average sampling rate and cut
    /// into non-overlapping windows. Each window is analysed at the sampling
    /// rate measured on the raw samples it was computed from; a window whose
    /// rate is not supported yields [`EstimationOutcome::UnsupportedRate`].
    pub fn estimate_recording(
        &self,
        samples: &[PixelSample],
        channel: Channel,
    ) -> Vec<EstimationOutcome> {
        let Some(sampling_rate) = calculate_sampling_rate(samples) else {
            return Vec::new();
        };
        let delay = match filter_delay(sampling_rate) {
            Some(delay) if is_valid_sampling_rate(sampling_rate) => delay,
            _ => return vec![EstimationOutcome::UnsupportedRate { sampling_rate }],
        };

        let values: Vec<f64> = samples.iter().map(|s| s.value(channel)).collect();
        let Some(filtered) = filter_signal(&values, sampling_rate) else {
            return vec![EstimationOutcome::UnsupportedRate { sampling_rate }];
        };

        let window_len = self.window_len(sampling_rate);
        chunk_samples(&filtered, window_len, window_len)
            .into_iter()
            .enumerate()
            .map(|(index, chunk)| {
                let start = index * window_len + delay;
                let raw = &samples[start..start + window_len];
                match calculate_sampling_rate(raw) {
                    Some(rate) if is_valid_sampling_rate(rate) => self.get_hr(chunk, rate),
                    rate => EstimationOutcome::UnsupportedRate {
                        sampling_rate: rate.unwrap_or(0.0),
                    },
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utility::ppg_generator::{PpgGenerator, PpgSignalSpec};

    fn pulse(bpm: f64, rate: f64, n: usize) -> Vec<f64> {
        let f = bpm / 60.0;
        (0..n)
            .map(|i| {
                let phase = 2.0 * std::f64::consts::PI * f * i as f64 / rate;
                phase.sin() + 0.4 * (2.0 * phase + 0.7).sin()
            })
            .collect()
    }

    #[test]
    fn test_clean_pulse() {
        let estimator = HeartRateEstimator::default();
        let outcome = estimator.get_hr(&pulse(72.0, 60.0, 600), 60.0);
        let estimate = outcome.estimate().unwrap();
        assert!((estimate.bpm - 72.0).abs() < 1.0, "bpm {}", estimate.bpm);
        assert!(estimate.confidence > 0.5 && estimate.confidence <= 1.0);
    }

    #[test]
    fn test_slow_pulse_with_dicrotic_wave() {
        // 45 BPM at 30 Hz, period 40 samples close to max_lag 45
        let estimator = HeartRateEstimator::default();
        let outcome = estimator.get_hr(&pulse(45.0, 30.0, 300), 30.0);
        let (bpm, _) = outcome.bpm_and_confidence();
        assert!((bpm - 45.0).abs() < 2.0, "bpm {}", bpm);
    }

    #[test]
    fn test_lone_peak_keeps_full_confidence() {
        // 50-90 BPM at 30 Hz: lags 20..=36, so a 25-sample period has no alias
        let config = HeartRateConfig {
            min_heart_rate: 50.0,
            max_heart_rate: 90.0,
            ..HeartRateConfig::default()
        };
        let estimator = HeartRateEstimator::new(&config).unwrap();
        let chunk = pulse(72.0, 30.0, 300);

        let window = estimator.preprocess(&chunk, 30.0).unwrap();
        let bounds = estimator.get_bounds(&window.y, 30.0).unwrap();
        let aliases = get_aliasing_peak_location(
            bounds.hr_initial_guess,
            bounds.y_max_pos,
            30.0,
            window.min_lag,
            window.max_lag,
        )
        .unwrap();
        assert_eq!(aliases.n_peaks, 1);

        let estimate = estimator.get_hr(&chunk, 30.0).estimate().unwrap();
        assert_eq!(estimate.bpm, 60.0 * 30.0 / bounds.y_max_pos as f64);
        assert_eq!(estimate.confidence, window.x[bounds.y_max_pos].clamp(0.0, 1.0));
    }

    #[test]
    fn test_short_or_flat_window() {
        let estimator = HeartRateEstimator::default();
        assert_eq!(
            estimator.get_hr(&pulse(72.0, 60.0, 90), 60.0),
            EstimationOutcome::InsufficientData
        );
        assert_eq!(
            estimator.get_hr(&[1.0; 600], 60.0),
            EstimationOutcome::InsufficientData
        );
        assert_eq!(
            estimator.get_hr(&pulse(72.0, 60.0, 600), 0.0),
            EstimationOutcome::InsufficientData
        );
    }

    #[test]
    fn test_outcome_sentinel() {
        let unsupported = EstimationOutcome::UnsupportedRate { sampling_rate: 5.0 };
        assert_eq!(unsupported.bpm_and_confidence(), (0.0, 0.0));
        assert!(!unsupported.is_estimated());

        let estimated = EstimationOutcome::Estimated(HeartRateEstimate {
            bpm: 80.0,
            confidence: 0.9,
        });
        assert_eq!(estimated.bpm_and_confidence(), (80.0, 0.9));
        assert!(estimated.is_estimated());
    }

    #[test]
    fn test_outcome_serialization() {
        let json = serde_json::to_value(EstimationOutcome::Estimated(HeartRateEstimate {
            bpm: 72.0,
            confidence: 0.5,
        }))
        .unwrap();
        assert_eq!(json["status"], "estimated");
        assert_eq!(json["bpm"], 72.0);

        let json = serde_json::to_value(EstimationOutcome::InsufficientData).unwrap();
        assert_eq!(json["status"], "insufficient_data");
    }

    #[test]
    fn test_estimate_recording() {
        let spec = PpgSignalSpec {
            heart_rate: 72.0,
            sampling_rate: 30.0,
            duration: 25.0,
            ..PpgSignalSpec::default()
        };
        let samples = PpgGenerator::new(11).generate(&spec);
        let outcomes = HeartRateEstimator::default().estimate_recording(&samples, Channel::Red);
        // 750 samples, 60 trimmed, 32 dropped by the mean filter: 2 windows of 300
        assert_eq!(outcomes.len(), 2);
        for outcome in outcomes {
            let (bpm, confidence) = outcome.bpm_and_confidence();
            assert!((bpm - 72.0).abs() < 2.0, "bpm {}", bpm);
            assert!(confidence > 0.3);
        }
    }

    #[test]
    fn test_estimate_recording_unsupported_rate() {
        let samples: Vec<PixelSample> = (0..100)
            .map(|i| PixelSample::new(i as f64 / 120.0, 1.0, 1.0, 1.0))
            .collect();
        let outcomes = HeartRateEstimator::default().estimate_recording(&samples, Channel::Green);
        assert_eq!(outcomes.len(), 1);
        assert!(matches!(outcomes[0], EstimationOutcome::UnsupportedRate { .. }));

        assert!(HeartRateEstimator::default()
            .estimate_recording(&samples[..1], Channel::Green)
            .is_empty());
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let config = HeartRateConfig {
            min_heart_rate: 200.0,
            max_heart_rate: 100.0,
            ..HeartRateConfig::default()
        };
        assert!(HeartRateEstimator::new(&config).is_err());
        assert!(HeartRateEstimator::new(&HeartRateConfig::default()).is_ok());
    }
}
