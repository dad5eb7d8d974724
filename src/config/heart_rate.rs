// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the rust-heartrate project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

//! Heart rate estimation configuration
//!
//! This module defines the settings of the sample processor and of the
//! autocorrelation estimator.

use serde::{Deserialize, Serialize};

use crate::acquisition::Channel;
use crate::error::{HeartRateError, Result};

/// Configuration for heart rate estimation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeartRateConfig {
    /// Length of one analysis window in seconds
    #[serde(default = "default_window_seconds")]
    pub window_seconds: f64,

    /// Lowest heart rate searched for, in BPM
    #[serde(default = "default_min_heart_rate")]
    pub min_heart_rate: f64,

    /// Highest heart rate searched for, in BPM
    #[serde(default = "default_max_heart_rate")]
    pub max_heart_rate: f64,

    /// Seconds of samples used to measure the camera frame rate
    #[serde(default = "default_rate_estimation_seconds")]
    pub rate_estimation_seconds: f64,

    /// A shorter-lag autocorrelation peak replaces the dominant one when it
    /// reaches this fraction of the dominant peak
    #[serde(default = "default_alias_peak_ratio")]
    pub alias_peak_ratio: f64,

    /// A harmonic counts as present when its peak reaches this fraction of
    /// the fundamental peak
    #[serde(default = "default_harmonic_support_ratio")]
    pub harmonic_support_ratio: f64,

    /// Channels analysed and reported
    #[serde(default = "default_channels")]
    pub channels: Vec<Channel>,

    /// Drop the current segment when a sample reports the lens uncovered
    #[serde(default = "default_restart_on_uncovered_lens")]
    pub restart_on_uncovered_lens: bool,
}

// Default value functions
fn default_window_seconds() -> f64 {
    10.0
}

fn default_min_heart_rate() -> f64 {
    40.0
}

fn default_max_heart_rate() -> f64 {
    240.0
}

fn default_rate_estimation_seconds() -> f64 {
    1.0
}

fn default_alias_peak_ratio() -> f64 {
    0.7
}

fn default_harmonic_support_ratio() -> f64 {
    0.5
}

fn default_channels() -> Vec<Channel> {
    Channel::ALL.to_vec()
}

fn default_restart_on_uncovered_lens() -> bool {
    true
}

impl Default for HeartRateConfig {
    fn default() -> Self {
        Self {
            window_seconds: default_window_seconds(),
            min_heart_rate: default_min_heart_rate(),
            max_heart_rate: default_max_heart_rate(),
            rate_estimation_seconds: default_rate_estimation_seconds(),
            alias_peak_ratio: default_alias_peak_ratio(),
            harmonic_support_ratio: default_harmonic_support_ratio(),
            channels: default_channels(),
            restart_on_uncovered_lens: default_restart_on_uncovered_lens(),
        }
    }
}

impl HeartRateConfig {
    /// Check value ranges and consistency.
    ///
    /// A window must be longer than the slowest beat, otherwise no window
    /// could ever be analysed.
    pub fn validate(&self) -> Result<()> {
        let positive = |name: &str, value: f64| {
            if value.is_finite() && value > 0.0 {
                Ok(())
            } else {
                Err(HeartRateError::InvalidConfig(format!(
                    "{} must be a positive number, got {}",
                    name, value
                )))
            }
        };
        let ratio = |name: &str, value: f64| {
            if value.is_finite() && value > 0.0 && value <= 1.0 {
                Ok(())
            } else {
                Err(HeartRateError::InvalidConfig(format!(
                    "{} must be in (0, 1], got {}",
                    name, value
                )))
            }
        };

        positive("window_seconds", self.window_seconds)?;
        positive("min_heart_rate", self.min_heart_rate)?;
        positive("max_heart_rate", self.max_heart_rate)?;
        positive("rate_estimation_seconds", self.rate_estimation_seconds)?;
        ratio("alias_peak_ratio", self.alias_peak_ratio)?;
        ratio("harmonic_support_ratio", self.harmonic_support_ratio)?;

        if self.min_heart_rate >= self.max_heart_rate {
            return Err(HeartRateError::InvalidConfig(format!(
                "min_heart_rate ({}) must be lower than max_heart_rate ({})",
                self.min_heart_rate, self.max_heart_rate
            )));
        }
        if self.window_seconds <= 60.0 / self.min_heart_rate {
            return Err(HeartRateError::InvalidConfig(format!(
                "window_seconds ({}) must exceed one beat at min_heart_rate ({} s)",
                self.window_seconds,
                60.0 / self.min_heart_rate
            )));
        }
        if self.channels.is_empty() {
            return Err(HeartRateError::InvalidConfig(
                "at least one channel is required".to_string(),
            ));
        }
        Ok(())
    }
}
