// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the rust-heartrate project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

//! Rust Heart Rate library
//!
//! This library estimates the heart rate from camera pixel samples taken with
//! a fingertip covering the lens and the flash. Samples go through a
//! per-channel band-pass filter chain; windows of filtered values are
//! analysed by autocorrelation and the period is disambiguated from its
//! aliases.
//!
//! The entry point is [`processing::SampleProcessor`]:
//!
//! ```
//! use rust_heartrate::config::HeartRateConfig;
//! use rust_heartrate::processing::SampleProcessor;
//! use rust_heartrate::utility::ppg_generator::{PpgGenerator, PpgSignalSpec};
//!
//! let mut processor = SampleProcessor::new(HeartRateConfig::default()).unwrap();
//! let samples = PpgGenerator::new(1).generate(&PpgSignalSpec {
//!     sampling_rate: 30.0,
//!     duration: 15.0,
//!     ..PpgSignalSpec::default()
//! });
//! let emissions: Vec<_> = samples
//!     .into_iter()
//!     .flat_map(|sample| processor.advance(sample))
//!     .collect();
//! assert_eq!(emissions.len(), 3);
//! ```

pub mod acquisition;
pub mod config;
pub mod error;
pub mod estimation;
pub mod preprocessing;
pub mod processing;
pub mod utility;

use serde::{Deserialize, Serialize};

use acquisition::Channel;
use processing::Emission;

pub use error::{HeartRateError, Result};

/// Per-channel summary of a recording
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChannelSummary {
    pub channel: Channel,
    /// Windows analysed
    pub windows: usize,
    /// Windows with an estimate
    pub estimated_windows: usize,
    /// Confidence-weighted mean heart rate, if any window was estimated
    pub bpm: Option<f64>,
    /// Mean confidence over the estimated windows
    pub mean_confidence: f64,
}

/// Result of a heart rate analysis
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeartRateReport {
    /// Recording the report was computed from
    pub source: Option<String>,
    /// Sampling rate the processor locked onto
    pub sampling_rate: Option<f64>,
    /// One summary per reported channel
    pub summary: Vec<ChannelSummary>,
    /// Every emission, in order
    pub emissions: Vec<Emission>,
    /// Timestamp of the analysis
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

impl HeartRateReport {
    /// Build a report from the emissions of one run
    pub fn from_emissions(
        source: Option<String>,
        sampling_rate: Option<f64>,
        emissions: Vec<Emission>,
    ) -> Self {
        let summary = Channel::ALL
            .iter()
            .filter(|&&channel| emissions.iter().any(|e| e.channel == channel))
            .map(|&channel| summarize(channel, &emissions))
            .collect();

        Self {
            source,
            sampling_rate,
            summary,
            emissions,
            timestamp: chrono::Utc::now(),
        }
    }
}

fn summarize(channel: Channel, emissions: &[Emission]) -> ChannelSummary {
    let for_channel: Vec<&Emission> = emissions.iter().filter(|e| e.channel == channel).collect();
    let estimates: Vec<_> = for_channel
        .iter()
        .filter_map(|e| e.outcome.estimate())
        .collect();

    let weight: f64 = estimates.iter().map(|e| e.confidence).sum();
    let bpm = if estimates.is_empty() {
        None
    } else if weight > 0.0 {
        Some(estimates.iter().map(|e| e.bpm * e.confidence).sum::<f64>() / weight)
    } else {
        Some(estimates.iter().map(|e| e.bpm).sum::<f64>() / estimates.len() as f64)
    };
    let mean_confidence = if estimates.is_empty() {
        0.0
    } else {
        weight / estimates.len() as f64
    };

    ChannelSummary {
        channel,
        windows: for_channel.len(),
        estimated_windows: estimates.len(),
        bpm,
        mean_confidence,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::estimation::{EstimationOutcome, HeartRateEstimate};
    use approx::assert_relative_eq;

    fn emission(channel: Channel, index: usize, outcome: EstimationOutcome) -> Emission {
        Emission {
            channel,
            window_index: index,
            start_timestamp: index as f64 * 10.0,
            end_timestamp: index as f64 * 10.0 + 9.98,
            sampling_rate: 60.0,
            outcome,
        }
    }

    fn estimated(bpm: f64, confidence: f64) -> EstimationOutcome {
        EstimationOutcome::Estimated(HeartRateEstimate { bpm, confidence })
    }

    #[test]
    fn test_report_summary() {
        let emissions = vec![
            emission(Channel::Red, 0, estimated(70.0, 0.9)),
            emission(Channel::Blue, 0, EstimationOutcome::InsufficientData),
            emission(Channel::Red, 1, estimated(80.0, 0.1)),
            emission(Channel::Blue, 1, estimated(75.0, 0.0)),
        ];
        let report = HeartRateReport::from_emissions(Some("rec.json".into()), Some(60.0), emissions);

        assert_eq!(report.summary.len(), 2);
        let red = &report.summary[0];
        assert_eq!(red.channel, Channel::Red);
        assert_eq!(red.windows, 2);
        assert_eq!(red.estimated_windows, 2);
        assert_relative_eq!(red.bpm.unwrap(), 71.0, epsilon = 1e-9);
        assert_relative_eq!(red.mean_confidence, 0.5, epsilon = 1e-12);

        let blue = &report.summary[1];
        assert_eq!(blue.channel, Channel::Blue);
        assert_eq!(blue.estimated_windows, 1);
        assert_eq!(blue.bpm, Some(75.0));
        assert_eq!(blue.mean_confidence, 0.0);
    }

    #[test]
    fn test_empty_report() {
        let report = HeartRateReport::from_emissions(None, None, Vec::new());
        assert!(report.summary.is_empty());
        let json = serde_json::to_value(&report).unwrap();
        assert!(json["timestamp"].is_string());
    }
}
