// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the rust-heartrate project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

//! Streaming sample processor
//!
//! [`SampleProcessor`] receives pixel samples one at a time. It first
//! buffers samples until the camera frame rate can be measured, then locks
//! onto that rate, builds one filter chain per channel and replays the
//! buffered samples through them. Every complete, non-overlapping window of
//! filtered values is analysed and reported as one [`Emission`] per channel.
//!
//! ```text
//!            sample                  rate measured
//!   Idle ──────────────► Buffering ─────────────────► Streaming
//!                            │                            ▲
//!                            │ rate not supported         │ rate supported
//!                            ▼                            │
//!                      UnsupportedRate ───────────────────┘
//! ```
//!
//! When the lens stops being covered the current segment is dropped and the
//! processor goes back to `Idle`.

pub mod channel;

use std::fmt;

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::acquisition::{Channel, PixelSample};
use crate::config::HeartRateConfig;
use crate::error::Result;
use crate::estimation::{EstimationOutcome, HeartRateEstimator};
use crate::preprocessing::filters::table_rate;
use crate::preprocessing::{is_valid_sampling_rate, validate_tables};

pub use channel::ChannelEstimator;

/// Average sampling rate of a run of samples, `(n − 1) / (t_last − t_first)`.
///
/// Returns `None` with fewer than two samples or a non-positive time span.
pub fn calculate_sampling_rate(samples: &[PixelSample]) -> Option<f64> {
    let (first, last) = (samples.first()?, samples.last()?);
    let span = last.timestamp - first.timestamp;
    if samples.len() < 2 || !span.is_finite() || span <= 0.0 {
        return None;
    }
    Some((samples.len() - 1) as f64 / span)
}

/// Lifecycle of a [`SampleProcessor`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ProcessorState {
    /// No sample received in the current segment
    Idle,
    /// Collecting samples to measure the sampling rate
    Buffering,
    /// The measured rate has no filter chain, nothing is emitted
    UnsupportedRate { sampling_rate: f64 },
    /// Filter chains are running at `filter_rate`
    Streaming { filter_rate: f64, window_len: usize },
}

impl fmt::Display for ProcessorState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessorState::Idle => write!(f, "idle"),
            ProcessorState::Buffering => write!(f, "buffering"),
            ProcessorState::UnsupportedRate { sampling_rate } => {
                write!(f, "unsupported rate ({:.2} Hz)", sampling_rate)
            }
            ProcessorState::Streaming {
                filter_rate,
                window_len,
            } => write!(
                f,
                "streaming at {:.2} Hz, {} samples per window",
                filter_rate, window_len
            ),
        }
    }
}

/// One analysed window of one channel
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Emission {
    pub channel: Channel,
    /// Position of the window since the processor was created
    pub window_index: usize,
    /// Timestamp of the first raw sample of the window
    pub start_timestamp: f64,
    /// Timestamp of the last raw sample of the window
    pub end_timestamp: f64,
    /// Rate measured on the raw samples of the window
    pub sampling_rate: f64,
    pub outcome: EstimationOutcome,
}

type EmissionCallback = Box<dyn FnMut(&Emission) + Send>;

/// Streaming heart rate processor
pub struct SampleProcessor {
    config: HeartRateConfig,
    estimator: HeartRateEstimator,
    channels: Vec<Channel>,
    state: ProcessorState,
    /// Raw samples of the current segment
    segment: Vec<PixelSample>,
    estimators: Vec<ChannelEstimator>,
    sample_count: u64,
    window_index: usize,
    windows_emitted: usize,
    callback: Option<EmissionCallback>,
}

impl fmt::Debug for SampleProcessor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SampleProcessor")
            .field("state", &self.state)
            .field("channels", &self.channels)
            .field("segment_len", &self.segment.len())
            .field("sample_count", &self.sample_count)
            .field("window_index", &self.window_index)
            .field("windows_emitted", &self.windows_emitted)
            .field("has_callback", &self.callback.is_some())
            .finish()
    }
}

impl SampleProcessor {
    /// Create a processor.
    ///
    /// Fails when the filter tables are inconsistent or the configuration
    /// is invalid.
    pub fn new(config: HeartRateConfig) -> Result<Self> {
        validate_tables()?;
        let estimator = HeartRateEstimator::new(&config)?;

        let mut channels = config.channels.clone();
        channels.sort();
        channels.dedup();

        Ok(Self {
            config,
            estimator,
            channels,
            state: ProcessorState::Idle,
            segment: Vec::new(),
            estimators: Vec::new(),
            sample_count: 0,
            window_index: 0,
            windows_emitted: 0,
            callback: None,
        })
    }

    /// Register the function receiving every emission
    pub fn with_callback<F>(mut self, callback: F) -> Self
    where
        F: FnMut(&Emission) + Send + 'static,
    {
        self.callback = Some(Box::new(callback));
        self
    }

    pub fn set_callback<F>(&mut self, callback: F)
    where
        F: FnMut(&Emission) + Send + 'static,
    {
        self.callback = Some(Box::new(callback));
    }

    pub fn state(&self) -> ProcessorState {
        self.state
    }

    /// Samples received since creation or the last [`reset`](Self::reset)
    pub fn sample_count(&self) -> u64 {
        self.sample_count
    }

    /// Windows analysed and reported so far
    pub fn windows_emitted(&self) -> usize {
        self.windows_emitted
    }

    /// Locked sampling rate, if streaming
    pub fn sampling_rate(&self) -> Option<f64> {
        match self.state {
            ProcessorState::Streaming { filter_rate, .. } => Some(filter_rate),
            _ => None,
        }
    }

    pub fn config(&self) -> &HeartRateConfig {
        &self.config
    }

    /// Forget everything and return to `Idle`
    pub fn reset(&mut self) {
        self.restart_segment();
        self.sample_count = 0;
        self.window_index = 0;
        self.windows_emitted = 0;
    }

    /// Process one sample and hand every resulting emission to the callback
    pub fn process_sample(&mut self, sample: PixelSample) {
        let emissions = self.advance(sample);
        if let Some(callback) = self.callback.as_mut() {
            for emission in &emissions {
                callback(emission);
            }
        }
    }

    /// Process one sample and return the resulting emissions.
    ///
    /// Emissions of a window come in channel order (red, green, blue).
    pub fn advance(&mut self, sample: PixelSample) -> Vec<Emission> {
        self.sample_count += 1;

        if !sample.is_covering_lens && self.config.restart_on_uncovered_lens {
            if self.state != ProcessorState::Idle {
                info!(
                    "Lens uncovered at {:.3} s, restarting from {}",
                    sample.timestamp, self.state
                );
                self.restart_segment();
            }
            return Vec::new();
        }

        match self.state {
            ProcessorState::Idle => {
                self.segment.push(sample);
                self.set_state(ProcessorState::Buffering);
                Vec::new()
            }
            ProcessorState::Buffering => {
                self.segment.push(sample);
                let (first, last) = match (self.segment.first(), self.segment.last()) {
                    (Some(first), Some(last)) => (first.timestamp, last.timestamp),
                    _ => return Vec::new(),
                };
                if last - first < self.config.rate_estimation_seconds {
                    return Vec::new();
                }
                match calculate_sampling_rate(&self.segment) {
                    Some(rate) if is_valid_sampling_rate(rate) => self.lock(rate),
                    Some(rate) => {
                        warn!("Sampling rate {:.2} Hz is not supported", rate);
                        self.set_state(ProcessorState::UnsupportedRate {
                            sampling_rate: rate,
                        });
                        Vec::new()
                    }
                    None => Vec::new(),
                }
            }
            ProcessorState::UnsupportedRate { sampling_rate } => {
                self.segment.push(sample);
                self.retry_rate(sampling_rate)
            }
            ProcessorState::Streaming { .. } => {
                self.segment.push(sample);
                self.feed(&sample)
            }
        }
    }

    fn set_state(&mut self, state: ProcessorState) {
        if self.state != state {
            debug!("Processor state: {} -> {}", self.state, state);
        }
        self.state = state;
    }

    fn restart_segment(&mut self) {
        self.segment.clear();
        self.estimators.clear();
        self.set_state(ProcessorState::Idle);
    }

    /// Measure the rate again over the trailing estimation period
    fn retry_rate(&mut self, previous: f64) -> Vec<Emission> {
        let Some(last) = self.segment.last().map(|s| s.timestamp) else {
            return Vec::new();
        };
        let since = last - self.config.rate_estimation_seconds;
        let start = self.segment.partition_point(|s| s.timestamp < since);
        let trailing = &self.segment[start..];

        match calculate_sampling_rate(trailing) {
            Some(rate) if is_valid_sampling_rate(rate) => {
                info!("Sampling rate recovered: {:.2} Hz", rate);
                self.segment.drain(..start);
                self.lock(rate)
            }
            Some(rate) => {
                // Keep only what the next measurement needs
                self.segment.drain(..start);
                if table_rate(rate) != table_rate(previous) {
                    warn!("Sampling rate {:.2} Hz is not supported", rate);
                }
                self.set_state(ProcessorState::UnsupportedRate {
                    sampling_rate: rate,
                });
                Vec::new()
            }
            None => Vec::new(),
        }
    }

    /// Build the channel estimators and replay the current segment
    fn lock(&mut self, rate: f64) -> Vec<Emission> {
        let window_len = self.estimator.window_len(rate);
        let estimators: Option<Vec<ChannelEstimator>> = self
            .channels
            .iter()
            .map(|&channel| ChannelEstimator::new(channel, rate, window_len))
            .collect();
        let Some(estimators) = estimators else {
            warn!("Cannot build filter chains at {:.2} Hz", rate);
            self.set_state(ProcessorState::UnsupportedRate {
                sampling_rate: rate,
            });
            return Vec::new();
        };

        info!(
            "Locked sampling rate at {:.2} Hz, windows of {} samples",
            rate, window_len
        );
        self.estimators = estimators;
        self.set_state(ProcessorState::Streaming {
            filter_rate: rate,
            window_len,
        });

        let replay = std::mem::take(&mut self.segment);
        let mut emissions = Vec::new();
        for sample in &replay {
            self.segment.push(*sample);
            emissions.extend(self.feed(sample));
        }
        emissions
    }

    /// Push a sample of the segment through every channel estimator
    fn feed(&mut self, sample: &PixelSample) -> Vec<Emission> {
        let mut completed = None;
        for estimator in self.estimators.iter_mut() {
            if let Some(index) = estimator.push(sample) {
                completed = Some(index);
            }
        }
        match completed {
            Some(index) => self.analyse_window(index),
            None => Vec::new(),
        }
    }

    fn analyse_window(&mut self, index: usize) -> Vec<Emission> {
        let window_index = self.window_index;
        self.window_index += 1;

        let (Some(first), ProcessorState::Streaming { window_len, .. }) =
            (self.estimators.first(), self.state)
        else {
            return Vec::new();
        };
        let start = index * window_len + first.delay();
        let Some(raw) = self.segment.get(start..start + window_len) else {
            return Vec::new();
        };

        let sampling_rate = match calculate_sampling_rate(raw) {
            Some(rate) if is_valid_sampling_rate(rate) => rate,
            rate => {
                warn!(
                    "Skipping window {}: measured rate {:?} Hz is not supported",
                    window_index, rate
                );
                return Vec::new();
            }
        };
        let start_timestamp = raw[0].timestamp;
        let end_timestamp = raw[window_len - 1].timestamp;

        let emissions: Vec<Emission> = self
            .estimators
            .iter()
            .filter_map(|estimator| {
                let chunk = estimator.window(index)?;
                Some(Emission {
                    channel: estimator.channel(),
                    window_index,
                    start_timestamp,
                    end_timestamp,
                    sampling_rate,
                    outcome: self.estimator.get_hr(chunk, sampling_rate),
                })
            })
            .collect();

        for emission in &emissions {
            let (bpm, confidence) = emission.outcome.bpm_and_confidence();
            debug!(
                "Window {} {}: {:.1} BPM, confidence {:.3}",
                window_index, emission.channel, bpm, confidence
            );
        }
        self.windows_emitted += 1;
        emissions
    }
}
