// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the rust-heartrate project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

//! Per-channel filter chain
//!
//! Raw channel values go through, in order:
//!
//! 1. removal of the first sample (baseline)
//! 2. low-pass filtering, the first `round(fs)` outputs being dropped
//! 3. high-pass filtering, the first `round(fs)` outputs being dropped
//! 4. mean-centering: each sample minus the moving mean of the
//!    `mean_filter_order(fs)` samples around it
//!
//! [`filter_signal`] runs the chain on a complete signal and
//! [`ChannelFilterChain`] runs it one value at a time. Both produce the same
//! values.

use std::collections::VecDeque;

use super::filters::{lookup, mean_filter_order, table_rate, FilterParameters, IirFilter};
use super::FilterKind;
use crate::utility::signal::moving_mean_filter;

/// Rate-dependent settings shared by the batch and streaming chains
#[derive(Debug, Clone, Copy)]
struct ChainSettings {
    low: FilterParameters,
    high: FilterParameters,
    trim: usize,
    order: usize,
}

impl ChainSettings {
    fn for_rate(sampling_rate: f64) -> Option<Self> {
        let rate = table_rate(sampling_rate)?;
        Some(Self {
            low: lookup(rate, FilterKind::Low)?,
            high: lookup(rate, FilterKind::High)?,
            trim: rate as usize,
            order: mean_filter_order(sampling_rate)?,
        })
    }

    fn half_order(&self) -> usize {
        (self.order - 1) / 2
    }
}

/// Band-pass and mean-center a complete signal.
///
/// Returns `None` when the sampling rate is not supported. Output sample `i`
/// corresponds to input sample `i + filter_delay(fs)`.
pub fn filter_signal(signal: &[f64], sampling_rate: f64) -> Option<Vec<f64>> {
    let settings = ChainSettings::for_rate(sampling_rate)?;
    let Some(&baseline) = signal.first() else {
        return Some(Vec::new());
    };

    let mut low = IirFilter::new(settings.low);
    let low_passed: Vec<f64> = signal.iter().map(|&x| low.push(x - baseline)).collect();
    let low_passed = &low_passed[settings.trim.min(low_passed.len())..];

    let mut high = IirFilter::new(settings.high);
    let high_passed: Vec<f64> = low_passed.iter().map(|&x| high.push(x)).collect();
    let high_passed = &high_passed[settings.trim.min(high_passed.len())..];

    let half = settings.half_order();
    let centered = moving_mean_filter(high_passed, settings.order)
        .into_iter()
        .enumerate()
        .map(|(i, mean)| high_passed[i + half] - mean)
        .collect();
    Some(centered)
}

/// Number of input samples between a raw sample and its filtered value
pub fn filter_delay(sampling_rate: f64) -> Option<usize> {
    ChainSettings::for_rate(sampling_rate).map(|s| 2 * s.trim + s.half_order())
}

/// Streaming form of [`filter_signal`]
#[derive(Debug, Clone)]
pub struct ChannelFilterChain {
    settings: ChainSettings,
    baseline: Option<f64>,
    low: IirFilter,
    high: IirFilter,
    low_dropped: usize,
    high_dropped: usize,
    window: VecDeque<f64>,
}

impl ChannelFilterChain {
    /// Create the chain for a sampling rate, `None` if it is not supported
    pub fn new(sampling_rate: f64) -> Option<Self> {
        let settings = ChainSettings::for_rate(sampling_rate)?;
        Some(Self {
            settings,
            baseline: None,
            low: IirFilter::new(settings.low),
            high: IirFilter::new(settings.high),
            low_dropped: 0,
            high_dropped: 0,
            window: VecDeque::with_capacity(settings.order),
        })
    }

    /// Input samples consumed before the first output
    pub fn delay(&self) -> usize {
        2 * self.settings.trim + self.settings.half_order()
    }

    /// Feed one raw channel value, returns a filtered value once the chain is primed
    pub fn push(&mut self, value: f64) -> Option<f64> {
        let baseline = *self.baseline.get_or_insert(value);

        let low = self.low.push(value - baseline);
        if self.low_dropped < self.settings.trim {
            self.low_dropped += 1;
            return None;
        }

        let high = self.high.push(low);
        if self.high_dropped < self.settings.trim {
            self.high_dropped += 1;
            return None;
        }

        self.window.push_back(high);
        if self.window.len() > self.settings.order {
            self.window.pop_front();
        }
        if self.window.len() < self.settings.order {
            return None;
        }

        let mean = self.window.iter().sum::<f64>() / self.settings.order as f64;
        Some(self.window[self.settings.half_order()] - mean)
    }

    /// Forget all past input
    pub fn reset(&mut self) {
        self.baseline = None;
        self.low.reset();
        self.high.reset();
        self.low_dropped = 0;
        self.high_dropped = 0;
        self.window.clear();
    }
}
