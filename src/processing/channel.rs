// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the rust-heartrate project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

//! Per-channel streaming state

use crate::acquisition::{Channel, PixelSample};
use crate::preprocessing::ChannelFilterChain;

/// Filter chain and filtered history of one color channel.
///
/// The same type serves red, green and blue; only the channel read from
/// each [`PixelSample`] differs.
#[derive(Debug, Clone)]
pub struct ChannelEstimator {
    channel: Channel,
    chain: ChannelFilterChain,
    filtered: Vec<f64>,
    window_len: usize,
    completed_windows: usize,
}

impl ChannelEstimator {
    /// Create the estimator for a locked sampling rate.
    ///
    /// Returns `None` when the rate has no filter chain or `window_len` is 0.
    pub fn new(channel: Channel, sampling_rate: f64, window_len: usize) -> Option<Self> {
        if window_len == 0 {
            return None;
        }
        Some(Self {
            channel,
            chain: ChannelFilterChain::new(sampling_rate)?,
            filtered: Vec::new(),
            window_len,
            completed_windows: 0,
        })
    }

    pub fn channel(&self) -> Channel {
        self.channel
    }

    /// Raw samples between a raw sample and its filtered value
    pub fn delay(&self) -> usize {
        self.chain.delay()
    }

    /// Number of filtered values produced so far
    pub fn filtered_len(&self) -> usize {
        self.filtered.len()
    }

    /// Feed one raw sample.
    ///
    /// Returns the index (within this estimator) of the window completed by
    /// this sample, if any. Windows are back to back.
    pub fn push(&mut self, sample: &PixelSample) -> Option<usize> {
        let value = self.chain.push(sample.value(self.channel))?;
        self.filtered.push(value);

        if self.filtered.len() == (self.completed_windows + 1) * self.window_len {
            let index = self.completed_windows;
            self.completed_windows += 1;
            Some(index)
        } else {
            None
        }
    }

    /// Filtered values of a completed window
    pub fn window(&self, index: usize) -> Option<&[f64]> {
        if index >= self.completed_windows {
            return None;
        }
        let start = index * self.window_len;
        self.filtered.get(start..start + self.window_len)
    }
}
