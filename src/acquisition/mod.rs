// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the rust-heartrate project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

//! Pixel sample acquisition module
//!
//! This module defines the samples handed over by the camera sampler (one
//! averaged RGB value per frame) and the reading/writing of recorded sample
//! files. Capturing frames and averaging pixels happens outside this crate.

pub mod file;

use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

pub use file::{load_samples, save_samples};

/// One camera pixel-color observation.
///
/// Channels hold `0.0` when the lens is not covered by the finger; in that
/// case `is_covering_lens` is `false`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PixelSample {
    /// Presentation time in seconds, monotonically non-decreasing
    pub timestamp: f64,
    /// Average red level
    pub red: f64,
    /// Average green level
    pub green: f64,
    /// Average blue level
    pub blue: f64,
    /// `true` when all three channels carry valid values
    #[serde(default = "default_covering")]
    pub is_covering_lens: bool,
}

fn default_covering() -> bool {
    true
}

impl PixelSample {
    /// Create a valid sample taken with the lens covered
    pub fn new(timestamp: f64, red: f64, green: f64, blue: f64) -> Self {
        Self {
            timestamp,
            red,
            green,
            blue,
            is_covering_lens: true,
        }
    }

    /// Create the zeroed sample reported while the lens is not covered
    pub fn uncovered(timestamp: f64) -> Self {
        Self {
            timestamp,
            red: 0.0,
            green: 0.0,
            blue: 0.0,
            is_covering_lens: false,
        }
    }

    /// Value of one color channel
    pub fn value(&self, channel: Channel) -> f64 {
        match channel {
            Channel::Red => self.red,
            Channel::Green => self.green,
            Channel::Blue => self.blue,
        }
    }
}

/// Color channel of a [`PixelSample`]
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    /// All channels in emission order
    pub const ALL: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];

    /// Lower-case channel name
    pub fn name(&self) -> &'static str {
        match self {
            Channel::Red => "red",
            Channel::Green => "green",
            Channel::Blue => "blue",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_values() {
        let sample = PixelSample::new(0.5, 1.0, 2.0, 3.0);
        assert_eq!(sample.value(Channel::Red), 1.0);
        assert_eq!(sample.value(Channel::Green), 2.0);
        assert_eq!(sample.value(Channel::Blue), 3.0);
        assert!(sample.is_covering_lens);
    }

    #[test]
    fn test_uncovered_sample() {
        let sample = PixelSample::uncovered(1.25);
        assert_eq!(sample.timestamp, 1.25);
        assert!(Channel::ALL.iter().all(|&c| sample.value(c) == 0.0));
        assert!(!sample.is_covering_lens);
    }

    #[test]
    fn test_missing_lens_flag_defaults_to_covered() {
        let sample: PixelSample =
            serde_json::from_str(r#"{"timestamp": 0.1, "red": 4.0, "green": 5.0, "blue": 6.0}"#)
                .unwrap();
        assert!(sample.is_covering_lens);
    }

    #[test]
    fn test_channel_serialization() {
        assert_eq!(serde_json::to_string(&Channel::Green).unwrap(), "\"green\"");
        let channel: Channel = serde_json::from_str("\"blue\"").unwrap();
        assert_eq!(channel, Channel::Blue);
        assert_eq!(Channel::Red.to_string(), "red");
    }
}
