// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the rust-heartrate project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).
//! Signal preprocessing module
//!
//! This module handles filtering of the raw channel values before the
//! periodicity analysis: table-driven Butterworth low/high-pass filters and
//! the per-channel chain built from them.

pub mod chain;
pub(crate) mod filter_tables;
pub mod filters;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use chain::{filter_delay, filter_signal, ChannelFilterChain};
pub use filters::{
    is_valid_sampling_rate, lookup, mean_filter_order, pass_filter, supported_rates,
    validate_tables, ButterworthFilter, Filter, FilterParameters, IirFilter,
};

/// Kind of pass filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterKind {
    /// 4 Hz low-pass
    Low,
    /// 0.5 Hz high-pass
    High,
}

impl fmt::Display for FilterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterKind::Low => f.write_str("low-pass"),
            FilterKind::High => f.write_str("high-pass"),
        }
    }
}

/// Create the table-driven filter of `kind` for a sampling rate
pub fn create_pass_filter(kind: FilterKind, sampling_rate: f64) -> Box<dyn Filter> {
    Box::new(ButterworthFilter::new(kind, sampling_rate))
}
