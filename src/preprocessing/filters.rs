// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the rust-heartrate project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

//! Digital filters for signal preprocessing
//!
//! The band-pass stage is split into a 4 Hz low-pass and a 0.5 Hz high-pass
//! Butterworth filter whose coefficients come from the static tables in
//! [`super::filter_tables`]. Filters are applied causally in a single pass
//! with zero initial state; [`IirFilter`] is the sample-by-sample form and
//! produces exactly the values of [`pass_filter`].

use std::ops::RangeInclusive;

use log::debug;

use super::filter_tables::{TableEntry, HIGH_PASS_TABLE, LOW_PASS_TABLE, MAX_TABLE_RATE, MIN_TABLE_RATE};
use super::FilterKind;
use crate::error::{HeartRateError, Result};

/// Maximum deviation tolerated on the DC gain of a table entry
const DC_GAIN_TOLERANCE: f64 = 1e-6;

/// Trait for implementing digital filters
pub trait Filter: Send + Sync {
    /// Apply the filter to a signal and return the filtered signal
    fn apply(&self, signal: &[f64]) -> Vec<f64>;
}

/// Direct-form IIR coefficients for one sampling rate
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilterParameters {
    /// Feedback coefficients, `a[0]` normalizes the output
    pub a: &'static [f64],
    /// Feedforward coefficients
    pub b: &'static [f64],
}

fn table(kind: FilterKind) -> &'static [TableEntry] {
    match kind {
        FilterKind::Low => &LOW_PASS_TABLE,
        FilterKind::High => &HIGH_PASS_TABLE,
    }
}

/// Look up the coefficients of `kind` for an integer sampling rate
pub fn lookup(rate: u32, kind: FilterKind) -> Option<FilterParameters> {
    table(kind)
        .iter()
        .find(|entry| entry.rate == rate)
        .map(|entry| FilterParameters {
            a: &entry.a,
            b: &entry.b,
        })
}

/// Integer sampling rates covered by the coefficient tables
pub fn supported_rates() -> RangeInclusive<u32> {
    MIN_TABLE_RATE..=MAX_TABLE_RATE
}

/// Table row used for a measured sampling rate, `None` if it cannot be rounded
pub fn table_rate(sampling_rate: f64) -> Option<u32> {
    if !sampling_rate.is_finite() || sampling_rate <= 0.0 {
        return None;
    }
    let rounded = sampling_rate.round();
    if rounded > u32::MAX as f64 {
        return None;
    }
    Some(rounded as u32)
}

/// Check both coefficient tables.
///
/// Every supported rate must have exactly one entry in each table with
/// finite coefficients and a non-zero `a[0]`. The low-pass rows must have
/// unity gain at DC and the high-pass rows must reject DC.
pub fn validate_tables() -> Result<()> {
    for kind in [FilterKind::Low, FilterKind::High] {
        validate_table(kind, table(kind))?;
    }
    debug!(
        "Filter tables validated for {} to {} Hz",
        MIN_TABLE_RATE, MAX_TABLE_RATE
    );
    Ok(())
}

pub(crate) fn validate_table(kind: FilterKind, entries: &[TableEntry]) -> Result<()> {
    for rate in supported_rates() {
        let matching = entries.iter().filter(|entry| entry.rate == rate).count();
        if matching == 0 {
            return Err(HeartRateError::MissingCoefficients { kind, rate });
        }
        if matching > 1 {
            return Err(HeartRateError::InvalidCoefficients {
                kind,
                rate,
                reason: format!("{} entries", matching),
            });
        }
    }

    for entry in entries {
        validate_entry(kind, entry)?;
    }
    Ok(())
}

fn validate_entry(kind: FilterKind, entry: &TableEntry) -> Result<()> {
    let invalid = |reason: String| HeartRateError::InvalidCoefficients {
        kind,
        rate: entry.rate,
        reason,
    };

    if !supported_rates().contains(&entry.rate) {
        return Err(invalid("rate outside of the supported range".to_string()));
    }
    if entry.a.iter().chain(entry.b.iter()).any(|c| !c.is_finite()) {
        return Err(invalid("non-finite coefficient".to_string()));
    }
    if entry.a[0] == 0.0 {
        return Err(invalid("a[0] is zero".to_string()));
    }

    let a_sum: f64 = entry.a.iter().sum();
    let b_sum: f64 = entry.b.iter().sum();
    if a_sum == 0.0 {
        return Err(invalid("pole at DC".to_string()));
    }
    let dc_gain = b_sum / a_sum;
    let expected = match kind {
        FilterKind::Low => 1.0,
        FilterKind::High => 0.0,
    };
    if (dc_gain - expected).abs() > DC_GAIN_TOLERANCE {
        return Err(invalid(format!(
            "DC gain {} instead of {}",
            dc_gain, expected
        )));
    }
    Ok(())
}

/// Order of the mean-centering filter for a sampling rate.
///
/// The order grows with the rate so the moving mean always spans roughly one
/// second. The 65-point step is defined up to 60 Hz and reused for the rates
/// that still round to the last table row. Faster rates have no order.
pub fn mean_filter_order(sampling_rate: f64) -> Option<usize> {
    if !sampling_rate.is_finite() || sampling_rate <= 0.0 {
        return None;
    }
    if sampling_rate <= 15.0 {
        Some(15)
    } else if sampling_rate <= 18.0 {
        Some(19)
    } else if sampling_rate <= 32.0 {
        Some(33)
    } else if sampling_rate <= 60.0 {
        Some(65)
    } else if sampling_rate < MAX_TABLE_RATE as f64 + 0.5 {
        debug!(
            "Sampling rate {:.2} Hz is above 60 Hz, reusing the 65-point mean filter",
            sampling_rate
        );
        Some(65)
    } else {
        None
    }
}

/// `true` when the whole filter chain is defined for `sampling_rate`
pub fn is_valid_sampling_rate(sampling_rate: f64) -> bool {
    let Some(rate) = table_rate(sampling_rate) else {
        return false;
    };
    lookup(rate, FilterKind::Low).is_some()
        && lookup(rate, FilterKind::High).is_some()
        && mean_filter_order(sampling_rate).is_some()
}

/// Streaming direct-form IIR filter.
///
/// Computes `y[n] = (Σ b[k]·x[n-k] − Σ_{k≥1} a[k]·y[n-k]) / a[0]` one sample
/// at a time, starting from a zero state.
#[derive(Debug, Clone)]
pub struct IirFilter {
    params: FilterParameters,
    // inputs[k] = x[n-k], outputs[k] = y[n-1-k]
    inputs: Vec<f64>,
    outputs: Vec<f64>,
}

impl IirFilter {
    pub fn new(params: FilterParameters) -> Self {
        Self {
            params,
            inputs: vec![0.0; params.b.len()],
            outputs: vec![0.0; params.a.len().saturating_sub(1)],
        }
    }

    /// Filter for the table row matching `sampling_rate`
    pub fn for_rate(sampling_rate: f64, kind: FilterKind) -> Option<Self> {
        let rate = table_rate(sampling_rate)?;
        lookup(rate, kind).map(Self::new)
    }

    pub fn params(&self) -> FilterParameters {
        self.params
    }

    /// Feed one input sample and return the matching output sample
    pub fn push(&mut self, value: f64) -> f64 {
        if !self.inputs.is_empty() {
            self.inputs.rotate_right(1);
            self.inputs[0] = value;
        }

        let mut acc = 0.0;
        for (b, x) in self.params.b.iter().zip(&self.inputs) {
            acc += b * x;
        }
        for (a, y) in self.params.a.iter().skip(1).zip(&self.outputs) {
            acc -= a * y;
        }
        let output = acc / self.params.a[0];

        if !self.outputs.is_empty() {
            self.outputs.rotate_right(1);
            self.outputs[0] = output;
        }
        output
    }

    /// Clear the filter state
    pub fn reset(&mut self) {
        self.inputs.iter_mut().for_each(|v| *v = 0.0);
        self.outputs.iter_mut().for_each(|v| *v = 0.0);
    }
}

/// A Butterworth filter taken from the coefficient tables
pub struct ButterworthFilter {
    kind: FilterKind,
    params: Option<FilterParameters>,
}

impl ButterworthFilter {
    /// Create the filter for a measured sampling rate.
    ///
    /// When the rounded rate has no coefficients the filter passes the
    /// signal through unchanged.
    pub fn new(kind: FilterKind, sampling_rate: f64) -> Self {
        let params = table_rate(sampling_rate).and_then(|rate| lookup(rate, kind));
        if params.is_none() {
            debug!(
                "No {} coefficients for {} Hz, filter disabled",
                kind, sampling_rate
            );
        }
        Self { kind, params }
    }

    pub fn kind(&self) -> FilterKind {
        self.kind
    }

    /// `false` when the filter is a pass-through
    pub fn is_active(&self) -> bool {
        self.params.is_some()
    }
}

impl Filter for ButterworthFilter {
    fn apply(&self, signal: &[f64]) -> Vec<f64> {
        match self.params {
            Some(params) => {
                let mut filter = IirFilter::new(params);
                signal.iter().map(|&x| filter.push(x)).collect()
            }
            None => signal.to_vec(),
        }
    }
}

/// Low- or high-pass filter `signal` sampled at `sampling_rate`.
///
/// Unsupported rates return the input unchanged.
pub fn pass_filter(signal: &[f64], sampling_rate: f64, kind: FilterKind) -> Vec<f64> {
    ButterworthFilter::new(kind, sampling_rate).apply(signal)
}
