// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the rust-heartrate project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

//! Error types for the heart rate library
//!
//! Only construction-time and I/O failures are errors. The per-sample path
//! reports degraded states through [`crate::estimation::EstimationOutcome`]
//! and `Option` values instead.

use thiserror::Error;

use crate::preprocessing::FilterKind;

/// Main error type for the library
#[derive(Error, Debug)]
pub enum HeartRateError {
    /// A supported sampling rate has no row in a coefficient table
    #[error("Missing {kind} coefficients for {rate} Hz")]
    MissingCoefficients { kind: FilterKind, rate: u32 },

    /// A coefficient table row is present but unusable
    #[error("Invalid {kind} coefficients for {rate} Hz: {reason}")]
    InvalidCoefficients {
        kind: FilterKind,
        rate: u32,
        reason: String,
    },

    /// Estimator or processor configuration is inconsistent
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Reading or writing a recording failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A recording could not be (de)serialized
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result alias used throughout the library
pub type Result<T> = std::result::Result<T, HeartRateError>;
