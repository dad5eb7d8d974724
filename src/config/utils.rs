// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the rust-heartrate project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

//! Configuration utilities
//!
//! This module provides utility functions for working with configuration
//! settings, including validation and schema management.

use anyhow::{Context, Result};
use log::warn;

use super::{Config, CONFIG_SCHEMA};
use crate::preprocessing::supported_rates;

/// Output the embedded JSON schema to the console.
///
/// This function is called when the `--show-config-schema` flag is provided
/// on the command line. It outputs the full JSON schema for the configuration
/// to stdout, formatted for readability.
///
/// # Example
///
/// ```bash
/// ./rust_heartrate --show-config-schema > config_schema.json
/// ```
pub fn output_config_schema() -> Result<()> {
    // Parse the schema to a JSON Value to pretty-format it
    let schema: serde_json::Value =
        serde_json::from_str(CONFIG_SCHEMA).context("Failed to parse JSON schema")?;

    let formatted_schema =
        serde_json::to_string_pretty(&schema).context("Failed to format JSON schema")?;

    println!("{}", formatted_schema);
    Ok(())
}

/// Validate rules the JSON schema cannot express.
///
/// Cross-field constraints of the heart rate section are errors. Settings
/// that are valid but make part of the supported frame rates unusable only
/// produce a warning.
pub fn validate_specific_rules(config: &Config) -> Result<()> {
    let heart_rate = &config.heart_rate;
    heart_rate
        .validate()
        .context("Invalid heart_rate configuration")?;

    // At the lowest frame rate the fastest beat must still span two samples
    let slowest_rate = *supported_rates().start() as f64;
    if slowest_rate * 60.0 / heart_rate.max_heart_rate < 2.0 {
        warn!(
            "max_heart_rate {} BPM cannot be resolved at {} Hz",
            heart_rate.max_heart_rate, slowest_rate
        );
    }

    let mut unique = heart_rate.channels.clone();
    unique.sort();
    unique.dedup();
    if unique.len() != heart_rate.channels.len() {
        warn!("Duplicate channels in configuration, each is reported once");
    }

    Ok(())
}
