// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the rust-heartrate project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

//! Utility module for common utilities used throughout the project

pub mod ppg_generator;
pub mod signal;

// Re-exports for use in other modules
pub use ppg_generator::{PpgGenerator, PpgSignalSpec};
