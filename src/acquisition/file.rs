// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the rust-heartrate project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

//! Recorded sample files
//!
//! A recording is a JSON array of [`PixelSample`] objects, in capture order.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use log::debug;

use super::PixelSample;
use crate::error::Result;

/// Read a recording from a JSON file
pub fn load_samples<P: AsRef<Path>>(path: P) -> Result<Vec<PixelSample>> {
    let path = path.as_ref();
    debug!("Loading pixel samples from {:?}", path);
    let reader = BufReader::new(File::open(path)?);
    let samples: Vec<PixelSample> = serde_json::from_reader(reader)?;
    debug!("Loaded {} pixel samples", samples.len());
    Ok(samples)
}

/// Write a recording to a JSON file, creating parent directories as needed
pub fn save_samples<P: AsRef<Path>>(path: P, samples: &[PixelSample]) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer(&mut writer, samples)?;
    writer.flush()?;
    debug!("Saved {} pixel samples to {:?}", samples.len(), path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HeartRateError;
    use tempfile::tempdir;

    #[test]
    fn test_save_and_load_recording() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("recording.json");
        let samples = vec![
            PixelSample::new(0.0, 200.0, 60.0, 20.0),
            PixelSample::uncovered(0.033),
        ];

        save_samples(&path, &samples).unwrap();
        let loaded = load_samples(&path).unwrap();
        assert_eq!(loaded, samples);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempdir().unwrap();
        let result = load_samples(dir.path().join("missing.json"));
        assert!(matches!(result, Err(HeartRateError::Io(_))));
    }

    #[test]
    fn test_load_malformed_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, "{not json").unwrap();
        assert!(matches!(load_samples(&path), Err(HeartRateError::Json(_))));
    }
}
