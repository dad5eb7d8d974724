// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the rust-heartrate project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

// Synthetic fingertip recording generator
// Writes a JSON recording that can be replayed by the analyzer

use anyhow::{bail, Result};
use clap::Parser;
use log::info;
use std::path::PathBuf;

use rust_heartrate::acquisition::save_samples;
use rust_heartrate::utility::ppg_generator::{PpgGenerator, PpgSignalSpec};

/// Synthetic PPG recording generator
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Output file path (.json)
    #[arg(short, long, value_name = "FILE")]
    output: PathBuf,

    /// Simulated heart rate in BPM
    #[arg(short, long, default_value_t = 72.0)]
    bpm: f64,

    /// Camera frame rate in Hz
    #[arg(short, long, default_value_t = 30.0)]
    sampling_rate: f64,

    /// Duration in seconds
    #[arg(short, long, default_value_t = 30.0)]
    duration: f64,

    /// Standard deviation of the sensor noise
    #[arg(short, long, default_value_t = 0.3)]
    noise: f64,

    /// Timestamp jitter as a fraction of the frame period (0.0 to 0.45)
    #[arg(short, long, default_value_t = 0.0)]
    jitter: f64,

    /// Leading seconds with the lens uncovered
    #[arg(long, default_value_t = 0.0)]
    uncovered_seconds: f64,

    /// Random seed, the system clock is used if absent
    #[arg(long)]
    seed: Option<u32>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if args.bpm <= 0.0 || args.sampling_rate <= 0.0 || args.duration <= 0.0 {
        bail!("Heart rate, sampling rate and duration must be positive");
    }
    if !(0.0..=0.45).contains(&args.jitter) {
        bail!("Jitter must be between 0.0 and 0.45");
    }
    if args.noise < 0.0 {
        bail!("Noise must not be negative");
    }

    let spec = PpgSignalSpec {
        heart_rate: args.bpm,
        sampling_rate: args.sampling_rate,
        duration: args.duration,
        noise: args.noise,
        jitter: args.jitter,
        uncovered_seconds: args.uncovered_seconds,
        ..PpgSignalSpec::default()
    };
    let mut generator = match args.seed {
        Some(seed) => PpgGenerator::new(seed),
        None => PpgGenerator::new_from_system_time(),
    };

    let samples = generator.generate(&spec);
    info!("Generated {} samples", samples.len());
    save_samples(&args.output, &samples)?;

    println!(
        "Synthetic recording written to {} ({} samples, {} BPM at {} Hz)",
        args.output.display(),
        samples.len(),
        args.bpm,
        args.sampling_rate
    );
    Ok(())
}
