// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the rust-heartrate project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

// Main entry point for the camera heart rate analyzer
use std::path::PathBuf;
use std::sync::mpsc;

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, warn};

use rust_heartrate::acquisition::{load_samples, Channel, PixelSample};
use rust_heartrate::config::{output_config_schema, Config};
use rust_heartrate::processing::{Emission, SampleProcessor};
use rust_heartrate::utility::ppg_generator::{PpgGenerator, PpgSignalSpec};
use rust_heartrate::HeartRateReport;

/// Heart rate analyzer for fingertip camera recordings
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Configuration file (YAML), created with defaults if missing
    #[arg(short, long, default_value = "config.yaml")]
    config: PathBuf,

    /// Recorded pixel samples (JSON); a synthetic recording is used if absent
    #[arg(short, long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output file for the report (JSON)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Channel to analyse, may be repeated
    #[arg(long = "channel", value_enum)]
    channels: Vec<Channel>,

    /// Length of one analysis window in seconds
    #[arg(long)]
    window_seconds: Option<f64>,

    /// Lowest heart rate searched for, in BPM
    #[arg(long)]
    min_heart_rate: Option<f64>,

    /// Highest heart rate searched for, in BPM
    #[arg(long)]
    max_heart_rate: Option<f64>,

    /// Output the configuration JSON schema and exit
    #[arg(long, default_value_t = false)]
    show_config_schema: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if args.show_config_schema {
        return output_config_schema();
    }

    let mut config = Config::from_file(&args.config)?;
    let channels = (!args.channels.is_empty()).then(|| args.channels.clone());
    config.apply_args(
        args.window_seconds,
        args.min_heart_rate,
        args.max_heart_rate,
        channels,
    );
    config.validate()?;

    println!("Heart Rate Analyzer");
    println!("-------------------");

    let (samples, source) = match &args.input {
        Some(path) => {
            println!("Using recording: {}", path.display());
            let samples = load_samples(path)
                .with_context(|| format!("Failed to load recording {}", path.display()))?;
            (samples, Some(path.display().to_string()))
        }
        None => {
            println!("No input specified. Using a synthetic 72 BPM recording.");
            (demo_recording(), None)
        }
    };
    info!("{} samples to process", samples.len());

    let (sender, receiver) = mpsc::channel::<Emission>();
    let mut processor = SampleProcessor::new(config.heart_rate.clone())?.with_callback(
        move |emission| {
            if sender.send(*emission).is_err() {
                warn!("Emission receiver closed");
            }
        },
    );

    let mut sampling_rate = None;
    for sample in samples {
        processor.process_sample(sample);
        sampling_rate = sampling_rate.or(processor.sampling_rate());
    }
    drop(processor);

    let emissions: Vec<Emission> = receiver.iter().collect();
    let report = HeartRateReport::from_emissions(source, sampling_rate, emissions);

    if let Some(output_path) = args.output {
        println!("Saving report to: {}", output_path.display());
        std::fs::write(&output_path, serde_json::to_string_pretty(&report)?)
            .with_context(|| format!("Failed to write report to {}", output_path.display()))?;
    } else {
        print_report(&report);
    }

    Ok(())
}

fn demo_recording() -> Vec<PixelSample> {
    let spec = PpgSignalSpec {
        heart_rate: 72.0,
        sampling_rate: 30.0,
        duration: 40.0,
        jitter: 0.1,
        ..PpgSignalSpec::default()
    };
    PpgGenerator::new_from_system_time().generate(&spec)
}

fn print_report(report: &HeartRateReport) {
    match report.sampling_rate {
        Some(rate) => println!("Sampling rate: {:.2} Hz", rate),
        None => println!("Sampling rate: not locked"),
    }
    println!("Windows:");
    for emission in &report.emissions {
        let (bpm, confidence) = emission.outcome.bpm_and_confidence();
        println!(
            "- #{} {:>5} [{:.2} s - {:.2} s]: {:.1} BPM (confidence {:.2})",
            emission.window_index,
            emission.channel.name(),
            emission.start_timestamp,
            emission.end_timestamp,
            bpm,
            confidence
        );
    }
    println!("Summary:");
    for summary in &report.summary {
        match summary.bpm {
            Some(bpm) => println!(
                "- {}: {:.1} BPM over {}/{} windows (mean confidence {:.2})",
                summary.channel,
                bpm,
                summary.estimated_windows,
                summary.windows,
                summary.mean_confidence
            ),
            None => println!("- {}: no estimate", summary.channel),
        }
    }
}
