// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the rust-heartrate project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

use std::sync::{Arc, Mutex};

use rust_heartrate::acquisition::{Channel, PixelSample};
use rust_heartrate::config::HeartRateConfig;
use rust_heartrate::estimation::HeartRateEstimator;
use rust_heartrate::processing::{Emission, ProcessorState, SampleProcessor};
use rust_heartrate::utility::ppg_generator::{PpgGenerator, PpgSignalSpec};

fn recording(seed: u32, spec: &PpgSignalSpec) -> Vec<PixelSample> {
    PpgGenerator::new(seed).generate(spec)
}

fn resting_60hz() -> PpgSignalSpec {
    PpgSignalSpec {
        heart_rate: 72.0,
        sampling_rate: 60.0,
        duration: 35.0,
        ..PpgSignalSpec::default()
    }
}

fn run(config: HeartRateConfig, samples: &[PixelSample]) -> Vec<Emission> {
    let mut processor = SampleProcessor::new(config).unwrap();
    samples
        .iter()
        .flat_map(|&sample| processor.advance(sample))
        .collect()
}

#[test]
fn test_resting_recording_at_60hz() {
    let samples = recording(42, &resting_60hz());
    let emissions = run(HeartRateConfig::default(), &samples);

    // 2100 samples, 152 samples of filter delay, 600 samples per window
    assert_eq!(emissions.len(), 9);
    for (i, emission) in emissions.iter().enumerate() {
        assert_eq!(emission.window_index, i / 3);
        assert_eq!(emission.channel, Channel::ALL[i % 3]);
        assert!((emission.sampling_rate - 60.0).abs() < 1e-6);
    }

    assert!((emissions[0].start_timestamp - 152.0 / 60.0).abs() < 1e-9);
    assert!((emissions[0].end_timestamp - 751.0 / 60.0).abs() < 1e-9);
    assert!((emissions[3].start_timestamp - 752.0 / 60.0).abs() < 1e-9);

    for emission in emissions.iter().filter(|e| e.channel != Channel::Blue) {
        let estimate = emission.outcome.estimate().unwrap();
        assert!((estimate.bpm - 72.0).abs() < 2.0, "{:?}", emission);
        assert!(estimate.confidence > 0.6, "{:?}", emission);
    }
}

#[test]
fn test_callback_receives_every_emission() {
    let samples = recording(42, &resting_60hz());
    let received = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&received);

    let mut processor = SampleProcessor::new(HeartRateConfig::default())
        .unwrap()
        .with_callback(move |emission| sink.lock().unwrap().push(*emission));
    for sample in &samples {
        processor.process_sample(*sample);
    }

    let received = received.lock().unwrap();
    assert_eq!(received.len(), 9);
    assert_eq!(processor.windows_emitted(), 3);
    assert_eq!(processor.sample_count(), samples.len() as u64);
    assert_eq!(*received, run(HeartRateConfig::default(), &samples));
}

#[test]
fn test_processing_is_deterministic() {
    let spec = PpgSignalSpec {
        sampling_rate: 30.0,
        duration: 40.0,
        jitter: 0.2,
        ..PpgSignalSpec::default()
    };
    let first = run(HeartRateConfig::default(), &recording(9, &spec));
    let second = run(HeartRateConfig::default(), &recording(9, &spec));
    assert!(!first.is_empty());
    assert_eq!(first, second);
}

#[test]
fn test_streaming_matches_batch() {
    let samples = recording(42, &resting_60hz());
    let emissions = run(HeartRateConfig::default(), &samples);
    let estimator = HeartRateEstimator::default();

    for channel in Channel::ALL {
        let streamed: Vec<_> = emissions
            .iter()
            .filter(|e| e.channel == channel)
            .map(|e| e.outcome)
            .collect();
        let batch = estimator.estimate_recording(&samples, channel);
        assert_eq!(streamed, batch, "{} channel", channel);
    }
}

#[test]
fn test_unsupported_rate_emits_nothing() {
    let spec = PpgSignalSpec {
        sampling_rate: 120.0,
        duration: 30.0,
        ..PpgSignalSpec::default()
    };
    let samples = recording(1, &spec);
    let mut processor = SampleProcessor::new(HeartRateConfig::default()).unwrap();
    let emissions: Vec<Emission> = samples
        .iter()
        .flat_map(|&sample| processor.advance(sample))
        .collect();

    assert!(emissions.is_empty());
    match processor.state() {
        ProcessorState::UnsupportedRate { sampling_rate } => {
            assert!((sampling_rate - 120.0).abs() < 1e-6)
        }
        other => panic!("unexpected state {:?}", other),
    }
}

#[test]
fn test_uncovered_lead_in_is_skipped() {
    let spec = PpgSignalSpec {
        sampling_rate: 30.0,
        duration: 30.0,
        uncovered_seconds: 5.0,
        ..PpgSignalSpec::default()
    };
    let samples = recording(4, &spec);
    let emissions = run(HeartRateConfig::default(), &samples);

    // 750 covered samples, 60 + 16 samples of delay: 2 windows of 300
    assert_eq!(emissions.len(), 6);
    assert!(emissions[0].start_timestamp > 5.0);
    for emission in emissions.iter().filter(|e| e.channel == Channel::Red) {
        let (bpm, _) = emission.outcome.bpm_and_confidence();
        assert!((bpm - 72.0).abs() < 2.0);
    }
}

#[test]
fn test_selected_channels_only() {
    let config = HeartRateConfig {
        channels: vec![Channel::Green],
        window_seconds: 5.0,
        ..HeartRateConfig::default()
    };
    let samples = recording(8, &resting_60hz());
    let emissions = run(config, &samples);
    assert!(!emissions.is_empty());
    assert!(emissions.iter().all(|e| e.channel == Channel::Green));
    let indices: Vec<usize> = emissions.iter().map(|e| e.window_index).collect();
    assert!(indices.windows(2).all(|w| w[1] == w[0] + 1));
}
