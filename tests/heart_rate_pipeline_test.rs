// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the rust-heartrate project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

use rust_heartrate::acquisition::Channel;
use rust_heartrate::estimation::aliasing::get_aliasing_peak_location;
use rust_heartrate::estimation::{EstimationOutcome, HeartRateEstimator};
use rust_heartrate::preprocessing::{filter_signal, is_valid_sampling_rate, supported_rates};
use rust_heartrate::utility::ppg_generator::{PpgGenerator, PpgSignalSpec};

fn estimates(seed: u32, heart_rate: f64, sampling_rate: f64) -> Vec<EstimationOutcome> {
    let samples = PpgGenerator::new(seed).generate(&PpgSignalSpec {
        heart_rate,
        sampling_rate,
        duration: 32.0,
        ..PpgSignalSpec::default()
    });
    HeartRateEstimator::default().estimate_recording(&samples, Channel::Red)
}

#[test]
fn test_heart_rates_across_sampling_rates() {
    // (sampling rate, heart rate, tolerance in BPM); the tolerance covers
    // the lag quantization at each rate
    let cases = [
        (25.0, 72.0, 2.0),
        (30.0, 45.0, 2.0),
        (30.0, 100.0, 3.0),
        (60.0, 60.0, 2.0),
        (60.0, 72.0, 2.0),
        (60.0, 130.0, 3.0),
    ];

    for (sampling_rate, heart_rate, tolerance) in cases {
        let outcomes = estimates(21, heart_rate, sampling_rate);
        assert_eq!(outcomes.len(), 2, "{} BPM at {} Hz", heart_rate, sampling_rate);
        for outcome in outcomes {
            let estimate = outcome
                .estimate()
                .unwrap_or_else(|| panic!("no estimate for {} BPM at {} Hz", heart_rate, sampling_rate));
            assert!(
                (estimate.bpm - heart_rate).abs() <= tolerance,
                "{} BPM at {} Hz estimated as {}",
                heart_rate,
                sampling_rate,
                estimate.bpm
            );
            assert!(estimate.confidence > 0.6);
        }
    }
}

#[test]
fn test_noise_only_has_low_confidence() {
    let samples = PpgGenerator::new(3).generate(&PpgSignalSpec {
        sampling_rate: 30.0,
        duration: 25.0,
        amplitude: [0.0, 0.0, 0.0],
        ..PpgSignalSpec::default()
    });
    let outcomes = HeartRateEstimator::default().estimate_recording(&samples, Channel::Red);
    assert!(!outcomes.is_empty());
    for outcome in outcomes {
        let (bpm, confidence) = outcome.bpm_and_confidence();
        assert!(bpm >= 0.0 && bpm.is_finite());
        assert!(confidence < 0.5, "confidence {} on pure noise", confidence);
    }
}

#[test]
fn test_short_chunks_degrade_gracefully() {
    let estimator = HeartRateEstimator::default();
    for len in [0, 1, 10, 90] {
        let chunk: Vec<f64> = (0..len).map(|i| (i as f64 * 0.4).sin()).collect();
        let outcome = estimator.get_hr(&chunk, 60.0);
        assert_eq!(outcome, EstimationOutcome::InsufficientData);
        assert_eq!(outcome.bpm_and_confidence(), (0.0, 0.0));
    }
}

#[test]
fn test_aliasing_fixtures() {
    let fast = get_aliasing_peak_location(150.0, 24, 60.0, 15, 90).unwrap();
    assert_eq!((fast.n_peaks, fast.earlier.len()), (3, 0));
    assert_eq!(fast.later, vec![48, 72]);

    let slow = get_aliasing_peak_location(60.0, 60, 60.0, 15, 90).unwrap();
    assert_eq!(slow.n_peaks, 4);
    assert_eq!(slow.earlier, vec![30, 20, 15]);
    assert!(slow.later.is_empty());
}

#[test]
fn test_every_table_rate_filters() {
    for rate in supported_rates() {
        let sampling_rate = rate as f64;
        assert!(is_valid_sampling_rate(sampling_rate));

        let signal: Vec<f64> = (0..(sampling_rate as usize * 6))
            .map(|i| 100.0 + (2.0 * std::f64::consts::PI * 1.2 * i as f64 / sampling_rate).sin())
            .collect();
        let filtered = filter_signal(&signal, sampling_rate).unwrap();
        assert!(!filtered.is_empty(), "{} Hz", rate);
        assert!(filtered.iter().all(|v| v.is_finite()), "{} Hz", rate);
    }
}
