// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the rust-heartrate project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

//! # Synthetic PPG recording generator
//!
//! This module produces camera pixel recordings that look like a fingertip
//! pressed on the lens: a per-channel baseline, a pulsatile component at the
//! requested heart rate (fundamental plus a dicrotic second harmonic),
//! Gaussian sensor noise and timestamp jitter.
//!
//! It is used by the tests, the benches and the `synthesize` binary. The
//! generator is fully deterministic for a given seed.
//!
//! ## Features
//!
//! * Fast XORShift pseudo-random number generation
//! * Box-Muller transform for Gaussian noise
//! * Per-channel baseline and pulse amplitude (red dominates, as with the flash on)
//! * Optional leading period with the lens uncovered
//!
//! ## Examples
//!
//! ```rust
//! use rust_heartrate::utility::ppg_generator::{PpgGenerator, PpgSignalSpec};
//!
//! let mut generator = PpgGenerator::new(42);
//! let spec = PpgSignalSpec {
//!     heart_rate: 72.0,
//!     sampling_rate: 30.0,
//!     duration: 5.0,
//!     ..PpgSignalSpec::default()
//! };
//! let samples = generator.generate(&spec);
//! assert_eq!(samples.len(), 150);
//! ```

use std::time::SystemTime;

use crate::acquisition::PixelSample;

/// Seed substituted for zero, which is a fixed point of XORShift
const FALLBACK_SEED: u32 = 0x9E37_79B9;

/// Parameters of a synthetic recording
#[derive(Debug, Clone, PartialEq)]
pub struct PpgSignalSpec {
    /// Simulated heart rate in beats per minute
    pub heart_rate: f64,
    /// Nominal camera frame rate in Hz
    pub sampling_rate: f64,
    /// Recording length in seconds
    pub duration: f64,
    /// Standard deviation of the additive Gaussian noise
    pub noise: f64,
    /// Timestamp jitter as a fraction of the frame period, clamped to [0, 0.45]
    pub jitter: f64,
    /// Leading seconds during which the lens is not covered
    pub uncovered_seconds: f64,
    /// Baseline levels for red, green and blue
    pub baseline: [f64; 3],
    /// Pulse amplitudes for red, green and blue
    pub amplitude: [f64; 3],
}

impl Default for PpgSignalSpec {
    fn default() -> Self {
        Self {
            heart_rate: 72.0,
            sampling_rate: 60.0,
            duration: 30.0,
            noise: 0.3,
            jitter: 0.0,
            uncovered_seconds: 0.0,
            baseline: [200.0, 60.0, 20.0],
            amplitude: [2.0, 0.8, 0.3],
        }
    }
}

/// Deterministic generator of synthetic pixel recordings.
///
/// The random state evolves with every value drawn, so two generators
/// created with the same seed produce identical recordings.
pub struct PpgGenerator {
    /// Internal state of the XORShift random number generator.
    rng_state: u32,
}

impl PpgGenerator {
    /// Creates a new generator with a given seed.
    pub fn new(seed: u32) -> Self {
        let rng_state = if seed == 0 { FALLBACK_SEED } else { seed };
        Self { rng_state }
    }

    /// Creates a new generator seeded from the system clock.
    pub fn new_from_system_time() -> Self {
        let seed = SystemTime::now()
            .duration_since(SystemTime::UNIX_EPOCH)
            .map(|elapsed| elapsed.as_millis() as u32)
            .unwrap_or(FALLBACK_SEED);
        Self::new(seed)
    }

    /// Generates a random floating-point number between -1.0 and 1.0.
    pub fn random_float(&mut self) -> f64 {
        self.rng_state ^= self.rng_state << 13;
        self.rng_state ^= self.rng_state >> 17;
        self.rng_state ^= self.rng_state << 5;

        (self.rng_state as f64 / u32::MAX as f64) * 2.0 - 1.0
    }

    /// Generates a value from a standard Gaussian distribution.
    ///
    /// Uses the Box-Muller transform:
    /// ```text
    /// z = sqrt(-2 * ln(u1)) * cos(2 * π * u2)
    /// ```
    pub fn random_gaussian(&mut self) -> f64 {
        let u1 = (self.random_float() + 1.0) / 2.0;
        let u2 = (self.random_float() + 1.0) / 2.0;

        // Avoid ln(0)
        let u1 = u1.max(0.0001);

        (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos()
    }

    /// Normalized pulse shape at time `t` (seconds) for a beat frequency in Hz
    fn pulse(t: f64, beat_frequency: f64) -> f64 {
        let phase = 2.0 * std::f64::consts::PI * beat_frequency * t;
        phase.sin() + 0.4 * (2.0 * phase + 0.7).sin()
    }

    /// Generates a complete recording.
    ///
    /// Sample `i` is nominally taken at `i / sampling_rate` seconds; jitter
    /// moves it by at most 45% of a frame period so timestamps stay strictly
    /// increasing. Samples inside the uncovered lead-in are zeroed and
    /// flagged as not covering the lens.
    pub fn generate(&mut self, spec: &PpgSignalSpec) -> Vec<PixelSample> {
        if spec.sampling_rate <= 0.0 || spec.duration <= 0.0 {
            return Vec::new();
        }

        let frame_period = 1.0 / spec.sampling_rate;
        let jitter = spec.jitter.clamp(0.0, 0.45);
        let beat_frequency = spec.heart_rate / 60.0;
        let count = (spec.duration * spec.sampling_rate).round() as usize;
        let uncovered_count = (spec.uncovered_seconds.max(0.0) * spec.sampling_rate).round() as usize;

        let mut samples = Vec::with_capacity(count);
        for i in 0..count {
            let nominal = i as f64 * frame_period;
            let timestamp = nominal + jitter * self.random_float() * frame_period;

            if i < uncovered_count {
                samples.push(PixelSample::uncovered(timestamp));
                continue;
            }

            let pulse = Self::pulse(timestamp, beat_frequency);
            let mut channels = [0.0; 3];
            for (c, value) in channels.iter_mut().enumerate() {
                *value = spec.baseline[c] + spec.amplitude[c] * pulse + spec.noise * self.random_gaussian();
            }
            samples.push(PixelSample::new(timestamp, channels[0], channels[1], channels[2]));
        }

        samples
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_float_range() {
        let mut generator = PpgGenerator::new(12345);
        for _ in 0..1000 {
            let value = generator.random_float();
            assert!((-1.0..=1.0).contains(&value));
        }
    }

    #[test]
    fn test_zero_seed_does_not_stall() {
        let mut generator = PpgGenerator::new(0);
        let first = generator.random_float();
        let second = generator.random_float();
        assert_ne!(first, second);
    }

    #[test]
    fn test_same_seed_same_recording() {
        let spec = PpgSignalSpec {
            duration: 2.0,
            jitter: 0.2,
            ..PpgSignalSpec::default()
        };
        let a = PpgGenerator::new(7).generate(&spec);
        let b = PpgGenerator::new(7).generate(&spec);
        assert_eq!(a, b);
    }

    #[test]
    fn test_timestamps_increase_with_jitter() {
        let spec = PpgSignalSpec {
            duration: 5.0,
            jitter: 1.0,
            ..PpgSignalSpec::default()
        };
        let samples = PpgGenerator::new(3).generate(&spec);
        assert_eq!(samples.len(), 300);
        for pair in samples.windows(2) {
            assert!(pair[1].timestamp > pair[0].timestamp);
        }
    }

    #[test]
    fn test_uncovered_lead_in() {
        let spec = PpgSignalSpec {
            sampling_rate: 30.0,
            duration: 3.0,
            uncovered_seconds: 1.0,
            ..PpgSignalSpec::default()
        };
        let samples = PpgGenerator::new(5).generate(&spec);
        let uncovered = samples.iter().filter(|s| !s.is_covering_lens).count();
        assert_eq!(uncovered, 30);
        assert!(samples[..30].iter().all(|s| s.red == 0.0 && s.green == 0.0 && s.blue == 0.0));
        assert!(samples[30..].iter().all(|s| s.is_covering_lens));
    }

    #[test]
    fn test_invalid_spec_gives_empty_recording() {
        let spec = PpgSignalSpec {
            sampling_rate: 0.0,
            ..PpgSignalSpec::default()
        };
        assert!(PpgGenerator::new(1).generate(&spec).is_empty());
    }
}
