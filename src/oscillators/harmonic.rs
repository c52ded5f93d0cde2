//! Harmonic (pure sinusoid) oscillator.

use crate::{Signal, TimeBase};
use std::f64::consts::PI;

/// A sinusoid `amplitude * sin(2π·frequency·t + phase)` sampled on a `TimeBase`.
///
/// Unlike a free-running audio oscillator, the phase is not accumulated: every
/// sample is evaluated directly at its grid time, so the output is exactly
/// reproducible for a given parameter set no matter how it is consumed.
///
/// # Examples
///
/// ```
/// use quietline::{HarmonicOscillator, Signal, TimeBase};
///
/// let tb = TimeBase::new(0.0, 1.0, 5).unwrap();
/// let mut osc = HarmonicOscillator::new(tb, 1.0, 1.0, 0.0);
/// let samples = osc.take_samples(5);
/// assert_eq!(samples[0], 0.0);
/// assert!((samples[1] - 1.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct HarmonicOscillator {
    time_base: TimeBase,
    amplitude: f64,
    frequency: f64,
    phase: f64,
    /// Index of the next grid point to evaluate
    position: usize,
}

impl HarmonicOscillator {
    /// Creates a new harmonic oscillator positioned at the first grid point.
    ///
    /// # Arguments
    ///
    /// * `time_base` - Sampling grid to walk
    /// * `amplitude` - Peak amplitude
    /// * `frequency` - Frequency in cycles per second
    /// * `phase` - Phase offset in radians
    pub fn new(time_base: TimeBase, amplitude: f64, frequency: f64, phase: f64) -> Self {
        Self {
            time_base,
            amplitude,
            frequency,
            phase,
            position: 0,
        }
    }

    pub fn amplitude(&self) -> f64 {
        self.amplitude
    }

    /// Frequency in cycles per second.
    pub fn frequency(&self) -> f64 {
        self.frequency
    }

    pub fn phase(&self) -> f64 {
        self.phase
    }

    /// Value of the waveform at an arbitrary time `t`.
    pub fn value_at(&self, t: f64) -> f64 {
        self.amplitude * (2.0 * PI * self.frequency * t + self.phase).sin()
    }

    /// Rewinds to the first sample of the grid.
    pub fn reset(&mut self) {
        self.position = 0;
    }
}

impl Signal for HarmonicOscillator {
    fn next_sample(&mut self) -> f64 {
        let t = self.time_base.time_at(self.position);
        self.position += 1;
        self.value_at(t)
    }
}
