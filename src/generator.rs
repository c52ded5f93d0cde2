//! Batch signal generation: clean harmonic and noisy combination.

use crate::{Error, HarmonicOscillator, Result, Signal, TimeBase};

/// Evaluates `amplitude * sin(2π·frequency·t + phase)` at every sample time.
///
/// # Examples
///
/// ```
/// use quietline::{TimeBase, generator::clean_signal};
///
/// let tb = TimeBase::new(0.0, 10.0, 1000).unwrap();
/// let clean = clean_signal(&tb, 1.0, 0.5, 0.0);
/// assert_eq!(clean.len(), 1000);
/// assert_eq!(clean[0], 0.0);
/// ```
pub fn clean_signal(time_base: &TimeBase, amplitude: f64, frequency: f64, phase: f64) -> Vec<f64> {
    HarmonicOscillator::new(*time_base, amplitude, frequency, phase)
        .take_samples(time_base.sample_count())
}

/// Element-wise sum of a clean signal and a noise vector.
///
/// Fails with `LengthMismatch` when the two were produced on different grids.
pub fn noisy_signal(clean: &[f64], noise: &[f64]) -> Result<Vec<f64>> {
    if clean.len() != noise.len() {
        return Err(Error::length_mismatch(clean.len(), noise.len()));
    }
    Ok(clean.iter().zip(noise).map(|(c, n)| c + n).collect())
}
