//! Cascades of second-order sections and zero-phase application.
//!
//! A high-order filter expanded into one `(b, a)` polynomial pair loses
//! precision quickly when its poles crowd near `z = 1` (low cutoffs). Keeping
//! it as a product of biquads keeps every coefficient well conditioned.

use super::TransferFunction;
use crate::{Error, Result};
use num_complex::Complex;

/// A filter stored as a cascade of first- and second-order sections.
#[derive(Debug, Clone, PartialEq)]
pub struct SecondOrderSections {
    sections: Vec<TransferFunction>,
}

impl SecondOrderSections {
    /// Builds a cascade; every section must have order 1 or 2.
    pub fn new(sections: Vec<TransferFunction>) -> Result<Self> {
        if sections.is_empty() {
            return Err(Error::invalid_filter("a cascade needs at least one section"));
        }
        if sections.iter().any(|s| !(1..=2).contains(&s.order())) {
            return Err(Error::invalid_filter("sections must be of order 1 or 2"));
        }
        Ok(Self { sections })
    }

    pub fn sections(&self) -> &[TransferFunction] {
        &self.sections
    }

    /// Total filter order, the sum of the section orders.
    pub fn order(&self) -> usize {
        self.sections.iter().map(TransferFunction::order).sum()
    }

    /// Number of samples each end is extended by for zero-phase filtering.
    pub fn pad_len(&self) -> usize {
        zero_phase_pad_len(self.order()).unwrap_or(usize::MAX)
    }

    /// Magnitude response at normalized frequency `w` (0 = DC, 1 = Nyquist).
    pub fn magnitude_at(&self, w: f64) -> f64 {
        self.sections
            .iter()
            .map(|s| s.response_at(w))
            .product::<Complex<f64>>()
            .norm()
    }

    /// Per-section initial states that make a unit step pass through the
    /// whole cascade without a transient.
    ///
    /// Each section's state is scaled by the DC gain of the sections before it.
    pub fn steady_state(&self) -> Vec<Vec<f64>> {
        let mut scale = 1.0;
        self.sections
            .iter()
            .map(|section| {
                let zi: Vec<f64> = section.steady_state().into_iter().map(|z| z * scale).collect();
                scale *= section.dc_gain();
                zi
            })
            .collect()
    }

    /// Runs `input` through the cascade starting from a zero state.
    pub fn filter(&self, input: &[f64]) -> Vec<f64> {
        self.sections
            .iter()
            .fold(input.to_vec(), |signal, section| section.filter(&signal))
    }

    fn filter_scaled(&self, input: &[f64], states: &[Vec<f64>], scale: f64) -> Vec<f64> {
        self.sections
            .iter()
            .zip(states)
            .fold(input.to_vec(), |signal, (section, zi)| {
                let initial: Vec<f64> = zi.iter().map(|z| z * scale).collect();
                section.filter_from(&signal, &initial)
            })
    }

    /// Zero-phase filtering: forward pass, then a backward pass over the result.
    ///
    /// Both ends are extended by odd reflection (`2·x[0] - x[k]`) over
    /// `pad_len()` samples and each pass starts from the steady state scaled by
    /// its first sample, so there is no start-up transient at either boundary.
    /// The magnitude response is squared and the phase response cancels.
    ///
    /// Fails with `InsufficientSamples` when `input.len() <= pad_len()`.
    pub fn filtfilt(&self, input: &[f64]) -> Result<Vec<f64>> {
        let pad = self.pad_len();
        if input.len() <= pad {
            return Err(Error::insufficient_samples(pad, input.len()));
        }

        let extended = odd_extension(input, pad);
        let zi = self.steady_state();

        let forward = self.filter_scaled(&extended, &zi, extended[0]);

        let reversed: Vec<f64> = forward.into_iter().rev().collect();
        let mut backward = self.filter_scaled(&reversed, &zi, reversed[0]);
        backward.reverse();

        Ok(backward[pad..backward.len() - pad].to_vec())
    }
}

/// Padding used by zero-phase filtering of an `order`-th order filter,
/// `3 · (order + 1)`, or `None` if that overflows.
pub fn zero_phase_pad_len(order: usize) -> Option<usize> {
    order.checked_add(1)?.checked_mul(3)
}

/// Extends `x` by `pad` samples on each side with odd symmetry about the end points.
fn odd_extension(x: &[f64], pad: usize) -> Vec<f64> {
    let n = x.len();
    let first = x[0];
    let last = x[n - 1];

    let mut out = Vec::with_capacity(n + 2 * pad);
    out.extend((1..=pad).rev().map(|k| 2.0 * first - x[k]));
    out.extend_from_slice(x);
    out.extend((1..=pad).map(|k| 2.0 * last - x[n - 1 - k]));
    out
}
