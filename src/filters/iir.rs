//! Direct-form IIR filtering.
//!
//! Filters are described by transfer-function coefficients `b` (feedforward)
//! and `a` (feedback), normalized so that `a[0] == 1`. Samples run through a
//! transposed direct form II structure, which needs only `order` state
//! variables and lets the state be initialized to a steady-state response.
//! Higher-order designs are cascades of these (see `SecondOrderSections`).

use crate::{Error, Result};
use num_complex::Complex;
use std::f64::consts::PI;

/// Rational transfer function `H(z) = B(z) / A(z)` of a digital filter.
#[derive(Debug, Clone, PartialEq)]
pub struct TransferFunction {
    b: Vec<f64>,
    a: Vec<f64>,
}

impl TransferFunction {
    /// Creates a transfer function from numerator and denominator coefficients.
    ///
    /// Coefficients are normalized by `a[0]` and the shorter vector is
    /// zero-padded so both have `order + 1` entries.
    pub fn new(b: Vec<f64>, a: Vec<f64>) -> Result<Self> {
        let a0 = match a.first() {
            Some(&a0) if a0 != 0.0 && a0.is_finite() => a0,
            _ => return Err(Error::invalid_filter("leading denominator coefficient must be non-zero")),
        };
        if b.is_empty() {
            return Err(Error::invalid_filter("numerator must not be empty"));
        }
        if b.iter().chain(&a).any(|c| !c.is_finite()) {
            return Err(Error::invalid_filter("coefficients must be finite"));
        }

        let len = b.len().max(a.len());
        let normalize = |mut coeffs: Vec<f64>| {
            coeffs.resize(len, 0.0);
            coeffs.iter_mut().for_each(|c| *c /= a0);
            coeffs
        };
        Ok(Self {
            b: normalize(b),
            a: normalize(a),
        })
    }

    /// Feedforward coefficients.
    pub fn numerator(&self) -> &[f64] {
        &self.b
    }

    /// Feedback coefficients, `a[0] == 1`.
    pub fn denominator(&self) -> &[f64] {
        &self.a
    }

    /// Filter order (number of state variables).
    pub fn order(&self) -> usize {
        self.a.len() - 1
    }

    /// Complex frequency response at normalized frequency `w` (0 = DC, 1 = Nyquist).
    pub fn response_at(&self, w: f64) -> Complex<f64> {
        let z_inv = Complex::from_polar(1.0, -PI * w);
        let eval = |coeffs: &[f64]| {
            coeffs
                .iter()
                .rev()
                .fold(Complex::new(0.0, 0.0), |acc, &c| acc * z_inv + c)
        };
        eval(&self.b) / eval(&self.a)
    }

    /// Magnitude response at normalized frequency `w`.
    pub fn magnitude_at(&self, w: f64) -> f64 {
        self.response_at(w).norm()
    }

    /// Gain for a constant input, `B(1) / A(1)`.
    pub fn dc_gain(&self) -> f64 {
        self.b.iter().sum::<f64>() / self.a.iter().sum::<f64>()
    }

    /// State vector that makes a unit step input produce a constant output
    /// from the very first sample.
    ///
    /// Scaling it by the first input sample suppresses the start-up transient.
    pub fn steady_state(&self) -> Vec<f64> {
        let order = self.order();
        let mut zi = vec![0.0; order];
        if order == 0 {
            return zi;
        }

        // Solves (I - A) zi = B for the companion form without a general solver:
        // zi[0] follows from the column sums, the rest by forward substitution.
        let b0 = self.b[0];
        let forcing = |k: usize| self.b[k] - self.a[k] * b0;
        let a_total: f64 = 1.0 + self.a[1..].iter().sum::<f64>();
        let c_total: f64 = (1..=order).map(forcing).sum();
        zi[0] = c_total / a_total;

        let mut a_sum = 1.0;
        let mut c_sum = 0.0;
        for k in 1..order {
            a_sum += self.a[k];
            c_sum += forcing(k);
            zi[k] = a_sum * zi[0] - c_sum;
        }
        zi
    }

    /// Runs `input` through the filter starting from a zero state.
    pub fn filter(&self, input: &[f64]) -> Vec<f64> {
        let mut state = IirState::new(self);
        input.iter().map(|&x| state.process(x)).collect()
    }

    /// Runs `input` through the filter starting from `initial` state values.
    pub fn filter_from(&self, input: &[f64], initial: &[f64]) -> Vec<f64> {
        let mut state = IirState::with_state(self, initial);
        input.iter().map(|&x| state.process(x)).collect()
    }
}

/// Transposed direct form II state for one pass over a sequence.
struct IirState<'a> {
    b: &'a [f64],
    a: &'a [f64],
    z: Vec<f64>,
}

impl<'a> IirState<'a> {
    fn new(tf: &'a TransferFunction) -> Self {
        Self {
            b: &tf.b,
            a: &tf.a,
            z: vec![0.0; tf.order()],
        }
    }

    fn with_state(tf: &'a TransferFunction, initial: &[f64]) -> Self {
        let mut state = Self::new(tf);
        for (z, &init) in state.z.iter_mut().zip(initial) {
            *z = init;
        }
        state
    }

    fn process(&mut self, x: f64) -> f64 {
        let order = self.z.len();
        if order == 0 {
            return self.b[0] * x;
        }

        // y[n] = b0·x[n] + z0
        // z[i] = b[i+1]·x[n] + z[i+1] - a[i+1]·y[n]
        let y = self.b[0] * x + self.z[0];
        for i in 0..order - 1 {
            self.z[i] = self.b[i + 1] * x + self.z[i + 1] - self.a[i + 1] * y;
        }
        self.z[order - 1] = self.b[order] * x - self.a[order] * y;
        y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn one_pole(alpha: f64) -> TransferFunction {
        // y[n] = alpha·x[n] + (1 - alpha)·y[n-1]
        TransferFunction::new(vec![alpha], vec![1.0, alpha - 1.0]).unwrap()
    }

    #[test]
    fn test_normalizes_and_pads() {
        let tf = TransferFunction::new(vec![2.0], vec![2.0, 1.0, 0.5]).unwrap();
        assert_eq!(tf.numerator(), &[1.0, 0.0, 0.0]);
        assert_eq!(tf.denominator(), &[1.0, 0.5, 0.25]);
        assert_eq!(tf.order(), 2);
    }

    #[test]
    fn test_rejects_zero_leading_denominator() {
        assert!(matches!(
            TransferFunction::new(vec![1.0], vec![0.0, 1.0]),
            Err(Error::InvalidFilter { .. })
        ));
        assert!(TransferFunction::new(vec![], vec![1.0]).is_err());
    }

    #[test]
    fn test_impulse_response_of_one_pole() {
        let tf = one_pole(0.5);
        let out = tf.filter(&[1.0, 0.0, 0.0, 0.0]);
        assert_eq!(out, vec![0.5, 0.25, 0.125, 0.0625]);
    }

    #[test]
    fn test_fir_passthrough() {
        let tf = TransferFunction::new(vec![0.5, 0.5], vec![1.0]).unwrap();
        assert_eq!(tf.filter(&[2.0, 4.0, 6.0]), vec![1.0, 3.0, 5.0]);
    }

    #[test]
    fn test_steady_state_removes_step_transient() {
        let tf = TransferFunction::new(vec![0.2, 0.3, 0.1], vec![1.0, -0.5, 0.1]).unwrap();
        let dc_gain = tf.dc_gain();
        let out = tf.filter_from(&[1.0; 50], &tf.steady_state());
        for y in out {
            assert!((y - dc_gain).abs() < 1e-12, "got {}", y);
        }
    }

    #[test]
    fn test_magnitude_of_one_pole() {
        let tf = one_pole(0.5);
        assert!((tf.magnitude_at(0.0) - 1.0).abs() < 1e-12);
        // H(-1) = 0.5 / (1 + 0.5)
        assert!((tf.magnitude_at(1.0) - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_dc_gain() {
        let tf = TransferFunction::new(vec![0.2, 0.3, 0.1], vec![1.0, -0.5, 0.3]).unwrap();
        assert!((tf.dc_gain() - 0.75).abs() < 1e-12);
        assert!((one_pole(0.25).dc_gain() - 1.0).abs() < 1e-12);
    }
}
