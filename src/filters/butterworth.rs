//! Butterworth low-pass design and zero-phase application.
//!
//! The design follows the classic analog-prototype route: place the `order`
//! poles of a unit-cutoff Butterworth prototype on the left half of the unit
//! circle, scale them to the pre-warped cutoff and map them to the z-plane
//! with the bilinear transform. Conjugate pole pairs become biquad sections
//! with a double zero at Nyquist; an odd order adds one first-order section.
//! Each section is normalized to unit DC gain.

use super::sos::zero_phase_pad_len;
use super::{BatchFilter, SecondOrderSections, TransferFunction};
use crate::{Error, Result, TimeBase};
use num_complex::Complex;
use std::f64::consts::PI;

/// Sampling rate the bilinear transform is normalized to; with `fs = 2`,
/// a normalized cutoff of 1 lands on Nyquist.
const NORMALIZED_FS: f64 = 2.0;

/// A Butterworth low-pass filter (maximally flat passband).
///
/// # Examples
///
/// ```
/// use quietline::{Butterworth, TimeBase};
///
/// let tb = TimeBase::new(0.0, 10.0, 1000).unwrap();
/// let sos = Butterworth::new(5.0, 4).design(&tb).unwrap();
/// assert_eq!(sos.order(), 4);
/// assert_eq!(sos.sections().len(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Butterworth {
    cutoff_frequency: f64,
    order: usize,
}

impl Butterworth {
    /// Creates a low-pass filter with a cutoff in cycles per second.
    pub fn new(cutoff_frequency: f64, order: usize) -> Self {
        Self {
            cutoff_frequency,
            order,
        }
    }

    pub fn cutoff_frequency(&self) -> f64 {
        self.cutoff_frequency
    }

    pub fn order(&self) -> usize {
        self.order
    }

    /// Cutoff as a fraction of the Nyquist frequency of `time_base`.
    ///
    /// Fails with `InvalidFilter` unless the result lies strictly inside (0, 1).
    pub fn normalized_cutoff(&self, time_base: &TimeBase) -> Result<f64> {
        let nyquist = time_base.nyquist();
        let wn = self.cutoff_frequency / nyquist;
        if !wn.is_finite() || wn <= 0.0 || wn >= 1.0 {
            return Err(Error::invalid_filter(format!(
                "cutoff {} Hz must lie strictly between 0 and the Nyquist frequency {} Hz",
                self.cutoff_frequency, nyquist
            )));
        }
        Ok(wn)
    }

    /// Designs the digital filter for the sampling grid of `time_base`.
    pub fn design(&self, time_base: &TimeBase) -> Result<SecondOrderSections> {
        let wn = self.normalized_cutoff(time_base)?;
        design_lowpass(self.order, wn)
    }
}

impl BatchFilter for Butterworth {
    fn filter(&self, input: &[f64], time_base: &TimeBase) -> Result<Vec<f64>> {
        // Checked before designing; the design allocates per order.
        let required = zero_phase_pad_len(self.order).unwrap_or(usize::MAX);
        if input.len() <= required {
            return Err(Error::insufficient_samples(required, input.len()));
        }
        self.design(time_base)?.filtfilt(input)
    }
}

/// Designs an `order`-th order Butterworth low-pass with normalized cutoff `wn`
/// (fraction of Nyquist, exclusive range (0, 1)) as a cascade of sections.
pub fn design_lowpass(order: usize, wn: f64) -> Result<SecondOrderSections> {
    if order == 0 {
        return Err(Error::invalid_filter("Butterworth order must be at least 1"));
    }
    if !wn.is_finite() || wn <= 0.0 || wn >= 1.0 {
        return Err(Error::invalid_filter(format!(
            "normalized cutoff {} must lie strictly between 0 and 1",
            wn
        )));
    }

    let n = order as f64;
    let warped = 2.0 * NORMALIZED_FS * (PI * wn / NORMALIZED_FS).tan();
    let fs2 = Complex::new(2.0 * NORMALIZED_FS, 0.0);

    // Prototype pole `i` scaled to the warped cutoff, then mapped through
    // the bilinear transform s -> z = (2fs + s) / (2fs - s).
    let digital_pole = |i: usize| {
        let m = 2.0 * i as f64 - (n - 1.0);
        let analog = -Complex::from_polar(1.0, PI * m / (2.0 * n)) * warped;
        (fs2 + analog) / (fs2 - analog)
    };

    // Poles `i` and `order - 1 - i` are conjugates.
    let mut sections = Vec::new();
    for i in 0..order / 2 {
        let pole = digital_pole(i);
        let a = vec![1.0, -2.0 * pole.re, pole.norm_sqr()];
        let gain = a.iter().sum::<f64>() / 4.0;
        sections.push(TransferFunction::new(vec![gain, 2.0 * gain, gain], a)?);
    }
    if order % 2 == 1 {
        let pole = digital_pole(order / 2).re;
        let gain = (1.0 - pole) / 2.0;
        sections.push(TransferFunction::new(vec![gain, gain], vec![1.0, -pole])?);
    }
    SecondOrderSections::new(sections)
}
