//! Fixed sampling grid shared by every signal in a session.

use crate::{Error, Result};

/// An evenly spaced, inclusive grid of sample times.
///
/// A `TimeBase` is immutable once built. Signals produced over the same
/// time base are aligned index-for-index, which is what makes element-wise
/// addition and filtering well defined.
///
/// # Examples
///
/// ```
/// use quietline::TimeBase;
///
/// let tb = TimeBase::new(0.0, 10.0, 1001).unwrap();
/// assert_eq!(tb.sample_count(), 1001);
/// assert!((tb.sampling_interval() - 0.01).abs() < 1e-12);
/// assert_eq!(tb.sample_times().last(), Some(10.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimeBase {
    start: f64,
    stop: f64,
    sample_count: usize,
}

impl TimeBase {
    /// Builds a grid of `sample_count` points from `start` to `stop` inclusive.
    ///
    /// Fails with `InvalidRange` when fewer than two samples are requested,
    /// when `stop <= start`, or when either bound is not finite.
    pub fn new(start: f64, stop: f64, sample_count: usize) -> Result<Self> {
        if sample_count < 2 || !start.is_finite() || !stop.is_finite() || stop <= start {
            return Err(Error::invalid_range(start, stop, sample_count));
        }
        Ok(Self {
            start,
            stop,
            sample_count,
        })
    }

    pub fn start(&self) -> f64 {
        self.start
    }

    pub fn stop(&self) -> f64 {
        self.stop
    }

    pub fn sample_count(&self) -> usize {
        self.sample_count
    }

    /// Spacing between consecutive samples, `(stop - start) / (sample_count - 1)`.
    pub fn sampling_interval(&self) -> f64 {
        (self.stop - self.start) / (self.sample_count - 1) as f64
    }

    /// Half the sampling rate implied by the grid spacing.
    pub fn nyquist(&self) -> f64 {
        0.5 / self.sampling_interval()
    }

    /// Time of the `index`-th sample.
    ///
    /// The last grid point is pinned to `stop` exactly; indices past the end
    /// keep extrapolating with the same spacing.
    pub fn time_at(&self, index: usize) -> f64 {
        if index == self.sample_count - 1 {
            self.stop
        } else {
            self.start + index as f64 * self.sampling_interval()
        }
    }

    /// Restartable iterator over all sample times.
    pub fn sample_times(&self) -> impl ExactSizeIterator<Item = f64> + Clone + '_ {
        (0..self.sample_count).map(move |i| self.time_at(i))
    }

    /// Materialized sample times, convenient for plotting.
    pub fn to_vec(&self) -> Vec<f64> {
        self.sample_times().collect()
    }
}
