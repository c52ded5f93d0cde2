//! Centered moving-average (boxcar) filter.

use super::BatchFilter;
use crate::{Error, Result, TimeBase};

/// Centered moving average with a uniform kernel of `1 / window_size`.
///
/// Output sample `i` averages `input[i - w/2 ..= i + ⌈w/2⌉ - 1]`. Positions
/// outside the input count as zero while the divisor stays `window_size`, so
/// the first and last half-window of samples are pulled toward zero. The
/// output always has the same length as the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MovingAverage {
    window_size: usize,
}

impl MovingAverage {
    /// Window used when the caller does not pick one.
    pub const DEFAULT_WINDOW: usize = 10;
    /// Wider window offered by the dashboard's "Custom Filter" option.
    pub const WIDE_WINDOW: usize = 25;

    pub fn new(window_size: usize) -> Self {
        Self { window_size }
    }

    pub fn window_size(&self) -> usize {
        self.window_size
    }

    /// Samples before and after the center that the window covers.
    fn reach(&self) -> (usize, usize) {
        let before = self.window_size / 2;
        (before, self.window_size - before - 1)
    }

    /// Applies the filter to `input`.
    ///
    /// Fails with `InvalidFilter` when the window is empty.
    pub fn smooth(&self, input: &[f64]) -> Result<Vec<f64>> {
        if self.window_size == 0 {
            return Err(Error::invalid_filter("moving-average window must be at least 1"));
        }

        let n = input.len();
        let (before, after) = self.reach();
        let width = self.window_size as f64;

        // Running sum over the window centered on sample 0.
        let mut sum: f64 = input.iter().take(after + 1).sum();
        let mut output = Vec::with_capacity(n);
        for i in 0..n {
            output.push(sum / width);

            if let Some(&entering) = input.get(i + 1 + after) {
                sum += entering;
            }
            if i >= before {
                sum -= input[i - before];
            }
        }
        Ok(output)
    }
}

impl Default for MovingAverage {
    fn default() -> Self {
        Self::new(Self::DEFAULT_WINDOW)
    }
}

impl BatchFilter for MovingAverage {
    fn filter(&self, input: &[f64], _time_base: &TimeBase) -> Result<Vec<f64>> {
        self.smooth(input)
    }
}
