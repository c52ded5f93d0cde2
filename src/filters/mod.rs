//! Low-pass filtering strategies.
//!
//! Two interchangeable strategies recover a clean signal from a noisy one:
//! - `Butterworth`: IIR low-pass applied forward and backward (zero phase)
//! - `MovingAverage`: centered boxcar FIR
//!
//! `FilterSpec` names one of them together with its parameters, and
//! [`apply`] dispatches on it.

mod butterworth;
mod iir;
mod moving_average;
mod sos;

pub use butterworth::{Butterworth, design_lowpass};
pub use iir::TransferFunction;
pub use moving_average::MovingAverage;
pub use sos::SecondOrderSections;

use crate::{Error, Result, TimeBase};
use std::fmt;
use std::str::FromStr;

/// A filter that transforms a whole sequence sampled on a `TimeBase`.
pub trait BatchFilter {
    /// Filters `input`, returning a sequence of the same length.
    fn filter(&self, input: &[f64], time_base: &TimeBase) -> Result<Vec<f64>>;
}

/// The available filtering strategies, without their parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterKind {
    Butterworth,
    MovingAverage,
}

impl FilterKind {
    /// Label shown in filter pickers.
    pub fn label(&self) -> &'static str {
        match self {
            FilterKind::Butterworth => "Butterworth",
            FilterKind::MovingAverage => "Custom Filter",
        }
    }
}

impl fmt::Display for FilterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for FilterKind {
    type Err = Error;

    /// Parses a filter picker label.
    ///
    /// Accepts `"Butterworth"` and `"Custom Filter"` as well as
    /// `"moving-average"`/`"moving_average"`, ignoring case and surrounding
    /// whitespace. Anything else is `UnsupportedFilter`.
    fn from_str(name: &str) -> Result<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "butterworth" => Ok(FilterKind::Butterworth),
            "custom filter" | "custom" | "moving-average" | "moving_average" | "moving average" => {
                Ok(FilterKind::MovingAverage)
            }
            _ => Err(Error::unsupported_filter(name)),
        }
    }
}

/// A filtering strategy together with its parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "snake_case"))]
pub enum FilterSpec {
    /// Zero-phase Butterworth low-pass; `cutoff_frequency` in cycles per second.
    Butterworth { cutoff_frequency: f64, order: usize },
    /// Centered moving average over `window_size` samples.
    MovingAverage { window_size: usize },
}

impl Default for FilterSpec {
    fn default() -> Self {
        FilterSpec::Butterworth {
            cutoff_frequency: 5.0,
            order: 4,
        }
    }
}

impl FilterSpec {
    /// Builds a spec from a picker selection plus the current control values;
    /// only the values relevant to `kind` are used.
    pub fn from_kind(kind: FilterKind, cutoff_frequency: f64, order: usize, window_size: usize) -> Self {
        match kind {
            FilterKind::Butterworth => FilterSpec::Butterworth {
                cutoff_frequency,
                order,
            },
            FilterKind::MovingAverage => FilterSpec::MovingAverage { window_size },
        }
    }

    pub fn kind(&self) -> FilterKind {
        match self {
            FilterSpec::Butterworth { .. } => FilterKind::Butterworth,
            FilterSpec::MovingAverage { .. } => FilterKind::MovingAverage,
        }
    }

    /// Filters `input` sampled on `time_base`. See [`apply`].
    pub fn apply(&self, input: &[f64], time_base: &TimeBase) -> Result<Vec<f64>> {
        apply(self, input, time_base)
    }
}

/// Filters `noisy` with the strategy named by `spec`.
///
/// Fails with `LengthMismatch` when `noisy` was not sampled on `time_base`,
/// and with the strategy's own errors otherwise.
///
/// # Examples
///
/// ```
/// use quietline::{FilterSpec, TimeBase, filters};
///
/// let tb = TimeBase::new(0.0, 1.0, 100).unwrap();
/// let flat = vec![1.0; 100];
/// let spec = FilterSpec::MovingAverage { window_size: 5 };
/// let out = filters::apply(&spec, &flat, &tb).unwrap();
/// assert_eq!(out.len(), 100);
/// assert!((out[50] - 1.0).abs() < 1e-12);
/// ```
pub fn apply(spec: &FilterSpec, noisy: &[f64], time_base: &TimeBase) -> Result<Vec<f64>> {
    if noisy.len() != time_base.sample_count() {
        return Err(Error::length_mismatch(time_base.sample_count(), noisy.len()));
    }
    match *spec {
        FilterSpec::Butterworth {
            cutoff_frequency,
            order,
        } => Butterworth::new(cutoff_frequency, order).filter(noisy, time_base),
        FilterSpec::MovingAverage { window_size } => {
            MovingAverage::new(window_size).filter(noisy, time_base)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> TimeBase {
        TimeBase::new(0.0, 10.0, 1000).unwrap()
    }

    #[test]
    fn test_parse_kind() {
        assert_eq!("Butterworth".parse::<FilterKind>(), Ok(FilterKind::Butterworth));
        assert_eq!(" custom filter ".parse::<FilterKind>(), Ok(FilterKind::MovingAverage));
        assert_eq!("moving-average".parse::<FilterKind>(), Ok(FilterKind::MovingAverage));
    }

    #[test]
    fn test_unknown_kind_is_unsupported() {
        assert_eq!(
            "Chebyshev".parse::<FilterKind>(),
            Err(Error::UnsupportedFilter {
                name: "Chebyshev".to_string()
            })
        );
    }

    #[test]
    fn test_label_round_trip() {
        for kind in [FilterKind::Butterworth, FilterKind::MovingAverage] {
            assert_eq!(kind.to_string().parse::<FilterKind>(), Ok(kind));
        }
    }

    #[test]
    fn test_from_kind_picks_relevant_values() {
        assert_eq!(
            FilterSpec::from_kind(FilterKind::Butterworth, 3.0, 2, 25),
            FilterSpec::Butterworth {
                cutoff_frequency: 3.0,
                order: 2
            }
        );
        let spec = FilterSpec::from_kind(FilterKind::MovingAverage, 3.0, 2, 25);
        assert_eq!(spec, FilterSpec::MovingAverage { window_size: 25 });
        assert_eq!(spec.kind(), FilterKind::MovingAverage);
    }

    #[test]
    fn test_default_spec() {
        assert_eq!(FilterSpec::default().kind(), FilterKind::Butterworth);
    }

    #[test]
    fn test_apply_rejects_foreign_length() {
        let spec = FilterSpec::default();
        assert_eq!(
            apply(&spec, &[0.0; 999], &grid()),
            Err(Error::LengthMismatch {
                expected: 1000,
                actual: 999
            })
        );
    }

    #[test]
    fn test_apply_dispatches() {
        let tb = grid();
        let input: Vec<f64> = (0..1000).map(|i| if i % 2 == 0 { 1.0 } else { -1.0 }).collect();

        let butter = FilterSpec::default().apply(&input, &tb).unwrap();
        let boxcar = FilterSpec::MovingAverage { window_size: 10 }.apply(&input, &tb).unwrap();

        // Alternating samples sit at Nyquist; both strategies remove them.
        assert!(butter[500].abs() < 1e-6);
        assert!(boxcar[500].abs() < 1e-12);
    }

    #[test]
    fn test_apply_rejects_cutoff_above_nyquist() {
        let spec = FilterSpec::Butterworth {
            cutoff_frequency: 60.0,
            order: 4,
        };
        assert!(matches!(
            spec.apply(&vec![0.0; 1000], &grid()),
            Err(Error::InvalidFilter { .. })
        ));
    }
}
