//! Error types for signal generation and filtering.

use thiserror::Error;

/// Result type alias for quietline operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong while building a time base, generating
/// signals or filtering them.
///
/// All variants are recoverable: a caller driving a control loop should
/// surface the message and keep running.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// The sampling grid is malformed.
    #[error("Invalid range: [{start}, {stop}] with {sample_count} samples")]
    InvalidRange {
        start: f64,
        stop: f64,
        sample_count: usize,
    },

    /// Two sequences that must be combined element-wise differ in length.
    #[error("Length mismatch: expected {expected}, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    /// The filter parameters do not describe a realizable filter.
    #[error("Invalid filter: {message}")]
    InvalidFilter { message: String },

    /// The input is too short for the requested filter and its padding.
    #[error("Insufficient samples: need more than {required}, got {available}")]
    InsufficientSamples { required: usize, available: usize },

    /// The requested filter is not one this crate implements.
    #[error("Unsupported filter: {name:?}")]
    UnsupportedFilter { name: String },

    /// Noise variance is negative or not finite.
    #[error("Invalid noise: mean {mean}, variance {variance}")]
    InvalidNoise { mean: f64, variance: f64 },

    /// A display mode name that no layout answers to.
    #[error("Unknown display mode: {name:?}")]
    UnknownDisplayMode { name: String },
}

impl Error {
    /// Create an invalid range error.
    pub fn invalid_range(start: f64, stop: f64, sample_count: usize) -> Self {
        Self::InvalidRange {
            start,
            stop,
            sample_count,
        }
    }

    /// Create a length mismatch error.
    pub fn length_mismatch(expected: usize, actual: usize) -> Self {
        Self::LengthMismatch { expected, actual }
    }

    /// Create an invalid filter error.
    pub fn invalid_filter(message: impl Into<String>) -> Self {
        Self::InvalidFilter {
            message: message.into(),
        }
    }

    /// Create an insufficient samples error.
    pub fn insufficient_samples(required: usize, available: usize) -> Self {
        Self::InsufficientSamples {
            required,
            available,
        }
    }

    /// Create an unsupported filter error.
    pub fn unsupported_filter(name: impl Into<String>) -> Self {
        Self::UnsupportedFilter { name: name.into() }
    }
}
