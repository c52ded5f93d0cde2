//! Quietline - harmonic signal synthesis with cached Gaussian noise and
//! zero-phase low-pass filtering.
//!
//! A [`SignalSession`] evaluates a sinusoid over a fixed [`TimeBase`], adds
//! Gaussian noise that is only redrawn when the noise parameters change, and
//! recovers the sinusoid with either a zero-phase [`Butterworth`] low-pass or
//! a centered [`MovingAverage`].
//!
//! ```
//! use quietline::{metrics, FilterSpec, SessionConfig, SignalParameters, SignalSession};
//!
//! let mut session = SignalSession::new(SessionConfig::default().with_seed(7)).unwrap();
//! let triple = session
//!     .evaluate(SignalParameters::default(), FilterSpec::default())
//!     .unwrap();
//! let mae = metrics::mean_absolute_error(&triple.filtered, &triple.clean).unwrap();
//! assert!(mae < 0.15);
//! ```

#[macro_use]
mod debug;

pub mod display;
pub mod error;
pub mod filters;
pub mod generator;
pub mod metrics;
pub mod noise;
pub mod oscillators;
pub mod session;
pub mod signal;
pub mod time_base;

// Re-export commonly used types at the crate root
pub use display::{DisplayMode, Trace, TraceVisibility};
pub use error::{Error, Result};
pub use filters::{
    BatchFilter, Butterworth, FilterKind, FilterSpec, MovingAverage, SecondOrderSections,
    TransferFunction,
};
pub use noise::{GaussianNoise, NoiseMode, NoiseSource, draw_noise};
pub use oscillators::HarmonicOscillator;
pub use session::{
    NoiseState, NoiseStatus, SessionConfig, SignalParameters, SignalSession, SignalTriple,
};
pub use signal::Signal;
pub use time_base::TimeBase;
