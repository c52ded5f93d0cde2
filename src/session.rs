//! Stateful evaluation session.
//!
//! A `SignalSession` owns the sampling grid, the randomness policy and the
//! cached noise vector. Each `evaluate` call produces the clean, noisy and
//! filtered series for one parameter set; noise is redrawn only when the
//! requested noise mean or variance differs from the cached draw, so moving
//! the amplitude, frequency or phase controls never makes the noise jitter.

use crate::generator::{clean_signal, noisy_signal};
use crate::{FilterSpec, NoiseMode, NoiseSource, Result, TimeBase};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::borrow::Cow;

/// Parameters of one evaluation request.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SignalParameters {
    /// Peak amplitude of the clean harmonic
    pub amplitude: f64,
    /// Frequency in cycles per second
    pub frequency: f64,
    /// Phase offset in radians
    pub phase: f64,
    /// Mean of the additive Gaussian noise
    pub noise_mean: f64,
    /// Variance of the additive Gaussian noise, must be non-negative
    pub noise_variance: f64,
}

impl Default for SignalParameters {
    fn default() -> Self {
        Self {
            amplitude: 1.0,
            frequency: 0.5,
            phase: 0.0,
            noise_mean: 0.0,
            noise_variance: 0.1,
        }
    }
}

impl SignalParameters {
    pub fn with_harmonic(self, amplitude: f64, frequency: f64, phase: f64) -> Self {
        Self {
            amplitude,
            frequency,
            phase,
            ..self
        }
    }

    pub fn with_noise(self, noise_mean: f64, noise_variance: f64) -> Self {
        Self {
            noise_mean,
            noise_variance,
            ..self
        }
    }
}

/// Clean, noisy and filtered series aligned with the session's sample times.
#[derive(Debug, Clone, PartialEq)]
pub struct SignalTriple {
    pub clean: Vec<f64>,
    pub noisy: Vec<f64>,
    pub filtered: Vec<f64>,
}

impl SignalTriple {
    /// Number of samples in each series.
    pub fn len(&self) -> usize {
        self.clean.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clean.is_empty()
    }
}

/// The noise vector currently cached by a session and the parameters it was
/// drawn with.
#[derive(Debug, Clone, PartialEq)]
pub struct NoiseState {
    mean: f64,
    variance: f64,
    noise: Vec<f64>,
}

impl NoiseState {
    fn new(mean: f64, variance: f64, noise: Vec<f64>) -> Self {
        Self {
            mean,
            variance,
            noise,
        }
    }

    pub fn mean(&self) -> f64 {
        self.mean
    }

    pub fn variance(&self) -> f64 {
        self.variance
    }

    pub fn noise_vector(&self) -> &[f64] {
        &self.noise
    }

    /// Whether this draw was made with exactly these noise parameters.
    pub fn matches(&self, mean: f64, variance: f64) -> bool {
        self.mean == mean && self.variance == variance
    }
}

/// Whether a request can reuse the cached noise vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoiseStatus {
    /// Noise parameters changed (or nothing is cached yet); the next
    /// evaluation draws a new vector.
    Stale,
    /// Noise parameters match the cached draw; it is reused verbatim.
    Fresh,
}

/// Session setup: sampling grid, randomness policy and reset defaults.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SessionConfig {
    pub start: f64,
    pub stop: f64,
    pub sample_count: usize,
    pub noise_mode: NoiseMode,
    /// Parameters restored by `reset()`
    pub defaults: SignalParameters,
    /// Filter restored by `reset()`
    pub default_filter: FilterSpec,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            start: 0.0,
            stop: 10.0,
            sample_count: 1000,
            noise_mode: NoiseMode::default(),
            defaults: SignalParameters::default(),
            default_filter: FilterSpec::default(),
        }
    }
}

impl SessionConfig {
    /// Re-seed the noise stream before every draw.
    pub fn with_seed(self, seed: u64) -> Self {
        Self {
            noise_mode: NoiseMode::Seeded(seed),
            ..self
        }
    }

    pub fn time_base(&self) -> Result<TimeBase> {
        TimeBase::new(self.start, self.stop, self.sample_count)
    }
}

/// Evaluates parameter sets against one sampling grid, caching noise.
///
/// A session is not meant to be shared between concurrent callers; give
/// each control surface its own.
///
/// # Examples
///
/// ```
/// use quietline::{FilterSpec, SessionConfig, SignalParameters, SignalSession};
///
/// let mut session = SignalSession::new(SessionConfig::default().with_seed(42)).unwrap();
/// let triple = session
///     .evaluate(SignalParameters::default(), FilterSpec::default())
///     .unwrap();
/// assert_eq!(triple.len(), 1000);
/// ```
#[derive(Debug)]
pub struct SignalSession<R: Rng + SeedableRng + Clone = StdRng> {
    time_base: TimeBase,
    defaults: SignalParameters,
    default_filter: FilterSpec,
    source: NoiseSource<R>,
    noise: Option<NoiseState>,
    parameters: SignalParameters,
    filter: FilterSpec,
}

impl SignalSession<StdRng> {
    /// Creates a session whose evolving noise stream is seeded from entropy.
    pub fn new(config: SessionConfig) -> Result<Self> {
        Self::with_rng(config, StdRng::from_entropy())
    }
}

impl<R: Rng + SeedableRng + Clone> SignalSession<R> {
    /// Creates a session with an explicit evolving noise stream.
    ///
    /// Fails with `InvalidRange` when the configured grid is malformed.
    pub fn with_rng(config: SessionConfig, rng: R) -> Result<Self> {
        Ok(Self {
            time_base: config.time_base()?,
            defaults: config.defaults,
            default_filter: config.default_filter,
            source: NoiseSource::with_rng(config.noise_mode, rng),
            noise: None,
            parameters: config.defaults,
            filter: config.default_filter,
        })
    }

    pub fn time_base(&self) -> &TimeBase {
        &self.time_base
    }

    pub fn noise_mode(&self) -> NoiseMode {
        self.source.mode()
    }

    /// Parameters of the last successful evaluation (or the defaults).
    pub fn parameters(&self) -> SignalParameters {
        self.parameters
    }

    /// Filter of the last successful evaluation (or the default).
    pub fn filter_spec(&self) -> FilterSpec {
        self.filter
    }

    /// The cached noise draw, if any evaluation has happened since the last reset.
    pub fn noise_state(&self) -> Option<&NoiseState> {
        self.noise.as_ref()
    }

    /// Whether evaluating `params` would reuse the cached noise.
    pub fn noise_status(&self, params: &SignalParameters) -> NoiseStatus {
        match &self.noise {
            Some(state) if state.matches(params.noise_mean, params.noise_variance) => {
                NoiseStatus::Fresh
            }
            _ => NoiseStatus::Stale,
        }
    }

    /// Produces the clean, noisy and filtered series for `params`.
    ///
    /// On success the parameters become the session's current ones and a
    /// newly drawn noise vector replaces the cache. On failure nothing
    /// changes, including the position of the evolving noise stream.
    pub fn evaluate(&mut self, params: SignalParameters, filter: FilterSpec) -> Result<SignalTriple> {
        match self.compute(&params, &filter) {
            Ok((triple, redraw)) => {
                if let Some((source, state)) = redraw {
                    session_debug!(
                        "noise redrawn: {:?} -> mean {} variance {}",
                        self.noise.as_ref().map(|old| (old.mean(), old.variance())),
                        state.mean(),
                        state.variance()
                    );
                    self.source = source;
                    self.noise = Some(state);
                } else {
                    session_debug!("noise reused");
                }
                self.parameters = params;
                self.filter = filter;
                Ok(triple)
            }
            Err(err) => {
                session_debug!("evaluation failed: {}", err);
                Err(err)
            }
        }
    }

    /// Re-evaluates the current parameters and filter.
    pub fn evaluate_current(&mut self) -> Result<SignalTriple> {
        self.evaluate(self.parameters, self.filter)
    }

    /// Restores the default parameters and filter and drops the cached noise.
    ///
    /// The next evaluation draws noise anew: a repeat of the default draw in
    /// `Seeded` mode, the next draw of the stream in `Evolving` mode.
    pub fn reset(&mut self) {
        session_debug!("session reset");
        self.parameters = self.defaults;
        self.filter = self.default_filter;
        self.noise = None;
    }

    #[allow(clippy::type_complexity)]
    fn compute(
        &self,
        params: &SignalParameters,
        filter: &FilterSpec,
    ) -> Result<(SignalTriple, Option<(NoiseSource<R>, NoiseState)>)> {
        let time_base = &self.time_base;
        let clean = clean_signal(time_base, params.amplitude, params.frequency, params.phase);

        // The stream is advanced on a copy, committed by the caller on success.
        let mut source = self.source.clone();
        let noise = match &self.noise {
            Some(state) if state.matches(params.noise_mean, params.noise_variance) => {
                Cow::Borrowed(state)
            }
            _ => {
                let drawn = source.draw(
                    params.noise_mean,
                    params.noise_variance,
                    time_base.sample_count(),
                )?;
                Cow::Owned(NoiseState::new(
                    params.noise_mean,
                    params.noise_variance,
                    drawn,
                ))
            }
        };

        let noisy = noisy_signal(&clean, noise.noise_vector())?;
        let filtered = filter.apply(&noisy, time_base)?;
        let triple = SignalTriple {
            clean,
            noisy,
            filtered,
        };

        let redraw = match noise {
            Cow::Owned(state) => Some((source, state)),
            Cow::Borrowed(_) => None,
        };
        Ok((triple, redraw))
    }
}
