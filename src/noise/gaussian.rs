//! Gaussian (normal) noise generator implementation.

use crate::{Error, Result, Signal};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};

/// Additive white Gaussian noise.
///
/// Each sample is drawn independently from `N(mean, std_dev²)` using the
/// injected random number generator.
pub struct GaussianNoise<R: Rng = StdRng> {
    /// Sampling distribution
    distribution: Normal<f64>,
    /// Random number generator
    rng: R,
}

impl GaussianNoise<StdRng> {
    /// Creates a Gaussian noise generator seeded from system entropy.
    ///
    /// # Examples
    ///
    /// ```
    /// use quietline::{GaussianNoise, Signal};
    ///
    /// let mut noise = GaussianNoise::new(0.0, 1.0).unwrap();
    /// let sample = noise.next_sample();
    /// assert!(sample.is_finite());
    /// ```
    pub fn new(mean: f64, std_dev: f64) -> Result<Self> {
        Self::with_rng(mean, std_dev, StdRng::from_entropy())
    }
}

impl<R: Rng> GaussianNoise<R> {
    /// Creates a Gaussian noise generator with a custom RNG.
    ///
    /// Fails with `InvalidNoise` when `std_dev` is negative or either
    /// argument is not finite.
    ///
    /// # Examples
    ///
    /// ```
    /// use quietline::{GaussianNoise, Signal};
    /// use rand::SeedableRng;
    ///
    /// let rng = rand::rngs::StdRng::seed_from_u64(42);
    /// let mut noise = GaussianNoise::with_rng(0.0, 0.5, rng).unwrap();
    /// let sample = noise.next_sample();
    /// ```
    pub fn with_rng(mean: f64, std_dev: f64, rng: R) -> Result<Self> {
        let invalid = || Error::InvalidNoise {
            mean,
            variance: std_dev * std_dev,
        };
        if !mean.is_finite() || !std_dev.is_finite() || std_dev < 0.0 {
            return Err(invalid());
        }
        let distribution = Normal::new(mean, std_dev).map_err(|_| invalid())?;
        Ok(Self { distribution, rng })
    }

    pub fn mean(&self) -> f64 {
        self.distribution.mean()
    }

    pub fn std_dev(&self) -> f64 {
        self.distribution.std_dev()
    }
}

impl<R: Rng> Signal for GaussianNoise<R> {
    fn next_sample(&mut self) -> f64 {
        self.distribution.sample(&mut self.rng)
    }
}

/// Draws `length` independent normal samples from `rng`.
///
/// The generator borrows `rng`, so the caller's stream advances by exactly the
/// samples drawn here.
pub fn draw_noise<R: Rng + ?Sized>(
    mean: f64,
    std_dev: f64,
    length: usize,
    rng: &mut R,
) -> Result<Vec<f64>> {
    let mut noise = GaussianNoise::with_rng(mean, std_dev, rng)?;
    Ok(noise.take_samples(length))
}
