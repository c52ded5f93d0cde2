//! Randomness policy for noise draws.

use super::draw_noise;
use crate::{Error, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// How successive noise draws relate to each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum NoiseMode {
    /// One random stream persists for the session; every draw is new.
    #[default]
    Evolving,
    /// The stream is re-seeded before every draw, so identical requests
    /// produce identical noise.
    Seeded(u64),
}

impl NoiseMode {
    /// Builds a mode from an optional fixed seed.
    pub fn from_seed(seed: Option<u64>) -> Self {
        seed.map_or(NoiseMode::Evolving, NoiseMode::Seeded)
    }

    pub fn seed(&self) -> Option<u64> {
        match self {
            NoiseMode::Evolving => None,
            NoiseMode::Seeded(seed) => Some(*seed),
        }
    }
}

/// Produces noise vectors according to a `NoiseMode`.
///
/// In `Evolving` mode the owned RNG advances with every draw. In `Seeded`
/// mode the owned RNG is ignored and each draw starts from a fresh RNG built
/// from the seed.
#[derive(Debug, Clone)]
pub struct NoiseSource<R: Rng + SeedableRng + Clone = StdRng> {
    mode: NoiseMode,
    rng: R,
}

impl NoiseSource<StdRng> {
    /// Creates a noise source whose evolving stream is seeded from entropy.
    pub fn new(mode: NoiseMode) -> Self {
        Self::with_rng(mode, StdRng::from_entropy())
    }
}

impl<R: Rng + SeedableRng + Clone> NoiseSource<R> {
    /// Creates a noise source with an explicit evolving stream.
    pub fn with_rng(mode: NoiseMode, rng: R) -> Self {
        Self { mode, rng }
    }

    pub fn mode(&self) -> NoiseMode {
        self.mode
    }

    /// Draws `len` samples from `N(mean, variance)`.
    ///
    /// Fails with `InvalidNoise` for a negative or non-finite variance.
    pub fn draw(&mut self, mean: f64, variance: f64, len: usize) -> Result<Vec<f64>> {
        if !variance.is_finite() || variance < 0.0 {
            return Err(Error::InvalidNoise { mean, variance });
        }
        let std_dev = variance.sqrt();
        match self.mode {
            NoiseMode::Evolving => draw_noise(mean, std_dev, len, &mut self.rng),
            NoiseMode::Seeded(seed) => draw_noise(mean, std_dev, len, &mut R::seed_from_u64(seed)),
        }
    }
}
