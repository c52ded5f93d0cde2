//! Noise generation.
//!
//! This module contains the Gaussian noise generator and the `NoiseSource`
//! that decides which random stream a session draws from.

mod gaussian;
mod source;

pub use gaussian::{GaussianNoise, draw_noise};
pub use source::{NoiseMode, NoiseSource};
