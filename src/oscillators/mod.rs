//! Oscillators that evaluate periodic waveforms over a `TimeBase`.

mod harmonic;

pub use harmonic::HarmonicOscillator;
