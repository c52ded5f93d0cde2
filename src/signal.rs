//! Core sample-source trait.
//!
//! Everything that produces a sequence of samples over a time grid (the
//! harmonic oscillator, the Gaussian noise generator) implements `Signal`, so
//! batch operations can be written once in terms of `process()`.

/// Common interface for all sample sources.
///
/// The trait provides two fundamental operations:
/// - Single sample generation via `next_sample()`
/// - Batch generation via `process()`
pub trait Signal {
    /// Generates the next sample from the signal.
    fn next_sample(&mut self) -> f64;

    /// Generates multiple samples into a buffer.
    ///
    /// Default implementation calls `next_sample()` for each element.
    /// Implementors may override this for more efficient batch processing.
    ///
    /// # Arguments
    ///
    /// * `buffer` - Mutable slice to fill with samples
    fn process(&mut self, buffer: &mut [f64]) {
        for sample in buffer.iter_mut() {
            *sample = self.next_sample();
        }
    }

    /// Collects the next `len` samples into a new vector.
    fn take_samples(&mut self, len: usize) -> Vec<f64> {
        let mut buffer = vec![0.0; len];
        self.process(&mut buffer);
        buffer
    }
}

/// Implementation of `Signal` for `f64` representing a constant signal value.
///
/// Handy for DC offsets and for feeding filters a flat input in tests.
///
/// # Examples
///
/// ```
/// use quietline::Signal;
///
/// let mut constant = 0.5_f64;
/// assert_eq!(constant.next_sample(), 0.5);
/// assert_eq!(constant.take_samples(3), vec![0.5, 0.5, 0.5]);
/// ```
impl Signal for f64 {
    fn next_sample(&mut self) -> f64 {
        *self
    }

    fn process(&mut self, buffer: &mut [f64]) {
        buffer.fill(*self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Counter(f64);

    impl Signal for Counter {
        fn next_sample(&mut self) -> f64 {
            self.0 += 1.0;
            self.0
        }
    }

    #[test]
    fn test_default_process_calls_next_sample() {
        let mut counter = Counter(0.0);
        let mut buffer = [0.0; 4];
        counter.process(&mut buffer);
        assert_eq!(buffer, [1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_take_samples_continues_stream() {
        let mut counter = Counter(0.0);
        assert_eq!(counter.take_samples(2), vec![1.0, 2.0]);
        assert_eq!(counter.take_samples(2), vec![3.0, 4.0]);
    }

    #[test]
    fn test_constant_fill() {
        let mut constant = -0.25_f64;
        let mut buffer = vec![0.0; 8];
        constant.process(&mut buffer);
        assert!(buffer.iter().all(|&s| s == -0.25));
    }
}
