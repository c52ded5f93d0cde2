//! Property-based tests for quietline
//!
//! Uses proptest to check grid, generator and filter invariants over
//! randomly chosen parameters.

use proptest::prelude::*;
use proptest::test_runner::Config as ProptestConfig;
use quietline::generator::clean_signal;
use quietline::{FilterSpec, MovingAverage, TimeBase, filters};
use std::f64::consts::PI;

fn proptest_config() -> ProptestConfig {
    ProptestConfig {
        cases: 256,
        ..ProptestConfig::default()
    }
}

/// Property: the grid has the requested length, hits both ends and is evenly spaced.
#[test]
fn test_time_base_spacing() {
    proptest!(proptest_config(), |(start in -100.0f64..100.0, span in 0.1f64..100.0, count in 2usize..2000)| {
        let stop = start + span;
        let tb = TimeBase::new(start, stop, count).unwrap();
        let times = tb.to_vec();

        prop_assert_eq!(times.len(), count);
        prop_assert_eq!(times[0], start);
        prop_assert_eq!(times[count - 1], stop);

        let dt = tb.sampling_interval();
        for pair in times.windows(2) {
            prop_assert!((pair[1] - pair[0] - dt).abs() < 1e-9 * span.max(1.0));
        }
    });
}

/// Property: shifting the phase by a full turn leaves the clean signal unchanged.
#[test]
fn test_phase_periodicity() {
    proptest!(proptest_config(), |(amplitude in 0.0f64..2.0, frequency in 0.1f64..1.5, phase in 0.0f64..PI)| {
        let tb = TimeBase::new(0.0, 10.0, 1000).unwrap();
        let a = clean_signal(&tb, amplitude, frequency, phase);
        let b = clean_signal(&tb, amplitude, frequency, phase + 2.0 * PI);
        for (x, y) in a.iter().zip(&b) {
            prop_assert!((x - y).abs() < 1e-9);
        }
    });
}

/// Property: away from the edges a constant input passes the moving average unchanged.
#[test]
fn test_moving_average_preserves_constants() {
    proptest!(proptest_config(), |(value in -100.0f64..100.0, len in 1usize..300, window in 1usize..30)| {
        let input = vec![value; len];
        let output = MovingAverage::new(window).smooth(&input).unwrap();
        prop_assert_eq!(output.len(), len);

        let before = window / 2;
        let after = window - before - 1;
        if len > before + after {
            for y in &output[before..len - after] {
                prop_assert!((y - value).abs() < 1e-9);
            }
        }
    });
}

/// Property: both strategies return one bounded output sample per input sample.
#[test]
fn test_filters_preserve_length_and_stay_bounded() {
    proptest!(proptest_config(), |(
        samples in prop::collection::vec(-5.0f64..5.0, 50..400),
        fraction in 0.05f64..0.9,
        order in 1usize..=6,
        window in 1usize..40,
    )| {
        let tb = TimeBase::new(0.0, 1.0, samples.len()).unwrap();
        let butter = FilterSpec::Butterworth {
            cutoff_frequency: fraction * tb.nyquist(),
            order,
        };
        let boxcar = FilterSpec::MovingAverage { window_size: window };

        let peak = samples.iter().fold(0.0_f64, |m, x| m.max(x.abs()));
        for spec in [butter, boxcar] {
            let output = filters::apply(&spec, &samples, &tb).unwrap();
            prop_assert_eq!(output.len(), samples.len());
            for y in &output {
                prop_assert!(y.is_finite() && y.abs() <= 8.0 * peak + 1e-9, "{:?}: {}", spec, y);
            }
        }
    });
}

/// Property: on the reference grid every order and cutoff the controls offer
/// passes a constant through unchanged.
#[test]
fn test_butterworth_unit_dc_gain() {
    proptest!(proptest_config(), |(value in -10.0f64..10.0, cutoff in 0.1f64..10.0, order in 1usize..=10)| {
        let tb = TimeBase::new(0.0, 10.0, 1000).unwrap();
        let spec = FilterSpec::Butterworth { cutoff_frequency: cutoff, order };
        let output = filters::apply(&spec, &vec![value; 1000], &tb).unwrap();
        for y in output {
            prop_assert!((y - value).abs() < 1e-6, "order {} cutoff {}: {}", order, cutoff, y);
        }
    });
}
