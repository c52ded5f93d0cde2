#![cfg(feature = "serde")]

use quietline::{FilterSpec, NoiseMode, SessionConfig, SignalParameters, SignalSession};

#[test]
fn test_load_config_from_json() {
    let json = r#"{
        "start": 0,
        "stop": 5,
        "sample_count": 500,
        "noise_mode": { "seeded": 3 },
        "defaults": { "amplitude": 2.0, "noise_variance": 0.05 },
        "default_filter": { "type": "moving_average", "window_size": 25 }
    }"#;
    let config: SessionConfig = serde_json::from_str(json).unwrap();

    assert_eq!(config.sample_count, 500);
    assert_eq!(config.noise_mode, NoiseMode::Seeded(3));
    assert_eq!(config.defaults.amplitude, 2.0);
    assert_eq!(config.defaults.frequency, SignalParameters::default().frequency);
    assert_eq!(
        config.default_filter,
        FilterSpec::MovingAverage { window_size: 25 }
    );

    let mut session = SignalSession::new(config).unwrap();
    assert_eq!(session.evaluate_current().unwrap().len(), 500);
}

#[test]
fn test_empty_json_is_default_config() {
    let config: SessionConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(config, SessionConfig::default());
}

#[test]
fn test_config_round_trips_through_json() {
    let config = SessionConfig::default().with_seed(12);
    let text = serde_json::to_string(&config).unwrap();
    let back: SessionConfig = serde_json::from_str(&text).unwrap();
    assert_eq!(back, config);
    assert!(text.contains("\"butterworth\""));
}
