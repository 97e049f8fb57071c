//! Tests for DispatcherConfig parsing and validation

use clinic_queue_core::{ConfigError, Dispatcher, DispatcherConfig, DEFAULT_AVG_SERVICE_TIME};

#[test]
fn test_default_service_time() {
    assert_eq!(DispatcherConfig::default().avg_service_time, DEFAULT_AVG_SERVICE_TIME);
    assert_eq!(DEFAULT_AVG_SERVICE_TIME, 10);
}

#[test]
fn test_from_json() {
    let config = DispatcherConfig::from_json_str(r#"{"avg_service_time": 25}"#).unwrap();
    let dispatcher = Dispatcher::new(config).unwrap();
    assert_eq!(dispatcher.avg_service_time(), 25);
    assert_eq!(dispatcher.estimate_wait().minutes, 25);
}

#[test]
fn test_from_json_rejects_zero() {
    assert_eq!(
        DispatcherConfig::from_json_str(r#"{"avg_service_time": 0}"#),
        Err(ConfigError::NonPositiveServiceTime(0))
    );
}

#[test]
fn test_from_json_rejects_negative_and_malformed() {
    assert!(matches!(
        DispatcherConfig::from_json_str(r#"{"avg_service_time": -5}"#),
        Err(ConfigError::Parse { .. })
    ));
    assert!(matches!(
        DispatcherConfig::from_json_str("not json"),
        Err(ConfigError::Parse { .. })
    ));
}

#[test]
fn test_error_messages() {
    assert_eq!(
        ConfigError::NonPositiveServiceTime(0).to_string(),
        "avg_service_time must be a positive number of minutes, got 0"
    );
}

#[test]
fn test_config_round_trips_through_json() {
    let config = DispatcherConfig::new(15).unwrap();
    let json = serde_json::to_string(&config).unwrap();
    assert_eq!(DispatcherConfig::from_json_str(&json).unwrap(), config);
}
