use super::*;

#[test]
fn delay_is_base_interval_over_speed() {
    let cfg = PlaybackConfig::new(1000, 4).unwrap();
    assert_eq!(cfg.delay_ms(), 250);
    let cfg = PlaybackConfig::new(10, 1000).unwrap();
    assert_eq!(cfg.delay_ms(), 1);
}

#[test]
fn zero_speed_is_rejected() {
    let err = PlaybackConfig::new(1000, 0).unwrap_err();
    assert_eq!(err.misuse(), Some(PlaybackMisuse::ZeroSpeed));
    assert!(PlaybackConfig::new(0, 1).is_err());
}

#[test]
fn missing_fields_use_defaults() {
    let cfg: PlaybackConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(cfg, PlaybackConfig::default());
    let cfg: PlaybackConfig = serde_json::from_str(r#"{ "speed": 5 }"#).unwrap();
    assert_eq!(cfg.delay_ms(), 200);
}

#[test]
fn check_len_reports_the_bound() {
    assert!(Limits::check_len("array", 50, Limits::MAX_ARRAY_LEN).is_ok());
    let err = Limits::check_len("array", 51, Limits::MAX_ARRAY_LEN).unwrap_err();
    assert!(err.to_string().contains("at most 50"));
}
