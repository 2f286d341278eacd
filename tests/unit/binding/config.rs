use super::*;

#[test]
fn defaults_match_one_second_cubic_out() {
    let spec = TransitionSpec::default();
    assert_eq!(spec.delay_ms, 0);
    assert_eq!(spec.duration_ms, 1000);
    assert!(matches!(spec.ease, Ease::OutCubic));
    assert!(!spec.stagger);
}

#[test]
fn partial_json_fills_defaults() {
    let json = r#"{ "update": { "duration_ms": 3000, "ease": "Linear" }, "exit": { "stagger": true } }"#;
    let cfg = BindingConfig::from_reader(json.as_bytes()).unwrap();
    assert_eq!(cfg.update.duration_ms, 3000);
    assert!(matches!(cfg.update.ease, Ease::Linear));
    assert_eq!(cfg.enter.duration_ms, 1000);
    assert!(cfg.exit.stagger);
    assert_eq!(cfg.exit.duration_ms, 1000);
}

#[test]
fn rejects_overflowing_timing() {
    let json = format!(r#"{{ "enter": {{ "delay_ms": {}, "duration_ms": 2 }} }}"#, u64::MAX);
    let err = BindingConfig::from_reader(json.as_bytes()).unwrap_err();
    assert!(matches!(err, JoineryError::Validation(_)));
}

#[test]
fn rejects_unknown_ease() {
    let json = r#"{ "enter": { "ease": "Bounce" } }"#;
    let err = BindingConfig::from_reader(json.as_bytes()).unwrap_err();
    assert!(matches!(err, JoineryError::Serde(_)));
}

#[test]
fn staggered_timing_uses_slot_position() {
    let spec = TransitionSpec {
        delay_ms: 10,
        stagger: true,
        ..TransitionSpec::with_duration(400)
    };
    let t = spec.timing(Slot { index: 2, count: 4 });
    assert_eq!(t.delay, Millis(210));
    assert_eq!(t.duration, Millis(400));

    let plain = TransitionSpec::with_duration(400).timing(Slot { index: 2, count: 4 });
    assert_eq!(plain.delay, Millis(0));
}

#[test]
fn missing_file_is_reported() {
    let err = BindingConfig::from_path(Path::new("/nonexistent/joinery.json")).unwrap_err();
    assert!(err.to_string().contains("open binding config"));
}
