use super::*;

const BUILT_IN: [Ease; 10] = [
    Ease::Linear,
    Ease::InQuad,
    Ease::OutQuad,
    Ease::InOutQuad,
    Ease::InCubic,
    Ease::OutCubic,
    Ease::InOutCubic,
    Ease::InSine,
    Ease::OutSine,
    Ease::InOutSine,
];

#[test]
fn endpoints_are_stable() {
    for ease in BUILT_IN {
        assert_eq!(ease.apply(0.0), 0.0, "{ease:?}");
        assert_eq!(ease.apply(1.0), 1.0, "{ease:?}");
    }
}

#[test]
fn monotonic_spot_check() {
    for ease in BUILT_IN {
        let a = ease.apply(0.25);
        let b = ease.apply(0.5);
        let c = ease.apply(0.75);
        assert!(a < b, "{ease:?}");
        assert!(b < c, "{ease:?}");
    }
}

#[test]
fn input_is_clamped() {
    assert_eq!(Ease::OutCubic.apply(-1.0), 0.0);
    assert_eq!(Ease::OutCubic.apply(7.0), 1.0);
}

#[test]
fn custom_curve_is_called_with_clamped_progress() {
    fn square_root(t: f64) -> f64 {
        t.sqrt()
    }

    let ease = Ease::Custom(square_root);
    assert!(ease.is_custom());
    assert_eq!(ease.apply(0.25), 0.5);
    assert_eq!(ease.apply(4.0), 1.0);
}

#[test]
fn serde_uses_variant_names() {
    let s = serde_json::to_string(&Ease::OutCubic).unwrap();
    assert_eq!(s, "\"OutCubic\"");
    let back: Ease = serde_json::from_str("\"InOutSine\"").unwrap();
    assert!(matches!(back, Ease::InOutSine));
}
