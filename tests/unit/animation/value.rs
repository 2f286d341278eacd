use super::*;

#[test]
fn vec2_lerp_uses_the_trait_impl() {
    let a = Vec2::new(-2.0, 4.0);
    let b = Vec2::new(6.0, 0.0);
    assert_eq!(<Vec2 as Lerp>::lerp(&a, &b, 0.25), Vec2::new(0.0, 3.0));
}

#[test]
fn numbers_points_and_colors_interpolate_componentwise() {
    let n = AttrValue::lerp(&AttrValue::Number(0.0), &AttrValue::Number(10.0), 0.25);
    assert_eq!(n, AttrValue::Number(2.5));

    let p = AttrValue::lerp(
        &AttrValue::Point(Vec2::new(0.0, 10.0)),
        &AttrValue::Point(Vec2::new(10.0, 0.0)),
        0.5,
    );
    assert_eq!(p, AttrValue::Point(Vec2::new(5.0, 5.0)));

    let c = AttrValue::lerp(
        &AttrValue::Color(Rgba8::rgb(0, 0, 0)),
        &AttrValue::Color(Rgba8::rgb(255, 100, 10)),
        0.5,
    );
    assert_eq!(c, AttrValue::Color(Rgba8::rgb(128, 50, 5)));
}

#[test]
fn text_and_mismatched_kinds_switch_at_the_end() {
    let a = AttrValue::from("A");
    let b = AttrValue::from("B");
    assert_eq!(AttrValue::lerp(&a, &b, 0.99), a);
    assert_eq!(AttrValue::lerp(&a, &b, 1.0), b);

    let n = AttrValue::Number(1.0);
    assert_eq!(AttrValue::lerp(&n, &b, 0.5), n);
    assert_eq!(AttrValue::lerp(&n, &b, 1.0), b);
}

#[test]
fn discrete_interpolator_holds_from() {
    let from = AttrValue::Number(0.0);
    let to = AttrValue::Number(1.0);
    assert_eq!(Interpolator::Discrete.interpolate(&from, &to, 0.5), from);
    assert_eq!(Interpolator::Discrete.interpolate(&from, &to, 1.0), to);
}

#[test]
fn custom_interpolator_is_used() {
    fn always_seven(_: &AttrValue, _: &AttrValue, _: f64) -> AttrValue {
        AttrValue::Number(7.0)
    }

    let v = Interpolator::Custom(always_seven).interpolate(
        &AttrValue::Number(0.0),
        &AttrValue::Number(1.0),
        0.3,
    );
    assert_eq!(v, AttrValue::Number(7.0));
}

#[test]
fn finiteness_checks_numeric_components() {
    assert!(AttrValue::Number(1.0).is_finite());
    assert!(!AttrValue::Number(f64::NAN).is_finite());
    assert!(!AttrValue::Point(Vec2::new(0.0, f64::INFINITY)).is_finite());
    assert!(AttrValue::from("x").is_finite());
}

#[test]
fn attributes_builder_collects_pairs() {
    let attrs = attributes([("x", 1.0), ("y", 2.0)]);
    assert_eq!(attrs.len(), 2);
    assert_eq!(attrs["y"].as_number(), Some(2.0));
}

#[test]
fn attr_values_serialize_as_tagged_snake_case() {
    let v = serde_json::to_value(AttrValue::Number(1.5)).unwrap();
    assert_eq!(v, serde_json::json!({ "number": 1.5 }));
}
