use super::*;

#[test]
fn stagger_adds_proportional_delay_on_top_of_base() {
    let t = Timing::new(Millis(1000)).with_delay(Millis(100));
    assert_eq!(t.staggered(0, 4).delay, Millis(100));
    assert_eq!(t.staggered(1, 4).delay, Millis(350));
    assert_eq!(t.staggered(3, 4).delay, Millis(850));
    assert_eq!(t.staggered(3, 0).delay, Millis(100));
}

#[test]
fn stage_keeps_one_tween_per_attribute() {
    let stage = Stage::new(Timing::new(Millis(10)))
        .attr("x", 1.0)
        .attr("y", 2.0)
        .attr_from("x", 5.0, 6.0);
    assert_eq!(stage.tweens.len(), 2);
    let x = stage.tweens.iter().find(|t| t.attribute == "x").unwrap();
    assert_eq!(x.from, Some(AttrValue::Number(5.0)));
    assert!(stage.animates("y"));
    assert!(!stage.animates("z"));
}

#[test]
fn toward_builds_unresolved_tweens_for_a_pose() {
    let pose = crate::animation::value::attributes([("x", 1.0), ("opacity", 0.0)]);
    let stage = Stage::new(Timing::new(Millis(10))).toward(&pose);
    assert_eq!(stage.tweens.len(), 2);
    assert!(stage.tweens.iter().all(|t| t.from.is_none()));
}

#[test]
fn tween_value_needs_a_resolved_start() {
    let unresolved = Tween::new("x", AttrValue::Number(10.0));
    assert_eq!(unresolved.value_at(0.5), None);
    let resolved = Tween::from_to("x", AttrValue::Number(0.0), AttrValue::Number(10.0));
    assert_eq!(resolved.value_at(0.5), Some(AttrValue::Number(5.0)));
}

#[test]
fn chained_transition_span_sums_stages() {
    let t = Transition::new('a', Stage::new(Timing::new(Millis(1000))))
        .then(Stage::new(Timing::new(Millis(500)).with_delay(Millis(20))))
        .remove_on_complete();
    assert_eq!(t.total_span(), Millis(1520));
    assert_eq!(t.on_complete, OnComplete::Remove);
}
