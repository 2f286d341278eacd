use super::*;
use crate::animation::value::{AttrValue, attributes};

#[test]
fn grid_fills_rows_first() {
    let grid = GridPlacement::new(4, 10, Vec2::new(45.0, 45.0), Vec2::new(400.0, 500.0)).unwrap();
    assert_eq!(grid.position(0), Vec2::new(45.0, 45.0));
    assert_eq!(grid.position(1), Vec2::new(145.0, 45.0));
    assert_eq!(grid.position(4), Vec2::new(45.0, 95.0));
    assert_eq!(grid.position(7), Vec2::new(345.0, 95.0));
    assert_eq!(grid.at(Slot { index: 5, count: 9 }), Vec2::new(145.0, 95.0));
}

#[test]
fn grid_rejects_empty_dimensions() {
    assert!(GridPlacement::new(0, 10, Vec2::ZERO, Vec2::new(1.0, 1.0)).is_err());
    assert!(GridPlacement::new(3, 0, Vec2::ZERO, Vec2::new(1.0, 1.0)).is_err());
    assert!(GridPlacement::new(3, 3, Vec2::new(f64::NAN, 0.0), Vec2::new(1.0, 1.0)).is_err());
}

#[test]
fn created_pose_is_resolved_overlaid_by_entry() {
    let poses: Poses<'_, char, char> = Poses::new(|_, slot| {
        attributes([("x", slot.index as f64), ("opacity", 1.0)])
    })
    .entry(|_, _| attributes([("opacity", 0.0)]));

    let slot = Slot { index: 3, count: 5 };
    let created = poses.created_for(&'a', slot);
    assert_eq!(created.get("x"), Some(&AttrValue::Number(3.0)));
    assert_eq!(created.get("opacity"), Some(&AttrValue::Number(0.0)));
}

#[test]
fn update_pose_defaults_to_resolved() {
    let poses: Poses<'_, char, char> = Poses::new(|_, _| attributes([("x", 1.0)]));
    assert_eq!(
        poses.update_for(&'a', Slot { index: 0, count: 1 }),
        attributes([("x", 1.0)])
    );

    let poses = poses.update(|_, _| attributes([("x", 2.0)]));
    assert_eq!(
        poses.update_for(&'a', Slot { index: 0, count: 1 }),
        attributes([("x", 2.0)])
    );
}
