use super::*;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn unpadded_bands_tile_the_range() {
    let s = BandScale::new(['a', 'b', 'c', 'd'], (0.0, 100.0));
    assert_eq!(s.step(), 25.0);
    assert_eq!(s.bandwidth(), 25.0);
    assert_eq!(s.position(&'a'), Some(0.0));
    assert_eq!(s.position(&'d'), Some(75.0));
}

#[test]
fn padding_centers_the_bands() {
    let s = BandScale::new(["x", "y", "z"], (0.0, 120.0)).with_padding(0.1);
    assert!(close(s.step(), 120.0 / 3.1));
    assert!(close(s.bandwidth(), s.step() * 0.9));

    let first = s.position(&"x").unwrap();
    let last = s.position(&"z").unwrap();
    assert!(first > 0.0);
    assert!(close(first, 120.0 - (last + s.bandwidth())));
    assert!(close(s.position(&"y").unwrap() - first, s.step()));
}

#[test]
fn reversed_range_lays_out_from_the_end() {
    let s = BandScale::new([1, 2], (100.0, 0.0));
    assert_eq!(s.position(&1), Some(50.0));
    assert_eq!(s.position(&2), Some(0.0));
}

#[test]
fn unknown_values_have_no_band() {
    let s = BandScale::new(['a'], (0.0, 10.0));
    assert_eq!(s.position(&'b'), None);
    assert!(s.map(&'b').is_nan());
    assert_eq!(s.map(&'a'), 0.0);
}

#[test]
fn inner_padding_is_clamped() {
    let s = BandScale::new(['a', 'b'], (0.0, 10.0)).with_padding_inner(3.0);
    assert_eq!(s.bandwidth(), 0.0);
}
