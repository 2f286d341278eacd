use super::*;

#[test]
fn millis_saturates_instead_of_wrapping() {
    assert_eq!(Millis(5).saturating_sub(Millis(9)), Millis::ZERO);
    assert_eq!(Millis(u64::MAX).saturating_add(Millis(1)), Millis(u64::MAX));
    assert_eq!(Millis(u64::MAX).checked_add(Millis(1)), None);
    assert_eq!(Millis(40).checked_add(Millis(2)), Some(Millis(42)));
}

#[test]
fn hex_colors_parse_with_and_without_alpha() {
    assert_eq!(Rgba8::from_hex("#ff8000").unwrap(), Rgba8::rgb(255, 128, 0));
    assert_eq!(
        Rgba8::from_hex("#00000080").unwrap(),
        Rgba8 {
            r: 0,
            g: 0,
            b: 0,
            a: 128
        }
    );
    assert!(Rgba8::from_hex("ff8000").is_err());
    assert!(Rgba8::from_hex("#ff80").is_err());
    assert!(Rgba8::from_hex("#gg8000").is_err());
}

#[test]
fn css_notation_matches_alpha() {
    assert_eq!(Rgba8::rgb(1, 2, 3).to_css(), "rgb(1, 2, 3)");
    assert!(
        Rgba8 {
            r: 1,
            g: 2,
            b: 3,
            a: 0
        }
        .to_css()
        .starts_with("rgba(1, 2, 3, 0.000")
    );
}
