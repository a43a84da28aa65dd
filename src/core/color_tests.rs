use super::*;

#[test]
fn named_colors_are_case_insensitive() {
    assert_eq!(Rgb::from_name("Red"), Ok(Rgb::RED));
    assert_eq!(Rgb::from_name("  GREY "), Ok(Rgb::GRAY));
    assert_eq!(Rgb::from_name("gray"), Ok(Rgb::GRAY));
}

#[test]
fn hex_with_and_without_hash() {
    assert_eq!(Rgb::from_hex("#6048c1"), Ok(Rgb::new(0x60, 0x48, 0xc1)));
    assert_eq!(Rgb::from_hex("FFFFFF"), Ok(Rgb::WHITE));
}

#[test]
fn unknown_name_falls_back_to_hex_error() {
    assert!(matches!(
        Rgb::from_name("chartreuse"),
        Err(ColorError::InvalidHexLength(_))
    ));
    assert!(matches!(
        Rgb::from_hex("#12345g"),
        Err(ColorError::InvalidHexDigit(_))
    ));
}

#[test]
fn signs_are_not_hex_digits() {
    assert_eq!(
        Rgb::from_hex("#+1+2+3"),
        Err(ColorError::InvalidHexDigit("#+1+2+3".into()))
    );
    assert!(Rgb::from_hex("-1-2-3").is_err());
}

#[test]
fn multibyte_input_is_rejected_without_panicking() {
    assert!(Rgb::from_hex("#ééé").is_err());
}

#[test]
fn display_round_trips_through_from_str() {
    let c = Rgb::new(1, 171, 255);
    assert_eq!(c.to_string(), "#01abff");
    assert_eq!(c.to_string().parse::<Rgb>(), Ok(c));
}

#[test]
fn default_palette_is_black_on_white() {
    let p = Palette::default();
    assert_eq!(p.line, Rgb::BLACK);
    assert_eq!(p.scatter, Rgb::BLACK);
    assert_eq!(p.background, Rgb::WHITE);
}
