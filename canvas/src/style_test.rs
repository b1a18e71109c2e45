#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn default_style_is_width_2_dark_blue() {
    let s = Style::default();
    assert_eq!(s.width, 2.0);
    assert_eq!(s.color, Color::rgb(0x00, 0x00, 0xAA));
}

#[test]
fn hit_accuracy_is_half_width_plus_two() {
    assert_eq!(Style::new(2.0, Color::default()).hit_accuracy(), 3.0);
    assert_eq!(Style::new(5.0, Color::default()).hit_accuracy(), 4.5);
}

#[test]
fn parse_long_hex() {
    let c: Color = "#1a2B3c".parse().unwrap();
    assert_eq!(c, Color::rgb(0x1a, 0x2b, 0x3c));
}

#[test]
fn parse_short_hex() {
    let c: Color = "#f0a".parse().unwrap();
    assert_eq!(c, Color::rgb(0xff, 0x00, 0xaa));
}

#[test]
fn parse_rejects_missing_hash_and_bad_digits() {
    assert!(matches!("00ff00".parse::<Color>(), Err(CanvasError::InvalidColor(_))));
    assert!(matches!("#00fg00".parse::<Color>(), Err(CanvasError::InvalidColor(_))));
    assert!(matches!("#0000".parse::<Color>(), Err(CanvasError::InvalidColor(_))));
    assert!(matches!("#ééé".parse::<Color>(), Err(CanvasError::InvalidColor(_))));
}

#[test]
fn to_hex_pads_channels() {
    assert_eq!(Color::rgb(0, 10, 250).to_hex(), "#000afa");
    assert_eq!(Color::rgb(0, 10, 250).to_string(), "#000afa");
}

#[test]
fn color_serializes_as_hex_string() {
    let json = serde_json::to_string(&Color::rgb(255, 0, 0)).unwrap();
    assert_eq!(json, "\"#ff0000\"");
    let back: Color = serde_json::from_str("\"#00FF00\"").unwrap();
    assert_eq!(back, Color::rgb(0, 255, 0));
}

#[test]
fn style_deserialize_fills_defaults() {
    let s: Style = serde_json::from_str("{}").unwrap();
    assert_eq!(s, Style::default());
    let s: Style = serde_json::from_str(r##"{"width": 3, "color": "#102030"}"##).unwrap();
    assert_eq!(s.width, 3.0);
    assert_eq!(s.color, Color::rgb(0x10, 0x20, 0x30));
}
