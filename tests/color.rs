use casual_chess::Color;
use std::str::FromStr;

#[test]
fn test_opposite() {
    for color in Color::all() {
        assert_ne!(color.opposite(), color);
        assert_eq!(color.opposite().opposite(), color);
    }
}

#[test]
fn test_display_round_trip() {
    for color in Color::all() {
        let name = color.to_string();
        assert_eq!(Color::from_str(&name).unwrap(), color);
    }
    assert!(Color::from_str("red").is_err());
}

#[test]
fn test_ranks() {
    assert_eq!(Color::White.forward(), -1);
    assert_eq!(Color::Black.forward(), 1);
    assert_eq!(Color::White.back_rank(), 7);
    assert_eq!(Color::White.pawn_rank(), 6);
    assert_eq!(Color::White.promotion_rank(), 0);
    assert_eq!(Color::Black.back_rank(), 0);
    assert_eq!(Color::Black.pawn_rank(), 1);
    assert_eq!(Color::Black.promotion_rank(), 7);
}
