use casual_chess::{Color, Piece, PieceKind};
use std::str::FromStr;

#[test]
fn test_display_from_str() {
    for color in Color::all() {
        for kind in PieceKind::all() {
            let piece = kind.with_color(color);
            assert_eq!(Piece::from_str(&piece.to_string()).unwrap(), piece);
        }
    }
    assert_eq!(
        Piece::from_str("Q").unwrap(),
        Piece::new(PieceKind::Queen, Color::White)
    );
    assert_eq!(
        Piece::from_str("n").unwrap(),
        Piece::new(PieceKind::Knight, Color::Black)
    );
    assert!(Piece::from_str("x").is_err());
    assert!(Piece::from_str("").is_err());
    assert!(Piece::from_str("QQ").is_err());
}
