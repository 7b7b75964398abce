use casual_chess::{Board, Color, Player, movegen::is_valid_move};
use rand::{SeedableRng, rngs::StdRng};
use random_player::RandomPlayer;
use std::str::FromStr;

#[test]
fn test_moves_are_legal() {
    let mut player = RandomPlayer::with_rng(StdRng::seed_from_u64(2));
    let mut board = Board::initial();
    for ply in 0..40 {
        let color = if ply % 2 == 0 { Color::White } else { Color::Black };
        let Some(mov) = player.make_move(&board, color) else {
            break;
        };
        let piece = board.square(mov.from).unwrap();
        assert_eq!(piece.color, color);
        assert!(is_valid_move(&board, mov, piece));
        board = board.apply_move(mov).unwrap().board;
    }
}

#[test]
fn test_no_moves() {
    let board = Board::from_str(
        "\
........
p.......
P.......
........
........
........
........
........
",
    )
    .unwrap();
    let mut player = RandomPlayer::new();
    assert_eq!(player.make_move(&board, Color::Black), None);
    assert_eq!(player.make_move(&board, Color::White), None);
}
