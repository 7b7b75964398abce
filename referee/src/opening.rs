use casual_chess::{Board, Color, Move, movegen};
use rand::{Rng, seq::IteratorRandom};

/// A short sequence of uniformly random moves from the starting board.
///
/// Stops early rather than play a move that captures a king.
pub fn random_opening<RNG: Rng>(len: usize, rng: &mut RNG) -> Vec<Move> {
    let mut moves = Vec::new();
    let mut board = Board::initial();
    let mut color = Color::White;
    while moves.len() < len {
        let Some(mov) = movegen::legal_moves(&board, color).choose(rng) else {
            break;
        };
        let outcome = board.apply_move(mov).unwrap();
        if outcome.captured_king() {
            break;
        }
        board = outcome.board;
        moves.push(mov);
        color = color.opposite();
    }
    moves
}
