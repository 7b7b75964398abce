use casual_chess::{Board, Color, Move, PlayerFactory};

#[derive(Debug, Clone)]
pub struct FinishedGame {
    pub moves: Vec<Move>,
    /// `None` if the ply limit was reached.
    pub winner: Option<Color>,
}

/// Plays one game to the end. White moves first.
///
/// A side loses when its king is captured, when it has no legal move, or when
/// it plays an illegal move.
pub fn run_game(
    game_id: &str,
    player_factories: [&dyn PlayerFactory; Color::COUNT],
    opening: &[Move],
    max_plies: usize,
) -> FinishedGame {
    let mut players = Color::all()
        .map(|color| player_factories[color.index()].create(game_id, color))
        .collect::<Vec<_>>();

    let mut board = Board::initial();
    let mut color = Color::White;
    for &mov in opening {
        board = board.apply_move(mov).expect("Invalid opening move").board;
        color = color.opposite();
    }
    let mut moves = opening.to_vec();

    let winner = loop {
        if moves.len() >= max_plies {
            break None;
        }
        let Some(mov) = players[color.index()].make_move(&board, color) else {
            log::debug!("{game_id}: {color} has no moves");
            break Some(color.opposite());
        };
        let outcome = match board.apply_move(mov) {
            Ok(outcome) => outcome,
            Err(e) => {
                log::warn!("{game_id}: {color} played {mov}: {e}");
                break Some(color.opposite());
            }
        };
        moves.push(mov);
        if outcome.captured_king() {
            break Some(color);
        }
        board = outcome.board;
        color = color.opposite();
    };

    match winner {
        Some(winner) => log::debug!("{game_id}: {winner} wins after {} plies", moves.len()),
        None => log::debug!("{game_id}: draw after {} plies", moves.len()),
    }
    FinishedGame { moves, winner }
}
