use casual_chess::{
    session::{AutomatedMove, Phase, Selection},
    Board, Color, GameSession, Move, Piece, PieceKind, Square,
};
use rand::{rngs::StdRng, SeedableRng};
use std::str::FromStr;

fn sq(s: &str) -> Square {
    Square::from_str(s).unwrap()
}

fn mv(s: &str) -> Move {
    Move::from_str(s).unwrap()
}

#[test]
fn test_selection() {
    let mut session = GameSession::new();
    assert_eq!(session.phase(), Phase::AwaitingSelection);
    assert_eq!(session.pending_automated_move(), None);

    // Empty square and opposing piece.
    assert_eq!(session.select(sq("e4")), Selection::Ignored);
    assert_eq!(session.select(sq("e7")), Selection::Ignored);
    assert_eq!(session.phase(), Phase::AwaitingSelection);

    assert_eq!(session.select(sq("e2")), Selection::Selected(sq("e2")));
    assert_eq!(session.phase(), Phase::AwaitingDestination(sq("e2")));
    assert_eq!(session.select(sq("e2")), Selection::Deselected);
    assert_eq!(session.phase(), Phase::AwaitingSelection);

    // Moving the selection to another own piece.
    assert_eq!(session.select(sq("e2")), Selection::Selected(sq("e2")));
    assert_eq!(session.select(sq("g1")), Selection::Selected(sq("g1")));
    assert_eq!(session.phase(), Phase::AwaitingDestination(sq("g1")));

    // Illegal destination clears the selection.
    assert_eq!(session.select(sq("g4")), Selection::Rejected(mv("g1g4")));
    assert_eq!(session.phase(), Phase::AwaitingSelection);
    assert_eq!(session.board(), &Board::initial());
    assert_eq!(session.history_len(), 0);
}

#[test]
fn test_turn_cycle() {
    let mut session = GameSession::new();
    assert_eq!(session.select(sq("e2")), Selection::Selected(sq("e2")));
    let Selection::Moved(played) = session.select(sq("e4")) else {
        panic!("expected a move");
    };
    assert_eq!(played.mov, mv("e2e4"));
    assert_eq!(played.captured, None);
    assert!(!played.promoted);
    assert_eq!(session.phase(), Phase::Thinking);
    assert_eq!(session.history_len(), 1);

    // Taps are ignored while black is thinking.
    assert_eq!(session.select(sq("d2")), Selection::Ignored);

    let pending = session.pending_automated_move().unwrap();
    assert_eq!(pending.board(), session.board());
    let mut rng = StdRng::seed_from_u64(3);
    let mov = pending.compute(&mut rng).unwrap();
    assert_eq!(pending.board().square(mov.from).unwrap().color, Color::Black);

    let AutomatedMove::Applied(played) = session.complete_automated_move(&pending, Some(mov))
    else {
        panic!("expected the automated move to apply");
    };
    assert_eq!(played.mov, mov);
    assert_eq!(session.phase(), Phase::AwaitingSelection);
    assert_eq!(session.pending_automated_move(), None);

    // The same token cannot be used twice.
    assert_eq!(
        session.complete_automated_move(&pending, Some(mov)),
        AutomatedMove::Discarded
    );
}

#[test]
fn test_stale_move_after_reset() {
    let mut session = GameSession::new();
    _ = session.select(sq("d2"));
    _ = session.select(sq("d4"));
    let pending = session.pending_automated_move().unwrap();
    let generation = session.generation();

    session.reset();
    assert!(session.generation() > generation);
    assert_eq!(session.phase(), Phase::AwaitingSelection);

    let mut rng = StdRng::seed_from_u64(0);
    let mov = pending.compute(&mut rng);
    assert_eq!(
        session.complete_automated_move(&pending, mov),
        AutomatedMove::Discarded
    );
    assert_eq!(session.board(), &Board::initial());
    assert_eq!(session.phase(), Phase::AwaitingSelection);
    assert_eq!(session.history_len(), 0);
}

#[test]
fn test_illegal_automated_move() {
    let mut session = GameSession::new();
    _ = session.select(sq("d2"));
    _ = session.select(sq("d4"));
    let pending = session.pending_automated_move().unwrap();
    assert_eq!(
        session.complete_automated_move(&pending, Some(mv("d7d4"))),
        AutomatedMove::Illegal(mv("d7d4"))
    );
    assert_eq!(session.phase(), Phase::Thinking);
    assert_eq!(session.history_len(), 1);

    // The token is still current, unlike a stale one.
    assert_eq!(session.pending_automated_move(), Some(pending));
    assert!(matches!(
        session.complete_automated_move(&pending, Some(mv("d7d5"))),
        AutomatedMove::Applied(_)
    ));
    assert_eq!(session.phase(), Phase::AwaitingSelection);
}

#[test]
fn test_undo() {
    let mut session = GameSession::new();
    assert!(!session.undo());

    _ = session.select(sq("e2"));
    _ = session.select(sq("e4"));
    let pending = session.pending_automated_move().unwrap();
    let mut rng = StdRng::seed_from_u64(11);
    let mov = pending.compute(&mut rng);
    assert!(matches!(
        session.complete_automated_move(&pending, mov),
        AutomatedMove::Applied(_)
    ));
    let after_first = *session.board();

    _ = session.select(sq("d2"));
    _ = session.select(sq("d3"));
    assert_eq!(session.phase(), Phase::Thinking);
    let pending = session.pending_automated_move().unwrap();

    // Undo while thinking drops the pending reply.
    assert!(session.undo());
    assert_eq!(session.board(), &after_first);
    assert_eq!(session.phase(), Phase::AwaitingSelection);
    let mov = pending.compute(&mut rng);
    assert_eq!(
        session.complete_automated_move(&pending, mov),
        AutomatedMove::Discarded
    );

    assert!(session.undo());
    assert_eq!(session.board(), &Board::initial());
    assert!(!session.undo());
}

#[test]
fn test_white_captures_king() {
    let board = Board::from_str(
        "\
k.......
........
........
........
........
........
........
R...K...
",
    )
    .unwrap();
    let mut session = GameSession::from_board(board);
    _ = session.select(sq("a1"));
    let Selection::Moved(played) = session.select(sq("a8")) else {
        panic!("expected a move");
    };
    assert_eq!(
        played.captured,
        Some(Piece::new(PieceKind::King, Color::Black))
    );
    assert_eq!(
        session.phase(),
        Phase::GameOver {
            winner: Color::White
        }
    );
    assert!(session.is_over());
    assert_eq!(session.pending_automated_move(), None);
    assert_eq!(session.select(sq("e1")), Selection::Ignored);
}

#[test]
fn test_black_captures_king() {
    let board = Board::from_str(
        "\
....k...
........
........
........
........
........
.......P
r...K...
",
    )
    .unwrap();
    let mut session = GameSession::from_board(board);
    _ = session.select(sq("h2"));
    _ = session.select(sq("h3"));
    let pending = session.pending_automated_move().unwrap();
    let result = session.complete_automated_move(&pending, Some(mv("a1e1")));
    let AutomatedMove::Applied(played) = result else {
        panic!("expected the automated move to apply");
    };
    assert_eq!(
        played.captured,
        Some(Piece::new(PieceKind::King, Color::White))
    );
    assert_eq!(
        session.phase(),
        Phase::GameOver {
            winner: Color::Black
        }
    );
}

#[test]
fn test_black_without_moves_loses() {
    let board = Board::from_str(
        "\
........
p.......
........
P.......
........
........
........
....K...
",
    )
    .unwrap();
    let mut session = GameSession::from_board(board);
    _ = session.select(sq("a5"));
    assert!(matches!(session.select(sq("a6")), Selection::Moved(_)));
    let pending = session.pending_automated_move().unwrap();
    let mut rng = StdRng::seed_from_u64(0);
    let mov = pending.compute(&mut rng);
    assert_eq!(mov, None);
    assert_eq!(
        session.complete_automated_move(&pending, mov),
        AutomatedMove::NoMoves
    );
    assert_eq!(
        session.phase(),
        Phase::GameOver {
            winner: Color::White
        }
    );
}

#[test]
fn test_white_without_moves_loses() {
    let board = Board::from_str(
        "\
........
........
........
p.......
........
........
P.......
........
",
    )
    .unwrap();
    let mut session = GameSession::from_board(board);
    _ = session.select(sq("a2"));
    _ = session.select(sq("a3"));
    let pending = session.pending_automated_move().unwrap();
    assert!(matches!(
        session.complete_automated_move(&pending, Some(mv("a5a4"))),
        AutomatedMove::Applied(_)
    ));
    assert_eq!(
        session.phase(),
        Phase::GameOver {
            winner: Color::Black
        }
    );
}

#[test]
fn test_promotion_in_session() {
    let board = Board::from_str(
        "\
....k...
P.......
........
........
........
........
........
....K...
",
    )
    .unwrap();
    let mut session = GameSession::from_board(board);
    _ = session.select(sq("a7"));
    let Selection::Moved(played) = session.select(sq("a8")) else {
        panic!("expected a move");
    };
    assert!(played.promoted);
    assert_eq!(
        session.board().square(sq("a8")),
        Some(Piece::new(PieceKind::Queen, Color::White))
    );
}
