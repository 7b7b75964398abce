//! One game of the in-call chess mini-game.
//!
//! White is played by the person at the screen through cell taps; black is
//! the automated opponent. After each white move the session waits in
//! [`Phase::Thinking`] until the front end hands back the automated move.
//! That move is computed from a [`PendingMove`] token, which goes stale as
//! soon as the session is reset or undone.

use crate::{
    movegen, opponent, Board, Color, InvalidMove, Move, MoveOutcome, Piece, Square,
};
use rand::Rng;

pub const HUMAN: Color = Color::White;
pub const AUTOMATED: Color = Color::Black;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    AwaitingSelection,
    AwaitingDestination(Square),
    Thinking,
    GameOver { winner: Color },
}

/// A move that has been applied to the session's board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Played {
    pub mov: Move,
    pub captured: Option<Piece>,
    pub promoted: bool,
}

/// Response to a cell tap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Selection {
    Ignored,
    Selected(Square),
    Deselected,
    Rejected(Move),
    Moved(Played),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AutomatedMove {
    /// The token belongs to an earlier state of the session.
    Discarded,
    /// The automated side had no legal move and loses.
    NoMoves,
    /// The move is not legal on the pending board; the session keeps thinking.
    Illegal(Move),
    Applied(Played),
}

/// Snapshot handed out while the automated side is thinking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PendingMove {
    generation: u64,
    board: Board,
}

impl PendingMove {
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn compute<R: Rng>(&self, rng: &mut R) -> Option<Move> {
        opponent::select_automated_move(&self.board, AUTOMATED, rng)
    }
}

#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    phase: Phase,
    generation: u64,
    // Board before each white move, oldest first.
    history: Vec<Board>,
}

impl GameSession {
    pub fn new() -> Self {
        Self {
            board: Board::initial(),
            phase: Phase::AwaitingSelection,
            generation: 0,
            history: Vec::new(),
        }
    }

    /// Continues from an arbitrary board with white to move.
    pub fn from_board(board: Board) -> Self {
        Self {
            board,
            ..Self::new()
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn is_over(&self) -> bool {
        matches!(self.phase, Phase::GameOver { .. })
    }

    pub fn select(&mut self, square: Square) -> Selection {
        let own_piece = self
            .board
            .square(square)
            .is_some_and(|piece| piece.color == HUMAN);
        match self.phase {
            Phase::AwaitingSelection => {
                if !own_piece {
                    return Selection::Ignored;
                }
                self.phase = Phase::AwaitingDestination(square);
                Selection::Selected(square)
            }
            Phase::AwaitingDestination(from) => {
                if square == from {
                    self.phase = Phase::AwaitingSelection;
                    return Selection::Deselected;
                }
                if own_piece {
                    self.phase = Phase::AwaitingDestination(square);
                    return Selection::Selected(square);
                }
                let mov = Move::new(from, square);
                match self.board.apply_move(mov) {
                    Ok(outcome) => {
                        self.history.push(self.board);
                        let played = self.commit(mov, outcome, HUMAN);
                        if !self.is_over() {
                            self.phase = Phase::Thinking;
                        }
                        Selection::Moved(played)
                    }
                    Err(InvalidMove) => {
                        self.phase = Phase::AwaitingSelection;
                        Selection::Rejected(mov)
                    }
                }
            }
            Phase::Thinking | Phase::GameOver { .. } => Selection::Ignored,
        }
    }

    pub fn pending_automated_move(&self) -> Option<PendingMove> {
        match self.phase {
            Phase::Thinking => Some(PendingMove {
                generation: self.generation,
                board: self.board,
            }),
            _ => None,
        }
    }

    /// Applies a move computed from `pending`.
    ///
    /// Stale tokens and moves that are not legal on the pending board leave the
    /// session untouched. After [`AutomatedMove::Illegal`] the token is still
    /// current and may be completed again.
    pub fn complete_automated_move(
        &mut self,
        pending: &PendingMove,
        mov: Option<Move>,
    ) -> AutomatedMove {
        if self.phase != Phase::Thinking || pending.generation != self.generation {
            log::debug!("discarding stale automated move");
            return AutomatedMove::Discarded;
        }
        let Some(mov) = mov else {
            self.finish(HUMAN);
            return AutomatedMove::NoMoves;
        };
        let outcome = match self.board.apply_move(mov) {
            Ok(outcome) => outcome,
            Err(InvalidMove) => {
                log::warn!("automated move {mov} is not legal");
                return AutomatedMove::Illegal(mov);
            }
        };
        let played = self.commit(mov, outcome, AUTOMATED);
        if !self.is_over() {
            if movegen::has_legal_move(&self.board, HUMAN) {
                self.phase = Phase::AwaitingSelection;
            } else {
                self.finish(AUTOMATED);
            }
        }
        AutomatedMove::Applied(played)
    }

    /// Discards the current game and starts over.
    pub fn reset(&mut self) {
        self.board = Board::initial();
        self.phase = Phase::AwaitingSelection;
        self.history.clear();
        self.generation += 1;
        log::debug!("session reset, generation {}", self.generation);
    }

    /// Takes back the last white move together with the reply to it.
    pub fn undo(&mut self) -> bool {
        let Some(board) = self.history.pop() else {
            return false;
        };
        self.board = board;
        self.phase = Phase::AwaitingSelection;
        self.generation += 1;
        log::debug!("undo, generation {}", self.generation);
        true
    }

    fn commit(&mut self, mov: Move, outcome: MoveOutcome, mover: Color) -> Played {
        let played = Played {
            mov,
            captured: outcome.captured,
            promoted: outcome.promoted,
        };
        log::debug!("{mover} plays {mov}");
        self.board = outcome.board;
        if outcome.captured_king() {
            self.finish(mover);
        }
        played
    }

    fn finish(&mut self, winner: Color) {
        log::info!("game over, {winner} wins");
        self.phase = Phase::GameOver { winner };
    }
}
