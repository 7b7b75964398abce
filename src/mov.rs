use crate::{Board, ParseError, Piece, PieceKind, Square};
use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

impl Move {
    pub fn new(from: Square, to: Square) -> Self {
        Self { from, to }
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

impl FromStr for Move {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, ParseError> {
        let (from, to) = s.split_at_checked(2).ok_or(ParseError)?;
        Ok(Self {
            from: Square::from_str(from)?,
            to: Square::from_str(to)?,
        })
    }
}

/// Result of applying a move to a board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveOutcome {
    pub board: Board,
    pub captured: Option<Piece>,
    pub promoted: bool,
}

impl MoveOutcome {
    /// Capturing a king ends the game.
    pub fn captured_king(&self) -> bool {
        matches!(
            self.captured,
            Some(Piece {
                kind: PieceKind::King,
                ..
            })
        )
    }
}
