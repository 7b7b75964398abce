use crate::{
    movegen, Color, InvalidMove, Move, MoveOutcome, ParseError, Piece, PieceKind, Square,
};
use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};

/// An 8×8 snapshot of the game.
///
/// Boards are never modified in place by play: [`Board::apply_move`] returns a
/// new board and leaves `self` untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Option<Piece>; Square::WIDTH]; Square::HEIGHT],
}

impl Board {
    pub const EMPTY: Self = Self {
        cells: [[None; Square::WIDTH]; Square::HEIGHT],
    };

    /// Standard starting arrangement: back ranks and full pawn rows.
    pub fn initial() -> Self {
        let mut board = Self::EMPTY;
        for color in Color::all() {
            for (col, kind) in PieceKind::BACK_RANK.into_iter().enumerate() {
                board.set(Square::new(color.back_rank(), col), Some(kind.with_color(color)));
                board.set(
                    Square::new(color.pawn_rank(), col),
                    Some(PieceKind::Pawn.with_color(color)),
                );
            }
        }
        board
    }

    pub fn square(&self, square: Square) -> Option<Piece> {
        self.cells[square.row()][square.col()]
    }

    fn set(&mut self, square: Square, piece: Option<Piece>) {
        self.cells[square.row()][square.col()] = piece;
    }

    pub fn is_empty(&self, square: Square) -> bool {
        self.square(square).is_none()
    }

    /// Pieces of one color with their squares, row by row.
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |square| match self.square(square) {
            Some(piece) if piece.color == color => Some((square, piece)),
            _ => None,
        })
    }

    pub fn count(&self, color: Color) -> usize {
        self.pieces(color).count()
    }

    pub fn king(&self, color: Color) -> Option<Square> {
        self.pieces(color)
            .find(|(_, piece)| piece.kind == PieceKind::King)
            .map(|(square, _)| square)
    }

    /// Applies a legal move, producing the next board.
    ///
    /// A pawn reaching the far back rank becomes a queen.
    pub fn apply_move(&self, mov: Move) -> Result<MoveOutcome, InvalidMove> {
        let piece = self.square(mov.from).ok_or(InvalidMove)?;
        if !movegen::is_valid_move(self, mov, piece) {
            return Err(InvalidMove);
        }

        let mut board = *self;
        let captured = board.square(mov.to);
        let promoted =
            piece.kind == PieceKind::Pawn && mov.to.row() == piece.color.promotion_rank();
        let placed = if promoted {
            PieceKind::Queen.with_color(piece.color)
        } else {
            piece
        };
        board.set(mov.to, Some(placed));
        board.set(mov.from, None);

        Ok(MoveOutcome {
            board,
            captured,
            promoted,
        })
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            for cell in row {
                match cell {
                    None => write!(f, ".")?,
                    Some(piece) => write!(f, "{piece}")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, ParseError> {
        let mut board = Self::EMPTY;
        let mut lines = s.lines();
        for row in 0..Square::HEIGHT {
            let line = lines.next().ok_or(ParseError)?;
            if line.chars().count() != Square::WIDTH {
                return Err(ParseError);
            }
            for (col, c) in line.chars().enumerate() {
                if c == '.' {
                    continue;
                }
                board.set(Square::new(row, col), Some(Piece::from_char(c)?));
            }
        }
        if lines.next().is_some() {
            return Err(ParseError);
        }
        Ok(board)
    }
}
