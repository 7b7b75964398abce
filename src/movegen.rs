use crate::{Board, Color, Direction, Move, Piece, PieceKind, Square};

/// Whether `piece`, standing on `mov.from`, may move to `mov.to`.
///
/// This is a simplified ruleset: there is no check, castling, en passant or
/// under-promotion. The board is only read.
pub fn is_valid_move(board: &Board, mov: Move, piece: Piece) -> bool {
    if mov.from == mov.to {
        return false;
    }
    let target = board.square(mov.to);
    if target.is_some_and(|target| target.color == piece.color) {
        return false;
    }

    let delta = Direction::between(mov.from, mov.to);
    let (dr, dc) = (delta.row(), delta.col());
    match piece.kind {
        PieceKind::Pawn => {
            let forward = piece.color.forward();
            if dc == 0 {
                if target.is_some() {
                    return false;
                }
                if dr == forward {
                    return true;
                }
                // Double step from the starting rank, both cells empty.
                dr == 2 * forward
                    && mov.from.row() == piece.color.pawn_rank()
                    && mov
                        .from
                        .add(Direction::new(forward, 0))
                        .is_some_and(|middle| board.is_empty(middle))
            } else {
                dc.abs() == 1 && dr == forward && target.is_some()
            }
        }
        PieceKind::Rook => (dr == 0 || dc == 0) && is_path_clear(board, mov.from, mov.to),
        PieceKind::Bishop => dr.abs() == dc.abs() && is_path_clear(board, mov.from, mov.to),
        PieceKind::Queen => {
            (dr == 0 || dc == 0 || dr.abs() == dc.abs()) && is_path_clear(board, mov.from, mov.to)
        }
        PieceKind::Knight => matches!((dr.abs(), dc.abs()), (1, 2) | (2, 1)),
        PieceKind::King => dr.abs() <= 1 && dc.abs() <= 1,
    }
}

/// Whether every square strictly between `from` and `to` is empty.
///
/// `from` and `to` must lie on a common row, column or diagonal.
pub fn is_path_clear(board: &Board, from: Square, to: Square) -> bool {
    let step = Direction::between(from, to).signum();
    let mut square = from;
    loop {
        square = match square.add(step) {
            Some(next) => next,
            None => return true,
        };
        if square == to {
            return true;
        }
        if !board.is_empty(square) {
            return false;
        }
    }
}

/// All legal moves of one color, ordered by source square then destination.
pub fn legal_moves(board: &Board, color: Color) -> impl Iterator<Item = Move> + '_ {
    board.pieces(color).flat_map(move |(from, piece)| {
        Square::all()
            .map(move |to| Move::new(from, to))
            .filter(move |&mov| is_valid_move(board, mov, piece))
    })
}

/// Legal moves that take an opposing piece.
pub fn captures(board: &Board, color: Color) -> impl Iterator<Item = Move> + '_ {
    legal_moves(board, color).filter(move |mov| !board.is_empty(mov.to))
}

pub fn has_legal_move(board: &Board, color: Color) -> bool {
    legal_moves(board, color).next().is_some()
}
