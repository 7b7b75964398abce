use crate::ParseError;
use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};

/// A cell of the board.
///
/// Row 0 is black's back rank at the top of the board, row 7 is white's.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    pub const HEIGHT: usize = 8;
    pub const WIDTH: usize = 8;
    pub const COUNT: usize = Self::HEIGHT * Self::WIDTH;

    pub const fn new(row: usize, col: usize) -> Self {
        assert!(row < Self::HEIGHT && col < Self::WIDTH);
        Self {
            row: row as u8,
            col: col as u8,
        }
    }

    pub const fn row(self) -> usize {
        self.row as usize
    }

    pub const fn col(self) -> usize {
        self.col as usize
    }

    pub const fn index(self) -> usize {
        self.row() * Self::WIDTH + self.col()
    }

    pub const fn from_index(index: usize) -> Self {
        assert!(index < Self::COUNT);
        Self::new(index / Self::WIDTH, index % Self::WIDTH)
    }

    /// All squares, row by row.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..Self::COUNT).map(Self::from_index)
    }

    pub const fn add(self, direction: Direction) -> Option<Self> {
        let row = self.row.wrapping_add_signed(direction.row);
        let col = self.col.wrapping_add_signed(direction.col);
        if row < Self::HEIGHT as u8 && col < Self::WIDTH as u8 {
            Some(Self { row, col })
        } else {
            None
        }
    }
}

impl Display for Square {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let file = char::from(b'a' + self.col);
        let rank = char::from(b'8' - self.row);
        write!(f, "{file}{rank}")
    }
}

impl FromStr for Square {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, ParseError> {
        let bytes = s.as_bytes();
        if bytes.len() != 2
            || !(b'a'..=b'h').contains(&bytes[0])
            || !(b'1'..=b'8').contains(&bytes[1])
        {
            return Err(ParseError);
        }
        let col = usize::from(bytes[0] - b'a');
        let row = usize::from(b'8' - bytes[1]);
        Ok(Self::new(row, col))
    }
}

/// Signed offset between two squares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Direction {
    row: i8,
    col: i8,
}

impl Direction {
    pub const MAX_ROW: isize = Square::HEIGHT as isize - 1;
    pub const MAX_COL: isize = Square::WIDTH as isize - 1;

    pub const fn new(row: isize, col: isize) -> Self {
        assert!(
            row >= -Self::MAX_ROW
                && row <= Self::MAX_ROW
                && col >= -Self::MAX_COL
                && col <= Self::MAX_COL
        );
        Self {
            row: row as i8,
            col: col as i8,
        }
    }

    pub const fn between(from: Square, to: Square) -> Self {
        Self {
            row: to.row as i8 - from.row as i8,
            col: to.col as i8 - from.col as i8,
        }
    }

    pub fn row(self) -> isize {
        self.row as isize
    }

    pub fn col(self) -> isize {
        self.col as isize
    }

    /// Unit step along each axis: every component is one of -1, 0, 1.
    pub fn signum(self) -> Self {
        Self {
            row: self.row.signum(),
            col: self.col.signum(),
        }
    }
}
