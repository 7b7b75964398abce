use crate::ParseError;
use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub const COUNT: usize = 2;

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Self {
        match index {
            0 => Self::White,
            1 => Self::Black,
            _ => panic!("Invalid Color index"),
        }
    }

    pub fn all() -> impl Iterator<Item = Self> {
        (0..Self::COUNT).map(Self::from_index)
    }

    pub fn opposite(self) -> Self {
        match self {
            Self::White => Self::Black,
            Self::Black => Self::White,
        }
    }

    /// Row delta of a single pawn step.
    ///
    /// White starts at the bottom of the board and moves toward row 0.
    pub fn forward(self) -> isize {
        match self {
            Self::White => -1,
            Self::Black => 1,
        }
    }

    pub fn back_rank(self) -> usize {
        match self {
            Self::White => 7,
            Self::Black => 0,
        }
    }

    pub fn pawn_rank(self) -> usize {
        match self {
            Self::White => 6,
            Self::Black => 1,
        }
    }

    /// The rank where pawns of this color promote.
    pub fn promotion_rank(self) -> usize {
        self.opposite().back_rank()
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::White => "white",
            Self::Black => "black",
        };
        write!(f, "{name}")
    }
}

impl FromStr for Color {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, ParseError> {
        match s {
            "white" => Ok(Self::White),
            "black" => Ok(Self::Black),
            _ => Err(ParseError),
        }
    }
}
