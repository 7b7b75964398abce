mod board;
mod cli;
mod color;
pub mod constants;
mod error;
mod mov;
pub mod movegen;
pub mod opponent;
mod piece;
mod player;
pub mod session;
mod square;

pub use board::Board;
pub use cli::{run_cli, CliCommand};
pub use color::Color;
pub use error::{InvalidMove, ParseError};
pub use mov::{Move, MoveOutcome};
pub use opponent::{CasualPlayer, CasualPlayerFactory};
pub use piece::{Piece, PieceKind};
pub use player::{game_seed, Player, PlayerFactory};
pub use session::GameSession;
pub use square::{Direction, Square};
