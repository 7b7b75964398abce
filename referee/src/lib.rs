mod game;
mod opening;
mod run_match;

pub use game::{FinishedGame, run_game};
pub use opening::random_opening;
pub use run_match::{MatchResult, run_match};
