use crate::{Board, Color, Move};
use std::hash::{DefaultHasher, Hash, Hasher};

/// It can play a single game.
pub trait Player {
    /// Picks a move for `color`, or `None` if it has no legal move.
    fn make_move(&mut self, board: &Board, color: Color) -> Option<Move>;
}

/// It can create players.
pub trait PlayerFactory: Send + Sync {
    fn create(&self, game_id: &str, color: Color) -> Box<dyn Player>;
}

/// Seed for one player in one game, derived from a factory-wide seed.
///
/// Equal inputs always give the same seed, so a seeded match replays exactly
/// no matter which thread runs each game.
pub fn game_seed(base: u64, game_id: &str, color: Color) -> u64 {
    let mut hasher = DefaultHasher::new();
    base.hash(&mut hasher);
    game_id.hash(&mut hasher);
    color.hash(&mut hasher);
    hasher.finish()
}
