use crate::{
    constants::CAPTURE_PROBABILITY, game_seed, movegen, Board, Color, Move, Player,
    PlayerFactory,
};
use rand::{rngs::StdRng, seq::IndexedRandom, Rng, SeedableRng};

/// Picks a move for the automated side.
///
/// When captures are available, a capture is chosen with probability
/// [`CAPTURE_PROBABILITY`]; otherwise the move is drawn uniformly from all
/// legal moves, captures included. Returns `None` if `color` cannot move.
pub fn select_automated_move<R: Rng>(board: &Board, color: Color, rng: &mut R) -> Option<Move> {
    let moves: Vec<Move> = movegen::legal_moves(board, color).collect();
    let captures: Vec<Move> = movegen::captures(board, color).collect();

    let mov = if !captures.is_empty() && rng.random_bool(CAPTURE_PROBABILITY) {
        captures.choose(rng)
    } else {
        moves.choose(rng)
    }
    .copied();

    log::debug!(
        "{color}: {} moves, {} captures, chose {}",
        moves.len(),
        captures.len(),
        mov.map_or_else(|| "nothing".to_string(), |mov| mov.to_string()),
    );
    mov
}

/// The in-game automated opponent.
#[derive(Debug)]
pub struct CasualPlayer<R = StdRng> {
    rng: R,
}

impl CasualPlayer {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<R: Rng> CasualPlayer<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> Player for CasualPlayer<R> {
    fn make_move(&mut self, board: &Board, color: Color) -> Option<Move> {
        select_automated_move(board, color, &mut self.rng)
    }
}

/// Creates [`CasualPlayer`]s, seeded per game when given a base seed.
#[derive(Debug)]
pub struct CasualPlayerFactory {
    seed: Option<u64>,
}

impl CasualPlayerFactory {
    pub fn new() -> Self {
        Self { seed: None }
    }

    pub fn seeded(seed: u64) -> Self {
        Self { seed: Some(seed) }
    }
}

impl PlayerFactory for CasualPlayerFactory {
    fn create(&self, game_id: &str, color: Color) -> Box<dyn Player> {
        match self.seed {
            Some(base) => Box::new(CasualPlayer::seeded(game_seed(base, game_id, color))),
            None => Box::new(CasualPlayer::new()),
        }
    }
}
