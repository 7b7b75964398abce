use casual_chess::{Board, Color, Move, Player, PlayerFactory, game_seed, movegen};
use rand::{Rng, SeedableRng, rngs::StdRng, seq::IteratorRandom};

/// Picks uniformly among legal moves, ignoring captures.
#[derive(Debug)]
pub struct RandomPlayer<R = StdRng> {
    rng: R,
}

impl RandomPlayer {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }
}

impl<R: Rng> RandomPlayer<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> Player for RandomPlayer<R> {
    fn make_move(&mut self, board: &Board, color: Color) -> Option<Move> {
        movegen::legal_moves(board, color).choose(&mut self.rng)
    }
}

/// Creates [`RandomPlayer`]s, seeded per game when given a base seed.
#[derive(Debug)]
pub struct RandomPlayerFactory {
    seed: Option<u64>,
}

impl RandomPlayerFactory {
    pub fn new() -> Self {
        Self { seed: None }
    }

    pub fn seeded(seed: u64) -> Self {
        Self { seed: Some(seed) }
    }
}

impl PlayerFactory for RandomPlayerFactory {
    fn create(&self, game_id: &str, color: Color) -> Box<dyn Player> {
        match self.seed {
            Some(base) => Box::new(RandomPlayer::with_rng(StdRng::seed_from_u64(game_seed(
                base, game_id, color,
            )))),
            None => Box::new(RandomPlayer::new()),
        }
    }
}
