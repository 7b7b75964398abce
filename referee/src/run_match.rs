use crate::{random_opening, run_game};
use casual_chess::{Color, PlayerFactory};
use rand::Rng;
use std::{
    fmt::{self, Display, Formatter},
    sync::{Arc, Mutex},
};
use threadpool::ThreadPool;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchResult {
    pub num_games: usize,
    pub num_draws: usize,
    /// Games won by each player, in match order.
    pub wins: [usize; 2],
    pub total_plies: usize,
}

impl MatchResult {
    /// Wins minus losses of the first player.
    pub fn player0_score(&self) -> isize {
        self.wins[0] as isize - self.wins[1] as isize
    }
}

impl Display for MatchResult {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "games {} wins {}-{} draws {} player0 score {}",
            self.num_games,
            self.wins[0],
            self.wins[1],
            self.num_draws,
            self.player0_score()
        )?;
        if self.num_games != 0 {
            write!(f, " avg plies {}", self.total_plies / self.num_games)?;
        }
        Ok(())
    }
}

/// Plays `num_double_games` pairs of games, each pair from the same opening
/// with colors swapped.
///
/// Openings are drawn from `rng` up front, so with seeded player factories the
/// result does not depend on thread scheduling.
pub fn run_match<RNG: Rng>(
    match_id: &str,
    num_double_games: usize,
    num_threads: usize,
    opening_length: usize,
    max_plies: usize,
    player_factories: [Arc<dyn PlayerFactory>; 2],
    rng: &mut RNG,
) -> MatchResult {
    let thread_pool = ThreadPool::new(num_threads);
    let match_result = Arc::new(Mutex::new(MatchResult::default()));
    for game_id in 0..num_double_games {
        let opening = random_opening(opening_length, rng);
        for white_player_idx in 0..2 {
            let game_name = format!("{match_id}-{game_id}-{white_player_idx}");
            let opening = opening.clone();
            let player_factories = player_factories.clone();
            let match_result = match_result.clone();
            thread_pool.execute(move || {
                let pf = [Color::White, Color::Black]
                    .map(|color| &*player_factories[white_player_idx ^ color.index()]);
                let finished_game = run_game(&game_name, pf, &opening, max_plies);
                let winner_idx = finished_game
                    .winner
                    .map(|color| white_player_idx ^ color.index());

                let mut match_result = match_result.lock().unwrap();
                match_result.num_games += 1;
                match_result.total_plies += finished_game.moves.len();
                match winner_idx {
                    None => match_result.num_draws += 1,
                    Some(idx) => match_result.wins[idx] += 1,
                }
                log::info!(
                    "{game_name} winner {} after {} plies",
                    winner_idx.map_or_else(|| "none".to_string(), |idx| format!("player{idx}")),
                    finished_game.moves.len()
                );
            });
        }
    }
    thread_pool.join();
    match_result.lock().unwrap().clone()
}
