use casual_chess::{CasualPlayerFactory, PlayerFactory, constants::DEFAULT_MAX_PLIES};
use clap::Parser;
use log::LevelFilter;
use rand::{SeedableRng, rngs::StdRng};
use random_player::RandomPlayerFactory;
use referee::{MatchResult, run_match};
use serde::Deserialize;
use simplelog::{ColorChoice, CombinedLogger, TermLogger, TerminalMode, WriteLogger};
use std::{
    collections::{BTreeMap, HashMap},
    error::Error,
    fs::{self, File},
    path::{Path, PathBuf},
    process::ExitCode,
    sync::Arc,
};

/// Plays automated matches between the players described in a TOML file.
#[derive(Parser, Debug)]
struct Args {
    config: PathBuf,
    /// Replaces the seed from the config file.
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct Config {
    log_dir: PathBuf,
    num_cpus: usize,
    max_plies: Option<usize>,
    seed: Option<u64>,
    player: HashMap<String, PlayerConfig>,
    r#match: Vec<MatchConfig>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case", deny_unknown_fields)]
enum PlayerConfig {
    Casual,
    Random,
}

impl PlayerConfig {
    fn factory(&self, seed: Option<u64>) -> Arc<dyn PlayerFactory> {
        match (self, seed) {
            (PlayerConfig::Casual, Some(seed)) => Arc::new(CasualPlayerFactory::seeded(seed)),
            (PlayerConfig::Casual, None) => Arc::new(CasualPlayerFactory::new()),
            (PlayerConfig::Random, Some(seed)) => Arc::new(RandomPlayerFactory::seeded(seed)),
            (PlayerConfig::Random, None) => Arc::new(RandomPlayerFactory::new()),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct MatchConfig {
    players: [String; 2],
    opening_length: usize,
    num_rounds: usize,
}

impl Config {
    fn load(path: &Path) -> Result<Self, Box<dyn Error>> {
        let config: Config = toml::from_str(&fs::read_to_string(path)?)?;
        for mc in &config.r#match {
            if let Some(name) = mc.players.iter().find(|n| !config.player.contains_key(*n)) {
                return Err(format!("Player {name} not found").into());
            }
        }
        Ok(config)
    }
}

/// Totals for one player over every match it took part in.
#[derive(Debug, Default)]
struct Standing {
    games: usize,
    wins: usize,
    draws: usize,
}

impl Standing {
    fn losses(&self) -> usize {
        self.games - self.wins - self.draws
    }

    fn points(&self) -> f64 {
        self.wins as f64 + 0.5 * self.draws as f64
    }
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    let config = Config::load(&args.config)?;
    let config_dir = args.config.parent().unwrap_or(Path::new("."));
    init_logging(&config_dir.join(&config.log_dir))?;

    let seed = args.seed.or(config.seed);
    match seed {
        Some(seed) => log::info!("Seed {seed}"),
        None => log::info!("Unseeded, games will not repeat"),
    }
    let standings = play_matches(&config, seed);
    report(&standings);
    Ok(())
}

fn init_logging(log_dir: &Path) -> Result<(), Box<dyn Error>> {
    fs::create_dir_all(log_dir)?;
    let log_file = File::create(log_dir.join("referee.log"))?;
    CombinedLogger::init(vec![
        WriteLogger::new(LevelFilter::Info, simplelog::Config::default(), log_file),
        TermLogger::new(
            LevelFilter::Info,
            simplelog::Config::default(),
            TerminalMode::Stderr,
            ColorChoice::Auto,
        ),
    ])?;
    Ok(())
}

fn play_matches(config: &Config, seed: Option<u64>) -> BTreeMap<String, Standing> {
    let factories: HashMap<&str, Arc<dyn PlayerFactory>> = config
        .player
        .iter()
        .map(|(name, player_config)| (name.as_str(), player_config.factory(seed)))
        .collect();
    let mut rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
    let max_plies = config.max_plies.unwrap_or(DEFAULT_MAX_PLIES);
    let mut standings: BTreeMap<String, Standing> = BTreeMap::new();

    for (match_idx, mc) in config.r#match.iter().enumerate() {
        let [name0, name1] = &mc.players;
        log::info!("Match {match_idx}: {name0} vs {name1}");
        let result = run_match(
            &match_idx.to_string(),
            mc.num_rounds,
            config.num_cpus,
            mc.opening_length,
            max_plies,
            [factories[name0.as_str()].clone(), factories[name1.as_str()].clone()],
            &mut rng,
        );
        log::info!("Match {match_idx}: {result}");
        record(&mut standings, &mc.players, &result);
    }
    standings
}

fn record(standings: &mut BTreeMap<String, Standing>, players: &[String; 2], result: &MatchResult) {
    for (idx, name) in players.iter().enumerate() {
        let standing = standings.entry(name.clone()).or_default();
        standing.games += result.num_games;
        standing.wins += result.wins[idx];
        standing.draws += result.num_draws;
    }
}

fn report(standings: &BTreeMap<String, Standing>) {
    let mut rows: Vec<_> = standings.iter().collect();
    rows.sort_by(|(_, a), (_, b)| b.points().total_cmp(&a.points()));
    log::info!(
        "{:<16} {:>6} {:>6} {:>6} {:>6} {:>7}",
        "player",
        "games",
        "won",
        "drawn",
        "lost",
        "points"
    );
    for (name, standing) in rows {
        log::info!(
            "{:<16} {:>6} {:>6} {:>6} {:>6} {:>7.1}",
            name,
            standing.games,
            standing.wins,
            standing.draws,
            standing.losses(),
            standing.points()
        );
    }
}
