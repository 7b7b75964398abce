use casual_chess::{constants::THINKING_DELAY, run_cli};
use clap::Parser;
use log::LevelFilter;
use rand::{rngs::StdRng, SeedableRng};
use simplelog::{ColorChoice, TermLogger, TerminalMode};
use std::{error::Error, io, process::ExitCode, time::Duration};

/// Play the in-call chess mini-game against the automated opponent.
#[derive(Parser, Debug)]
struct Args {
    /// Seed for the opponent; drawn from the OS if absent.
    #[arg(long)]
    seed: Option<u64>,
    /// How long the opponent thinks before moving, in milliseconds.
    #[arg(long)]
    think_ms: Option<u64>,
    #[arg(long)]
    verbose: bool,
}

fn main() -> ExitCode {
    if let Err(e) = run() {
        log::error!("{e}");
        eprintln!("Error: {e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn run() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let level = if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    TermLogger::init(
        level,
        simplelog::Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )?;

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let think_delay = args.think_ms.map_or(THINKING_DELAY, Duration::from_millis);

    run_cli(io::stdin().lock(), io::stdout().lock(), &mut rng, think_delay)?;
    Ok(())
}
