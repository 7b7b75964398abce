use crate::{
    session::{AutomatedMove, Phase, Played, Selection},
    GameSession, Move, ParseError, Square,
};
use rand::Rng;
use std::{
    fmt::{self, Display, Formatter},
    io::{self, BufRead, Write},
    str::FromStr,
    thread,
    time::Duration,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CliCommand {
    Tap(Square),
    Move(Move),
    New,
    Undo,
    Board,
    Quit,
}

impl FromStr for CliCommand {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, ParseError> {
        match s.trim() {
            "new" => Ok(CliCommand::New),
            "undo" => Ok(CliCommand::Undo),
            "board" => Ok(CliCommand::Board),
            "quit" => Ok(CliCommand::Quit),
            s if s.len() == 2 => Ok(CliCommand::Tap(Square::from_str(s)?)),
            s => Ok(CliCommand::Move(Move::from_str(s)?)),
        }
    }
}

impl Display for CliCommand {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            CliCommand::Tap(square) => write!(f, "{square}"),
            CliCommand::Move(mov) => write!(f, "{mov}"),
            CliCommand::New => write!(f, "new"),
            CliCommand::Undo => write!(f, "undo"),
            CliCommand::Board => write!(f, "board"),
            CliCommand::Quit => write!(f, "quit"),
        }
    }
}

/// Plays one terminal session: white from `input`, black automated.
///
/// Returns when `input` is exhausted or a `quit` command is read.
pub fn run_cli<R: Rng>(
    input: impl BufRead,
    mut output: impl Write,
    rng: &mut R,
    think_delay: Duration,
) -> io::Result<()> {
    let mut session = GameSession::new();
    write!(output, "{}", session.board())?;
    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let command = match CliCommand::from_str(&line) {
            Ok(command) => command,
            Err(ParseError) => {
                writeln!(output, "unrecognized command: {}", line.trim())?;
                continue;
            }
        };
        log::debug!("command {command}");
        match command {
            CliCommand::Tap(square) => {
                let selection = session.select(square);
                report_selection(&mut output, selection)?;
            }
            CliCommand::Move(mov) => {
                if let Phase::AwaitingDestination(selected) = session.phase() {
                    _ = session.select(selected);
                }
                match session.select(mov.from) {
                    Selection::Selected(_) => {
                        let selection = session.select(mov.to);
                        report_selection(&mut output, selection)?;
                    }
                    selection => report_selection(&mut output, selection)?,
                }
            }
            CliCommand::New => {
                session.reset();
                write!(output, "{}", session.board())?;
                continue;
            }
            CliCommand::Undo => {
                if !session.undo() {
                    writeln!(output, "nothing to undo")?;
                }
                write!(output, "{}", session.board())?;
                continue;
            }
            CliCommand::Board => {
                write!(output, "{}", session.board())?;
                continue;
            }
            CliCommand::Quit => return Ok(()),
        }

        if let Some(pending) = session.pending_automated_move() {
            writeln!(output, "black is thinking...")?;
            output.flush()?;
            thread::sleep(think_delay);
            let mov = pending.compute(rng);
            match session.complete_automated_move(&pending, mov) {
                AutomatedMove::Applied(played) => writeln!(output, "black {}", describe(played))?,
                AutomatedMove::NoMoves => writeln!(output, "black has no moves")?,
                AutomatedMove::Illegal(mov) => writeln!(output, "black tried illegal move {mov}")?,
                AutomatedMove::Discarded => {}
            }
        }

        if let Phase::GameOver { winner } = session.phase() {
            write!(output, "{}", session.board())?;
            writeln!(output, "{winner} wins, type new to play again")?;
        } else if session.phase() == Phase::AwaitingSelection {
            write!(output, "{}", session.board())?;
        }
    }
    Ok(())
}

fn report_selection(output: &mut impl Write, selection: Selection) -> io::Result<()> {
    match selection {
        Selection::Ignored => writeln!(output, "ignored"),
        Selection::Selected(square) => writeln!(output, "selected {square}"),
        Selection::Deselected => writeln!(output, "deselected"),
        Selection::Rejected(mov) => writeln!(output, "illegal move {mov}"),
        Selection::Moved(played) => writeln!(output, "white {}", describe(played)),
    }
}

fn describe(played: Played) -> String {
    let mut text = played.mov.to_string();
    if let Some(captured) = played.captured {
        text.push_str(&format!(" takes {captured}"));
    }
    if played.promoted {
        text.push_str(" and promotes");
    }
    text
}
