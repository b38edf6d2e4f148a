use anyhow::Context;
use clap::Parser;
use flagsweep_core::*;
use std::io::{self, BufRead, Write};

use command::{Command, USAGE};
use render::BoardText;

mod command;
mod render;

#[derive(Parser, Debug)]
#[command(version, about = "Minesweeper in the terminal", long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Cells per side of the square board
    #[arg(short, long, default_value_t = GameConfig::default().size)]
    size: Coord,

    /// Number of mines, must leave at least one safe cell
    #[arg(short, long, default_value_t = GameConfig::default().mines)]
    mines: CellCount,

    /// Force a seed instead of random
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(args.verbose.tracing_level_filter())
        .with_writer(io::stderr)
        .init();

    let config = GameConfig::new(args.size, args.mines).context("Invalid board configuration")?;
    let seed = args.seed.unwrap_or_else(rand::random);
    log::debug!("seed: {}", seed);

    let mut picker = RandomCellPicker::new(seed);
    let mut session = GameSession::new_game(config, &mut picker)?;

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    println!("{USAGE}");
    println!("{}", BoardText(&session.view()));

    for line in stdin.lock().lines() {
        let line = line.context("Could not read command")?;
        if line.trim().is_empty() {
            continue;
        }

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(err) => {
                println!("{err:#}\n{USAGE}");
                continue;
            }
        };

        let changed = match command {
            Command::Quit => break,
            Command::NewGame => {
                session = GameSession::new_game(config, &mut picker)?;
                Ok(true)
            }
            _ => apply_move(&mut session, command),
        };
        match changed {
            Ok(true) => {}
            Ok(false) => {
                println!("Nothing changed");
                continue;
            }
            Err(err) => {
                println!("{err}");
                continue;
            }
        }

        println!("{}", BoardText(&session.view()));
        if let Some(message) = render::outcome_message(session.outcome()) {
            println!("{message}");
        }
        stdout.flush().context("Could not write board")?;
    }

    Ok(())
}

/// Applies a reveal or flag request, returning whether the board changed.
fn apply_move(session: &mut GameSession, command: Command) -> flagsweep_core::Result<bool> {
    Ok(match command {
        Command::Reveal(coords) => session.request_reveal(coords)?.has_update(),
        Command::Flag(coords) => session.request_toggle_flag(coords)?.has_update(),
        Command::NewGame | Command::Quit => false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> GameSession {
        GameSession::new(Board::from_mine_coords(3, &[(0, 0)]).unwrap()).unwrap()
    }

    #[test]
    fn moves_report_whether_the_board_changed() {
        let mut session = session();

        assert!(apply_move(&mut session, Command::Reveal((1, 1))).unwrap());
        assert!(!apply_move(&mut session, Command::Reveal((1, 1))).unwrap());
        assert!(!apply_move(&mut session, Command::Flag((1, 1))).unwrap());
        assert!(apply_move(&mut session, Command::Flag((0, 0))).unwrap());
    }

    #[test]
    fn finished_game_ignores_moves() {
        let mut session = session();
        apply_move(&mut session, Command::Reveal((0, 0))).unwrap();

        assert!(session.is_finished());
        assert!(!apply_move(&mut session, Command::Reveal((2, 2))).unwrap());
        assert!(!apply_move(&mut session, Command::Flag((2, 2))).unwrap());
    }

    #[test]
    fn out_of_bounds_moves_are_errors() {
        let mut session = session();

        assert_eq!(
            apply_move(&mut session, Command::Reveal((3, 0))),
            Err(GameError::InvalidCoords)
        );
    }
}
