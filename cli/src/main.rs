use std::io::{self, BufRead, Write};

use anyhow::Context;
use clap::Parser;
use nightsweeper_core::*;

use command::{Command, ParseError};

mod command;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_max_level(args.verbose.tracing_level_filter())
        .with_writer(io::stderr)
        .init();

    let seed = args.seed.unwrap_or_else(rand::random);
    log::debug!("seed: {}", seed);

    let mut game = Game::new(BoardConfig::STANDARD, seed).context("Invalid board configuration")?;
    let mut out = io::stdout().lock();
    print_game(&mut out, &game)?;

    for line in io::stdin().lock().lines() {
        let line = line.context("Could not read command")?;
        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(ParseError::Empty) => continue,
            Err(err) => {
                writeln!(out, "{err}")?;
                continue;
            }
        };

        let outcome = match command {
            Command::Quit => break,
            Command::Restart => game.handle(Action::Restart, None)?,
            Command::Play { action, x, y } => {
                let cell = locate(&game, x, y);
                game.handle(action, cell)?
            }
        };
        log::debug!("{:?} -> {:?}", command, outcome);

        if outcome.has_update() {
            print_game(&mut out, &game)?;
        }
    }

    Ok(())
}

/// Off-board coordinates map to no cell, like a click beside the grid.
fn locate<G: MineFieldGenerator>(game: &Game<G>, x: u32, y: u32) -> Option<CellIndex> {
    let x = Coord::try_from(x).ok()?;
    let y = Coord::try_from(y).ok()?;
    game.locate((x, y))
}

fn print_game<G: MineFieldGenerator>(out: &mut impl Write, game: &Game<G>) -> io::Result<()> {
    write!(out, "{}", game.board())?;
    let status = match (game.state(), game.ending()) {
        (GameState::Uninitialized, _) => "new game, reveal a cell to start",
        (GameState::Running, _) => "running",
        (GameState::GameOver, Some(Ending::AllMinesFlagged)) => "all mines flagged, you win",
        (GameState::GameOver, _) => "boom, game over",
    };
    let geometry = game.config().geometry();
    writeln!(
        out,
        "{} | {}x{} | mines left: {}",
        status,
        geometry.width(),
        geometry.height(),
        game.mines_left()
    )?;
    if game.state() == GameState::GameOver {
        writeln!(out, "any command starts a new game")?;
    }
    out.flush()
}
