use anyhow::Result;
use clap::Parser;
use sapper_core::{Game, GameConfig};
use std::io::{self, BufRead, Write};

mod command;
mod render;

use command::{Command, HELP};

#[derive(Parser, Debug)]
#[command(version, about = "Minesweeper in the terminal", long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Number of rows
    #[arg(short, long, default_value_t = GameConfig::default().rows())]
    rows: u16,

    /// Number of columns
    #[arg(short, long, default_value_t = GameConfig::default().cols())]
    cols: u16,

    /// Number of mines, must leave at least one safe cell
    #[arg(short, long, default_value_t = GameConfig::default().mines())]
    mines: u32,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(args.verbose.tracing_level_filter())
        .with_writer(io::stderr)
        .init();
    log::debug!("seed: {:?}", args.seed);

    let mut game = match args.seed {
        Some(seed) => Game::with_seed(GameConfig::new(args.rows, args.cols, args.mines)?, seed),
        None => Game::new(args.rows, args.cols, args.mines)?,
    };

    let mut stdout = io::stdout().lock();
    write!(stdout, "{}{}> ", render::render(&game), HELP)?;
    stdout.flush()?;

    for line in io::stdin().lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            write!(stdout, "> ")?;
            stdout.flush()?;
            continue;
        }

        match line.parse::<Command>() {
            Ok(Command::Quit) => break,
            Ok(Command::Help) => write!(stdout, "{}", HELP)?,
            Ok(command) => match command.apply(&mut game) {
                Ok(true) => write!(stdout, "{}", render::render(&game))?,
                Ok(false) => writeln!(stdout, "nothing happened")?,
                Err(err) => writeln!(stdout, "error: {}", err)?,
            },
            Err(err) => writeln!(stdout, "error: {}", err)?,
        }
        write!(stdout, "> ")?;
        stdout.flush()?;
    }

    log::debug!("Exiting with status {}", game.status());
    Ok(())
}
