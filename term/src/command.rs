use core::str::FromStr;
use sapper_core::{CellCount, Coord, Coord2, Game};
use thiserror::Error;

pub const HELP: &str = "\
commands:
  r ROW COL            reveal a cell
  f ROW COL            flag or unflag a cell
  n                    restart with the same board size
  n ROWS COLS MINES    start a new board
  h                    show this help
  q                    quit
";

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Reveal(Coord2),
    Flag(Coord2),
    Restart,
    New {
        rows: Coord,
        cols: Coord,
        mines: CellCount,
    },
    Help,
    Quit,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("empty command")]
    Empty,
    #[error("unknown command {0:?}, type h for help")]
    Unknown(String),
    #[error("{0:?} expects {1} numbers")]
    WrongArity(String, usize),
    #[error("not a number: {0:?}")]
    NotANumber(String),
}

fn parse_numbers<T: FromStr>(
    name: &str,
    args: &[&str],
    expected: usize,
) -> Result<Vec<T>, CommandError> {
    if args.len() != expected {
        return Err(CommandError::WrongArity(name.to_string(), expected));
    }
    args.iter()
        .map(|arg| {
            arg.parse()
                .map_err(|_| CommandError::NotANumber(arg.to_string()))
        })
        .collect()
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let name = words.next().ok_or(CommandError::Empty)?;
        let args: Vec<&str> = words.collect();

        Ok(match name {
            "r" | "reveal" => {
                let coords = parse_numbers::<Coord>(name, &args, 2)?;
                Command::Reveal((coords[0], coords[1]))
            }
            "f" | "flag" => {
                let coords = parse_numbers::<Coord>(name, &args, 2)?;
                Command::Flag((coords[0], coords[1]))
            }
            "n" | "new" if args.is_empty() => Command::Restart,
            "n" | "new" => {
                if args.len() != 3 {
                    return Err(CommandError::WrongArity(name.to_string(), 3));
                }
                let dims = parse_numbers::<Coord>(name, &args[..2], 2)?;
                let mines = parse_numbers::<CellCount>(name, &args[2..], 1)?;
                Command::New {
                    rows: dims[0],
                    cols: dims[1],
                    mines: mines[0],
                }
            }
            "h" | "help" | "?" => Command::Help,
            "q" | "quit" | "exit" => Command::Quit,
            other => return Err(CommandError::Unknown(other.to_string())),
        })
    }
}

impl Command {
    /// Applies a board-changing command; returns whether anything visible changed.
    pub fn apply(self, game: &mut Game) -> sapper_core::Result<bool> {
        Ok(match self {
            Command::Reveal(coords) => game.reveal_cell(coords)?.has_update(),
            Command::Flag(coords) => game.toggle_flag(coords)?.has_update(),
            Command::Restart => {
                game.restart();
                true
            }
            Command::New { rows, cols, mines } => {
                game.reset(rows, cols, mines)?;
                true
            }
            Command::Help | Command::Quit => false,
        })
    }
}
