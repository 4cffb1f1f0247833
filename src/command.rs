//! Text commands typed at the terminal front-end.
//!
//! Coordinates and move numbers are 1-based here, matching what the
//! board and history listings show.

use crate::action::Action;
use derive_more::{Display, Error};
use std::str::FromStr;

/// A parsed terminal command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// A controller action.
    Act(Action),
    /// Jump to the empty board.
    Start,
    /// Jump to the latest move.
    End,
    /// Print the move list.
    History,
    /// Print the empty squares.
    Moves,
    /// Print the board again.
    Show,
    /// Print usage.
    Help,
    /// Leave the session.
    Quit,
}

/// Error produced when a line cannot be parsed as a [`Command`].
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum CommandError {
    /// Nothing was typed.
    #[display("Empty command")]
    Empty,
    /// The first word is not a known command.
    #[display("Unknown command: {_0}")]
    Unknown(#[error(not(source))] String),
    /// An argument was missing or not a number.
    #[display("Bad argument for `{command}`: expected {expected}")]
    BadArgument {
        /// Command being parsed.
        command: &'static str,
        /// What the command wanted.
        expected: &'static str,
    },
}

/// Usage text for the front-end.
pub const HELP: &str = "\
Commands:
  R C | play R C   place a mark at row R, column C (1-3)
  back | forward   step through history
  goto N           show the board after move #N (0 = game start)
  start | end      jump to either end of history
  reset            new game
  history          list recorded moves
  moves            list empty squares
  show             print the board
  help             this text
  quit             leave";

fn coordinate(word: Option<&str>, command: &'static str) -> Result<usize, CommandError> {
    word.and_then(|w| w.parse::<usize>().ok())
        .filter(|n| *n >= 1)
        .map(|n| n - 1)
        .ok_or(CommandError::BadArgument {
            command,
            expected: "a 1-based row and column",
        })
}

fn play(row: Option<&str>, col: Option<&str>) -> Result<Command, CommandError> {
    Ok(Command::Act(Action::Play {
        row: coordinate(row, "play")?,
        col: coordinate(col, "play")?,
    }))
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let Some(first) = words.next() else {
            return Err(CommandError::Empty);
        };

        match first.to_lowercase().as_str() {
            "play" | "p" => play(words.next(), words.next()),
            "back" | "b" | "undo" => Ok(Command::Act(Action::Back)),
            "forward" | "f" | "redo" => Ok(Command::Act(Action::Forward)),
            "goto" | "g" => {
                let number = words
                    .next()
                    .and_then(|w| w.parse::<isize>().ok())
                    .ok_or(CommandError::BadArgument {
                        command: "goto",
                        expected: "a move number",
                    })?;
                let index = number.checked_sub(1).ok_or(CommandError::BadArgument {
                    command: "goto",
                    expected: "a move number",
                })?;
                Ok(Command::Act(Action::GoTo(index)))
            }
            "reset" | "new" => Ok(Command::Act(Action::Reset)),
            "start" => Ok(Command::Start),
            "end" => Ok(Command::End),
            "history" | "h" => Ok(Command::History),
            "moves" | "m" => Ok(Command::Moves),
            "show" | "s" => Ok(Command::Show),
            "help" | "?" => Ok(Command::Help),
            "quit" | "q" | "exit" => Ok(Command::Quit),
            _ if first.parse::<usize>().is_ok() => play(Some(first), words.next()),
            _ => Err(CommandError::Unknown(first.to_string())),
        }
    }
}
