//! Command-line interface for the tictactoe front-end.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tictactoe_timeline::OutputFormat;

/// Tic-tac-toe in the terminal, with a rewindable move history
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe with move-history time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// TOML config file (output format, available-move hints)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Read commands from a file instead of stdin
    #[arg(short, long)]
    pub script: Option<PathBuf>,

    /// Print the session as JSON after each command
    #[arg(long)]
    pub json: bool,

    /// List empty squares under the board
    #[arg(long)]
    pub show_moves: bool,

    /// Log level used when RUST_LOG is not set
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,
}

impl Cli {
    /// Output format forced by flags, if any.
    pub fn output_override(&self) -> Option<OutputFormat> {
        self.json.then_some(OutputFormat::Json)
    }
}

/// Log verbosity for the default filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// Errors only
    Error,
    /// Warnings and errors
    Warn,
    /// Informational
    Info,
    /// Debugging detail
    Debug,
    /// Everything
    Trace,
}

impl LogLevel {
    /// Directive string for `EnvFilter`.
    pub fn as_directive(self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}
