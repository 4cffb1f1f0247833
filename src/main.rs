//! Tic-tac-toe terminal front-end.
//!
//! Reads one command per line and prints the session after each one.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use tictactoe_timeline::{
    Action, Command, GameController, HELP, PlayConfig, available_moves, render_history,
    render_session,
};
use tracing::{debug, info, instrument, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(cli.log_level.as_directive())),
        )
        .with_writer(io::stderr)
        .init();

    let config = load_config(&cli)?;
    info!(?config, "Starting tictactoe session");

    let input: Box<dyn BufRead> = match &cli.script {
        Some(path) => Box::new(BufReader::new(
            File::open(path).with_context(|| format!("Failed to open script {}", path.display()))?,
        )),
        None => Box::new(io::stdin().lock()),
    };

    run(input, io::stdout().lock(), &config)
}

/// Merges the optional config file with command-line overrides.
#[instrument(skip(cli))]
fn load_config(cli: &Cli) -> Result<PlayConfig> {
    let config = match &cli.config {
        Some(path) => PlayConfig::from_file(path)?,
        None => PlayConfig::default(),
    };
    let config = match cli.output_override() {
        Some(output) => config.with_output(output),
        None => config,
    };
    let show = *config.show_available_moves() || cli.show_moves;
    Ok(config.with_available_moves(show))
}

/// Runs the command loop until `quit` or end of input.
fn run(input: impl BufRead, mut out: impl Write, config: &PlayConfig) -> Result<()> {
    let mut game = GameController::new();
    writeln!(out, "{}", render_session(&game, config)?)?;

    for line in input.lines() {
        let line = line.context("Failed to read command")?;
        if line.trim().is_empty() {
            continue;
        }

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(e) => {
                debug!(error = %e, "Unparsed command");
                writeln!(out, "{e} (type `help` for commands)")?;
                continue;
            }
        };

        if !execute(&mut game, command, &mut out, config)? {
            break;
        }
    }

    Ok(())
}

/// Executes one command. Returns `false` when the session should end.
#[instrument(skip(game, out, config))]
fn execute(
    game: &mut GameController,
    command: Command,
    out: &mut impl Write,
    config: &PlayConfig,
) -> Result<bool> {
    match command {
        Command::Act(action) => {
            if !game.dispatch(action) {
                warn!(?action, "Action had no effect");
                writeln!(out, "{}", rejection(game, action))?;
                return Ok(true);
            }
        }
        Command::Start => {
            game.go_to_start();
        }
        Command::End => {
            game.go_to_end();
        }
        Command::History => {
            writeln!(out, "{}", render_history(game))?;
            return Ok(true);
        }
        Command::Moves => {
            let cells = available_moves(game.state().board())
                .into_iter()
                .map(|(row, col)| format!("{} {}", row + 1, col + 1))
                .collect::<Vec<_>>();
            writeln!(out, "{}", cells.join(", "))?;
            return Ok(true);
        }
        Command::Show => {}
        Command::Help => {
            writeln!(out, "{HELP}")?;
            return Ok(true);
        }
        Command::Quit => return Ok(false),
    }

    writeln!(out, "{}", render_session(game, config)?)?;
    Ok(true)
}

fn rejection(game: &GameController, action: Action) -> &'static str {
    match action {
        Action::Play { .. } if game.state().is_over() => "The game is over. `reset` or go back.",
        Action::Play { .. } => "That square is taken or off the board.",
        Action::Back => "Already at the start.",
        Action::Forward => "Already at the latest move.",
        _ => "No such move.",
    }
}
