//! Tic-tac-toe engine command-line entry point.

use anyhow::{Context, Result};
use clap::Parser;
use minimax_tictactoe_cli::{Cli, Command, Settings, analyze, run_selfplay};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let settings = Settings::load(cli.config.as_deref())?;

    match cli.command {
        Command::Selfplay {
            games,
            x_level,
            o_level,
            json,
        } => selfplay(settings.with_overrides(games, x_level, o_level), json),
        Command::Analyze { board, json } => analyze_board(&board, json),
    }
}

#[instrument(skip(settings), fields(games = settings.games()))]
fn selfplay(settings: Settings, json: bool) -> Result<()> {
    info!("Starting self-play");
    let report = run_selfplay(*settings.games(), *settings.x_level(), *settings.o_level())
        .context("Self-play failed")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", report);
    }
    Ok(())
}

#[instrument]
fn analyze_board(board: &str, json: bool) -> Result<()> {
    let analysis = analyze(board)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
    } else {
        println!("{}", analysis);
    }
    Ok(())
}
