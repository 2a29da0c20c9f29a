//! Command-line interface for the tic-tac-toe engine.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tic-tac-toe minimax engine
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Self-play and position analysis for a minimax tic-tac-toe engine", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Optional TOML file with self-play defaults
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play engine against engine and report the results
    Selfplay {
        /// Number of games
        #[arg(short, long)]
        games: Option<u32>,

        /// Search level for X (0 = random)
        #[arg(long)]
        x_level: Option<u8>,

        /// Search level for O (0 = random)
        #[arg(long)]
        o_level: Option<u8>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Score a position and suggest the best move
    Analyze {
        /// Board as nine cells of X, O or '.', rows optionally split by '/'
        board: String,

        /// Print the analysis as JSON
        #[arg(long)]
        json: bool,
    },
}
