//! Command-line driver for `minimax_tictactoe`: engine self-play and
//! position analysis.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod analyze;
mod cli;
mod selfplay;
mod settings;

pub use analyze::{Analysis, analyze, side_to_move};
pub use cli::{Cli, Command};
pub use selfplay::{SelfPlayReport, play_game, run_selfplay};
pub use settings::{ConfigError, Settings};
