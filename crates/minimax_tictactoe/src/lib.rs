//! Tic-tac-toe game state and a minimax computer opponent.
//!
//! The crate is a pure decision/state component: it knows nothing about
//! windows, drawing or input devices. A front end feeds it coordinates and
//! reads back the board and its status.
//!
//! # Architecture
//!
//! - **Board**: the 3x3 grid, win/draw detection, legal moves
//! - **Engine**: random or full-depth minimax move selection
//! - **Game**: turn order, game mode and move history for one session
//!
//! # Example
//!
//! ```
//! use minimax_tictactoe::{EngineConfig, Game, GameMode, GameStatus};
//!
//! # fn example() -> Result<(), minimax_tictactoe::GameError> {
//! let mut game = Game::new(GameMode::PlayerVsEngine, EngineConfig::default());
//! game.play(1, 1)?;
//! while game.is_engine_turn() {
//!     let reply = game.play_engine()?;
//!     println!("engine played {reply}");
//! }
//! assert_eq!(game.status(), GameStatus::InProgress);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod engine;
mod error;
mod game;
pub mod rules;
mod types;

pub use board::Board;
pub use engine::{Engine, EngineConfig, Evaluation, RANDOM_LEVEL};
pub use error::{BoardError, EngineError, GameError};
pub use game::{Game, GameMode};
pub use types::{CELLS, GameStatus, Mark, Move, Outcome, Player, SIZE};
