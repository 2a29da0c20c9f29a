//! Error types for board, engine and game operations.
//!
//! Every error here is a precondition violation by the caller. None of
//! them are recovered internally.

use crate::types::{Move, Player};

/// Error raised by board operations.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum BoardError {
    /// Coordinates outside the 3x3 grid.
    #[display("Cell ({}, {}) is out of bounds (must be 0-2)", row, col)]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// The cell already holds a mark.
    #[display("Cell {} is already occupied", _0)]
    Occupied(Move),

    /// A text board could not be parsed.
    #[display("Invalid board text: {}", _0)]
    Parse(String),
}

impl std::error::Error for BoardError {}

/// Error raised by move selection.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum EngineError {
    /// The board is full; there is nothing to choose from.
    #[display("No legal moves available")]
    NoLegalMoves,
}

impl std::error::Error for EngineError {}

/// Error raised by the game session.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::From)]
pub enum GameError {
    /// The move itself was invalid for the board.
    #[display("{}", _0)]
    #[from]
    Board(BoardError),

    /// The engine could not choose a move.
    #[display("{}", _0)]
    #[from]
    Engine(EngineError),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,

    /// A human move was submitted while the engine is to move.
    #[display("It's not {}'s turn to play by hand", _0)]
    NotYourTurn(Player),

    /// The engine was asked to move when it is not its turn.
    #[display("It's not the engine's turn")]
    NotEngineTurn,
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::Board(e) => Some(e),
            GameError::Engine(e) => Some(e),
            _ => None,
        }
    }
}
