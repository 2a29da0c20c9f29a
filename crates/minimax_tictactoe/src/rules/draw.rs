//! Draw detection and game status classification.

use super::win::terminal_mark;
use crate::board::Board;
use crate::types::GameStatus;

/// A full board with no winner is a draw.
pub fn is_draw(board: &Board) -> bool {
    board.is_full() && terminal_mark(board).player().is_none()
}

/// Classifies a board as in progress, won or drawn.
pub fn status(board: &Board) -> GameStatus {
    match terminal_mark(board).player() {
        Some(winner) => GameStatus::Won(winner),
        None if board.is_full() => GameStatus::Draw,
        None => GameStatus::InProgress,
    }
}
