//! Game rules for tic-tac-toe.
//!
//! Pure functions evaluating a board according to tic-tac-toe rules.
//! Rules are kept apart from board storage so the board stays a plain
//! value type.

pub mod draw;
pub mod win;

pub use draw::{is_draw, status};
pub use win::{LINES, has_line, terminal_mark};
