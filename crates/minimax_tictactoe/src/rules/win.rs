//! Win detection logic for tic-tac-toe.

use crate::board::Board;
use crate::types::{Mark, Player};

/// The eight winning lines as (row, col) triples, in check order.
///
/// Columns come first, then rows, then the main diagonal and the
/// anti-diagonal. Under legal play at most one player ever owns a line,
/// so the order only matters for determinism.
pub const LINES: [[(usize, usize); 3]; 8] = [
    // Columns
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    // Rows
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    // Diagonals
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

/// Returns the mark of the first player found with three in a line.
///
/// Returns [`Mark::Empty`] when nobody has won, whether the game is
/// still going or drawn.
pub fn terminal_mark(board: &Board) -> Mark {
    for [a, b, c] in LINES {
        let mark = board.mark_at(a.0, a.1);
        if mark != Mark::Empty && mark == board.mark_at(b.0, b.1) && mark == board.mark_at(c.0, c.1)
        {
            return mark;
        }
    }
    Mark::Empty
}

/// True if `player` owns at least one complete line.
///
/// Unlike [`terminal_mark`], this looks at each player separately, so it
/// can spot boards where both sides have three in a line.
pub fn has_line(board: &Board, player: Player) -> bool {
    let mark = Mark::from(player);
    LINES
        .iter()
        .any(|line| line.iter().all(|&(row, col)| board.mark_at(row, col) == mark))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(text: &str) -> Board {
        text.parse().unwrap()
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(terminal_mark(&Board::new()), Mark::Empty);
    }

    #[test]
    fn test_winner_column() {
        assert_eq!(terminal_mark(&board(".O./XO./.OX")), Mark::O);
    }

    #[test]
    fn test_winner_row_reports_row_owner() {
        // Row 2 is X's; cell (0, 2) holds O, so reading the row index as a
        // column would report the wrong player.
        assert_eq!(terminal_mark(&board("O.O/.O./XXX")), Mark::X);
    }

    #[test]
    fn test_winner_diagonals() {
        assert_eq!(terminal_mark(&board("X.O/.XO/..X")), Mark::X);
        assert_eq!(terminal_mark(&board("X.O/.OX/O.X")), Mark::O);
    }

    #[test]
    fn test_no_winner_incomplete() {
        assert_eq!(terminal_mark(&board("XX./OO./...")), Mark::Empty);
    }

    #[test]
    fn test_has_line_checks_each_player() {
        let both = board("XXX/OOO/...");
        assert!(has_line(&both, Player::X));
        assert!(has_line(&both, Player::O));

        let x_only = board("X.O/.XO/..X");
        assert!(has_line(&x_only, Player::X));
        assert!(!has_line(&x_only, Player::O));
        assert!(!has_line(&Board::new(), Player::X));
    }
}
