//! The 3x3 board.

use crate::error::BoardError;
use crate::rules;
use crate::types::{CELLS, GameStatus, Mark, Move, Player, SIZE};
use std::str::FromStr;
use tracing::{instrument, trace};

/// 3x3 tic-tac-toe board.
///
/// A small `Copy` value: search code copies it per branch instead of
/// undoing moves. The occupied-cell counter is kept alongside the grid so
/// fullness checks stay O(1); it only ever grows on a given board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Mark; CELLS],
    /// Number of non-empty cells.
    occupied: u8,
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [Mark::Empty; CELLS],
            occupied: 0,
        }
    }

    /// Returns the mark at the given cell.
    pub fn get(&self, row: usize, col: usize) -> Result<Mark, BoardError> {
        let mv = Move::new(row, col)?;
        Ok(self.cells[mv.index()])
    }

    /// Mark lookup for coordinates already known to be in range.
    pub(crate) fn mark_at(&self, row: usize, col: usize) -> Mark {
        self.cells[row * SIZE + col]
    }

    /// Checks if a cell is empty.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::OutOfBounds`] for coordinates outside 0-2.
    pub fn is_cell_empty(&self, row: usize, col: usize) -> Result<bool, BoardError> {
        Ok(self.get(row, col)? == Mark::Empty)
    }

    /// Places `player`'s mark on an empty cell.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::OutOfBounds`] for coordinates outside 0-2 and
    /// [`BoardError::Occupied`] if the cell already holds a mark. The board
    /// is unchanged on error.
    #[instrument(level = "trace", skip(self))]
    pub fn mark_cell(&mut self, row: usize, col: usize, player: Player) -> Result<(), BoardError> {
        let mv = Move::new(row, col)?;
        self.apply(mv, player)
    }

    /// Places `player`'s mark at an already validated move.
    pub fn apply(&mut self, mv: Move, player: Player) -> Result<(), BoardError> {
        let cell = &mut self.cells[mv.index()];
        if *cell != Mark::Empty {
            trace!(%mv, "Rejected mark on occupied cell");
            return Err(BoardError::Occupied(mv));
        }
        *cell = player.into();
        self.occupied += 1;
        Ok(())
    }

    /// Returns a copy of this board with `mv` played by `player`.
    pub fn with_move(&self, mv: Move, player: Player) -> Result<Self, BoardError> {
        let mut next = *self;
        next.apply(mv, player)?;
        Ok(next)
    }

    /// All empty cells in row-major order.
    ///
    /// Search tie-breaks depend on this order.
    pub fn legal_moves(&self) -> Vec<Move> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, mark)| **mark == Mark::Empty)
            .filter_map(|(index, _)| Move::from_index(index))
            .collect()
    }

    /// True once all nine cells are marked.
    pub fn is_full(&self) -> bool {
        usize::from(self.occupied) == CELLS
    }

    /// True while no cell is marked.
    pub fn is_empty(&self) -> bool {
        self.occupied == 0
    }

    /// Number of marked cells.
    pub fn occupied(&self) -> usize {
        usize::from(self.occupied)
    }

    /// Counts the cells holding `player`'s mark.
    pub fn count(&self, player: Player) -> usize {
        let mark = Mark::from(player);
        self.cells.iter().filter(|m| **m == mark).count()
    }

    /// Returns the winning player's mark, or [`Mark::Empty`] if nobody has
    /// three in a line. A draw and an unfinished game both report `Empty`;
    /// use [`Board::is_full`] to tell them apart.
    pub fn terminal_mark(&self) -> Mark {
        rules::terminal_mark(self)
    }

    /// Returns the winner, if any.
    pub fn winner(&self) -> Option<Player> {
        self.terminal_mark().player()
    }

    /// Classifies the board as in progress, won or drawn.
    pub fn status(&self) -> GameStatus {
        rules::status(self)
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Mark; CELLS] {
        &self.cells
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    /// Three rows of `X`, `O` and `.`, separated by newlines.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (row, cells) in self.cells.chunks(SIZE).enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            for mark in cells {
                write!(f, "{}", mark.symbol())?;
            }
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = BoardError;

    /// Parses nine cell symbols; `/`, whitespace and `|` are ignored as
    /// row separators, so `"XO./.X./..O"` and the `Display` form both work.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut board = Board::new();
        let mut index = 0;
        for symbol in s.chars() {
            if symbol == '/' || symbol == '|' || symbol.is_whitespace() {
                continue;
            }
            let mark = Mark::from_symbol(symbol)
                .ok_or_else(|| BoardError::Parse(format!("unknown symbol {:?}", symbol)))?;
            if index >= CELLS {
                return Err(BoardError::Parse(format!(
                    "expected {} cells, found more",
                    CELLS
                )));
            }
            board.cells[index] = mark;
            if mark != Mark::Empty {
                board.occupied += 1;
            }
            index += 1;
        }
        if index != CELLS {
            return Err(BoardError::Parse(format!(
                "expected {} cells, found {}",
                CELLS, index
            )));
        }
        Ok(board)
    }
}
