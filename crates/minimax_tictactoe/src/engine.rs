//! Computer opponent: exhaustive minimax move selection.
//!
//! Scores are always from X's point of view: +1 for an X win, -1 for an O
//! win, 0 for a draw, with no discount for depth. X maximizes and O
//! minimizes. The game tree of a 3x3 board is small enough to search to the
//! end on every call, so there is no pruning, depth limit or transposition
//! table.
//!
//! Among equally scored moves the first one in [`Board::legal_moves`]
//! order wins, which makes the chosen move deterministic.

use crate::board::Board;
use crate::error::EngineError;
use crate::types::{Move, Player};
use derive_getters::Getters;
use derive_new::new;
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Search level that picks a uniformly random legal move.
pub const RANDOM_LEVEL: u8 = 0;

/// Engine settings, fixed for a game session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct EngineConfig {
    /// 0 plays a random legal move; anything higher searches the full tree.
    #[serde(default = "default_level")]
    level: u8,

    /// The side the engine plays.
    #[serde(default = "default_player")]
    player: Player,
}

fn default_level() -> u8 {
    1
}

fn default_player() -> Player {
    Player::O
}

impl EngineConfig {
    /// Creates an engine configuration.
    pub fn new(level: u8, player: Player) -> Self {
        Self { level, player }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new(default_level(), default_player())
    }
}

/// Outcome of a minimax search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, new, Serialize, Deserialize)]
pub struct Evaluation {
    /// +1 X wins, -1 O wins, 0 draw, under perfect play.
    pub score: i8,
    /// Best move for the side to move; `None` on a terminal board.
    pub best_move: Option<Move>,
}

/// Computer player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Engine {
    config: EngineConfig,
}

impl Engine {
    /// Creates an engine with the given configuration.
    #[instrument]
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Returns the engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns the side the engine plays.
    pub fn player(&self) -> Player {
        self.config.player
    }

    /// Chooses a move for the engine's side using the thread-local RNG.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::NoLegalMoves`] when the board is full.
    pub fn select_move(&self, board: &Board) -> Result<Move, EngineError> {
        self.select_move_with_rng(board, &mut rand::thread_rng())
    }

    /// Chooses a move for the engine's side.
    ///
    /// The RNG is only consulted at [`RANDOM_LEVEL`].
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::NoLegalMoves`] when the board is full.
    #[instrument(skip(self, board, rng), fields(level = self.config.level, player = %self.config.player))]
    pub fn select_move_with_rng<R: Rng + ?Sized>(
        &self,
        board: &Board,
        rng: &mut R,
    ) -> Result<Move, EngineError> {
        let moves = board.legal_moves();
        if moves.is_empty() {
            debug!("Move requested on a full board");
            return Err(EngineError::NoLegalMoves);
        }

        if self.config.level == RANDOM_LEVEL {
            let mv = *moves.choose(rng).ok_or(EngineError::NoLegalMoves)?;
            info!(%mv, "Engine chose a random square");
            return Ok(mv);
        }

        let maximizing = self.config.player == Player::X;
        let evaluation = Self::minimax(board, maximizing);
        let mv = evaluation.best_move.ok_or(EngineError::NoLegalMoves)?;
        info!(%mv, score = evaluation.score, "Engine chose a square");
        Ok(mv)
    }

    /// Full-depth minimax from `board` with `maximizing` naming the side
    /// to move (X when true, O when false).
    ///
    /// Each candidate is played on a private copy of the board, so sibling
    /// branches never see each other's moves and `board` is left untouched.
    /// The search does not depend on the engine's configuration.
    pub fn minimax(board: &Board, maximizing: bool) -> Evaluation {
        if let Some(winner) = board.winner() {
            return Evaluation::new(winner.win_score(), None);
        }
        if board.is_full() {
            return Evaluation::new(0, None);
        }

        let player = if maximizing { Player::X } else { Player::O };
        let mut best: Option<Evaluation> = None;

        for mv in board.legal_moves() {
            // legal_moves only yields empty cells, so this cannot fail.
            let Ok(child) = board.with_move(mv, player) else {
                continue;
            };
            let score = Self::minimax(&child, !maximizing).score;

            let improves = match best {
                None => true,
                Some(current) if maximizing => score > current.score,
                Some(current) => score < current.score,
            };
            if improves {
                best = Some(Evaluation::new(score, Some(mv)));
            }
        }

        // A non-terminal board always has a legal move.
        best.unwrap_or(Evaluation::new(0, None))
    }

    /// Evaluates `board` with `to_move` about to play.
    pub fn evaluate(board: &Board, to_move: Player) -> Evaluation {
        Self::minimax(board, to_move == Player::X)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn board(text: &str) -> Board {
        text.parse().unwrap()
    }

    fn mv(row: usize, col: usize) -> Move {
        Move::new(row, col).unwrap()
    }

    #[test]
    fn test_terminal_scores() {
        assert_eq!(Engine::minimax(&board("XXX/OO./..."), false), Evaluation::new(1, None));
        assert_eq!(Engine::minimax(&board("OOO/XX./X.."), true), Evaluation::new(-1, None));
        assert_eq!(Engine::minimax(&board("XOX/XOO/OXX"), true), Evaluation::new(0, None));
    }

    #[test]
    fn test_empty_board_opening_is_first_cell() {
        let engine = Engine::new(EngineConfig::new(1, Player::X));
        let evaluation = Engine::minimax(&Board::new(), true);
        assert_eq!(evaluation, Evaluation::new(0, Some(mv(0, 0))));
        assert_eq!(engine.select_move(&Board::new()), Ok(mv(0, 0)));
    }

    #[test]
    fn test_takes_immediate_win() {
        // O to move with two in the middle row.
        let engine = Engine::default();
        let b = board("XX./OO./X..");
        let evaluation = Engine::minimax(&b, false);
        assert_eq!(evaluation.score, -1);
        assert_eq!(engine.select_move(&b), Ok(mv(1, 2)));
    }

    #[test]
    fn test_blocks_immediate_threat() {
        // X threatens the top row; O has no win of its own.
        let engine = Engine::default();
        let b = board("XX./.O./...");
        assert_eq!(engine.select_move(&b), Ok(mv(0, 2)));
    }

    #[test]
    fn test_minimax_does_not_mutate_board() {
        let b = board("X../.O./...");
        let before = b;
        Engine::minimax(&b, true);
        assert_eq!(b, before);
    }

    #[test]
    fn test_full_board_is_an_error() {
        let engine = Engine::default();
        assert_eq!(
            engine.select_move(&board("XOX/XOO/OXX")),
            Err(EngineError::NoLegalMoves)
        );
        let random = Engine::new(EngineConfig::new(RANDOM_LEVEL, Player::O));
        assert_eq!(
            random.select_move(&board("XOX/XOO/OXX")),
            Err(EngineError::NoLegalMoves)
        );
    }

    #[test]
    fn test_random_level_is_legal_and_seeded() {
        let engine = Engine::new(EngineConfig::new(RANDOM_LEVEL, Player::O));
        let b = board("X.O/.X./O..");
        let legal = b.legal_moves();

        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let chosen = engine.select_move_with_rng(&b, &mut rng).unwrap();
            assert!(legal.contains(&chosen));
        }

        let first = engine.select_move_with_rng(&b, &mut StdRng::seed_from_u64(42));
        let second = engine.select_move_with_rng(&b, &mut StdRng::seed_from_u64(42));
        assert_eq!(first, second);
    }

    #[test]
    fn test_config_defaults() {
        let config = EngineConfig::default();
        assert_eq!(*config.level(), 1);
        assert_eq!(*config.player(), Player::O);
    }

    #[test]
    fn test_engine_exposes_its_config() {
        let config = EngineConfig::new(RANDOM_LEVEL, Player::X);
        let engine = Engine::new(config);
        assert_eq!(engine.config(), &config);
        assert_eq!(*engine.config().level(), RANDOM_LEVEL);
        assert_eq!(engine.player(), Player::X);
    }

    #[test]
    fn test_search_skips_no_branch() {
        // Every empty cell gets a score: on a board where only the last
        // candidate wins for X, the search must still reach it.
        let b = board(".../XOX/OOX");
        assert_eq!(b.legal_moves().len(), 3);
        assert_eq!(Engine::minimax(&b, true), Evaluation::new(1, Some(mv(0, 2))));
    }
}
