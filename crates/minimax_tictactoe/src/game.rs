//! Game session: turn order, game mode and the two move sites.
//!
//! The front end owns a [`Game`] and calls [`Game::play`] for human input
//! and [`Game::play_engine`] when [`Game::is_engine_turn`] says so. The
//! board is only ever mutated through those two calls.

use crate::board::Board;
use crate::engine::{Engine, EngineConfig};
use crate::error::GameError;
use crate::types::{GameStatus, Move, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Who is playing against whom.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum GameMode {
    /// Two humans share the board.
    PlayerVsPlayer,
    /// One human plays against the engine.
    #[default]
    PlayerVsEngine,
}

impl GameMode {
    /// Toggles between the two modes.
    pub fn toggle(self) -> Self {
        match self {
            GameMode::PlayerVsPlayer => GameMode::PlayerVsEngine,
            GameMode::PlayerVsEngine => GameMode::PlayerVsPlayer,
        }
    }
}

/// A tic-tac-toe game in progress or finished.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    engine: Engine,
    mode: GameMode,
    to_move: Player,
    history: Vec<Move>,
}

impl Game {
    /// Creates a new game with X to move.
    #[instrument]
    pub fn new(mode: GameMode, config: EngineConfig) -> Self {
        Self {
            board: Board::new(),
            engine: Engine::new(config),
            mode,
            to_move: Player::X,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the engine.
    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// Returns the game mode.
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Returns the player to move.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Moves played so far, in order.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Current game status.
    pub fn status(&self) -> GameStatus {
        self.board.status()
    }

    /// True when the engine should make the next move.
    pub fn is_engine_turn(&self) -> bool {
        self.mode == GameMode::PlayerVsEngine
            && self.to_move == self.engine.player()
            && !self.status().is_over()
    }

    /// Plays a human move for the side to move.
    ///
    /// # Errors
    ///
    /// - [`GameError::GameOver`] once the game has finished.
    /// - [`GameError::NotYourTurn`] when the engine is to move.
    /// - [`GameError::Board`] for occupied or out-of-range cells. Front
    ///   ends typically ignore these, like a click on a taken square.
    #[instrument(skip(self), fields(player = %self.to_move))]
    pub fn play(&mut self, row: usize, col: usize) -> Result<GameStatus, GameError> {
        self.ensure_in_progress()?;
        if self.is_engine_turn() {
            return Err(GameError::NotYourTurn(self.to_move));
        }
        let mv = Move::new(row, col)?;
        self.apply(mv)
    }

    /// Lets the engine choose and play its move.
    ///
    /// # Errors
    ///
    /// - [`GameError::GameOver`] once the game has finished.
    /// - [`GameError::NotEngineTurn`] when a human is to move.
    #[instrument(skip(self), fields(player = %self.to_move))]
    pub fn play_engine(&mut self) -> Result<Move, GameError> {
        self.ensure_in_progress()?;
        if !self.is_engine_turn() {
            return Err(GameError::NotEngineTurn);
        }
        let mv = self.engine.select_move(&self.board)?;
        self.apply(mv)?;
        Ok(mv)
    }

    /// Clears the board and gives the first move back to X.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        info!(mode = %self.mode, "Starting a new game");
        self.board = Board::new();
        self.to_move = Player::X;
        self.history.clear();
    }

    /// Switches game mode and starts a new game.
    #[instrument(skip(self))]
    pub fn set_mode(&mut self, mode: GameMode) {
        self.mode = mode;
        self.reset();
    }

    fn ensure_in_progress(&self) -> Result<(), GameError> {
        if self.status().is_over() {
            return Err(GameError::GameOver);
        }
        Ok(())
    }

    fn apply(&mut self, mv: Move) -> Result<GameStatus, GameError> {
        self.board.apply(mv, self.to_move)?;
        self.history.push(mv);
        debug!(%mv, player = %self.to_move, occupied = self.board.occupied(), "Move applied");

        let status = self.status();
        if status.is_over() {
            info!(%status, moves = self.history.len(), "Game finished");
        } else {
            self.to_move = self.to_move.opponent();
        }
        Ok(status)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(GameMode::default(), EngineConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BoardError;

    #[test]
    fn test_new_game_x_moves_first() {
        let game = Game::new(GameMode::PlayerVsEngine, EngineConfig::new(0, Player::O));
        assert_eq!(*game.engine().config().level(), 0);
        assert_eq!(game.engine().player(), Player::O);
        assert_eq!(game.to_move(), Player::X);
        assert_eq!(game.status(), GameStatus::InProgress);
        assert!(!game.is_engine_turn());
    }

    #[test]
    fn test_engine_replies_after_human() {
        let mut game = Game::default();
        game.play(1, 1).unwrap();
        assert!(game.is_engine_turn());

        let reply = game.play_engine().unwrap();
        assert_eq!(game.board().occupied(), 2);
        assert_eq!(game.history(), &[Move::new(1, 1).unwrap(), reply]);
        assert_eq!(game.to_move(), Player::X);
    }

    #[test]
    fn test_human_cannot_play_engine_turn() {
        let mut game = Game::default();
        game.play(0, 0).unwrap();
        assert_eq!(game.play(1, 1), Err(GameError::NotYourTurn(Player::O)));
        assert_eq!(game.board().occupied(), 1);
    }

    #[test]
    fn test_engine_cannot_play_human_turn() {
        let mut game = Game::default();
        assert_eq!(game.play_engine(), Err(GameError::NotEngineTurn));
    }

    #[test]
    fn test_occupied_cell_is_rejected_and_turn_kept() {
        let mut game = Game::new(GameMode::PlayerVsPlayer, EngineConfig::default());
        game.play(0, 0).unwrap();
        let err = game.play(0, 0).unwrap_err();
        assert!(matches!(err, GameError::Board(BoardError::Occupied(_))));
        assert_eq!(game.to_move(), Player::O);
    }

    #[test]
    fn test_pvp_win_then_game_over() {
        let mut game = Game::new(GameMode::PlayerVsPlayer, EngineConfig::default());
        for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1)] {
            assert_eq!(game.play(row, col), Ok(GameStatus::InProgress));
        }
        assert_eq!(game.play(0, 2), Ok(GameStatus::Won(Player::X)));
        assert_eq!(game.play(2, 2), Err(GameError::GameOver));
        assert!(!game.is_engine_turn());
    }

    #[test]
    fn test_set_mode_resets() {
        let mut game = Game::new(GameMode::PlayerVsPlayer, EngineConfig::default());
        game.play(2, 2).unwrap();
        game.set_mode(GameMode::PlayerVsEngine);
        assert!(game.board().is_empty());
        assert!(game.history().is_empty());
        assert_eq!(game.to_move(), Player::X);
        assert_eq!(game.mode(), GameMode::PlayerVsEngine);
    }

    #[test]
    fn test_mode_parses_kebab_case() {
        assert_eq!("player-vs-player".parse::<GameMode>().unwrap(), GameMode::PlayerVsPlayer);
        assert_eq!(GameMode::PlayerVsEngine.to_string(), "player-vs-engine");
        assert_eq!(GameMode::PlayerVsEngine.toggle(), GameMode::PlayerVsPlayer);
    }
}
