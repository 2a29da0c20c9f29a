//! Engine-versus-engine matches.

use minimax_tictactoe::{Board, Engine, EngineConfig, GameError, Outcome, Player};
use serde::Serialize;
use tracing::{debug, info, instrument};

/// Tally of a self-play match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, derive_more::Display)]
#[display("{games} games: X won {x_wins}, O won {o_wins}, {draws} drawn")]
pub struct SelfPlayReport {
    /// Games played.
    pub games: u32,
    /// Games won by X.
    pub x_wins: u32,
    /// Games won by O.
    pub o_wins: u32,
    /// Drawn games.
    pub draws: u32,
}

impl SelfPlayReport {
    /// Tallies one finished game.
    pub fn record(&mut self, outcome: Outcome) {
        self.games += 1;
        match outcome {
            Outcome::Winner(Player::X) => self.x_wins += 1,
            Outcome::Winner(Player::O) => self.o_wins += 1,
            Outcome::Draw => self.draws += 1,
        }
    }
}

/// Plays one game between two engines, X first.
#[instrument(skip_all)]
pub fn play_game(x: &Engine, o: &Engine) -> Result<Outcome, GameError> {
    let mut board = Board::new();
    let mut to_move = Player::X;

    loop {
        if let Some(outcome) = board.status().outcome() {
            debug!(board = %board, %outcome, "Self-play game over");
            return Ok(outcome);
        }
        let engine = match to_move {
            Player::X => x,
            Player::O => o,
        };
        let mv = engine.select_move(&board)?;
        board.apply(mv, to_move)?;
        debug!(%mv, player = %to_move, "Self-play move");
        to_move = to_move.opponent();
    }
}

/// Plays `games` games between engines at the given levels.
#[instrument]
pub fn run_selfplay(games: u32, x_level: u8, o_level: u8) -> Result<SelfPlayReport, GameError> {
    let x = Engine::new(EngineConfig::new(x_level, Player::X));
    let o = Engine::new(EngineConfig::new(o_level, Player::O));

    let mut report = SelfPlayReport::default();
    for game in 0..games {
        let outcome = play_game(&x, &o)?;
        debug!(game, %outcome, "Game finished");
        report.record(outcome);
    }

    info!(%report, "Self-play complete");
    Ok(report)
}
