//! Position analysis for a board given as text.

use anyhow::{Context, Result, bail};
use minimax_tictactoe::{Board, Engine, Evaluation, GameStatus, Player, rules};
use serde::Serialize;
use tracing::instrument;

/// Result of analysing one position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Analysis {
    /// The board, one row per line.
    pub board: String,
    /// Whether the position is finished.
    pub status: GameStatus,
    /// Side to move, absent on finished boards.
    pub to_move: Option<Player>,
    /// Minimax result for the side to move, absent on finished boards.
    pub evaluation: Option<Evaluation>,
}

impl std::fmt::Display for Analysis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.board)?;
        match (self.to_move, self.evaluation) {
            (Some(player), Some(evaluation)) => {
                let outlook = match evaluation.score {
                    1 => "X wins",
                    -1 => "O wins",
                    _ => "draw",
                };
                write!(f, "{} to move: {} with perfect play", player, outlook)?;
                if let Some(mv) = evaluation.best_move {
                    write!(f, ", best move {}", mv)?;
                }
                Ok(())
            }
            _ => write!(f, "{}", self.status),
        }
    }
}

/// Infers the side to move and rejects positions that alternating play
/// cannot produce.
///
/// X moves first, so X has as many marks as O or one more. A finished game
/// has exactly one winner, and the winner made the last move: an X win
/// leaves X one mark ahead, an O win leaves the counts equal.
pub fn side_to_move(board: &Board) -> Result<Player> {
    let x = board.count(Player::X);
    let o = board.count(Player::O);
    let to_move = if x == o {
        Player::X
    } else if x == o + 1 {
        Player::O
    } else {
        bail!("Unreachable position: {} X marks and {} O marks", x, o)
    };

    let x_line = rules::has_line(board, Player::X);
    let o_line = rules::has_line(board, Player::O);
    if x_line && o_line {
        bail!("Unreachable position: both X and O have three in a line");
    }
    if x_line && to_move == Player::X {
        bail!("Unreachable position: O moved after X had already won");
    }
    if o_line && to_move == Player::O {
        bail!("Unreachable position: X moved after O had already won");
    }
    Ok(to_move)
}

/// Parses `text` and evaluates it for the side to move.
#[instrument]
pub fn analyze(text: &str) -> Result<Analysis> {
    let board: Board = text.parse().context("Failed to parse board")?;
    let to_move = side_to_move(&board)?;
    let status = board.status();

    let (to_move, evaluation) = if status.is_over() {
        (None, None)
    } else {
        (Some(to_move), Some(Engine::evaluate(&board, to_move)))
    };

    Ok(Analysis {
        board: board.to_string(),
        status,
        to_move,
        evaluation,
    })
}
