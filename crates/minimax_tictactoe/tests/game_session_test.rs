//! Full games through the session API.

use minimax_tictactoe::{
    BoardError, EngineConfig, Game, GameError, GameMode, GameStatus, Move, Player, RANDOM_LEVEL,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

/// Plays a human that picks random legal cells against the engine.
fn play_random_human(seed: u64, engine_player: Player) -> Game {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut game = Game::new(GameMode::PlayerVsEngine, EngineConfig::new(1, engine_player));

    while !game.status().is_over() {
        if game.is_engine_turn() {
            game.play_engine().unwrap();
        } else {
            let moves = game.board().legal_moves();
            let mv = *moves.choose(&mut rng).unwrap();
            game.play(mv.row(), mv.col()).unwrap();
        }
    }
    game
}

#[test]
fn test_engine_as_o_never_loses() {
    for seed in 0..12 {
        let game = play_random_human(seed, Player::O);
        assert_ne!(game.status(), GameStatus::Won(Player::X), "seed {seed}");
    }
}

#[test]
fn test_engine_as_x_never_loses() {
    for seed in 0..6 {
        let game = play_random_human(seed, Player::X);
        assert_ne!(game.status(), GameStatus::Won(Player::O), "seed {seed}");
    }
}

#[test]
fn test_history_matches_board() {
    let game = play_random_human(3, Player::O);
    assert_eq!(game.history().len(), game.board().occupied());
    for (ply, mv) in game.history().iter().enumerate() {
        let expected = if ply % 2 == 0 { Player::X } else { Player::O };
        let mark = game.board().get(mv.row(), mv.col()).unwrap();
        assert_eq!(mark.player(), Some(expected));
    }
}

#[test]
fn test_engine_opens_when_playing_x() {
    let mut game = Game::new(GameMode::PlayerVsEngine, EngineConfig::new(1, Player::X));
    assert!(game.is_engine_turn());
    assert_eq!(game.play(1, 1), Err(GameError::NotYourTurn(Player::X)));

    let opening = game.play_engine().unwrap();
    assert_eq!(opening, Move::new(0, 0).unwrap());
    assert!(!game.is_engine_turn());
}

#[test]
fn test_random_engine_game_finishes() {
    let mut game = Game::new(
        GameMode::PlayerVsEngine,
        EngineConfig::new(RANDOM_LEVEL, Player::O),
    );
    let mut cells = (0..9).filter_map(Move::from_index);
    while !game.status().is_over() {
        if game.is_engine_turn() {
            game.play_engine().unwrap();
            continue;
        }
        // Walk the cells in order, skipping ones the engine already took.
        let mv = cells.next().unwrap();
        match game.play(mv.row(), mv.col()) {
            Ok(_) | Err(GameError::Board(BoardError::Occupied(_))) => {}
            Err(e) => panic!("unexpected error: {e}"),
        }
    }
    assert_eq!(game.play_engine(), Err(GameError::GameOver));
}

#[test]
fn test_out_of_range_move_reported() {
    let mut game = Game::new(GameMode::PlayerVsPlayer, EngineConfig::default());
    assert_eq!(
        game.play(3, 1),
        Err(GameError::Board(BoardError::OutOfBounds { row: 3, col: 1 }))
    );
    assert!(game.board().is_empty());
}

#[test]
fn test_status_serializes() {
    let json = serde_json::to_string(&GameStatus::Won(Player::O)).unwrap();
    assert_eq!(json, r#"{"Won":"O"}"#);
}
