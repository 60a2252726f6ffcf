//! Round-trip tests for full session snapshots.

use tictactoe_state::{Board, Game, Player, Score, Square};

fn alice() -> Player {
    Player::new("Alice".to_string(), "X".to_string(), false)
}

fn bot() -> Player {
    Player::new("Bot".to_string(), "O".to_string(), true)
}

/// Nine open squares, rows and columns 0-2.
fn nine_open_squares() -> Board {
    let mut squares = Vec::new();
    for row in 0u32..3 {
        for col in 0u32..3 {
            squares.push(Square::new(row, col, String::new()));
        }
    }
    squares
}

#[test]
fn test_fresh_game_round_trips() {
    let mut game = Game::new(alice(), bot());
    game.board = nine_open_squares();
    game.bot_board = nine_open_squares();

    let json = game.to_json().expect("Game serializes");
    let restored = Game::from_json(&json).expect("Game deserializes");

    assert_eq!(restored, game);
}

#[test]
fn test_game_with_empty_board_round_trips() {
    // The schema declares no minimum board size.
    let game = Game::new(alice(), bot());

    let json = game.to_json().expect("Game serializes");
    let restored = Game::from_json(&json).expect("Game deserializes");

    assert_eq!(restored, game);
    assert!(restored.board.is_empty());
}

#[test]
fn test_mid_game_state_round_trips() {
    let mut game = Game::new(alice(), bot());
    game.board = nine_open_squares();
    game.bot_board = nine_open_squares();

    game.board[4].symbol = "X".to_string();
    game.bot_board[0].symbol = "O".to_string();
    game.bot_moves.push(game.bot_board[0].clone());
    game.bot_last_move = Some(game.bot_board[0].clone());
    game.scoreboard.push(Score::new(Some(alice()), 7));
    game.scoreboard.push(Score::new(None, 9));

    let json = game.to_json().expect("Game serializes");
    let restored = Game::from_json(&json).expect("Game deserializes");

    assert_eq!(restored, game);
    assert_eq!(restored.scoreboard.len(), 2);
    assert_eq!(restored.bot_last_move, Some(restored.bot_moves[0].clone()));
}

#[test]
fn test_finished_game_round_trips() {
    let mut game = Game::new(alice(), bot());
    game.board = nine_open_squares();
    game.bot_board = nine_open_squares();

    for pos in [0, 1, 2] {
        game.board[pos].symbol = "X".to_string();
        game.board[pos].highlight = Some(true);
    }
    game.winner = Some(alice());
    game.is_over = true;

    let json = game.to_json().expect("Game serializes");
    let restored = Game::from_json(&json).expect("Game deserializes");

    assert_eq!(restored, game);
    assert_eq!(restored.winner, Some(alice()));
    assert_eq!(restored.board[0].highlight, Some(true));
}

#[test]
fn test_drawn_game_round_trips() {
    let mut game = Game::new(alice(), bot());
    game.board = nine_open_squares();
    game.is_draw = true;
    game.is_over = true;

    let json = game.to_json().expect("Game serializes");
    let restored = Game::from_json(&json).expect("Game deserializes");

    assert_eq!(restored, game);
    assert!(restored.is_draw);
    assert_eq!(restored.winner, None);
}
