//! Serializable session-state types for tic-tac-toe game frontends.
//!
//! This crate defines the structural contract exchanged between a game-logic
//! component and a presentation component: players, board squares, the
//! scoreboard history, and the [`Game`] aggregate with its bot shadow state.
//! It carries no rules: move validation, win detection, and bot decisions
//! belong to the collaborators that consume these shapes.
//!
//! # Example
//!
//! ```
//! use tictactoe_state::{Game, Player};
//!
//! let game = Game::new(
//!     Player::new("Alice".to_string(), "X".to_string(), false),
//!     Player::new("Bot".to_string(), "O".to_string(), true),
//! );
//!
//! let json = game.to_json()?;
//! assert_eq!(Game::from_json(&json)?, game);
//! # Ok::<(), tictactoe_state::CodecError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod board;
mod game;
mod player;
mod score;

// Crate-level exports - board shapes
pub use board::{Board, Square};

// Crate-level exports - session aggregate and codec
pub use game::{CodecError, Game};

// Crate-level exports - participants
pub use player::Player;

// Crate-level exports - scoreboard
pub use score::{Score, Scores};
