//! Aggregate session state and its JSON snapshot codec.

use crate::board::{Board, Square};
use crate::player::Player;
use crate::score::Scores;
use derive_more::{Display, Error, From};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Full session state exchanged between the game-logic and presentation layers.
///
/// Purely structural: nothing here ties `is_over` to `winner` or `is_draw`,
/// and the bot shadow state (`bot_board`, `bot_moves`, `bot_last_move`) has
/// no declared relationship to the primary `board`. Collaborators own any
/// such consistency rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    /// The primary play surface.
    pub board: Board,
    /// Outcomes of completed rounds, oldest first.
    pub scoreboard: Scores,
    /// Player whose turn it is.
    pub current_player: Player,
    /// Winner of the current round, absent while undecided or drawn.
    pub winner: Option<Player>,
    /// Whether the current round ended with no winner.
    pub is_draw: bool,
    /// Whether the current round has ended.
    pub is_over: bool,
    /// The automated participant.
    pub bot_player: Player,
    /// The bot's view of the play surface.
    pub bot_board: Board,
    /// Squares the bot has played, in order.
    pub bot_moves: Vec<Square>,
    /// The bot's most recent move, absent before its first move.
    pub bot_last_move: Option<Square>,
}

impl Game {
    /// Creates a fresh session for the given participants.
    ///
    /// Boards start empty rather than pre-seeded: the schema declares no
    /// board dimension, so sizing the play surface is the caller's decision.
    #[instrument(skip(current_player, bot_player), fields(current = %current_player.name, bot = %bot_player.name))]
    pub fn new(current_player: Player, bot_player: Player) -> Self {
        Self {
            board: Board::new(),
            scoreboard: Scores::new(),
            current_player,
            winner: None,
            is_draw: false,
            is_over: false,
            bot_player,
            bot_board: Board::new(),
            bot_moves: Vec::new(),
            bot_last_move: None,
        }
    }

    /// Serializes the session to its JSON wire form.
    #[instrument(skip(self))]
    pub fn to_json(&self) -> Result<String, CodecError> {
        let json = serde_json::to_string(self)?;
        debug!(len = json.len(), "Serialized game state");
        Ok(json)
    }

    /// Restores a session from its JSON wire form.
    #[instrument(skip(json))]
    pub fn from_json(json: &str) -> Result<Self, CodecError> {
        let game = serde_json::from_str(json)?;
        debug!("Deserialized game state");
        Ok(game)
    }
}

/// Error produced when encoding or decoding a session snapshot.
#[derive(Debug, Display, Error, From)]
pub enum CodecError {
    /// The JSON payload could not be encoded or decoded.
    #[display("Invalid game state JSON: {}", _0)]
    Json(serde_json::Error),
}
