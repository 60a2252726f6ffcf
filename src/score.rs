//! Round outcomes and the scoreboard history.

use crate::player::Player;
use derive_new::new;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The recorded outcome of one completed round.
///
/// Wire field names keep the original schema's PascalCase spelling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema, new)]
pub struct Score {
    /// Winning player, absent when the round had no winner.
    #[serde(rename = "Winner")]
    pub winner: Option<Player>,
    /// Number of moves played during the round.
    #[serde(rename = "NumberOfMoves")]
    pub number_of_moves: u32,
}

/// History of round outcomes, oldest first by convention.
pub type Scores = Vec<Score>;
