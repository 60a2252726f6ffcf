//! Player identity for a game session.

use derive_new::new;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A participant in the game, human or automated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema, new)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    /// Display name.
    pub name: String,
    /// Mark this player leaves on the board.
    pub symbol: String,
    /// Whether this player is automated.
    pub is_bot: bool,
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.symbol)
    }
}
