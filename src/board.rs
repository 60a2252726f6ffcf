//! Board squares and the board sequence.

use derive_new::new;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A single addressable cell on the play surface.
///
/// `row` and `col` locate the square; the schema declares no board
/// dimension, so bounds are the consumer's concern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema, new)]
#[serde(rename_all = "camelCase")]
pub struct Square {
    /// Row index of the square.
    pub row: u32,
    /// Column index of the square.
    pub col: u32,
    /// Mark currently on the square, empty string for an open square.
    pub symbol: String,
    /// Presentation hint for the rendering layer. Omitted from the wire
    /// form when unset.
    #[new(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub highlight: Option<bool>,
}

impl std::fmt::Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{}) '{}'", self.row, self.col, self.symbol)
    }
}

/// The ordered collection of all squares composing the play surface.
///
/// The sequence encodes no size or shape; a 3x3 layout is a consumer
/// convention, not a property of the type.
pub type Board = Vec<Square>;
