//! Renderable game state: a deep copy of the grid with the active piece
//! overlaid, plus score and the game-over flag.
//!
//! The live piece and locked terrain are intentionally indistinguishable in
//! the snapshot; the glyph alphabet is exactly two values.

use serde::{Deserialize, Serialize};

use crate::types::Cell;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub grid: Vec<Vec<Cell>>,
    pub score: u32,
    pub game_over: bool,
}
