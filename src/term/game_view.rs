//! GameView: maps a `core::Snapshot` into terminal lines.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::Snapshot;
use crate::types::BOARD_WIDTH;

const TITLE: &str = "Gridfall";

/// Renders a snapshot as a list of terminal lines.
///
/// Each board cell is printed twice to compensate for typical terminal glyph
/// aspect ratio.
#[derive(Debug, Clone, Copy, Default)]
pub struct GameView;

impl GameView {
    pub fn render(&self, snapshot: &Snapshot) -> Vec<String> {
        let mut lines = Vec::with_capacity(snapshot.grid.len() + 6);

        lines.push(TITLE.to_string());
        lines.push(format!("┌{}┐", "──".repeat(BOARD_WIDTH as usize)));

        for row in &snapshot.grid {
            let mut line = String::from("│");
            for cell in row {
                line.push_str(cell.glyph());
                line.push_str(cell.glyph());
            }
            line.push('│');
            lines.push(line);
        }

        lines.push(format!("└{}┘", "──".repeat(BOARD_WIDTH as usize)));
        lines.push(format!("Score: {}", snapshot.score));

        if snapshot.game_over {
            lines.push(format!("Game Over! Score: {}", snapshot.score));
            lines.push("Press 'q' to quit...".to_string());
        } else {
            lines.push("← → move   ↑ rotate   ↓ drop   space hard drop   q quit".to_string());
        }

        lines
    }
}
