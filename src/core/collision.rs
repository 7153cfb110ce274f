//! Collision oracle: does a piece placement intersect the boundary or a
//! locked cell?
//!
//! Pure function over the grid; the engine consults it before committing any
//! spawn, move, or rotation.

use crate::core::board::Grid;
use crate::core::pieces::Mask;
use crate::types::{BOARD_HEIGHT, BOARD_WIDTH};

/// Check a candidate placement of `mask` anchored at `(x, y)`.
///
/// A filled mask cell collides when it is outside the side walls, at or below
/// the floor, or on a locked cell. A negative board y is NOT a bounds
/// violation: a freshly spawned mask may extend above row 0 and only starts
/// to matter once it maps onto a visible row. Do not make this check
/// symmetric; spawn placement depends on the asymmetry.
pub fn collides(grid: &Grid, mask: &Mask, x: i8, y: i8) -> bool {
    for (dx, dy) in mask.cells() {
        let px = x + dx;
        let py = y + dy;

        if px < 0 || px >= BOARD_WIDTH as i8 || py >= BOARD_HEIGHT as i8 {
            return true;
        }

        if py >= 0 && grid.is_filled(px, py) {
            return true;
        }
    }
    false
}
