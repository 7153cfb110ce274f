//! Game engine: owns the grid and the active piece, drives spawning,
//! movement, rotation, locking, line clears, and scoring.
//!
//! Every mutation follows the same pattern: build a candidate piece, ask the
//! collision oracle, and only then commit. Rejected operations return false
//! and leave the state untouched; nothing here panics or returns errors.

use crate::core::board::Grid;
use crate::core::collision::collides;
use crate::core::pieces::{template, Mask};
use crate::core::rng::{PieceRng, SimpleRng};
use crate::core::scoring::line_clear_score;
use crate::core::snapshot::Snapshot;
use crate::types::{Cell, GameAction, PieceKind, BOARD_WIDTH};

/// Active falling piece.
///
/// A value type: moves and rotations produce a new `Piece`, the old one is
/// only replaced after the candidate passes the collision check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    pub kind: PieceKind,
    pub mask: Mask,
    pub x: i8,
    pub y: i8,
}

impl Piece {
    /// Spawn a fresh piece of `kind`, horizontally centered at the top.
    pub fn spawn(kind: PieceKind) -> Self {
        let mask = template(kind);
        let x = BOARD_WIDTH as i8 / 2 - mask.cols() / 2;
        Self { kind, mask, x, y: 0 }
    }

    pub fn translated(&self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..self.clone()
        }
    }

    pub fn rotated_cw(&self) -> Self {
        Self {
            mask: self.mask.rotated_cw(),
            ..self.clone()
        }
    }
}

/// The game engine. Sole writer of the grid, score, and game-over flag.
#[derive(Debug, Clone)]
pub struct Game<R: PieceRng = SimpleRng> {
    grid: Grid,
    active: Option<Piece>,
    score: u32,
    game_over: bool,
    rng: R,
}

impl Game<SimpleRng> {
    /// Create a new game and spawn the first piece.
    pub fn new(seed: u32) -> Self {
        Self::with_rng(SimpleRng::new(seed))
    }
}

impl<R: PieceRng> Game<R> {
    /// Create a new game with an injected randomness source.
    ///
    /// The first piece is spawned immediately. On an empty board that spawn
    /// cannot realistically collide, but a collision is still handled (the
    /// game starts over).
    pub fn with_rng(rng: R) -> Self {
        let mut game = Self {
            grid: Grid::new(),
            active: None,
            score: 0,
            game_over: false,
            rng,
        };
        game.spawn();
        game
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn active(&self) -> Option<&Piece> {
        self.active.as_ref()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[cfg(test)]
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    /// Spawn the next piece. No-op once the game is over.
    ///
    /// This is the only place the game-over flag can first become true: a
    /// freshly spawned piece that already collides ends the game and leaves
    /// no active piece.
    pub fn spawn(&mut self) {
        if self.game_over {
            return;
        }

        let piece = Piece::spawn(self.rng.next_kind());

        if collides(&self.grid, &piece.mask, piece.x, piece.y) {
            self.game_over = true;
            self.active = None;
            return;
        }

        self.active = Some(piece);
    }

    /// Try to translate the active piece by `(dx, dy)`.
    ///
    /// Returns true iff the piece moved. A blocked downward move means the
    /// piece has landed: it is locked where it is, full rows are cleared and
    /// scored, and the next piece spawns. Blocked sideways or upward moves
    /// change nothing.
    pub fn move_piece(&mut self, dx: i8, dy: i8) -> bool {
        if self.game_over {
            return false;
        }
        let Some(active) = &self.active else {
            return false;
        };

        let candidate = active.translated(dx, dy);

        if !collides(&self.grid, &candidate.mask, candidate.x, candidate.y) {
            self.active = Some(candidate);
            return true;
        }

        if dy > 0 {
            self.lock_active();
            let cleared = self.grid.clear_full_rows();
            self.score += line_clear_score(cleared);
            self.spawn();
        }

        false
    }

    /// Try to rotate the active piece 90 degrees clockwise in place.
    ///
    /// No wall kicks: a rotation that would leave the board or overlap a
    /// locked cell is rejected outright.
    pub fn rotate_piece(&mut self) -> bool {
        if self.game_over {
            return false;
        }
        let Some(active) = &self.active else {
            return false;
        };

        let candidate = active.rotated_cw();

        if collides(&self.grid, &candidate.mask, candidate.x, candidate.y) {
            return false;
        }

        self.active = Some(candidate);
        true
    }

    /// Apply a driver-level action.
    ///
    /// Hard drop is repeated downward movement until the piece locks; the
    /// engine only ever sees displacement vectors.
    pub fn apply_action(&mut self, action: GameAction) {
        match action {
            GameAction::MoveLeft => {
                self.move_piece(-1, 0);
            }
            GameAction::MoveRight => {
                self.move_piece(1, 0);
            }
            GameAction::SoftDrop => {
                self.move_piece(0, 1);
            }
            GameAction::HardDrop => while self.move_piece(0, 1) {},
            GameAction::Rotate => {
                self.rotate_piece();
            }
        }
    }

    /// Write the current piece into the grid. Cells outside the grid are
    /// silently dropped (should not occur after a passing collision check).
    fn lock_active(&mut self) {
        let Some(active) = self.active.take() else {
            return;
        };
        for (dx, dy) in active.mask.cells() {
            self.grid.set(active.x + dx, active.y + dy, Cell::Filled);
        }
    }

    /// Fill `out` with the renderable state: the locked grid with the active
    /// piece overlaid as filled. Side-effect free.
    pub fn snapshot_into(&self, out: &mut Snapshot) {
        out.grid.clear();
        for y in 0..self.grid.height() as usize {
            out.grid.push(self.grid.row(y).to_vec());
        }

        if let Some(active) = &self.active {
            for (dx, dy) in active.mask.cells() {
                let px = active.x + dx;
                let py = active.y + dy;
                if px >= 0
                    && (px as usize) < out.grid[0].len()
                    && py >= 0
                    && (py as usize) < out.grid.len()
                {
                    out.grid[py as usize][px as usize] = Cell::Filled;
                }
            }
        }

        out.score = self.score;
        out.game_over = self.game_over;
    }

    pub fn snapshot(&self) -> Snapshot {
        let mut s = Snapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}
