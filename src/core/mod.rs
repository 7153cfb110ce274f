//! Core game engine: board, pieces, collision, scoring, and the state
//! machine that ties them together. No I/O anywhere in this module.

pub mod board;
pub mod collision;
pub mod game;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use board::Grid;
pub use collision::collides;
pub use game::{Game, Piece};
pub use pieces::{template, Mask};
pub use rng::{PieceRng, SequenceRng, SimpleRng};
pub use scoring::line_clear_score;
pub use snapshot::Snapshot;
