//! Gridfall: a terminal falling-block game.
//!
//! The `core` module is the game engine proper (board, pieces, collision,
//! scoring) and has no I/O. Everything else is glue around it: `term` draws,
//! `input` maps keys, `score` talks to the high score service.

pub mod core;
pub mod input;
pub mod score;
pub mod term;
pub mod types;
