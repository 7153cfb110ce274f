//! Terminal rendering: a pure snapshot-to-lines view plus the raw-mode
//! writer that puts those lines on screen.

pub mod game_view;
pub mod renderer;

pub use game_view::GameView;
pub use renderer::TerminalRenderer;
