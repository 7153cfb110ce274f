//! High score service: HTTP endpoints backed by a remote cache, with cache
//! discovery through either direct configuration or a secret store.
//!
//! Everything in here soft-fails; engine correctness never depends on it.

pub mod highscore;
pub mod secrets;
pub mod server;

pub use highscore::HighScoreManager;
pub use secrets::SecretsClient;
pub use server::{run_server, ServerConfig};
