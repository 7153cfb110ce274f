//! Score service binary.
//!
//! Serves the high score endpoints, discovering the backing cache from the
//! environment (direct `REDIS_*` variables) or from the secret store.

use anyhow::Result;

use gridfall::score::{run_server, HighScoreManager, ServerConfig};

#[tokio::main]
async fn main() -> Result<()> {
    let config = ServerConfig::from_env();
    let manager = HighScoreManager::from_env();

    println!("[Server] app name: {}", manager.app_name());
    run_server(config, manager, None).await
}
