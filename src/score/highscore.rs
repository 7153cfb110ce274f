//! High score persistence against a remote cache.
//!
//! The cache speaks the Redis wire protocol; we only need GET/SET/AUTH/PING,
//! sent as inline commands over a short-lived TCP connection. Connection
//! parameters come either from direct env configuration or from the secret
//! store, keyed by the application name.
//!
//! "Cannot reach the cache" is not an error: reads return 0 and writes are
//! dropped. The game never sees a failure from this module.

use anyhow::{anyhow, Context, Result};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::TcpStream;

use crate::score::secrets::SecretsClient;

/// Key under which the score is stored.
const SCORE_KEY: &str = "score";

/// Where cache connection parameters come from.
#[derive(Debug, Clone)]
enum CacheSource {
    Direct {
        host: String,
        port: String,
        password: Option<String>,
    },
    Secrets(SecretsClient),
    Unconfigured,
}

#[derive(Debug, Clone)]
pub struct HighScoreManager {
    app_name: String,
    source: CacheSource,
}

impl HighScoreManager {
    pub fn new(app_name: impl Into<String>) -> Self {
        Self {
            app_name: app_name.into(),
            source: CacheSource::Unconfigured,
        }
    }

    /// Configure from the environment, mirroring the deployment contract:
    /// direct `REDIS_HOST`/`REDIS_PORT` win; otherwise fall back to the
    /// secret store; otherwise run cache-less (all reads 0).
    pub fn from_env() -> Self {
        let app_name = std::env::var("APP_NAME").unwrap_or_else(|_| "gridfall".to_string());
        let mut manager = Self::new(app_name);

        match (std::env::var("REDIS_HOST"), std::env::var("REDIS_PORT")) {
            (Ok(host), Ok(port)) => {
                manager.configure_direct(host, port, std::env::var("REDIS_PASSWORD").ok());
            }
            _ => {
                if let Some(client) = SecretsClient::from_env() {
                    manager.configure_secrets(client);
                }
            }
        }

        manager
    }

    pub fn configure_direct(&mut self, host: String, port: String, password: Option<String>) {
        self.source = CacheSource::Direct {
            host,
            port,
            password,
        };
    }

    pub fn configure_secrets(&mut self, client: SecretsClient) {
        self.source = CacheSource::Secrets(client);
    }

    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    /// Current high score; 0 when the cache is unreachable or unset.
    pub async fn get_score(&self) -> u32 {
        match self.fetch(SCORE_KEY).await {
            Ok(Some(value)) => value.trim().parse().unwrap_or(0),
            _ => 0,
        }
    }

    /// Store a score. Failures are silently dropped.
    pub async fn set_score(&self, score: u32) {
        let _ = self.store(SCORE_KEY, &score.to_string()).await;
    }

    /// Resolved connection info plus a connection status string, for the
    /// diagnostic endpoint.
    pub async fn cache_info(&self) -> (String, String, String) {
        let (host, port, password) = match self.resolve().await {
            Ok(params) => params,
            Err(_) => return (String::new(), String::new(), "No connection".to_string()),
        };

        let status = match self.command(&host, &port, password.as_deref(), "PING").await {
            Ok(Some(reply)) => reply,
            _ => "No connection".to_string(),
        };

        (host, port, status)
    }

    /// Resolve host/port/password from the configured source.
    async fn resolve(&self) -> Result<(String, String, Option<String>)> {
        match &self.source {
            CacheSource::Direct {
                host,
                port,
                password,
            } => Ok((host.clone(), port.clone(), password.clone())),
            CacheSource::Secrets(client) => {
                let host = client.get_secret(&self.app_name, "redis_ip").await?;
                let port = client
                    .get_secret(&self.app_name, "redis_port")
                    .await
                    .unwrap_or_default();
                let password = client
                    .get_secret(&self.app_name, "redis_password")
                    .await
                    .ok();
                Ok((host, port, password))
            }
            CacheSource::Unconfigured => Err(anyhow!("no cache configured")),
        }
    }

    async fn fetch(&self, key: &str) -> Result<Option<String>> {
        let (host, port, password) = self.resolve().await?;
        self.command(&host, &port, password.as_deref(), &format!("GET {key}"))
            .await
    }

    async fn store(&self, key: &str, value: &str) -> Result<()> {
        let (host, port, password) = self.resolve().await?;
        self.command(
            &host,
            &port,
            password.as_deref(),
            &format!("SET {key} {value}"),
        )
        .await?;
        Ok(())
    }

    /// Open a connection, authenticate if needed, run one inline command,
    /// and read its reply.
    async fn command(
        &self,
        host: &str,
        port: &str,
        password: Option<&str>,
        command: &str,
    ) -> Result<Option<String>> {
        let addr = format!("{host}:{port}");
        let stream = TcpStream::connect(&addr)
            .await
            .with_context(|| format!("connect cache at {addr}"))?;
        let (read_half, mut write_half) = stream.into_split();
        let mut reader = BufReader::new(read_half);

        if let Some(password) = password {
            if !password.is_empty() {
                write_half
                    .write_all(format!("AUTH {password}\r\n").as_bytes())
                    .await?;
                read_reply(&mut reader).await?;
            }
        }

        write_half
            .write_all(format!("{command}\r\n").as_bytes())
            .await?;
        read_reply(&mut reader).await
    }
}

/// Read a single RESP reply. Returns None for null bulk strings, an error
/// for protocol errors.
async fn read_reply<R: AsyncBufReadExt + Unpin>(reader: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    reader.read_line(&mut line).await?;
    let line = line.trim_end_matches(['\r', '\n']);

    match line.as_bytes().first() {
        Some(b'+') | Some(b':') => Ok(Some(line[1..].to_string())),
        Some(b'-') => Err(anyhow!("cache error: {}", &line[1..])),
        Some(b'$') => {
            let len: i64 = line[1..].parse().context("bulk string length")?;
            if len < 0 {
                return Ok(None);
            }
            let mut value = String::new();
            reader.read_line(&mut value).await?;
            Ok(Some(value.trim_end_matches(['\r', '\n']).to_string()))
        }
        Some(other) => Err(anyhow!("unexpected cache reply prefix: {other:?}")),
        None => Err(anyhow!("empty cache reply")),
    }
}
