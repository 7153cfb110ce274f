//! Client for the remote secret store.
//!
//! The score service can discover its cache connection parameters through a
//! key/value secret store instead of direct configuration. The store speaks
//! plain HTTP: `GET /secret/{app}/{name}` returns `{"value": "..."}`.
//!
//! Lookup failures are expected (no store configured, store unreachable,
//! secret missing) and are surfaced as errors for the caller to soft-fail on.

use anyhow::{anyhow, Context, Result};
use serde::Deserialize;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;

#[derive(Debug, Clone)]
pub struct SecretsClient {
    addr: String,
    token: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SecretPayload {
    value: String,
}

impl SecretsClient {
    pub fn new(addr: impl Into<String>, token: Option<String>) -> Self {
        Self {
            addr: addr.into(),
            token,
        }
    }

    /// Build from `SECRET_STORE_ADDR` / `SECRET_STORE_TOKEN`.
    ///
    /// Returns None when no store is configured.
    pub fn from_env() -> Option<Self> {
        let addr = std::env::var("SECRET_STORE_ADDR").ok()?;
        let token = std::env::var("SECRET_STORE_TOKEN").ok();
        Some(Self::new(addr, token))
    }

    pub fn addr(&self) -> &str {
        &self.addr
    }

    /// Fetch one secret value for `app_name`.
    pub async fn get_secret(&self, app_name: &str, secret_name: &str) -> Result<String> {
        let mut stream = TcpStream::connect(&self.addr)
            .await
            .with_context(|| format!("connect secret store at {}", self.addr))?;

        let mut request = format!(
            "GET /secret/{app_name}/{secret_name} HTTP/1.0\r\nHost: {}\r\n",
            self.addr
        );
        if let Some(token) = &self.token {
            request.push_str(&format!("Authorization: Bearer {token}\r\n"));
        }
        request.push_str("\r\n");

        stream.write_all(request.as_bytes()).await?;

        // HTTP/1.0 with no keep-alive: the store closes the connection after
        // the response, so read to EOF.
        let mut response = Vec::new();
        stream.read_to_end(&mut response).await?;
        let response = String::from_utf8(response).context("secret store response not UTF-8")?;

        let (head, body) = response
            .split_once("\r\n\r\n")
            .ok_or_else(|| anyhow!("malformed secret store response"))?;

        let status_line = head.lines().next().unwrap_or_default();
        if !status_line.contains(" 200 ") && !status_line.ends_with(" 200") {
            return Err(anyhow!(
                "secret store returned {status_line:?} for {app_name}/{secret_name}"
            ));
        }

        let payload: SecretPayload =
            serde_json::from_str(body.trim()).context("parse secret payload")?;
        Ok(payload.value)
    }
}
