//! HTTP endpoints for the high score service.
//!
//! A deliberately small HTTP/1.x handler over tokio TCP: request line,
//! headers, optional Content-Length body, plain-text responses. The routes
//! mirror the deployment contract:
//!
//! - `GET  /`      banner
//! - `GET  /score` current high score
//! - `POST /score` update if higher, echo the winning value
//! - `PUT  /score` unconditional set
//! - `GET  /redis` cache connection diagnostics

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::io::{AsyncBufReadExt, AsyncReadExt, AsyncWriteExt, BufReader};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::oneshot;

use crate::score::highscore::HighScoreManager;

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl ServerConfig {
    /// Create from environment variables.
    pub fn from_env() -> Self {
        let host = std::env::var("GRIDFALL_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = std::env::var("GRIDFALL_PORT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(8080);
        Self { host, port }
    }
}

/// Run the score service until the task is dropped.
///
/// `ready_tx` fires with the bound address once the listener is up (tests
/// bind port 0 and need the real port).
pub async fn run_server(
    config: ServerConfig,
    manager: HighScoreManager,
    ready_tx: Option<oneshot::Sender<SocketAddr>>,
) -> Result<()> {
    let listener = TcpListener::bind((config.host.as_str(), config.port))
        .await
        .with_context(|| format!("bind {}:{}", config.host, config.port))?;

    let addr = listener.local_addr()?;
    println!("[Server] score service listening on http://{addr}");
    if let Some(tx) = ready_tx {
        let _ = tx.send(addr);
    }

    let manager = Arc::new(manager);

    loop {
        let (stream, _peer) = listener.accept().await?;
        let manager = Arc::clone(&manager);
        tokio::spawn(async move {
            if let Err(err) = handle_connection(stream, manager).await {
                eprintln!("[Server] connection error: {err:#}");
            }
        });
    }
}

struct Request {
    method: String,
    path: String,
    body: String,
}

async fn handle_connection(stream: TcpStream, manager: Arc<HighScoreManager>) -> Result<()> {
    let (read_half, mut write_half) = stream.into_split();
    let mut reader = BufReader::new(read_half);

    let request = match read_request(&mut reader).await? {
        Some(request) => request,
        None => return Ok(()), // client closed without sending anything
    };

    let (status, body) = route(&request, &manager).await;

    let response = format!(
        "HTTP/1.1 {status}\r\nContent-Type: text/plain; charset=utf-8\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    );
    write_half.write_all(response.as_bytes()).await?;
    write_half.shutdown().await?;
    Ok(())
}

async fn read_request<R: AsyncBufReadExt + Unpin>(reader: &mut R) -> Result<Option<Request>> {
    let mut request_line = String::new();
    if reader.read_line(&mut request_line).await? == 0 {
        return Ok(None);
    }

    let mut parts = request_line.split_whitespace();
    let method = parts.next().unwrap_or_default().to_string();
    let path = parts.next().unwrap_or_default().to_string();

    let mut content_length = 0usize;
    loop {
        let mut header = String::new();
        if reader.read_line(&mut header).await? == 0 {
            break;
        }
        let header = header.trim_end_matches(['\r', '\n']);
        if header.is_empty() {
            break;
        }
        if let Some((name, value)) = header.split_once(':') {
            if name.eq_ignore_ascii_case("content-length") {
                content_length = value.trim().parse().unwrap_or(0);
            }
        }
    }

    let mut body = vec![0u8; content_length];
    if content_length > 0 {
        reader.read_exact(&mut body).await?;
    }

    Ok(Some(Request {
        method,
        path,
        body: String::from_utf8_lossy(&body).into_owned(),
    }))
}

async fn route(request: &Request, manager: &HighScoreManager) -> (&'static str, String) {
    match (request.method.as_str(), request.path.as_str()) {
        ("GET", "/") => (
            "200 OK",
            format!("{} score service\n", manager.app_name()),
        ),
        ("GET", "/score") => ("200 OK", manager.get_score().await.to_string()),
        ("POST", "/score") => {
            let new_score: u32 = request.body.trim().parse().unwrap_or(0);
            let old_score = manager.get_score().await;
            if new_score > old_score {
                manager.set_score(new_score).await;
                ("200 OK", new_score.to_string())
            } else {
                ("200 OK", old_score.to_string())
            }
        }
        ("PUT", "/score") => {
            let new_score: u32 = request.body.trim().parse().unwrap_or(0);
            manager.set_score(new_score).await;
            ("200 OK", new_score.to_string())
        }
        (_, "/score") => ("405 Method Not Allowed", String::new()),
        ("GET", "/redis") => {
            let (host, port, status) = manager.cache_info().await;
            (
                "200 OK",
                format!("redis_host={host}\nredis_port={port}\n\nConnection: {status}"),
            )
        }
        _ => ("404 Not Found", String::new()),
    }
}
