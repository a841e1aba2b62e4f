//! Shared test utilities and Mother pattern factories.
//!
//! Use these helpers to avoid copy-pasting lookup payloads and stub servers
//! across tests.
#![allow(dead_code)]

use serde_json::{Value, json};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

// ============================================================================
// Mother Pattern Factories
// ============================================================================

/// Raw `/search` responses as the explorer API returns them.
pub struct PayloadMother;

impl PayloadMother {
    #[must_use]
    pub fn rbt(rbt_id: &str, owner_did: &str, block_height: &str, token_value: i64) -> Value {
        json!({
            "type": "RBT",
            "rbt_info": {
                "rbt_id": rbt_id,
                "owner_did": owner_did,
                "block_height": block_height,
                "token_value": token_value
            }
        })
    }

    #[must_use]
    pub fn ft(ft_name: &str, creator_did: &str, token_value: f64) -> Value {
        json!({
            "type": "FT",
            "ft_info": {
                "ft_name": ft_name,
                "creator_did": creator_did,
                "owner_did": creator_did,
                "block_height": "12",
                "token_value": token_value,
                "txn_id": "txn-ft"
            }
        })
    }

    #[must_use]
    pub fn sc(name: &str, creator_did: &str, txn_id: &str) -> Value {
        json!({
            "type": "SC",
            "sc_info": {
                "sc_name": name,
                "creator_did": creator_did,
                "txn_id": txn_id
            }
        })
    }
}

// ============================================================================
// Stub HTTP Server
// ============================================================================

/// A one-shot HTTP server answering a single request with a canned response.
pub struct StubServer {
    /// Base URL, e.g. `http://127.0.0.1:54321`.
    pub url: String,
    /// Resolves to the request line received (`GET /search?id=... HTTP/1.1`).
    pub request_line: JoinHandle<String>,
}

impl StubServer {
    /// Serves one request with `status` (e.g. `"200 OK"`) and `body`.
    pub async fn respond(status: &'static str, body: impl Into<String>) -> Self {
        let body = body.into();
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let url = format!("http://{}", listener.local_addr().unwrap());

        let request_line = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();

            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }

            let response = format!(
                "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();

            String::from_utf8_lossy(&request)
                .lines()
                .next()
                .unwrap_or_default()
                .to_string()
        });

        Self { url, request_line }
    }
}
