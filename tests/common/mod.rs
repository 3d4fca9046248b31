//! Shared utilities for integration testing.

use std::net::SocketAddr;
use std::sync::Arc;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::Mutex;

/// Start a mock upstream that returns a fixed body with the given
/// content-type (or none). Returns the request paths it has served,
/// in order, so tests can assert on URL normalization.
pub async fn start_mock_upstream(
    addr: SocketAddr,
    content_type: Option<&'static str>,
    body: &'static str,
) -> Arc<Mutex<Vec<String>>> {
    let listener = TcpListener::bind(addr).await.unwrap();
    let seen = Arc::new(Mutex::new(Vec::new()));
    let seen_writer = seen.clone();

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((mut socket, _)) => {
                    let seen = seen_writer.clone();
                    tokio::spawn(async move {
                        // One read is enough for the small test requests.
                        let mut buf = vec![0u8; 4096];
                        let n = socket.read(&mut buf).await.unwrap_or(0);
                        let head = String::from_utf8_lossy(&buf[..n]).to_string();
                        if let Some(path) = head.split_whitespace().nth(1) {
                            seen.lock().await.push(path.to_string());
                        }

                        let content_type_line = match content_type {
                            Some(ct) => format!("Content-Type: {}\r\n", ct),
                            None => String::new(),
                        };
                        let response = format!(
                            "HTTP/1.1 200 OK\r\n{}Content-Length: {}\r\nConnection: close\r\n\r\n{}",
                            content_type_line,
                            body.len(),
                            body
                        );
                        let _ = socket.write_all(response.as_bytes()).await;
                        let _ = socket.shutdown().await;
                    });
                }
                Err(_) => break,
            }
        }
    });

    seen
}
