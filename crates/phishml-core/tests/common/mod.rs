//! Shared helpers for integration tests: a hand-weighted model and a minimal
//! HTTP/1.1 client that talks to the service over a real socket.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use phishml_core::features::{feature_names_owned, FEATURE_COUNT};
use phishml_core::model::{save_artifact, LogisticModel, FORMAT_VERSION};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

/// Unstandardized model: IP hosts, plain http, denylisted TLDs and `@` push
/// the score up. Intercept -1.
pub fn toy_model() -> LogisticModel {
    let mut weights = vec![0.0; FEATURE_COUNT];
    weights[3] = 1.0; // num_at
    weights[8] = 4.0; // has_ip
    weights[9] = -3.0; // has_https
    weights[10] = 3.0; // suspicious_tld
    LogisticModel {
        format_version: FORMAT_VERSION,
        feature_names: feature_names_owned(),
        means: vec![0.0; FEATURE_COUNT],
        scales: vec![1.0; FEATURE_COUNT],
        weights,
        intercept: -1.0,
        metadata: None,
    }
}

pub fn write_toy_model(dir: &Path) -> PathBuf {
    let path = dir.join("models").join("model.json");
    save_artifact(&toy_model(), &path).expect("save toy model");
    path
}

/// Binds an ephemeral port and serves `state` in the background.
pub async fn spawn_service(state: phishml_core::service::AppState) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(phishml_core::service::serve(listener, state));
    addr
}

/// Sends one request with `Connection: close` and returns `(status, body)`.
pub async fn request(addr: SocketAddr, method: &str, path: &str, body: Option<&str>) -> (u16, String) {
    let mut stream = TcpStream::connect(addr).await.expect("connect");
    let body = body.unwrap_or("");
    let req = format!(
        "{method} {path} HTTP/1.1\r\nHost: {addr}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    );
    stream.write_all(req.as_bytes()).await.expect("write request");
    let mut buf = Vec::new();
    stream.read_to_end(&mut buf).await.expect("read response");
    let text = String::from_utf8_lossy(&buf).into_owned();
    let (head, body) = text.split_once("\r\n\r\n").expect("response head");
    let status = head
        .split_whitespace()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .expect("status code");
    (status, body.to_string())
}

pub fn json(body: &str) -> serde_json::Value {
    serde_json::from_str(body).unwrap_or_else(|e| panic!("invalid JSON {body:?}: {e}"))
}
