use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread;

use super::*;

// =============================================================
// Helpers
// =============================================================

/// Serve one canned HTTP response on a loopback port and return its URL.
fn serve_once(status_line: &str, body: &str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let response = format!(
        "HTTP/1.1 {status_line}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
        body.len()
    );
    thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let mut buf = [0_u8; 4096];
        let mut request = Vec::new();
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = stream.read(&mut buf).unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(&buf[..n]);
        }
        assert!(request.starts_with(b"GET /equipment "));
        stream.write_all(response.as_bytes()).unwrap();
    });
    format!("http://{addr}/equipment")
}

fn provider(url: String) -> HttpProvider {
    let client = reqwest::Client::builder().no_proxy().build().unwrap();
    HttpProvider::with_client(url, client)
}

/// A loopback URL nothing listens on.
fn dead_endpoint() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}/equipment")
}

// =============================================================
// HttpProvider
// =============================================================

#[test]
fn default_provider_targets_local_server() {
    assert_eq!(HttpProvider::default().endpoint(), LOCAL_CATALOG_ENDPOINT);
}

#[tokio::test]
async fn fetch_success_returns_items() {
    let url = serve_once(
        "200 OK",
        r#"{"equipment":[{"id":"p1","name":"Pump","description":"Moves fluid","category":"Mechanical"}]}"#,
    );
    let items = provider(url).fetch().await.unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].name, "Pump");
}

#[tokio::test]
async fn fetch_non_success_status_is_provider_unavailable() {
    let url = serve_once("503 Service Unavailable", "{}");
    let err = provider(url).fetch().await.unwrap_err();
    assert_eq!(err, CatalogError::ProviderUnavailable { status: 503 });
}

#[tokio::test]
async fn fetch_wrong_shape_is_malformed() {
    let url = serve_once("200 OK", r#"{"blocks":[]}"#);
    let err = provider(url).fetch().await.unwrap_err();
    assert!(matches!(err, CatalogError::MalformedResponse(_)));
}

#[tokio::test]
async fn fetch_connection_refused_is_transport() {
    let err = provider(dead_endpoint()).fetch().await.unwrap_err();
    assert!(matches!(err, CatalogError::Transport(_)));
}

// =============================================================
// Endpoint resolution
// =============================================================

#[test]
fn resolve_endpoint_prefers_configured_value() {
    assert_eq!(resolve_endpoint(Some("http://api.local/equipment"), "/equipment"), "http://api.local/equipment");
}

#[test]
fn resolve_endpoint_falls_back_when_missing_or_blank() {
    assert_eq!(resolve_endpoint(None, "/equipment"), "/equipment");
    assert_eq!(resolve_endpoint(Some("   "), "/equipment"), "/equipment");
}

#[test]
fn resolve_endpoint_trims_whitespace() {
    assert_eq!(resolve_endpoint(Some(" /api/equipment \n"), "/equipment"), "/api/equipment");
}

#[test]
fn absolute_endpoint_joins_root_relative_path() {
    assert_eq!(absolute_endpoint("/equipment", "http://localhost:8000"), "http://localhost:8000/equipment");
    assert_eq!(absolute_endpoint("/equipment", "http://localhost:8000/"), "http://localhost:8000/equipment");
}

#[test]
fn absolute_endpoint_keeps_absolute_url() {
    assert_eq!(
        absolute_endpoint("http://127.0.0.1:8000/equipment", "https://example.test"),
        "http://127.0.0.1:8000/equipment"
    );
}
