//! Catalog sources.
//!
//! A source is anything that can produce a raw JSON payload. The loader
//! only sees the [`CatalogSource`] trait, so tests swap in in-memory
//! sources and the desktop app uses [`HttpSource`].

use async_trait::async_trait;
use reqwest::header::{CACHE_CONTROL, PRAGMA};
use serde_json::Value;
use tracing::debug;

use crate::error::{GalleryError, GalleryResult};

/// One candidate endpoint for the catalog.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Human-readable identifier used in logs and status text
    fn label(&self) -> &str;

    /// Fetch and parse the payload.
    ///
    /// Every failure is a `GalleryError::SourceUnavailable`; the loader
    /// treats them all alike and moves on.
    async fn fetch(&self) -> GalleryResult<Value>;
}

/// HTTP GET source with no-cache semantics.
///
/// No timeout beyond the transport default is applied, so a hung endpoint
/// stalls the load.
#[derive(Debug, Clone)]
pub struct HttpSource {
    url: String,
    client: reqwest::Client,
}

impl HttpSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self::with_client(url, reqwest::Client::new())
    }

    /// Share one connection pool across sources.
    pub fn with_client(url: impl Into<String>, client: reqwest::Client) -> Self {
        Self {
            url: url.into(),
            client,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl CatalogSource for HttpSource {
    fn label(&self) -> &str {
        &self.url
    }

    async fn fetch(&self) -> GalleryResult<Value> {
        debug!(source = %self.url, "Fetching catalog");

        let response = self
            .client
            .get(&self.url)
            .header(CACHE_CONTROL, "no-cache")
            .header(PRAGMA, "no-cache")
            .send()
            .await
            .map_err(|e| GalleryError::source_unavailable(&self.url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(GalleryError::source_unavailable(
                &self.url,
                format!("HTTP {}", status.as_u16()),
            ));
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| GalleryError::source_unavailable(&self.url, format!("invalid JSON: {}", e)))
    }
}

/// Build HTTP sources for a list of URLs, sharing one client.
pub fn http_sources(urls: &[String]) -> Vec<Box<dyn CatalogSource>> {
    let client = reqwest::Client::new();
    urls.iter()
        .map(|url| Box::new(HttpSource::with_client(url.clone(), client.clone())) as Box<dyn CatalogSource>)
        .collect()
}

/// A source serving a fixed payload (or a fixed failure).
///
/// Handy for bundling a catalog file or for tests.
#[derive(Debug, Clone)]
pub struct StaticSource {
    label: String,
    payload: Option<Value>,
}

impl StaticSource {
    pub fn ok(label: impl Into<String>, payload: Value) -> Self {
        Self {
            label: label.into(),
            payload: Some(payload),
        }
    }

    pub fn failing(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            payload: None,
        }
    }
}

#[async_trait]
impl CatalogSource for StaticSource {
    fn label(&self) -> &str {
        &self.label
    }

    async fn fetch(&self) -> GalleryResult<Value> {
        self.payload
            .clone()
            .ok_or_else(|| GalleryError::source_unavailable(&self.label, "simulated network error"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_static_source() {
        let source = StaticSource::ok("mem", json!(["Miya"]));
        assert_eq!(source.label(), "mem");
        assert_eq!(source.fetch().await.unwrap(), json!(["Miya"]));

        let broken = StaticSource::failing("down");
        let err = broken.fetch().await.unwrap_err();
        assert!(matches!(err, GalleryError::SourceUnavailable { .. }));
    }

    #[tokio::test]
    async fn test_http_source_unreachable() {
        // Port 9 (discard) on localhost is closed on any sane test host
        let source = HttpSource::new("http://127.0.0.1:9/heroes");
        let err = source.fetch().await.unwrap_err();
        assert!(matches!(err, GalleryError::SourceUnavailable { .. }));
    }

    /// Serve one canned HTTP response on a local port.
    ///
    /// Returns the URL and a handle yielding the raw request head.
    async fn serve_once(
        status_line: &'static str,
        body: &'static str,
    ) -> (String, tokio::task::JoinHandle<String>) {
        use tokio::io::{AsyncReadExt, AsyncWriteExt};
        use tokio::net::TcpListener;

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let url = format!("http://{}/heroes", listener.local_addr().unwrap());

        let handle = tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.unwrap();
            let mut head = Vec::new();
            let mut buf = [0u8; 1024];
            while !head.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = stream.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                head.extend_from_slice(&buf[..n]);
            }
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            stream.write_all(response.as_bytes()).await.unwrap();
            stream.shutdown().await.ok();
            String::from_utf8_lossy(&head).to_lowercase()
        });

        (url, handle)
    }

    #[tokio::test]
    async fn test_http_source_server_error() {
        let (url, server) = serve_once("500 Internal Server Error", "{}").await;
        let err = HttpSource::new(url).fetch().await.unwrap_err();
        server.await.unwrap();

        assert!(matches!(err, GalleryError::SourceUnavailable { .. }));
        assert!(err.to_string().contains("HTTP 500"), "got: {}", err);
    }

    #[tokio::test]
    async fn test_http_source_invalid_json() {
        let (url, server) = serve_once("200 OK", "{bad").await;
        let err = HttpSource::new(url).fetch().await.unwrap_err();
        server.await.unwrap();

        assert!(matches!(err, GalleryError::SourceUnavailable { .. }));
        assert!(err.to_string().contains("invalid JSON"), "got: {}", err);
    }

    #[tokio::test]
    async fn test_http_source_sends_no_cache() {
        let (url, server) = serve_once("200 OK", r#"["Miya"]"#).await;
        let payload = HttpSource::new(url).fetch().await.unwrap();
        let request = server.await.unwrap();

        assert_eq!(payload, json!(["Miya"]));
        assert!(request.contains("cache-control: no-cache"), "request: {}", request);
        assert!(request.contains("pragma: no-cache"), "request: {}", request);
    }

    #[test]
    fn test_http_sources_keep_order() {
        let urls = vec!["http://a/".to_string(), "http://b/".to_string()];
        let sources = http_sources(&urls);
        let labels: Vec<_> = sources.iter().map(|s| s.label().to_string()).collect();
        assert_eq!(labels, urls);
    }
}
