pub mod client;
pub mod target;

use async_trait::async_trait;
use axum::body::Bytes;
use axum::http::{Method, StatusCode};
use url::Url;

pub use client::HttpUpstream;
pub use target::{build_target_url, redact_api_key, API_KEY_PARAM};

/// Outbound request to an upstream terminology API
#[derive(Debug, Clone)]
pub struct UpstreamRequest {
    pub method: Method,
    pub url: Url,
}

/// Upstream reply with the body fully read, bytes as received
#[derive(Debug, Clone)]
pub struct UpstreamResponse {
    pub status: StatusCode,
    pub content_type: Option<String>,
    pub body: Bytes,
}

/// Capability to reach upstream services over HTTP.
/// Any status, including 4xx/5xx, is a successful exchange; `Err` means no
/// status could be obtained (DNS, refused connection, timeout, broken body).
#[async_trait]
pub trait UpstreamClient: Send + Sync {
    async fn send(&self, request: UpstreamRequest) -> anyhow::Result<UpstreamResponse>;
}
