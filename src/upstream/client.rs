use super::{UpstreamClient, UpstreamRequest, UpstreamResponse};
use anyhow::Context;
use async_trait::async_trait;
use reqwest::{header, Client};
use std::time::Duration;

/// reqwest-backed upstream client shared by both proxy routes
#[derive(Clone)]
pub struct HttpUpstream {
    http_client: Client,
}

impl HttpUpstream {
    pub fn new(timeout: Option<Duration>) -> anyhow::Result<Self> {
        let mut builder = Client::builder().user_agent(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        let http_client = builder.build().context("Failed to create HTTP client")?;
        Ok(Self { http_client })
    }
}

#[async_trait]
impl UpstreamClient for HttpUpstream {
    async fn send(&self, request: UpstreamRequest) -> anyhow::Result<UpstreamResponse> {
        let response = self
            .http_client
            .request(request.method, request.url)
            .header(header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(reqwest::Error::without_url)
            .context("HTTP request failed")?;

        let status = response.status();
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);

        let body = response
            .bytes()
            .await
            .map_err(reqwest::Error::without_url)
            .context("Failed to read upstream response body")?;

        Ok(UpstreamResponse {
            status,
            content_type,
            body,
        })
    }
}
