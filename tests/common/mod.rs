use axum::Router;
use nlm_proxy::{
    api::handlers::ApiState,
    config::AppConfig,
    proxy::ProxySettings,
    upstream::HttpUpstream,
};
use std::{sync::Arc, time::Duration};

/// Config pointing both upstreams at local mock servers.
pub fn create_mock_config(rxnav_base: &str, umls_base: &str, api_key: Option<&str>) -> AppConfig {
    let mut config = AppConfig::default();
    config.upstream.rxnav_base_url = rxnav_base.to_string();
    config.upstream.umls_base_url = umls_base.to_string();
    config.upstream.request_timeout_secs = Some(5);
    config.umls.api_key = api_key.map(str::to_string);
    config
}

/// Base URL of a local port with nothing listening on it.
pub async fn unreachable_base(path: &str) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}{}", addr, path)
}

/// Build a test Router from the given config (no HTTP server, uses tower::oneshot).
pub fn build_test_app(config: &AppConfig) -> Router {
    let upstream = HttpUpstream::new(
        config
            .upstream
            .request_timeout_secs
            .map(Duration::from_secs),
    )
    .unwrap();

    let state = ApiState {
        upstream: Arc::new(upstream),
        settings: Arc::new(ProxySettings::from_config(config)),
    };

    nlm_proxy::api::build_router(state)
}

/// Helper to extract the body of a response as text.
pub async fn response_text(response: axum::http::Response<axum::body::Body>) -> String {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(body.to_vec()).unwrap()
}
