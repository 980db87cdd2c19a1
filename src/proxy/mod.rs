pub mod rxnav;
pub mod umls;

use crate::config::AppConfig;
use crate::error::{ProxyError, Result, Service};
use crate::upstream::{redact_api_key, UpstreamClient, UpstreamRequest, UpstreamResponse};
use axum::body::Bytes;
use axum::http::{header, HeaderValue, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use tracing::{debug, error};

/// Proxy-relative mount point of the RxNav route
pub const RXNAV_ROUTE: &str = "/api/rxnav";
/// Proxy-relative mount point of the UMLS route, also the rewrite target
pub const UMLS_ROUTE: &str = "/api/umls";

const DEFAULT_CONTENT_TYPE: &str = "application/json";

/// Per-process settings injected into both handlers at startup
#[derive(Debug, Clone)]
pub struct ProxySettings {
    pub rxnav_base_url: String,
    pub umls_base_url: String,
    pub umls_api_key: Option<String>,
}

impl ProxySettings {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            rxnav_base_url: config.upstream.rxnav_base_url.clone(),
            umls_base_url: config.upstream.umls_base_url.clone(),
            umls_api_key: config.umls.api_key().map(str::to_string),
        }
    }
}

/// Raw path remainder after a route prefix, still percent-encoded
pub(crate) fn path_remainder<'a>(uri: &'a Uri, route: &str) -> &'a str {
    uri.path()
        .strip_prefix(route)
        .map(|rest| rest.strip_prefix('/').unwrap_or(rest))
        .unwrap_or("")
}

/// Send one request upstream, mapping a missing status to a transport error
pub(crate) async fn forward(
    client: &dyn UpstreamClient,
    service: Service,
    request: UpstreamRequest,
) -> Result<UpstreamResponse> {
    debug!(
        "Forwarding {} {} to {}",
        request.method,
        redact_api_key(&request.url),
        service
    );

    client.send(request).await.map_err(|cause| {
        error!("{} proxy error: {:#}", service, cause);
        ProxyError::transport(service, cause)
    })
}

/// Mirror upstream status and content type around the given body
pub(crate) fn proxied_response(
    status: StatusCode,
    content_type: Option<&str>,
    body: Bytes,
) -> Response {
    let content_type = content_type
        .and_then(|value| HeaderValue::from_str(value).ok())
        .unwrap_or_else(|| HeaderValue::from_static(DEFAULT_CONTENT_TYPE));

    (status, [(header::CONTENT_TYPE, content_type)], body).into_response()
}
