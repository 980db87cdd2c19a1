use super::{forward, path_remainder, proxied_response, UMLS_ROUTE};
use crate::api::handlers::ApiState;
use crate::error::{ProxyError, Service};
use crate::upstream::{build_target_url, UpstreamRequest, API_KEY_PARAM};
use axum::{
    body::Bytes,
    extract::State,
    http::{Method, Uri},
    response::Response,
};
use tracing::error;

/// Forward `GET|POST /api/umls/<remainder>` to the UMLS REST API.
///
/// The server-held key replaces any client-supplied `apiKey`, and absolute
/// upstream links in the reply are rewritten to stay under `/api/umls`.
/// A POST body is not forwarded.
pub async fn umls_proxy(
    State(state): State<ApiState>,
    method: Method,
    uri: Uri,
) -> Result<Response, ProxyError> {
    let settings = &state.settings;

    let Some(api_key) = settings.umls_api_key.as_deref() else {
        error!("UMLS_API_KEY environment variable not configured");
        return Err(ProxyError::MissingApiKey);
    };

    let url = build_target_url(
        &settings.umls_base_url,
        path_remainder(&uri, UMLS_ROUTE),
        uri.query(),
        &[(API_KEY_PARAM, api_key)],
    )?;

    let method = if method == Method::POST {
        Method::POST
    } else {
        Method::GET
    };

    let upstream = forward(
        state.upstream.as_ref(),
        Service::Umls,
        UpstreamRequest { method, url },
    )
    .await?;

    let body = rewrite_links(
        &String::from_utf8_lossy(&upstream.body),
        &settings.umls_base_url,
    );

    Ok(proxied_response(
        upstream.status,
        upstream.content_type.as_deref(),
        Bytes::from(body),
    ))
}

/// Replace every literal occurrence of the upstream base with the proxy route
pub fn rewrite_links(body: &str, upstream_base: &str) -> String {
    body.replace(upstream_base, UMLS_ROUTE)
}
