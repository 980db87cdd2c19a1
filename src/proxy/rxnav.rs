use super::{forward, path_remainder, proxied_response, RXNAV_ROUTE};
use crate::api::handlers::ApiState;
use crate::error::{ProxyError, Service};
use crate::upstream::{build_target_url, UpstreamRequest};
use axum::{
    extract::State,
    http::{Method, Uri},
    response::Response,
};

/// Forward `GET /api/rxnav/<remainder>` to the public RxNav REST API.
/// The upstream body is returned untouched.
pub async fn rxnav_proxy(State(state): State<ApiState>, uri: Uri) -> Result<Response, ProxyError> {
    let url = build_target_url(
        &state.settings.rxnav_base_url,
        path_remainder(&uri, RXNAV_ROUTE),
        uri.query(),
        &[],
    )?;

    let upstream = forward(
        state.upstream.as_ref(),
        Service::RxNav,
        UpstreamRequest {
            method: Method::GET,
            url,
        },
    )
    .await?;

    Ok(proxied_response(
        upstream.status,
        upstream.content_type.as_deref(),
        upstream.body,
    ))
}
