use crate::api::handlers::ApiState;
use crate::proxy::{rxnav, umls};
use axum::{routing::get, Router};

pub fn health_routes() -> Router<ApiState> {
    Router::new()
        .route("/health", get(super::handlers::health_check))
        .route("/info", get(super::handlers::server_info))
}

pub fn proxy_routes() -> Router<ApiState> {
    // `{*rest}` never matches an empty remainder, so the bare prefixes are
    // registered separately, with and without the trailing slash
    Router::new()
        .route("/api/rxnav", get(rxnav::rxnav_proxy))
        .route("/api/rxnav/", get(rxnav::rxnav_proxy))
        .route("/api/rxnav/{*rest}", get(rxnav::rxnav_proxy))
        .route("/api/umls", get(umls::umls_proxy).post(umls::umls_proxy))
        .route(
            "/api/umls/",
            get(umls::umls_proxy).post(umls::umls_proxy),
        )
        .route(
            "/api/umls/{*rest}",
            get(umls::umls_proxy).post(umls::umls_proxy),
        )
}
