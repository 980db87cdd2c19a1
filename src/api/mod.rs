pub mod handlers;
pub mod routes;

use crate::config::AppConfig;
use crate::proxy::{ProxySettings, RXNAV_ROUTE, UMLS_ROUTE};
use crate::upstream::HttpUpstream;
use anyhow::Result;
use axum::Router;
use handlers::ApiState;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};

pub async fn start_server(config: AppConfig) -> Result<()> {
    let addr = format!("{}:{}", config.http.host, config.http.port);

    let settings = ProxySettings::from_config(&config);
    if settings.umls_api_key.is_none() {
        warn!("UMLS_API_KEY is not set; {} requests will fail with 500", UMLS_ROUTE);
    }

    let upstream = HttpUpstream::new(
        config
            .upstream
            .request_timeout_secs
            .map(Duration::from_secs),
    )?;

    // Create app state
    let state = ApiState {
        upstream: Arc::new(upstream),
        settings: Arc::new(settings),
    };

    // Build the application
    let app = build_router(state);

    // Create TCP listener
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("HTTP server listening on {}", addr);
    info!("Health check: http://{}/health", addr);
    info!("Server info: http://{}/info", addr);
    info!("");
    info!("Proxy routes available at:");
    info!(
        "  → http://{}{}/* (upstream: {})",
        addr, RXNAV_ROUTE, config.upstream.rxnav_base_url
    );
    info!(
        "  → http://{}{}/* (upstream: {})",
        addr, UMLS_ROUTE, config.upstream.umls_base_url
    );

    // Start the server
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Assemble all routes with CORS and tracing layers
pub fn build_router(state: ApiState) -> Router {
    Router::new()
        .merge(routes::health_routes())
        .merge(routes::proxy_routes())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C signal, shutting down...");
        },
        _ = terminate => {
            info!("Received SIGTERM signal, shutting down...");
        },
    }
}
