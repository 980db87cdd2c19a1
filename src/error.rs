use std::fmt;
use thiserror::Error;

/// Upstream terminology service a request was bound for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Service {
    RxNav,
    Umls,
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Service::RxNav => write!(f, "RxNav"),
            Service::Umls => write!(f, "UMLS"),
        }
    }
}

#[derive(Error, Debug)]
pub enum ProxyError {
    #[error("UMLS_API_KEY not configured on server")]
    MissingApiKey,

    #[error("{service} upstream request failed: {cause:#}")]
    Transport {
        service: Service,
        cause: anyhow::Error,
    },

    #[error("Invalid target path: {0}")]
    InvalidTarget(String),
}

pub type Result<T> = std::result::Result<T, ProxyError>;

impl ProxyError {
    pub fn transport(service: Service, cause: anyhow::Error) -> Self {
        ProxyError::Transport { service, cause }
    }

    /// Convert error to HTTP status code
    pub fn status_code(&self) -> axum::http::StatusCode {
        use axum::http::StatusCode;
        match self {
            ProxyError::MissingApiKey => StatusCode::INTERNAL_SERVER_ERROR,
            ProxyError::Transport { .. } => StatusCode::BAD_GATEWAY,
            ProxyError::InvalidTarget(_) => StatusCode::BAD_REQUEST,
        }
    }

    /// Text sent to the caller. Transport causes stay in the server log.
    pub fn public_message(&self) -> String {
        match self {
            ProxyError::Transport { service, .. } => {
                format!("Failed to proxy request to {} API", service)
            }
            other => other.to_string(),
        }
    }
}

impl axum::response::IntoResponse for ProxyError {
    fn into_response(self) -> axum::response::Response {
        (self.status_code(), self.public_message()).into_response()
    }
}
