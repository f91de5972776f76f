//! Error types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EnvironmentError {
    #[error("unknown environment '{0}' (expected dev, development, prod or production)")]
    Unknown(String),
}

/// Failures while forwarding a request to the API backend
#[derive(Debug, Error)]
pub enum ProxyError {
    #[error("API request failed: {0}")]
    Upstream(#[from] reqwest::Error),
    #[error("failed to build proxied response: {0}")]
    Response(#[from] axum::http::Error),
}

impl ProxyError {
    pub fn status(&self) -> StatusCode {
        match self {
            ProxyError::Upstream(_) => StatusCode::BAD_GATEWAY,
            ProxyError::Response(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        self.status().into_response()
    }
}
