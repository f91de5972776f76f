//! Router assembly.

use axum::{
    Router, middleware,
    routing::{any, get},
};
use std::sync::Arc;

use crate::{
    cors,
    handlers::{proxy_api, serve_static},
    middleware::log_requests,
    state::AppState,
};

/// Prefix under which requests are forwarded to the API root.
pub const API_PREFIX: &str = "/api";

/// Full router: API proxy, static fallback, request logging and CORS.
pub fn app(state: Arc<AppState>) -> Router {
    let cors = cors::layer(state.environment);

    Router::new()
        .route(API_PREFIX, any(proxy_api))
        .route(&format!("{}/", API_PREFIX), any(proxy_api))
        .route(&format!("{}/{{*path}}", API_PREFIX), any(proxy_api))
        .fallback(get(serve_static))
        .layer(middleware::from_fn(log_requests))
        .layer(cors)
        .with_state(state)
}
