//! Request tagging middleware.

use axum::{body::Body, http::Request, middleware::Next, response::Response};
use nanoid::nanoid;
use std::time::Instant;
use tracing::info;

use crate::colors::colored_id;

/// Short per-request identifier used to correlate log lines
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestId(pub String);

impl RequestId {
    pub fn generate() -> Self {
        Self(nanoid!(5))
    }

    pub fn colored(&self) -> String {
        colored_id(&self.0)
    }
}

/// When the request entered the server
#[derive(Debug, Clone, Copy)]
pub struct RequestStart(pub Instant);

impl RequestStart {
    pub fn elapsed_ms(&self) -> u128 {
        self.0.elapsed().as_millis()
    }
}

/// Tags each request with a [`RequestId`] and [`RequestStart`] and logs it.
///
/// Handlers pull both back out of the request extensions to log the
/// matching response line.
pub async fn log_requests(mut req: Request<Body>, next: Next) -> Response {
    let id = RequestId::generate();

    info!("{} → {} {}", id.colored(), req.method(), req.uri().path());

    req.extensions_mut().insert(id);
    req.extensions_mut().insert(RequestStart(Instant::now()));
    next.run(req).await
}
