//! HTTP request handlers.

use axum::{
    body::{Body, Bytes},
    extract::{Extension, State},
    http::{HeaderMap, HeaderValue, Method, StatusCode, Uri, header},
    response::Response,
};
use owo_colors::OwoColorize;
use std::{
    path::{Component, Path, PathBuf},
    sync::Arc,
    time::Instant,
};
use tokio::fs;
use tracing::{debug, error, info};

use crate::error::ProxyError;
use crate::middleware::{RequestId, RequestStart};
use crate::server::API_PREFIX;
use crate::state::AppState;

const INDEX_FILE: &str = "index.html";

/// Request headers that are never forwarded upstream
fn is_skipped_request_header(name: &str) -> bool {
    matches!(name, "host" | "accept-encoding" | "connection" | "keep-alive")
}

/// Response headers that are never copied back to the client
fn is_skipped_response_header(name: &str) -> bool {
    matches!(
        name,
        "transfer-encoding" | "content-encoding" | "connection" | "keep-alive"
    )
}

/// Relative path for a request URI, or `None` if it tries to leave the
/// static directory.
fn sanitize(uri_path: &str) -> Option<&Path> {
    let rel = Path::new(uri_path.trim_start_matches('/'));
    rel.components()
        .all(|c| matches!(c, Component::Normal(_)))
        .then_some(rel)
}

/// Maps a request path onto a file below `static_dir`.
///
/// Directories resolve to their `index.html`. Missing paths without an
/// extension are client-side routes and get the site's `index.html`.
async fn resolve_static_path(static_dir: &Path, uri_path: &str) -> Option<PathBuf> {
    let rel = sanitize(uri_path)?;
    let mut candidate = static_dir.join(rel);

    if is_dir(&candidate).await {
        candidate.push(INDEX_FILE);
    }
    if fs::metadata(&candidate).await.is_ok_and(|m| m.is_file()) {
        return Some(candidate);
    }
    if rel.extension().is_none() {
        return Some(static_dir.join(INDEX_FILE));
    }
    None
}

async fn is_dir(path: &Path) -> bool {
    fs::metadata(path).await.is_ok_and(|m| m.is_dir())
}

/// Part of a raw request path below [`API_PREFIX`], still percent-encoded.
fn api_subpath(uri_path: &str) -> &str {
    let rest = uri_path.strip_prefix(API_PREFIX).unwrap_or(uri_path);
    rest.strip_prefix('/').unwrap_or(rest)
}

/// Joins the upstream base, the proxied path and the original query.
fn upstream_url(upstream: &str, path: &str, query: Option<&str>) -> String {
    let url = format!(
        "{}/{}",
        upstream.trim_end_matches('/'),
        path.trim_start_matches('/')
    );
    match query {
        Some(query) => format!("{}?{}", url, query),
        None => url,
    }
}

fn log_static(id: &RequestId, start: RequestStart, status: StatusCode) {
    info!(
        "{} ← {} {} ({}ms)",
        id.colored(),
        "STATIC".green(),
        status,
        start.elapsed_ms()
    );
}

/// Serves the built frontend from the static directory
pub async fn serve_static(
    State(state): State<Arc<AppState>>,
    Extension(id): Extension<RequestId>,
    Extension(start): Extension<RequestStart>,
    uri: Uri,
) -> Result<Response, StatusCode> {
    let Some(file_path) = resolve_static_path(&state.static_dir, uri.path()).await else {
        log_static(&id, start, StatusCode::NOT_FOUND);
        return Err(StatusCode::NOT_FOUND);
    };

    let content = match fs::read(&file_path).await {
        Ok(content) => content,
        Err(e) => {
            debug!("{} cannot read {:?}: {}", id.colored(), file_path, e);
            log_static(&id, start, StatusCode::NOT_FOUND);
            return Err(StatusCode::NOT_FOUND);
        }
    };

    let mime_type = mime_guess::from_path(&file_path).first_or_octet_stream();
    let mut response = Response::new(Body::from(content));
    if let Ok(value) = HeaderValue::from_str(mime_type.as_ref()) {
        response.headers_mut().insert(header::CONTENT_TYPE, value);
    }

    log_static(&id, start, response.status());
    Ok(response)
}

/// Proxies `/api`, `/api/` and `/api/{*path}` to the environment's API root
///
/// The path is taken from the raw request URI so percent-encoded characters
/// reach the backend unchanged.
pub async fn proxy_api(
    State(state): State<Arc<AppState>>,
    Extension(id): Extension<RequestId>,
    Extension(start): Extension<RequestStart>,
    method: Method,
    headers: HeaderMap,
    uri: Uri,
    body: Bytes,
) -> Result<Response, ProxyError> {
    let path = api_subpath(uri.path());
    forward(&state, path, &id, start, method, &headers, &uri, body).await
}

#[allow(clippy::too_many_arguments)]
async fn forward(
    state: &AppState,
    path: &str,
    id: &RequestId,
    start: RequestStart,
    method: Method,
    headers: &HeaderMap,
    uri: &Uri,
    body: Bytes,
) -> Result<Response, ProxyError> {
    let full_url = upstream_url(&state.upstream, path, uri.query());

    let mut forwarded = HeaderMap::new();
    for (key, value) in headers.iter() {
        if !is_skipped_request_header(key.as_str()) {
            forwarded.append(key.clone(), value.clone());
        }
    }

    info!("{} → {} {}", id.colored(), "API".yellow(), full_url);
    let proxy_start = Instant::now();

    let response = state
        .client
        .request(method.clone(), &full_url)
        .headers(forwarded)
        .body(body)
        .send()
        .await
        .inspect_err(|e| error!("{} ← {} {}", id.colored(), "API".yellow(), e))?;

    info!(
        "{} ← {} {} ({}ms)",
        id.colored(),
        "API".yellow(),
        response.status(),
        proxy_start.elapsed().as_millis()
    );

    let mut builder = Response::builder().status(response.status());
    for (key, value) in response.headers().iter() {
        if !is_skipped_response_header(key.as_str()) {
            builder = builder.header(key, value);
        }
    }

    info!(
        "{} ← {} {} ({}ms)",
        id.colored(),
        method,
        response.status(),
        start.elapsed_ms()
    );

    Ok(builder.body(Body::from_stream(response.bytes_stream()))?)
}
