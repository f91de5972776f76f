//! Cross-origin policy per environment.

use axum::http::HeaderValue;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

use crate::environment::Environment;

/// Only origin allowed to call the API in production.
pub const PRODUCTION_ORIGIN: &str = "https://lyrics-frontend.onrender.com";

/// Builds the CORS layer for `env`.
///
/// Development accepts any origin. Credentials are allowed in both modes,
/// so "any" is expressed by mirroring the request instead of a wildcard.
pub fn layer(env: Environment) -> CorsLayer {
    let origin = if env.is_development() {
        AllowOrigin::mirror_request()
    } else {
        AllowOrigin::list([HeaderValue::from_static(PRODUCTION_ORIGIN)])
    };

    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}
