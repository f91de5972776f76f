//! Development server for the lyrics frontend.
//!
//! Serves the built frontend and forwards `/api/*` to the API root of the
//! detected environment.

use anyhow::Context;
use std::sync::Arc;
use tracing::{Level, info};

use lyrics_web::{cli::Cli, colors::env_badge, server, state::AppState, urls::Urls};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args: Cli = argh::from_env();

    let level = if args.verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt().with_max_level(level).init();

    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            return Err(e).context("failed to load .env");
        }
    }

    let urls = Urls::new(args.environment());
    let static_dir = args
        .static_dir
        .canonicalize()
        .with_context(|| format!("failed to canonicalize {:?}", args.static_dir))?;

    let state = Arc::new(AppState::new(urls.environment(), static_dir.clone()));
    let app = server::app(state);

    info!("Environment: {} ({})", env_badge(urls.environment()), urls.environment());
    info!("Serving {} from: {:?}", urls.root(), static_dir);
    info!("Proxying {}/* to: {}/", server::API_PREFIX, urls.api_root());
    info!("Server running on: http://{}", args.bind);

    let listener = tokio::net::TcpListener::bind(args.bind)
        .await
        .with_context(|| format!("failed to bind {}", args.bind))?;
    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
