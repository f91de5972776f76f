//! Shared helpers for integration tests.

#![allow(dead_code)]

use axum::Router;
use lyrics_web::{environment::Environment, server, state::AppState};
use std::{net::SocketAddr, path::PathBuf, sync::Arc};

/// Binds `app` to an ephemeral port and serves it in the background.
pub async fn spawn(app: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    // Give the server a moment to start
    tokio::time::sleep(tokio::time::Duration::from_millis(100)).await;
    addr
}

/// Fresh static directory with an `index.html` and one asset.
pub async fn static_dir() -> PathBuf {
    let dir = std::env::temp_dir().join(format!("lyrics-web-{}", nanoid::nanoid!(8)));
    tokio::fs::create_dir_all(dir.join("assets")).await.unwrap();
    tokio::fs::write(dir.join("index.html"), "<html>lyrics</html>")
        .await
        .unwrap();
    tokio::fs::write(dir.join("assets/app.js"), "console.log('lyrics');")
        .await
        .unwrap();
    dir
}

/// Dev server forwarding API calls to `upstream`.
pub async fn spawn_server(environment: Environment, upstream: String) -> SocketAddr {
    let state = Arc::new(AppState {
        environment,
        upstream,
        static_dir: static_dir().await,
        client: reqwest::Client::new(),
    });
    spawn(server::app(state)).await
}
