//! Shared application state.

use std::path::PathBuf;

use crate::{environment::Environment, urls};

/// State shared by all handlers
#[derive(Debug, Clone)]
pub struct AppState {
    pub environment: Environment,
    /// Base URL API requests are forwarded to, without trailing slash
    pub upstream: String,
    /// Directory holding the built frontend
    pub static_dir: PathBuf,
    pub client: reqwest::Client,
}

impl AppState {
    /// State whose upstream is the API root of `environment`.
    pub fn new(environment: Environment, static_dir: PathBuf) -> Self {
        Self {
            environment,
            upstream: urls::api_root(environment).to_string(),
            static_dir,
            client: reqwest::Client::new(),
        }
    }
}
