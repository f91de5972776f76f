//! Site root and API base URL.

use crate::environment::Environment;

pub const ROOT: &str = "/";
pub const DEV_API_ROOT: &str = "http://localhost:8000/api";
pub const PROD_API_ROOT: &str = "https://lyrics-backend-3u4c.onrender.com";

/// Application root route.
pub fn root() -> &'static str {
    ROOT
}

/// API base URL for the given environment.
///
/// Exactly two outcomes: the local backend in development, the deployed
/// backend otherwise.
pub fn api_root(env: Environment) -> &'static str {
    if env.is_development() {
        DEV_API_ROOT
    } else {
        PROD_API_ROOT
    }
}

/// Zero-argument accessors bound to one environment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Urls {
    env: Environment,
}

impl Urls {
    pub fn new(env: Environment) -> Self {
        Self { env }
    }

    pub fn environment(&self) -> Environment {
        self.env
    }

    pub fn root(&self) -> &'static str {
        root()
    }

    pub fn api_root(&self) -> &'static str {
        api_root(self.env)
    }
}
