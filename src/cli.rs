//! Command-line interface configuration.

use argh::FromArgs;
use std::{net::SocketAddr, path::PathBuf};

use crate::environment::Environment;

/// Development server for the lyrics frontend
#[derive(Debug, FromArgs)]
pub struct Cli {
    /// path to the built frontend (e.g. 'build/')
    #[argh(option, long = "static-dir")]
    pub static_dir: PathBuf,

    /// environment override: dev, development, prod or production (default: $ENVIRONMENT)
    #[argh(option, from_str_fn(parse_environment))]
    pub env: Option<Environment>,

    /// server bind address (default: '127.0.0.1:5173')
    #[argh(option, default = "default_bind()")]
    pub bind: SocketAddr,

    /// log at debug level
    #[argh(switch, short = 'v')]
    pub verbose: bool,
}

impl Cli {
    /// Explicit `--env`, otherwise whatever the process environment says.
    pub fn environment(&self) -> Environment {
        self.env.unwrap_or_else(Environment::detect)
    }
}

fn default_bind() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 5173))
}

fn parse_environment(value: &str) -> Result<Environment, String> {
    value.parse().map_err(|e: crate::error::EnvironmentError| e.to_string())
}
