//! Lyrics frontend URLs and the development server that consumes them.

pub mod cli;
pub mod colors;
pub mod cors;
pub mod environment;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod server;
pub mod state;
pub mod urls;
