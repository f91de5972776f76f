//! Development/production switch.
//!
//! The URL provider never looks this up on its own. The binary detects it
//! once at startup and hands it down.

use std::{fmt, str::FromStr};

use crate::error::EnvironmentError;

/// Variable consulted by [`Environment::detect`].
pub const ENV_VAR: &str = "ENVIRONMENT";

/// Execution context of the running process
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    /// Reads [`ENV_VAR`] from the process environment.
    pub fn detect() -> Self {
        Self::from_value(std::env::var(ENV_VAR).ok().as_deref())
    }

    /// Lenient mapping of a raw variable value.
    ///
    /// An unset variable means development. `dev` and `development` mean
    /// development. Anything else, staging and empty strings included, is
    /// treated as production.
    pub fn from_value(value: Option<&str>) -> Self {
        match value {
            None => Environment::Development,
            Some(raw) if is_development_name(raw) => Environment::Development,
            Some(_) => Environment::Production,
        }
    }

    pub fn is_development(self) -> bool {
        matches!(self, Environment::Development)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Production => "production",
        }
    }
}

fn is_development_name(raw: &str) -> bool {
    let name = raw.trim();
    name.eq_ignore_ascii_case("dev") || name.eq_ignore_ascii_case("development")
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Strict parse used for explicit names such as the `--env` flag.
impl FromStr for Environment {
    type Err = EnvironmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if is_development_name(s) {
            return Ok(Environment::Development);
        }
        let name = s.trim();
        if name.eq_ignore_ascii_case("prod") || name.eq_ignore_ascii_case("production") {
            Ok(Environment::Production)
        } else {
            Err(EnvironmentError::Unknown(s.to_string()))
        }
    }
}
