//! Host configuration loaded from the environment.
//!
//! `.env` is read by `main` before this runs, so either source works.

use std::path::PathBuf;

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

const DEFAULT_PORT: u16 = 3000;

/// Keep the `.env` load error worth reporting. A missing file is normal.
pub fn dotenv_problem(loaded: dotenvy::Result<PathBuf>) -> Option<dotenvy::Error> {
    match loaded {
        Err(e) if !e.not_found() => Some(e),
        _ => None,
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT value {0:?}")]
    InvalidPort(String),
    #[error("API_UPSTREAM must be an http(s) URL, got {0:?}")]
    InvalidUpstream(String),
}

/// Settings for the SSR host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// TCP port to listen on (`PORT`, default 3000).
    pub port: u16,
    /// Base URL of the catalog/auth API that `/api/v1/*` is forwarded to
    /// (`API_UPSTREAM`). Forwarding answers 503 when unset.
    pub api_upstream: Option<String>,
}

impl ServerConfig {
    /// Load from `PORT` and `API_UPSTREAM`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a variable is set but malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT").map(|raw| raw.trim().to_owned()) {
            None => DEFAULT_PORT,
            Some(raw) if raw.is_empty() => DEFAULT_PORT,
            Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidPort(raw))?,
        };

        let api_upstream = match lookup("API_UPSTREAM").map(|raw| raw.trim().to_owned()) {
            None => None,
            Some(raw) if raw.is_empty() => None,
            Some(raw) if raw.starts_with("http://") || raw.starts_with("https://") => {
                Some(raw.trim_end_matches('/').to_owned())
            }
            Some(raw) => return Err(ConfigError::InvalidUpstream(raw)),
        };

        Ok(Self { port, api_upstream })
    }
}
