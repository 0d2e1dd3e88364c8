//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. The
//! host owns no data; it only needs an HTTP client for API forwarding and the
//! upstream base URL.

use std::sync::Arc;

use crate::config::ServerConfig;

#[derive(Clone)]
pub struct AppState {
    /// Shared connection pool for forwarded API calls.
    pub http: reqwest::Client,
    /// Upstream API base URL without a trailing slash.
    pub api_upstream: Option<Arc<str>>,
}

impl AppState {
    #[must_use]
    pub fn new(config: &ServerConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_upstream: config.api_upstream.as_deref().map(Arc::from),
        }
    }
}
