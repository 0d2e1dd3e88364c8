//! REST API helpers for the catalog and auth endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning [`ApiError::Unavailable`] since these
//! endpoints are only called from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs instead of panics so catalog/login failures
//! degrade the page without crashing hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{Product, TokenResponse};

/// Failure of a storefront API call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("incorrect username or password")]
    InvalidCredentials,
    #[error("server responded with status {0}")]
    Status(u16),
    #[error("unexpected response: {0}")]
    Decode(String),
    #[error("not available outside the browser")]
    Unavailable,
}

impl ApiError {
    /// Map a non-success HTTP status to an error.
    #[must_use]
    pub fn from_status(status: u16) -> Self {
        match status {
            401 => Self::InvalidCredentials,
            other => Self::Status(other),
        }
    }
}

/// API prefix, overridable at build time with `STOREFRONT_API_BASE`.
#[must_use]
pub fn api_base() -> &'static str {
    match option_env!("STOREFRONT_API_BASE") {
        Some(base) => base,
        None => "/api/v1",
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn endpoint(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

#[cfg(any(test, feature = "hydrate"))]
fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn products_endpoint() -> String {
    endpoint(api_base(), "products/")
}

#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn token_endpoint() -> String {
    endpoint(api_base(), "auth/token")
}

/// Fetch the product catalog from `GET /products/`.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport failure, non-2xx status, or an
/// undecodable body.
pub async fn fetch_products() -> Result<Vec<Product>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&products_endpoint())
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        if !is_success(resp.status()) {
            return Err(ApiError::from_status(resp.status()));
        }
        resp.json::<Vec<Product>>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Exchange credentials for a token via `POST /auth/token`.
///
/// The body is an `application/x-www-form-urlencoded` password-grant form.
///
/// # Errors
///
/// Returns [`ApiError::InvalidCredentials`] on 401, and other [`ApiError`]
/// variants for transport, status, or decode failures.
pub async fn login(username: &str, password: &str) -> Result<TokenResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let form = web_sys::UrlSearchParams::new().map_err(|e| ApiError::Transport(format!("{e:?}")))?;
        form.append("username", username);
        form.append("password", password);

        let resp = gloo_net::http::Request::post(&token_endpoint())
            .body(form)
            .map_err(|e| ApiError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        if !is_success(resp.status()) {
            return Err(ApiError::from_status(resp.status()));
        }
        resp.json::<TokenResponse>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (username, password);
        Err(ApiError::Unavailable)
    }
}
