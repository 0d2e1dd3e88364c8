//! `/api/v1/*` forwarding to the external catalog/auth API.
//!
//! The browser only ever talks to this host, so the storefront can use
//! relative API paths without CORS. Method, query string, body and the
//! `content-type`/`authorization` headers pass through; the upstream status,
//! `content-type` and body come back unchanged. The path is forwarded exactly
//! as received, percent-encoding included.

#[cfg(test)]
#[path = "proxy_test.rs"]
mod proxy_test;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderMap, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Json, Response};

use crate::state::AppState;

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("no API upstream configured")]
    NotConfigured,
    #[error("upstream request failed: {0}")]
    Upstream(#[from] reqwest::Error),
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::NotConfigured => StatusCode::SERVICE_UNAVAILABLE,
            Self::Upstream(_) => StatusCode::BAD_GATEWAY,
        };
        (status, Json(serde_json::json!({ "detail": self.to_string() }))).into_response()
    }
}

/// Build the upstream URL for an incoming `/api/v1/...` request URI.
///
/// Uses the raw path so encoded `%2F`/`%3F` stay encoded.
pub(crate) fn upstream_url(base: &str, uri: &Uri) -> String {
    let mut url = format!("{}{}", base.trim_end_matches('/'), uri.path());
    if let Some(query) = uri.query().filter(|q| !q.is_empty()) {
        url.push('?');
        url.push_str(query);
    }
    url
}

/// `ANY /api/v1/{*path}`: forward to the configured upstream.
pub async fn forward(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ProxyError> {
    let base = state.api_upstream.as_deref().ok_or(ProxyError::NotConfigured)?;
    let url = upstream_url(base, &uri);

    let mut request = state.http.request(method.clone(), &url).body(body);
    for name in [CONTENT_TYPE, AUTHORIZATION] {
        if let Some(value) = headers.get(&name) {
            request = request.header(name, value);
        }
    }

    let upstream = request.send().await.inspect_err(|e| {
        tracing::warn!(%method, %url, error = %e, "api forward failed");
    })?;
    let status = upstream.status();
    let content_type = upstream.headers().get(CONTENT_TYPE).cloned();
    let bytes = upstream.bytes().await?;
    tracing::debug!(%method, %url, %status, "api forwarded");

    let mut response = bytes.into_response();
    *response.status_mut() = status;
    match content_type {
        Some(value) => {
            response.headers_mut().insert(CONTENT_TYPE, value);
        }
        None => {
            response.headers_mut().remove(CONTENT_TYPE);
        }
    }
    Ok(response)
}
