//! Reverse proxy for `/api/*` to the data backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! The frontend calls relative `/api/...` URLs. In production and in
//! development those must reach the data backend unchanged: same method, path,
//! query, body, and end-to-end headers (the bearer token in particular).

use axum::body::{Body, to_bytes};
use axum::extract::{Request, State};
use axum::http::{HeaderMap, StatusCode, Uri, header};
use axum::response::{IntoResponse, Response};
use http_body_util::LengthLimitError;

use crate::config::HostConfig;

/// Headers that describe a single hop and must not be forwarded.
static HOP_BY_HOP: [header::HeaderName; 9] = [
    header::CONNECTION,
    header::HOST,
    header::PROXY_AUTHENTICATE,
    header::PROXY_AUTHORIZATION,
    header::TE,
    header::TRAILER,
    header::TRANSFER_ENCODING,
    header::UPGRADE,
    header::CONTENT_LENGTH,
];

/// Errors produced while proxying a request.
#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    /// The incoming body exceeded the configured limit.
    #[error("request body too large: {0}")]
    TooLarge(String),

    /// The incoming body could not be read (aborted upload, broken stream).
    #[error("request body unreadable: {0}")]
    Body(String),

    /// The backend could not be reached or its response could not be read.
    #[error("backend request failed: {0}")]
    Upstream(#[from] reqwest::Error),
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::TooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            Self::Body(_) => StatusCode::BAD_REQUEST,
            Self::Upstream(_) => StatusCode::BAD_GATEWAY,
        };
        (status, self.to_string()).into_response()
    }
}

/// Shared proxy state: one HTTP client for all requests.
#[derive(Clone)]
pub struct ProxyState {
    client: reqwest::Client,
    backend_url: String,
    body_limit: usize,
}

impl ProxyState {
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(config: &HostConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().build()?;
        Ok(Self { client, backend_url: config.backend_url.clone(), body_limit: config.api_body_limit })
    }
}

/// Backend URL for an incoming request URI. Path and query are kept verbatim.
pub(crate) fn upstream_url(backend_url: &str, uri: &Uri) -> String {
    let path_and_query = uri.path_and_query().map_or("/", |pq| pq.as_str());
    format!("{backend_url}{path_and_query}")
}

/// Copy of `headers` without hop-by-hop entries.
pub(crate) fn forwardable_headers(headers: &HeaderMap) -> HeaderMap {
    let mut out = HeaderMap::with_capacity(headers.len());
    for (name, value) in headers {
        if !HOP_BY_HOP.contains(name) {
            out.append(name.clone(), value.clone());
        }
    }
    out
}

/// Classify a failure to buffer the incoming body.
pub(crate) fn body_error(err: axum::Error) -> ProxyError {
    let inner = err.into_inner();
    if inner.is::<LengthLimitError>() {
        ProxyError::TooLarge(inner.to_string())
    } else {
        ProxyError::Body(inner.to_string())
    }
}

/// `ANY /api/{*rest}`: forward to the backend and relay its response.
pub async fn forward(State(state): State<ProxyState>, req: Request) -> Result<Response, ProxyError> {
    let (parts, body) = req.into_parts();
    let url = upstream_url(&state.backend_url, &parts.uri);
    let body = to_bytes(body, state.body_limit)
        .await
        .map_err(body_error)?;

    let upstream = state
        .client
        .request(parts.method.clone(), &url)
        .headers(forwardable_headers(&parts.headers))
        .body(body)
        .send()
        .await
        .inspect_err(|e| tracing::warn!(method = %parts.method, %url, error = %e, "backend unreachable"))?;

    let status = upstream.status();
    let headers = forwardable_headers(upstream.headers());
    let bytes = upstream.bytes().await?;
    tracing::debug!(method = %parts.method, %url, status = status.as_u16(), "proxied");

    let mut response = Response::new(Body::from(bytes));
    *response.status_mut() = status;
    *response.headers_mut() = headers;
    Ok(response)
}

#[cfg(test)]
#[path = "proxy_test.rs"]
mod tests;
