//! REST helpers for the auth endpoints of the data backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): the transport reports `ApiError::Unavailable` since
//! these endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! The transport returns typed errors; the auth session decides which of
//! them collapse into a plain `false` for its callers.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::collections::BTreeMap;

use async_trait::async_trait;

use super::types::{ApiEnvelope, HttpResponse, LoginData};

/// Header name/value pairs attached to a request.
pub type Headers = BTreeMap<String, String>;

pub const VERIFY_ENDPOINT: &str = "/api/auth/verify";
pub const PASSKEY_MODIFIABLE_ENDPOINT: &str = "/api/auth/verify-passkey-modifiable";
pub const LOGIN_ENDPOINT: &str = "/api/auth/login";

/// Errors produced by auth API calls.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),

    /// The response body could not be decoded.
    #[error("response decode failed: {0}")]
    Decode(String),

    /// The backend answered with a non-success envelope.
    #[error("rejected ({code}): {msg}")]
    Rejected { code: i64, msg: String },

    /// The caller supplied unusable input; nothing was sent.
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),

    /// HTTP is not available in this environment (server rendering).
    #[error("not available on server")]
    Unavailable,
}

/// Paths of the auth endpoints.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthEndpoints {
    pub verify: String,
    pub passkey_modifiable: String,
    pub login: String,
}

impl Default for AuthEndpoints {
    fn default() -> Self {
        Self {
            verify: VERIFY_ENDPOINT.to_owned(),
            passkey_modifiable: PASSKEY_MODIFIABLE_ENDPOINT.to_owned(),
            login: LOGIN_ENDPOINT.to_owned(),
        }
    }
}

/// HTTP seam between the auth session and the network.
#[async_trait(?Send)]
pub trait AuthTransport: Send + Sync {
    /// Issue `GET path` with `headers`.
    async fn get(&self, path: &str, headers: &Headers) -> Result<HttpResponse, ApiError>;

    /// Issue `POST path` with a JSON `body` and `headers`.
    async fn post_json(&self, path: &str, body: &serde_json::Value, headers: &Headers)
    -> Result<HttpResponse, ApiError>;
}

/// Browser `fetch` transport.
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpTransport;

/// Headers every auth request carries, merged with the caller's.
fn with_json_content_type(headers: &Headers) -> Headers {
    let mut merged = Headers::new();
    merged.insert("Content-Type".to_owned(), "application/json".to_owned());
    merged.extend(headers.iter().map(|(k, v)| (k.clone(), v.clone())));
    merged
}

#[async_trait(?Send)]
impl AuthTransport for HttpTransport {
    async fn get(&self, path: &str, headers: &Headers) -> Result<HttpResponse, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let mut req = gloo_net::http::Request::get(path);
            for (name, value) in &with_json_content_type(headers) {
                req = req.header(name, value);
            }
            let resp = req.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
            let body = resp.text().await.unwrap_or_default();
            Ok(HttpResponse::new(resp.status(), body))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (path, with_json_content_type(headers));
            Err(ApiError::Unavailable)
        }
    }

    async fn post_json(
        &self,
        path: &str,
        body: &serde_json::Value,
        headers: &Headers,
    ) -> Result<HttpResponse, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let mut req = gloo_net::http::Request::post(path);
            for (name, value) in &with_json_content_type(headers) {
                req = req.header(name, value);
            }
            let resp = req
                .json(body)
                .map_err(|e| ApiError::Network(e.to_string()))?
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            let text = resp.text().await.unwrap_or_default();
            Ok(HttpResponse::new(resp.status(), text))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (path, body, with_json_content_type(headers));
            Err(ApiError::Unavailable)
        }
    }
}

/// Decode a login response. The backend reports failures with a 400 and a
/// non-success envelope, so the envelope decides, not the status.
pub(crate) fn parse_login_response(resp: &HttpResponse) -> Result<LoginData, ApiError> {
    let envelope: ApiEnvelope<LoginData> =
        serde_json::from_str(&resp.body).map_err(|e| ApiError::Decode(e.to_string()))?;
    if !envelope.is_success() {
        return Err(ApiError::Rejected { code: envelope.code, msg: envelope.msg });
    }
    envelope
        .data
        .ok_or_else(|| ApiError::Decode("login response has no data".to_owned()))
}
