//! Wire types shared by the auth session and pages.
//!
//! DESIGN
//! ======
//! `UserInfo` keeps the backend's JSON object as-is rather than a fixed
//! struct: the admin check depends on `extends` being present *and* null,
//! which a typed `Option` field cannot distinguish from an absent key.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Success code carried in the backend's response envelope.
pub const SUCCESS_CODE: i64 = 200_200;

/// Cached information about the signed-in passkey holder.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserInfo(Map<String, Value>);

impl UserInfo {
    #[must_use]
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// Build from a JSON value. Non-object values yield `None`.
    #[must_use]
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(map) => Some(Self(map)),
            _ => None,
        }
    }

    /// Administrators are the holders whose `extends` is explicitly null.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        matches!(self.0.get("extends"), Some(Value::Null))
    }

    /// Raw `extends` field.
    #[must_use]
    pub fn extends(&self) -> Option<&Value> {
        self.0.get("extends")
    }

    #[must_use]
    pub fn operator(&self) -> Option<&str> {
        self.0.get("operator").and_then(Value::as_str)
    }

    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.0.get("description").and_then(Value::as_str)
    }

    #[must_use]
    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }
}

/// `{ code, msg, data }` envelope wrapped around every backend response.
#[derive(Clone, Debug, Deserialize)]
pub struct ApiEnvelope<T> {
    pub code: i64,
    #[serde(default)]
    pub msg: String,
    pub data: Option<T>,
}

impl<T> ApiEnvelope<T> {
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.code == SUCCESS_CODE
    }
}

/// Body of `POST /api/auth/login`.
#[derive(Clone, Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub passkey: &'a str,
}

/// `data` of a successful login: the token plus whatever describes the holder.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct LoginData {
    pub token: String,
    #[serde(flatten)]
    pub user: Map<String, Value>,
}

/// Minimal HTTP response the auth transport hands back.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    #[must_use]
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self { status, body: body.into() }
    }

    /// Mirrors `Response.ok`: any 2xx status.
    #[must_use]
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}
