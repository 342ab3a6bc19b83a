//! Login API wire types, shared with the server.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures and non-success responses both surface as `ApiError`
//! so the notification helper can word them differently. Decoding never
//! panics; an unreadable success body is treated like a server error with
//! no message.

use serde::{Deserialize, Serialize};

use crate::state::session::User;

pub const LOGIN_PATH: &str = "/api/login";
pub const REGISTER_PATH: &str = "/api/register";

/// JSON body for `POST /api/login` and `POST /api/register`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Successful login body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub username: String,
    pub privileged: bool,
}

impl From<LoginResponse> for User {
    fn from(resp: LoginResponse) -> Self {
        User::new(resp.username, resp.privileged)
    }
}

/// `{"message": ...}` body used for every non-login response.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl MessageBody {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: Some(message.into()) }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// No response arrived.
    #[error("network error: {0}")]
    Network(String),
    /// The server answered with a non-success status.
    #[error("server responded {status}")]
    Response { status: u16, message: Option<String> },
}

impl ApiError {
    /// Build a response error from a raw body, keeping its `message` if any.
    #[must_use]
    pub fn from_body(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<MessageBody>(body)
            .ok()
            .and_then(|b| b.message);
        Self::Response { status, message }
    }
}

fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Decode a `/api/login` response.
///
/// # Errors
///
/// Returns `ApiError::Response` for non-2xx statuses or unreadable bodies.
pub fn decode_login(status: u16, body: &str) -> Result<LoginResponse, ApiError> {
    if !is_success(status) {
        return Err(ApiError::from_body(status, body));
    }
    serde_json::from_str(body).map_err(|_| ApiError::Response { status, message: None })
}

/// Decode a `/api/register` (or any message-only) response.
///
/// # Errors
///
/// Returns `ApiError::Response` for non-2xx statuses.
pub fn decode_message(status: u16, body: &str) -> Result<MessageBody, ApiError> {
    if !is_success(status) {
        return Err(ApiError::from_body(status, body));
    }
    Ok(serde_json::from_str(body).unwrap_or_default())
}

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;
