//! JSON login/register endpoints for the single-page shell.
//!
//! Resolution goes through the same interpolated lookup as the classic
//! page. The response reports whether the identity is the privileged one so
//! the shell can gate its admin section.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use client::net::api::{Credentials, LoginResponse, MessageBody};

use super::gateway_error_to_status;
use crate::services::credentials::{self, PRIVILEGED_USERNAME, Resolution};
use crate::state::AppState;

pub const INVALID_REQUEST_MESSAGE: &str = "invalid request";
pub const UNAUTHORIZED_MESSAGE: &str = "unauthorized";
pub const REGISTERED_MESSAGE: &str = "registered";

fn message(status: StatusCode, text: &str) -> Response {
    (status, Json(MessageBody::new(text))).into_response()
}

/// `POST /api/login` — resolve credentials to an identity.
pub async fn login(State(state): State<AppState>, body: Result<Json<Credentials>, JsonRejection>) -> Response {
    let Ok(Json(creds)) = body else {
        return message(StatusCode::BAD_REQUEST, INVALID_REQUEST_MESSAGE);
    };

    match credentials::resolve(&state.pool, &creds.username, &creds.password).await {
        Ok(Resolution::Resolved(username)) => {
            let privileged = username == PRIVILEGED_USERNAME;
            Json(LoginResponse { username, privileged }).into_response()
        }
        Ok(Resolution::Anonymous) => message(StatusCode::UNAUTHORIZED, UNAUTHORIZED_MESSAGE),
        Err(e) => gateway_error_to_status(e).into_response(),
    }
}

/// `POST /api/register` — persist a new account as submitted.
pub async fn register(State(state): State<AppState>, body: Result<Json<Credentials>, JsonRejection>) -> Response {
    let Ok(Json(creds)) = body else {
        return message(StatusCode::BAD_REQUEST, INVALID_REQUEST_MESSAGE);
    };

    match credentials::register(&state.pool, &creds.username, &creds.password).await {
        Ok(()) => message(StatusCode::OK, REGISTERED_MESSAGE),
        Err(e) => gateway_error_to_status(e).into_response(),
    }
}

#[cfg(test)]
#[path = "api_test.rs"]
mod tests;
