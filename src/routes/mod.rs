//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The classic challenge page answers on both `/` and `/index.php` (its
//! forms post to the latter). The JSON endpoints under `/api` serve the
//! single-page shell, which keeps the resolved identity client-side.

pub mod api;
pub mod page;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post};
use client::net::api::{LOGIN_PATH, REGISTER_PATH};
use tower_http::trace::TraceLayer;

use crate::services::credentials::GatewayError;
use crate::state::AppState;

/// Full application router.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(page::index).post(page::submit))
        .route("/index.php", get(page::index).post(page::submit))
        .route(LOGIN_PATH, post(api::login))
        .route(REGISTER_PATH, post(api::register))
        .route("/healthz", get(healthz))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Structural query failures fail the whole request.
pub(crate) fn gateway_error_to_status(err: GatewayError) -> StatusCode {
    match err {
        GatewayError::Query(e) => {
            tracing::error!(error = %e, "credential query failed");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
