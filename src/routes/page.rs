//! Classic form flow: register, log in, and render one of three views.

use axum::extract::rejection::FormRejection;
use axum::extract::{Form, State};
use axum::http::StatusCode;
use axum::response::Html;
use serde::Deserialize;

use super::gateway_error_to_status;
use crate::render::render_page;
use crate::services::credentials::{self, LoginView, Resolution};
use crate::state::AppState;

/// Raw form fields. `login` and `register` are presence flags; their values
/// are the submit button labels and are never read.
#[derive(Debug, Default, Deserialize)]
pub struct Submission {
    pub login: Option<String>,
    pub register: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Action<'a> {
    Login { username: &'a str, password: &'a str },
    Register { username: &'a str, password: &'a str },
}

impl Submission {
    /// Classify the submission. Login wins when both flags are present;
    /// a missing username or password means no action at all.
    #[must_use]
    pub fn action(&self) -> Option<Action<'_>> {
        let (Some(username), Some(password)) = (self.username.as_deref(), self.password.as_deref()) else {
            return None;
        };
        if self.login.is_some() {
            Some(Action::Login { username, password })
        } else if self.register.is_some() {
            Some(Action::Register { username, password })
        } else {
            None
        }
    }
}

/// `GET /` — anonymous view.
pub async fn index(State(state): State<AppState>) -> Html<String> {
    Html(render_page(&LoginView::Anonymous, &state.flag))
}

/// `POST /` — handle a register or login submission, then render.
///
/// Unparseable bodies are treated as an anonymous visit.
pub async fn submit(
    State(state): State<AppState>,
    form: Result<Form<Submission>, FormRejection>,
) -> Result<Html<String>, StatusCode> {
    let submission = match form {
        Ok(Form(submission)) => submission,
        Err(rejection) => {
            tracing::debug!(error = %rejection, "form rejected, rendering anonymous view");
            Submission::default()
        }
    };

    let resolution = match submission.action() {
        Some(Action::Login { username, password }) => credentials::resolve(&state.pool, username, password)
            .await
            .map_err(gateway_error_to_status)?,
        Some(Action::Register { username, password }) => {
            credentials::register(&state.pool, username, password)
                .await
                .map_err(gateway_error_to_status)?;
            Resolution::Anonymous
        }
        None => Resolution::Anonymous,
    };

    Ok(Html(render_page(&LoginView::from(resolution), &state.flag)))
}

#[cfg(test)]
#[path = "page_test.rs"]
mod tests;
