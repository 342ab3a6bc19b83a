//! Login page outcome handling.
//!
//! The hosting frontend performs the `POST /api/login` request and hands
//! the decoded outcome here. A success populates the session store; a
//! failure leaves it untouched and raises a warning toast.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use crate::net::api::{ApiError, LoginResponse};
use crate::state::session::SessionStore;
use crate::util::notify::{Notifier, handle_error, show_message};

pub const LOGGED_IN_MESSAGE: &str = "logged in";
pub const LOGGED_OUT_MESSAGE: &str = "logged out";
pub const REGISTERED_MESSAGE: &str = "registered";

/// Apply a login outcome. Returns `true` when the session was populated.
pub fn on_login(
    store: &mut SessionStore,
    outcome: Result<LoginResponse, ApiError>,
    notifier: &mut impl Notifier,
) -> bool {
    match outcome {
        Ok(resp) => {
            store.login(resp.into());
            notifier.open(show_message(LOGGED_IN_MESSAGE));
            true
        }
        Err(err) => {
            log::warn!("login failed: {err}");
            notifier.open(handle_error(&err));
            false
        }
    }
}

/// Apply a registration outcome. Registration never touches the session.
pub fn on_register<T>(outcome: Result<T, ApiError>, notifier: &mut impl Notifier) -> bool {
    match outcome {
        Ok(_) => {
            notifier.open(show_message(REGISTERED_MESSAGE));
            true
        }
        Err(err) => {
            notifier.open(handle_error(&err));
            false
        }
    }
}

/// Clear the session.
pub fn on_logout(store: &mut SessionStore, notifier: &mut impl Notifier) {
    store.logout();
    notifier.open(show_message(LOGGED_OUT_MESSAGE));
}
