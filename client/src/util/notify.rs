//! Toast notifications composed from API failures and informational events.
//!
//! This is the only place user-visible error text is worded. The widget
//! that actually shows the toast sits behind `Notifier`.

#[cfg(test)]
#[path = "notify_test.rs"]
mod notify_test;

use crate::net::api::ApiError;

pub const NETWORK_ERROR_MESSAGE: &str = "Network Error";
pub const FALLBACK_ERROR_MESSAGE: &str = "internal server error";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NotificationKind {
    #[default]
    Info,
    Warning,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
    /// Whether the toast waits behind earlier ones. Always `false`: a new
    /// toast replaces whatever is showing.
    pub queue: bool,
}

/// Sink for notifications, implemented by the hosting UI.
pub trait Notifier {
    fn open(&mut self, notification: Notification);
}

impl Notifier for Vec<Notification> {
    fn open(&mut self, notification: Notification) {
        self.push(notification);
    }
}

/// Warning toast for a failed request.
#[must_use]
pub fn handle_error(err: &ApiError) -> Notification {
    let message = match err {
        ApiError::Network(_) => NETWORK_ERROR_MESSAGE.to_owned(),
        ApiError::Response { message, .. } => message
            .as_deref()
            .filter(|m| !m.is_empty())
            .unwrap_or(FALLBACK_ERROR_MESSAGE)
            .to_owned(),
    };
    Notification { message, kind: NotificationKind::Warning, queue: false }
}

/// Informational toast.
#[must_use]
pub fn show_message(message: impl Into<String>) -> Notification {
    Notification { message: message.into(), kind: NotificationKind::Info, queue: false }
}
