#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use serde::{Deserialize, Serialize};

/// Identity held by an authenticated session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    /// Set by the server when the identity resolved to `admin`.
    #[serde(default)]
    pub privileged: bool,
}

impl User {
    #[must_use]
    pub fn new(username: impl Into<String>, privileged: bool) -> Self {
        Self { username: username.into(), privileged }
    }
}

/// Named session transitions, dispatched by views.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionAction {
    Login(User),
    Logout,
}

/// Current identity: anonymous until a `login` transition, anonymous again
/// only after `logout`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Session {
    #[default]
    Anonymous,
    Authenticated(User),
}

impl Session {
    /// Replace the current identity. A previous identity is overwritten,
    /// not rejected.
    #[must_use]
    pub fn login(self, user: User) -> Self {
        Self::Authenticated(user)
    }

    /// Clear the current identity. No-op when already anonymous.
    #[must_use]
    pub fn logout(self) -> Self {
        Self::Anonymous
    }

    #[must_use]
    pub fn apply(self, action: SessionAction) -> Self {
        match action {
            SessionAction::Login(user) => self.login(user),
            SessionAction::Logout => self.logout(),
        }
    }

    #[must_use]
    pub fn user(&self) -> Option<&User> {
        match self {
            Self::Anonymous => None,
            Self::Authenticated(user) => Some(user),
        }
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }

    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.user().is_some_and(|u| u.privileged)
    }
}

/// Owned session context handed to every view that needs the identity.
///
/// The inner `Session` is private: `login`, `logout`, and `dispatch` are the
/// only writers.
#[derive(Clone, Debug, Default)]
pub struct SessionStore {
    session: Session,
}

impl SessionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn login(&mut self, user: User) {
        self.dispatch(SessionAction::Login(user));
    }

    pub fn logout(&mut self) {
        self.dispatch(SessionAction::Logout);
    }

    pub fn dispatch(&mut self, action: SessionAction) {
        match &action {
            SessionAction::Login(user) => log::debug!("session login: {}", user.username),
            SessionAction::Logout => log::debug!("session logout"),
        }
        self.session = std::mem::take(&mut self.session).apply(action);
    }
}
