//! Route table for the single-page shell.
//!
//! Paths are matched after stripping the deployment base, a query string,
//! and a trailing slash. `/admin` and `/admin/` both land on the admin
//! parent view; its `config` and `challenges` children are nested under it.

#[cfg(test)]
#[path = "router_test.rs"]
mod router_test;

use crate::state::session::Session;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    Index,
    Register,
    Login,
    ResetRequest,
    Reset,
    Challenges,
    Team { id: String },
    Ranking,
    Admin,
    AdminConfig,
    AdminChallenges,
}

/// Outcome of checking a route against the current session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    Allow,
    /// Anonymous visitor on a gated route.
    Login,
    /// Authenticated, but not the privileged identity.
    Forbidden,
}

impl Route {
    /// Match an application path (already relative to the base).
    #[must_use]
    pub fn resolve(path: &str) -> Option<Self> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        if !path.starts_with('/') {
            return None;
        }
        let trimmed = path.trim_end_matches('/');
        let segments: Vec<&str> = trimmed.split('/').skip(1).collect();

        let route = match segments.as_slice() {
            [] => Self::Index,
            ["register"] => Self::Register,
            ["login"] => Self::Login,
            ["reset-request"] => Self::ResetRequest,
            ["reset"] => Self::Reset,
            ["challenges"] => Self::Challenges,
            ["team", id] if !id.is_empty() => Self::Team { id: (*id).to_owned() },
            ["ranking"] => Self::Ranking,
            ["admin"] => Self::Admin,
            ["admin", "config"] => Self::AdminConfig,
            ["admin", "challenges"] => Self::AdminChallenges,
            _ => return None,
        };
        Some(route)
    }

    /// Route name, for routes that carry one.
    #[must_use]
    pub fn name(&self) -> Option<&'static str> {
        match self {
            Self::Index => Some("Index"),
            Self::Register => Some("Register"),
            Self::Login => Some("Login"),
            Self::ResetRequest => Some("ResetRequest"),
            Self::Reset => Some("Reset"),
            Self::Challenges => Some("Challenges"),
            Self::Team { .. } => Some("Team"),
            Self::Ranking => Some("Ranking"),
            Self::Admin | Self::AdminConfig | Self::AdminChallenges => None,
        }
    }

    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Self::Index => "/".to_owned(),
            Self::Register => "/register".to_owned(),
            Self::Login => "/login".to_owned(),
            Self::ResetRequest => "/reset-request".to_owned(),
            Self::Reset => "/reset".to_owned(),
            Self::Challenges => "/challenges".to_owned(),
            Self::Team { id } => format!("/team/{id}"),
            Self::Ranking => "/ranking".to_owned(),
            Self::Admin => "/admin".to_owned(),
            Self::AdminConfig => "/admin/config".to_owned(),
            Self::AdminChallenges => "/admin/challenges".to_owned(),
        }
    }

    #[must_use]
    pub fn is_admin_section(&self) -> bool {
        matches!(self, Self::Admin | Self::AdminConfig | Self::AdminChallenges)
    }

    /// Admin routes render only for the privileged identity.
    #[must_use]
    pub fn guard(&self, session: &Session) -> Access {
        if !self.is_admin_section() || session.is_admin() {
            Access::Allow
        } else if session.is_authenticated() {
            Access::Forbidden
        } else {
            Access::Login
        }
    }
}

/// Route table mounted under a deployment base path.
#[derive(Clone, Debug)]
pub struct Router {
    base: String,
}

impl Default for Router {
    fn default() -> Self {
        Self::new("/")
    }
}

impl Router {
    #[must_use]
    pub fn new(base: &str) -> Self {
        Self { base: base.trim_end_matches('/').to_owned() }
    }

    /// Match a full location. Paths outside the base do not match.
    #[must_use]
    pub fn resolve(&self, location: &str) -> Option<Route> {
        let rest = location.strip_prefix(self.base.as_str())?;
        if rest.is_empty() {
            return Some(Route::Index);
        }
        if !rest.starts_with('/') {
            return None;
        }
        Route::resolve(rest)
    }

    #[must_use]
    pub fn href(&self, route: &Route) -> String {
        format!("{}{}", self.base, route.path())
    }
}
