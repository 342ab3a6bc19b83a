//! Credential gateway: registration and login resolution.
//!
//! ARCHITECTURE
//! ============
//! Registration is a parameterized insert. Login is not: the submitted
//! username and password are pasted into the `WHERE` clause verbatim, so
//! quote characters in either field rewrite the predicate. That injection
//! point is the point of the exercise and must stay reachable; the
//! predicate builder is kept as its own function so tests can pin it down.
//!
//! The first row the store yields wins. With no uniqueness constraint on
//! `username`, duplicate registrations resolve to whichever row the scan
//! returns first (insertion order for SQLite).

use sqlx::{Row, SqlitePool};

/// The only identity that unlocks the privileged view.
pub const PRIVILEGED_USERNAME: &str = "admin";

#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("query failed: {0}")]
    Query(#[from] sqlx::Error),
}

/// Outcome of matching a login submission against stored accounts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Anonymous,
    Resolved(String),
}

impl Resolution {
    #[must_use]
    pub fn username(&self) -> Option<&str> {
        match self {
            Self::Anonymous => None,
            Self::Resolved(name) => Some(name),
        }
    }

    #[must_use]
    pub fn is_privileged(&self) -> bool {
        self.username() == Some(PRIVILEGED_USERNAME)
    }
}

/// Which of the three mutually exclusive page states to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginView {
    /// Reveals the protected secret.
    Privileged,
    /// Echoes the resolved username.
    Member(String),
    /// Register and login forms.
    Anonymous,
}

impl From<Resolution> for LoginView {
    fn from(resolution: Resolution) -> Self {
        match resolution {
            Resolution::Anonymous => Self::Anonymous,
            Resolution::Resolved(name) if name == PRIVILEGED_USERNAME => Self::Privileged,
            Resolution::Resolved(name) => Self::Member(name),
        }
    }
}

/// Build the login match predicate by raw interpolation. Nothing is escaped.
#[must_use]
pub fn login_predicate(username: &str, password: &str) -> String {
    format!("username='{username}' AND password='{password}'")
}

/// Full lookup statement issued for a login submission.
#[must_use]
pub fn lookup_query(username: &str, password: &str) -> String {
    format!("SELECT username FROM users WHERE {} LIMIT 1", login_predicate(username, password))
}

/// Persist a new account exactly as submitted.
///
/// # Errors
///
/// Returns `GatewayError::Query` if the insert fails.
pub async fn register(pool: &SqlitePool, username: &str, password: &str) -> Result<(), GatewayError> {
    sqlx::query("INSERT INTO users (username, password) VALUES (?, ?)")
        .bind(username)
        .bind(password)
        .execute(pool)
        .await?;
    tracing::info!(%username, "account registered");
    Ok(())
}

/// Resolve a login submission to the first matching account, if any.
///
/// # Errors
///
/// Returns `GatewayError::Query` when the interpolated statement is
/// malformed or its first row has no columns.
pub async fn resolve(pool: &SqlitePool, username: &str, password: &str) -> Result<Resolution, GatewayError> {
    let sql = lookup_query(username, password);
    let row = sqlx::query(&sql).fetch_optional(pool).await?;

    // SQLite coerces numeric values to text; a NULL column is no identity.
    let resolution = match row {
        Some(row) => match row.try_get_unchecked::<Option<String>, _>(0)? {
            Some(name) => Resolution::Resolved(name),
            None => Resolution::Anonymous,
        },
        None => Resolution::Anonymous,
    };
    tracing::debug!(
        submitted = %username,
        resolved = ?resolution.username(),
        privileged = resolution.is_privileged(),
        "login resolved"
    );
    Ok(resolution)
}

#[cfg(test)]
#[path = "credentials_test.rs"]
mod tests;
