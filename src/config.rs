//! Runtime configuration parsed from environment variables.
//!
//! Parsing goes through a key lookup closure so the rules can be exercised
//! without mutating the process environment. `main` feeds it `std::env::var`
//! after `dotenvy` has loaded any `.env` file.

pub const DEFAULT_DATABASE_URL: &str = "sqlite::memory:";
pub const DEFAULT_DB_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_FLAG: &str = "FLAG{dummy}";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub database_url: String,
    pub db_max_connections: u32,
    pub port: u16,
    /// Secret revealed by the privileged view.
    pub flag: String,
    /// Password for the seeded `admin` account. `None` skips seeding.
    pub admin_password: Option<String>,
}

impl Config {
    /// Build config from the process environment.
    ///
    /// Optional:
    /// - `DATABASE_URL`: default `sqlite::memory:`
    /// - `DB_MAX_CONNECTIONS`: default 5
    /// - `PORT`: default 3000
    /// - `FLAG`: default `FLAG{dummy}`
    /// - `ADMIN_PASSWORD`: seeds the `admin` account when non-empty
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` when a numeric variable does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` when a numeric variable does not parse.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let database_url = lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_owned());
        let db_max_connections =
            parse_or("DB_MAX_CONNECTIONS", lookup("DB_MAX_CONNECTIONS"), DEFAULT_DB_MAX_CONNECTIONS)?;
        let port = parse_or("PORT", lookup("PORT"), DEFAULT_PORT)?;
        let flag = lookup("FLAG").unwrap_or_else(|| DEFAULT_FLAG.to_owned());
        let admin_password = lookup("ADMIN_PASSWORD").filter(|p| !p.is_empty());

        Ok(Self { database_url, db_max_connections, port, flag, admin_password })
    }
}

fn parse_or<T: std::str::FromStr>(var: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse::<T>()
            .map_err(|_| ConfigError::Invalid { var, value }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
