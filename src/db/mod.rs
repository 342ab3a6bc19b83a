//! Account store initialization, migrations, and admin seeding.
//!
//! SYSTEM CONTEXT
//! ==============
//! Startup uses this module to create the shared SQLx pool and enforce the
//! `users` schema before accepting form submissions. In-memory stores are
//! pinned to a single connection that is never recycled, otherwise every
//! pooled connection would see its own empty database.

use sqlx::SqlitePool;
use sqlx::migrate::Migrator;
use sqlx::sqlite::SqlitePoolOptions;

use crate::services::credentials::PRIVILEGED_USERNAME;

static MIGRATOR: Migrator = sqlx::migrate!("src/db/migrations");

fn is_in_memory(database_url: &str) -> bool {
    database_url.contains(":memory:") || database_url.contains("mode=memory")
}

/// Initialize the SQLite connection pool and run migrations.
///
/// # Errors
///
/// Returns an error if the connection or migrations fail.
pub async fn init_pool(database_url: &str, max_connections: u32) -> Result<SqlitePool, sqlx::Error> {
    let options = if is_in_memory(database_url) {
        SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        SqlitePoolOptions::new().max_connections(max_connections.max(1))
    };

    let pool = options.connect(database_url).await?;
    MIGRATOR.run(&pool).await?;

    Ok(pool)
}

/// Insert the privileged account unless one already exists.
/// Returns `true` when a row was inserted.
///
/// # Errors
///
/// Returns an error if the lookup or insert fails.
pub async fn seed_admin(pool: &SqlitePool, password: &str) -> Result<bool, sqlx::Error> {
    let existing: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE username = ?")
        .bind(PRIVILEGED_USERNAME)
        .fetch_one(pool)
        .await?;
    if existing > 0 {
        return Ok(false);
    }

    sqlx::query("INSERT INTO users (username, password) VALUES (?, ?)")
        .bind(PRIVILEGED_USERNAME)
        .bind(password)
        .execute(pool)
        .await?;
    Ok(true)
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
