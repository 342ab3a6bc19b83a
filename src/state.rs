//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! It holds the account store pool and the secret revealed to the
//! privileged identity. Nothing here is mutated after startup.

use std::sync::Arc;

use sqlx::SqlitePool;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; the pool is internally reference counted.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub flag: Arc<str>,
}

impl AppState {
    #[must_use]
    pub fn new(pool: SqlitePool, flag: &str) -> Self {
        Self { pool, flag: Arc::from(flag) }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================
