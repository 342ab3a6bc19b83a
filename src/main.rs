mod config;
mod db;
mod render;
mod routes;
mod services;
mod state;

use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = match config::Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            return ExitCode::FAILURE;
        }
    };

    let pool = match db::init_pool(&config.database_url, config.db_max_connections).await {
        Ok(p) => p,
        Err(e) => {
            tracing::error!(error = %e, "database init failed");
            return ExitCode::FAILURE;
        }
    };

    // Seed before serving so the privileged account is the first row.
    if let Some(password) = &config.admin_password {
        match db::seed_admin(&pool, password).await {
            Ok(true) => tracing::info!("admin account seeded"),
            Ok(false) => tracing::info!("admin account already present"),
            Err(e) => {
                tracing::error!(error = %e, "admin seeding failed");
                return ExitCode::FAILURE;
            }
        }
    }

    let state = state::AppState::new(pool, &config.flag);
    let app = routes::app(state);

    let port = config.port;
    let listener = match tokio::net::TcpListener::bind(format!("0.0.0.0:{port}")).await {
        Ok(l) => l,
        Err(e) => {
            tracing::error!(error = %e, %port, "failed to bind");
            return ExitCode::FAILURE;
        }
    };

    tracing::info!(%port, "justlogin listening");
    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!(error = %e, "server failed");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
