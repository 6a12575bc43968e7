//! blogd server entry point.
//!
//! # Responsibility
//! - Read environment configuration with local-run defaults.
//! - Initialize logging, open storage, and serve the API router.
//!
//! # Configuration
//! - `BLOGD_ADDR`       listen address (default `127.0.0.1:8000`)
//! - `BLOGD_DB`         SQLite database path (default `blogd.db`)
//! - `BLOGD_LOG_LEVEL`  log level (default by build mode)
//! - `BLOGD_LOG_DIR`    absolute log directory; stderr when unset

use blogd_core::{db, default_log_level, init_logging};
use blogd_server::{create_router, AppState};
use log::info;
use std::error::Error;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let addr = env_or("BLOGD_ADDR", "127.0.0.1:8000");
    let db_path = env_or("BLOGD_DB", "blogd.db");
    let log_level = env_or("BLOGD_LOG_LEVEL", default_log_level());
    let log_dir = std::env::var("BLOGD_LOG_DIR").ok();

    init_logging(&log_level, log_dir.as_deref())?;

    let conn = db::open_db(&db_path)?;
    let state = AppState::new(conn)?;
    let router = create_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("event=server_start module=http status=ok addr={addr} db={db_path}");

    axum::serve(listener, router).await?;

    Ok(())
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
