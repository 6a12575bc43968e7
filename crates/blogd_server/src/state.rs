//! Process-wide HTTP state.
//!
//! # Responsibility
//! - Hold the storage handle opened once at boot.
//! - Hand out scoped access to it per request.
//!
//! # Invariants
//! - The handle is validated against the blog schema before the state is
//!   constructed; handlers may assume the schema is in place.

use blogd_core::{RepoError, SqliteBlogRepository};
use rusqlite::Connection;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Shared state injected into every handler.
///
/// SQLite connections are not `Sync`, so the single boot-time connection is
/// serialized behind an async mutex. Each request locks it for the duration
/// of one persistence call; the guard drops on every exit path.
#[derive(Clone)]
pub struct AppState {
    db: Arc<Mutex<Connection>>,
}

impl AppState {
    /// Wraps a connection after verifying it carries the blog schema.
    pub fn new(conn: Connection) -> Result<Self, RepoError> {
        SqliteBlogRepository::try_new(&conn)?;
        Ok(Self {
            db: Arc::new(Mutex::new(conn)),
        })
    }

    /// Acquires the storage handle for one request-scoped persistence call.
    pub async fn db(&self) -> tokio::sync::MutexGuard<'_, Connection> {
        self.db.lock().await
    }
}
