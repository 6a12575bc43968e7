//! HTTP layer for the blogd API.
//!
//! # Responsibility
//! - Expose the blog CRUD operations from `blogd_core` as a JSON REST API.
//! - Keep request parsing, response shaping and status mapping out of core.
//!
//! # Architecture
//! axum handlers -> `BlogService` -> `BlogRepository` -> SQLite. The HTTP
//! layer owns the process-wide connection handle and injects it into each
//! handler through [`AppState`].

pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use router::create_router;
pub use state::AppState;
