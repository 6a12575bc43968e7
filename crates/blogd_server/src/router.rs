//! Route table for the blog API.

use crate::handlers;
use crate::state::AppState;
use axum::routing::get;
use axum::Router;

/// Builds the API router over the shared state.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route(
            "/blog",
            get(handlers::list_blogs).post(handlers::create_blog),
        )
        .route(
            "/blog/{id}",
            get(handlers::get_blog)
                .put(handlers::replace_blog)
                .patch(handlers::merge_blog)
                .delete(handlers::delete_blog),
        )
        .with_state(state)
}
