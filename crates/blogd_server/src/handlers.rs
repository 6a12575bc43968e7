//! HTTP handlers for the blog REST API.
//!
//! # Responsibility
//! - Parse request input, delegate to `BlogService`, shape the response.
//!
//! # Invariants
//! - Handlers hold the storage guard only for the single persistence call.
//! - Fetch-by-id soft-fails: absent record means a bare 404 with an empty
//!   body, unlike the mutating operations which answer with a detail body.

use crate::dto::{
    BlogCreated, BlogView, CreateBlogRequest, Detail, ReplaceBlogRequest, BLOG_ADDED, BLOG_DELETED,
    BLOG_UPDATED,
};
use crate::error::ApiError;
use crate::state::AppState;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use blogd_core::{BlogId, BlogPatch, BlogService, SqliteBlogRepository};
use log::info;

/// Liveness probe; answers with the core crate's ping.
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, blogd_core::ping())
}

/// `POST /blog` — persists a new blog, answers 201 with the assigned id.
pub async fn create_blog(
    State(state): State<AppState>,
    Json(request): Json<CreateBlogRequest>,
) -> Result<(StatusCode, Json<BlogCreated>), ApiError> {
    let conn = state.db().await;
    let service = BlogService::new(SqliteBlogRepository::new(&conn));

    let id = service.create_blog(&request.into_draft())?;
    info!("event=blog_created module=http status=ok id={id}");

    Ok((
        StatusCode::CREATED,
        Json(BlogCreated {
            detail: BLOG_ADDED,
            id,
        }),
    ))
}

/// `GET /blog` — answers the full unfiltered collection.
pub async fn list_blogs(
    State(state): State<AppState>,
) -> Result<Json<Vec<BlogView>>, ApiError> {
    let conn = state.db().await;
    let service = BlogService::new(SqliteBlogRepository::new(&conn));

    let blogs = service.list_blogs()?;
    Ok(Json(blogs.into_iter().map(BlogView::from).collect()))
}

/// `GET /blog/{id}` — answers the record, or a bare 404 with an empty body.
pub async fn get_blog(
    State(state): State<AppState>,
    Path(id): Path<BlogId>,
) -> Result<Response, ApiError> {
    let conn = state.db().await;
    let service = BlogService::new(SqliteBlogRepository::new(&conn));

    match service.get_blog(id)? {
        Some(blog) => Ok((StatusCode::OK, Json(BlogView::from(blog))).into_response()),
        None => Ok(StatusCode::NOT_FOUND.into_response()),
    }
}

/// `PUT /blog/{id}` — overwrites every field with the supplied body.
pub async fn replace_blog(
    State(state): State<AppState>,
    Path(id): Path<BlogId>,
    Json(request): Json<ReplaceBlogRequest>,
) -> Result<(StatusCode, Json<Detail>), ApiError> {
    let conn = state.db().await;
    let service = BlogService::new(SqliteBlogRepository::new(&conn));

    service.replace_blog(id, request.title.as_deref(), request.body.as_deref())?;
    info!("event=blog_replaced module=http status=ok id={id}");

    Ok((
        StatusCode::ACCEPTED,
        Json(Detail {
            detail: BLOG_UPDATED,
        }),
    ))
}

/// `PATCH /blog/{id}` — overwrites only the fields present in the body.
pub async fn merge_blog(
    State(state): State<AppState>,
    Path(id): Path<BlogId>,
    Json(patch): Json<BlogPatch>,
) -> Result<(StatusCode, Json<Detail>), ApiError> {
    let conn = state.db().await;
    let service = BlogService::new(SqliteBlogRepository::new(&conn));

    service.merge_blog(id, &patch)?;
    info!("event=blog_merged module=http status=ok id={id}");

    Ok((
        StatusCode::ACCEPTED,
        Json(Detail {
            detail: BLOG_UPDATED,
        }),
    ))
}

/// `DELETE /blog/{id}` — removes the record, or 404s with a detail body.
pub async fn delete_blog(
    State(state): State<AppState>,
    Path(id): Path<BlogId>,
) -> Result<(StatusCode, Json<Detail>), ApiError> {
    let conn = state.db().await;
    let service = BlogService::new(SqliteBlogRepository::new(&conn));

    service.delete_blog(id)?;
    info!("event=blog_deleted module=http status=ok id={id}");

    Ok((
        StatusCode::OK,
        Json(Detail {
            detail: BLOG_DELETED,
        }),
    ))
}
