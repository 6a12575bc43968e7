//! HTTP error mapping.
//!
//! # Responsibility
//! - Convert repository errors into response status and body.
//!
//! # Invariants
//! - `NotFound` from a mutating operation maps to 404 with the fixed
//!   `Blog not found` detail. The single-record fetch never goes through
//!   this path; its soft 404 with an empty body is produced by the handler.
//! - Every other repository error maps to a generic 500 and is logged;
//!   transport details never leak to clients.

use crate::dto::{Detail, BLOG_NOT_FOUND};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use blogd_core::RepoError;
use log::error;
use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug)]
pub enum ApiError {
    BlogNotFound,
    Internal(RepoError),
}

impl Display for ApiError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlogNotFound => write!(f, "{BLOG_NOT_FOUND}"),
            Self::Internal(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ApiError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::BlogNotFound => None,
            Self::Internal(err) => Some(err),
        }
    }
}

impl From<RepoError> for ApiError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::NotFound(_) => Self::BlogNotFound,
            other => Self::Internal(other),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::BlogNotFound => (
                StatusCode::NOT_FOUND,
                Json(Detail {
                    detail: BLOG_NOT_FOUND,
                }),
            )
                .into_response(),
            Self::Internal(err) => {
                error!("event=request_failed module=http status=error error={err}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(Detail {
                        detail: "Internal server error",
                    }),
                )
                    .into_response()
            }
        }
    }
}
