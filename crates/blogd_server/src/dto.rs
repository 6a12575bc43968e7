//! Request and response JSON shapes for the blog API.
//!
//! # Responsibility
//! - Define the wire contract separately from the storage model.
//! - Keep the fixed detail strings in one place.
//!
//! # Invariants
//! - List/fetch responses expose only `title` and `body`, never `id`.

use blogd_core::{Blog, BlogDraft, BlogId};
use serde::{Deserialize, Serialize};

pub const BLOG_ADDED: &str = "Blog added";
pub const BLOG_UPDATED: &str = "Blog updated";
pub const BLOG_DELETED: &str = "Blog deleted";
pub const BLOG_NOT_FOUND: &str = "Blog not found";

/// Creation body: both fields required; absence rejects the request.
#[derive(Debug, Deserialize)]
pub struct CreateBlogRequest {
    pub title: String,
    pub body: String,
}

impl CreateBlogRequest {
    pub fn into_draft(self) -> BlogDraft {
        BlogDraft {
            title: self.title,
            body: self.body,
        }
    }
}

/// Full-update body: both fields optional on the wire, applied as an
/// unconditional overwrite. An omitted field nulls the stored value.
#[derive(Debug, Deserialize)]
pub struct ReplaceBlogRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub body: Option<String>,
}

/// Read-side projection of a blog record: fields only, no id.
#[derive(Debug, Serialize)]
pub struct BlogView {
    pub title: Option<String>,
    pub body: Option<String>,
}

impl From<Blog> for BlogView {
    fn from(blog: Blog) -> Self {
        Self {
            title: blog.title,
            body: blog.body,
        }
    }
}

/// Fixed-message acknowledgment for mutations.
#[derive(Debug, Serialize)]
pub struct Detail {
    pub detail: &'static str,
}

/// Creation acknowledgment: fixed message plus the assigned id.
#[derive(Debug, Serialize)]
pub struct BlogCreated {
    pub detail: &'static str,
    pub id: BlogId,
}
