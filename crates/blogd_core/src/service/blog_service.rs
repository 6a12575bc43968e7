//! Blog use-case service.
//!
//! # Responsibility
//! - Provide stable CRUD entry points for core callers.
//! - Delegate persistence to repository implementations.
//!
//! # Invariants
//! - Service APIs never bypass repository persistence contracts.
//! - Service layer remains storage-agnostic.

use crate::model::blog::{Blog, BlogDraft, BlogId, BlogPatch};
use crate::repo::blog_repo::{BlogRepository, RepoResult};

/// Use-case service wrapper for blog CRUD operations.
pub struct BlogService<R: BlogRepository> {
    repo: R,
}

impl<R: BlogRepository> BlogService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Persists a new blog and returns its storage-assigned ID.
    pub fn create_blog(&self, draft: &BlogDraft) -> RepoResult<BlogId> {
        self.repo.create_blog(draft)
    }

    /// Lists every persisted blog, unfiltered.
    pub fn list_blogs(&self) -> RepoResult<Vec<Blog>> {
        self.repo.list_blogs()
    }

    /// Gets one blog by ID; absence is `Ok(None)` rather than an error.
    pub fn get_blog(&self, id: BlogId) -> RepoResult<Option<Blog>> {
        self.repo.get_blog(id)
    }

    /// Overwrites every mutable field of an existing blog.
    ///
    /// An omitted field overwrites the stored value with null. Returns the
    /// repository-level not-found error unchanged.
    pub fn replace_blog(
        &self,
        id: BlogId,
        title: Option<&str>,
        body: Option<&str>,
    ) -> RepoResult<()> {
        self.repo.replace_blog(id, title, body)
    }

    /// Overwrites only the fields present in the patch.
    ///
    /// Omitted fields are left untouched; this is the contract distinction
    /// from [`BlogService::replace_blog`].
    pub fn merge_blog(&self, id: BlogId, patch: &BlogPatch) -> RepoResult<()> {
        self.repo.merge_blog(id, patch)
    }

    /// Hard-deletes a blog by ID.
    pub fn delete_blog(&self, id: BlogId) -> RepoResult<()> {
        self.repo.delete_blog(id)
    }
}
