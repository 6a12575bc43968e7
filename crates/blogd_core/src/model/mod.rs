//! Domain model for blog records.
//!
//! # Responsibility
//! - Define the canonical data structures used by core business logic.
//! - Keep one storage-facing shape plus the two mutation input shapes.
//!
//! # Invariants
//! - Every persisted record is identified by a storage-assigned `BlogId`.
//! - Deletion is a hard delete; there are no tombstones or versions.

pub mod blog;
