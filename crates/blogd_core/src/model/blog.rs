//! Blog domain model.
//!
//! # Responsibility
//! - Define the canonical persisted record shape.
//! - Define the two mutation input shapes with their distinct merge contracts.
//!
//! # Invariants
//! - `id` is assigned by the storage layer on creation and never changes.
//! - `BlogDraft` carries both fields; creation never persists partial rows.
//! - `BlogPatch` distinguishes "field absent" from "field explicitly null".

use serde::{Deserialize, Deserializer, Serialize};

/// Storage-assigned row identifier.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type BlogId = i64;

/// Canonical persisted blog record.
///
/// `title` and `body` are optional because full-update overwrites both
/// columns wholesale with whatever the caller supplied, including null.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Blog {
    /// Stable row ID used for fetch/update/delete addressing.
    pub id: BlogId,
    pub title: Option<String>,
    pub body: Option<String>,
}

/// Creation input: both fields are required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogDraft {
    pub title: String,
    pub body: String,
}

impl BlogDraft {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }
}

/// Partial-update input.
///
/// The outer `Option` tracks key presence in the request body, the inner
/// `Option` the supplied value. Only present keys are written; an explicit
/// null is written as NULL. This is the contract distinction from
/// full-update, which overwrites every field unconditionally.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct BlogPatch {
    #[serde(default, deserialize_with = "double_option")]
    pub title: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub body: Option<Option<String>>,
}

impl BlogPatch {
    /// Returns whether the patch carries no fields at all.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.body.is_none()
    }
}

/// Wraps a deserialized value in `Some` so a present-but-null key maps to
/// `Some(None)` while an absent key stays `None` via `#[serde(default)]`.
fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use super::BlogPatch;

    #[test]
    fn patch_distinguishes_absent_from_null() {
        let absent: BlogPatch = serde_json::from_str("{}").unwrap();
        assert!(absent.is_empty());
        assert_eq!(absent.title, None);

        let null_title: BlogPatch = serde_json::from_str(r#"{"title": null}"#).unwrap();
        assert_eq!(null_title.title, Some(None));
        assert_eq!(null_title.body, None);

        let set_title: BlogPatch = serde_json::from_str(r#"{"title": "t"}"#).unwrap();
        assert_eq!(set_title.title, Some(Some("t".to_string())));
    }
}
