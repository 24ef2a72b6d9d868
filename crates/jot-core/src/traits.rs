//! Core traits for jot abstractions.
//!
//! These traits define the interfaces that concrete implementations must
//! satisfy, enabling pluggable backends and testability.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{Error, Result};
use crate::models::{Category, Note};

// =============================================================================
// NOTE REPOSITORY
// =============================================================================

/// Request for creating a new note.
#[derive(Debug, Clone, Default)]
pub struct CreateNoteRequest {
    /// Optional title; empty string when omitted.
    pub title: Option<String>,
    pub content: String,
    /// Optional category; defaults to [`Category::Personal`].
    pub category: Option<Category>,
}

impl CreateNoteRequest {
    /// Validate the request before it reaches the store.
    ///
    /// Content must be non-empty after trimming; there is no way to attach
    /// body text later, so an empty note is never meaningful.
    pub fn validate(&self) -> Result<()> {
        if self.content.trim().is_empty() {
            return Err(Error::InvalidInput("Content is required".to_string()));
        }
        Ok(())
    }
}

/// Request for a partial note update.
///
/// Only the fields that are `Some` are applied; the store revalidates and
/// bumps `updated_at_utc`.
#[derive(Debug, Clone, Default)]
pub struct UpdateNoteRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub category: Option<Category>,
    pub archived: Option<bool>,
}

impl UpdateNoteRequest {
    /// True when no field is provided at all.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.content.is_none()
            && self.category.is_none()
            && self.archived.is_none()
    }

    /// Validate the provided fields.
    pub fn validate(&self) -> Result<()> {
        if let Some(content) = &self.content {
            if content.trim().is_empty() {
                return Err(Error::InvalidInput(
                    "Content must not be empty".to_string(),
                ));
            }
        }
        Ok(())
    }
}

/// Which lifecycle slice of the notes to list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NoteFilter {
    /// Notes with archived = false.
    #[default]
    Active,
    /// Notes with archived = true.
    Archived,
    /// Everything.
    All,
}

/// Request for listing notes.
#[derive(Debug, Clone, Default)]
pub struct ListNotesRequest {
    pub filter: NoteFilter,
    /// Maximum results
    pub limit: Option<i64>,
    /// Pagination offset
    pub offset: Option<i64>,
}

/// Response for listing notes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListNotesResponse {
    pub notes: Vec<Note>,
    /// Total count matching the filter, across all pages.
    pub total: i64,
}

/// Repository for note CRUD operations.
#[async_trait]
pub trait NoteRepository: Send + Sync {
    /// Insert a new note, returning its server-assigned id.
    async fn insert(&self, req: CreateNoteRequest) -> Result<Uuid>;

    /// Fetch a note by id.
    async fn fetch(&self, id: Uuid) -> Result<Note>;

    /// List notes, newest first.
    async fn list(&self, req: ListNotesRequest) -> Result<ListNotesResponse>;

    /// Apply a partial update to an existing note.
    async fn update(&self, id: Uuid, req: UpdateNoteRequest) -> Result<()>;

    /// Set the archived flag only.
    async fn set_archived(&self, id: Uuid, archived: bool) -> Result<()>;

    /// Permanently delete a note.
    async fn delete(&self, id: Uuid) -> Result<()>;

    /// Check if a note exists.
    async fn exists(&self, id: Uuid) -> Result<bool>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_rejects_empty_content() {
        for content in ["", "   ", "\n\t  ", "\n\n"] {
            let req = CreateNoteRequest {
                title: None,
                content: content.to_string(),
                category: None,
            };
            let err = req.validate().unwrap_err();
            assert!(matches!(err, Error::InvalidInput(_)));
        }
    }

    #[test]
    fn test_create_request_accepts_content_with_surrounding_whitespace() {
        let req = CreateNoteRequest {
            title: None,
            content: "  buy milk  ".to_string(),
            category: None,
        };
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_update_request_rejects_empty_content() {
        let req = UpdateNoteRequest {
            content: Some("   ".to_string()),
            ..Default::default()
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_update_request_without_content_is_valid() {
        let req = UpdateNoteRequest {
            archived: Some(true),
            ..Default::default()
        };
        assert!(req.validate().is_ok());
        assert!(!req.is_empty());
    }

    #[test]
    fn test_update_request_is_empty() {
        assert!(UpdateNoteRequest::default().is_empty());
    }

    #[test]
    fn test_default_filter_is_active() {
        assert_eq!(NoteFilter::default(), NoteFilter::Active);
    }
}
