//! Comment entity and repository trait.
//!
//! Maps to the `comments` table in the database schema.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::services::display_content;
use crate::shared::error::AppError;

/// A comment attached directly to a thread.
///
/// Maps to the `comments` table:
/// - id: TEXT PRIMARY KEY
/// - thread_id: TEXT NOT NULL REFERENCES threads(id)
/// - owner: TEXT NOT NULL (username)
/// - content: TEXT NOT NULL
/// - is_delete: BOOLEAN NOT NULL DEFAULT FALSE
/// - created_at: TIMESTAMPTZ NOT NULL DEFAULT NOW()
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: String,

    pub thread_id: String,

    /// Username of the author
    pub username: String,

    pub created_at: DateTime<Utc>,

    pub content: String,

    /// Soft-delete flag; the row is kept and its content masked on display
    pub is_deleted: bool,
}

impl Comment {
    /// Content as shown to clients.
    pub fn display_content(&self) -> String {
        display_content(&self.content, self.is_deleted)
    }
}

/// Payload for a comment about to be persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewComment {
    pub id: String,
    pub thread_id: String,
    pub owner: String,
    pub content: String,
}

/// Repository trait for Comment data access operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// All comments of a thread, oldest first.
    async fn find_by_thread(&self, thread_id: &str) -> Result<Vec<Comment>, AppError>;

    /// Persist a new comment.
    async fn create(&self, comment: &NewComment) -> Result<Comment, AppError>;

    /// Succeeds if the comment exists in the given thread, `AppError::NotFound` otherwise.
    async fn verify_available(&self, comment_id: &str, thread_id: &str) -> Result<(), AppError>;

    /// Succeeds if `owner` wrote the comment, `AppError::Forbidden` otherwise.
    async fn verify_owner(&self, comment_id: &str, owner: &str) -> Result<(), AppError>;

    /// Set the deletion flag; the row is kept.
    async fn soft_delete(&self, comment_id: &str) -> Result<(), AppError>;
}
