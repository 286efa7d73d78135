//! Reply entity and repository trait.
//!
//! Maps to the `replies` table in the database schema.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::services::display_content;
use crate::shared::error::AppError;

/// A reply attached to a comment.
///
/// Maps to the `replies` table:
/// - id: TEXT PRIMARY KEY
/// - comment_id: TEXT NOT NULL REFERENCES comments(id)
/// - thread_id: TEXT NOT NULL REFERENCES threads(id) -- denormalized for per-thread fetches
/// - owner: TEXT NOT NULL (username)
/// - content: TEXT NOT NULL
/// - is_delete: BOOLEAN NOT NULL DEFAULT FALSE
/// - created_at: TIMESTAMPTZ NOT NULL DEFAULT NOW()
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reply {
    pub id: String,

    /// Comment this reply belongs to
    pub comment_id: String,

    pub thread_id: String,

    pub username: String,

    pub created_at: DateTime<Utc>,

    pub content: String,

    pub is_deleted: bool,
}

impl Reply {
    /// Content as shown to clients.
    pub fn display_content(&self) -> String {
        display_content(&self.content, self.is_deleted)
    }
}

/// Payload for a reply about to be persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReply {
    pub id: String,
    pub comment_id: String,
    pub thread_id: String,
    pub owner: String,
    pub content: String,
}

/// Repository trait for Reply data access operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReplyRepository: Send + Sync {
    /// All replies of every comment in a thread, oldest first.
    ///
    /// Each reply carries its `comment_id` so callers can group them.
    async fn find_by_thread(&self, thread_id: &str) -> Result<Vec<Reply>, AppError>;

    /// Persist a new reply.
    async fn create(&self, reply: &NewReply) -> Result<Reply, AppError>;

    /// Succeeds if the reply exists under the given comment, `AppError::NotFound` otherwise.
    async fn verify_available(&self, reply_id: &str, comment_id: &str) -> Result<(), AppError>;

    /// Succeeds if `owner` wrote the reply, `AppError::Forbidden` otherwise.
    async fn verify_owner(&self, reply_id: &str, owner: &str) -> Result<(), AppError>;

    /// Set the deletion flag; the row is kept.
    async fn soft_delete(&self, reply_id: &str) -> Result<(), AppError>;
}
