//! Comment Service
//!
//! Adding comments to a thread and soft-deleting them.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;

use crate::domain::{CommentRepository, NewComment, ThreadRepository};
use crate::shared::error::AppError;
use crate::shared::id::{IdGenerator, COMMENT_PREFIX};

/// Comment service trait
#[async_trait]
pub trait CommentService: Send + Sync {
    /// Add a comment to a thread
    async fn add_comment(&self, thread_id: &str, owner: &str, content: &str) -> Result<AddedCommentDto, CommentError>;

    /// Soft-delete a comment; only its owner may do so
    async fn delete_comment(&self, thread_id: &str, comment_id: &str, owner: &str) -> Result<(), CommentError>;
}

/// Newly created comment
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddedCommentDto {
    pub id: String,
    pub content: String,
    pub owner: String,
}

/// Comment service errors
#[derive(Debug, thiserror::Error)]
pub enum CommentError {
    #[error("Thread not found")]
    ThreadNotFound,

    #[error("Comment not found")]
    CommentNotFound,

    #[error("Permission denied")]
    Forbidden,

    #[error("Internal error: {0}")]
    Internal(String),
}

/// CommentService implementation
pub struct CommentServiceImpl<T, C>
where
    T: ThreadRepository,
    C: CommentRepository,
{
    thread_repo: Arc<T>,
    comment_repo: Arc<C>,
    id_generator: Arc<IdGenerator>,
}

impl<T, C> CommentServiceImpl<T, C>
where
    T: ThreadRepository,
    C: CommentRepository,
{
    pub fn new(thread_repo: Arc<T>, comment_repo: Arc<C>, id_generator: Arc<IdGenerator>) -> Self {
        Self {
            thread_repo,
            comment_repo,
            id_generator,
        }
    }

    async fn check_thread(&self, thread_id: &str) -> Result<(), CommentError> {
        self.thread_repo
            .verify_available(thread_id)
            .await
            .map_err(|e| match e {
                AppError::NotFound(_) => CommentError::ThreadNotFound,
                e => CommentError::Internal(e.to_string()),
            })
    }
}

#[async_trait]
impl<T, C> CommentService for CommentServiceImpl<T, C>
where
    T: ThreadRepository + 'static,
    C: CommentRepository + 'static,
{
    async fn add_comment(&self, thread_id: &str, owner: &str, content: &str) -> Result<AddedCommentDto, CommentError> {
        self.check_thread(thread_id).await?;

        let comment = NewComment {
            id: self.id_generator.generate(COMMENT_PREFIX),
            thread_id: thread_id.to_string(),
            owner: owner.to_string(),
            content: content.to_string(),
        };

        let created = self
            .comment_repo
            .create(&comment)
            .await
            .map_err(|e| CommentError::Internal(e.to_string()))?;

        tracing::info!(thread_id, comment_id = %created.id, "Comment added");

        Ok(AddedCommentDto {
            id: created.id,
            content: created.content,
            owner: created.username,
        })
    }

    async fn delete_comment(&self, thread_id: &str, comment_id: &str, owner: &str) -> Result<(), CommentError> {
        self.check_thread(thread_id).await?;

        self.comment_repo
            .verify_available(comment_id, thread_id)
            .await
            .map_err(|e| match e {
                AppError::NotFound(_) => CommentError::CommentNotFound,
                e => CommentError::Internal(e.to_string()),
            })?;

        self.comment_repo
            .verify_owner(comment_id, owner)
            .await
            .map_err(|e| match e {
                AppError::Forbidden(_) => CommentError::Forbidden,
                e => CommentError::Internal(e.to_string()),
            })?;

        self.comment_repo
            .soft_delete(comment_id)
            .await
            .map_err(|e| CommentError::Internal(e.to_string()))?;

        tracing::info!(thread_id, comment_id, "Comment soft-deleted");

        Ok(())
    }
}
