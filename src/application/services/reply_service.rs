//! Reply Service
//!
//! Adding replies to comments and soft-deleting them.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;

use crate::domain::{CommentRepository, NewReply, ReplyRepository, ThreadRepository};
use crate::shared::error::AppError;
use crate::shared::id::{IdGenerator, REPLY_PREFIX};

/// Reply service trait
#[async_trait]
pub trait ReplyService: Send + Sync {
    /// Add a reply to a comment of a thread
    async fn add_reply(
        &self,
        thread_id: &str,
        comment_id: &str,
        owner: &str,
        content: &str,
    ) -> Result<AddedReplyDto, ReplyError>;

    /// Soft-delete a reply; only its owner may do so
    async fn delete_reply(
        &self,
        thread_id: &str,
        comment_id: &str,
        reply_id: &str,
        owner: &str,
    ) -> Result<(), ReplyError>;
}

/// Newly created reply
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddedReplyDto {
    pub id: String,
    pub content: String,
    pub owner: String,
}

/// Reply service errors
#[derive(Debug, thiserror::Error)]
pub enum ReplyError {
    #[error("Thread not found")]
    ThreadNotFound,

    #[error("Comment not found")]
    CommentNotFound,

    #[error("Reply not found")]
    ReplyNotFound,

    #[error("Permission denied")]
    Forbidden,

    #[error("Internal error: {0}")]
    Internal(String),
}

/// ReplyService implementation
pub struct ReplyServiceImpl<T, C, R>
where
    T: ThreadRepository,
    C: CommentRepository,
    R: ReplyRepository,
{
    thread_repo: Arc<T>,
    comment_repo: Arc<C>,
    reply_repo: Arc<R>,
    id_generator: Arc<IdGenerator>,
}

impl<T, C, R> ReplyServiceImpl<T, C, R>
where
    T: ThreadRepository,
    C: CommentRepository,
    R: ReplyRepository,
{
    pub fn new(
        thread_repo: Arc<T>,
        comment_repo: Arc<C>,
        reply_repo: Arc<R>,
        id_generator: Arc<IdGenerator>,
    ) -> Self {
        Self {
            thread_repo,
            comment_repo,
            reply_repo,
            id_generator,
        }
    }

    /// Thread must exist and contain the comment.
    async fn check_comment(&self, thread_id: &str, comment_id: &str) -> Result<(), ReplyError> {
        self.thread_repo
            .verify_available(thread_id)
            .await
            .map_err(|e| match e {
                AppError::NotFound(_) => ReplyError::ThreadNotFound,
                e => ReplyError::Internal(e.to_string()),
            })?;

        self.comment_repo
            .verify_available(comment_id, thread_id)
            .await
            .map_err(|e| match e {
                AppError::NotFound(_) => ReplyError::CommentNotFound,
                e => ReplyError::Internal(e.to_string()),
            })
    }
}

#[async_trait]
impl<T, C, R> ReplyService for ReplyServiceImpl<T, C, R>
where
    T: ThreadRepository + 'static,
    C: CommentRepository + 'static,
    R: ReplyRepository + 'static,
{
    async fn add_reply(
        &self,
        thread_id: &str,
        comment_id: &str,
        owner: &str,
        content: &str,
    ) -> Result<AddedReplyDto, ReplyError> {
        self.check_comment(thread_id, comment_id).await?;

        let reply = NewReply {
            id: self.id_generator.generate(REPLY_PREFIX),
            comment_id: comment_id.to_string(),
            thread_id: thread_id.to_string(),
            owner: owner.to_string(),
            content: content.to_string(),
        };

        let created = self
            .reply_repo
            .create(&reply)
            .await
            .map_err(|e| ReplyError::Internal(e.to_string()))?;

        tracing::info!(thread_id, comment_id, reply_id = %created.id, "Reply added");

        Ok(AddedReplyDto {
            id: created.id,
            content: created.content,
            owner: created.username,
        })
    }

    async fn delete_reply(
        &self,
        thread_id: &str,
        comment_id: &str,
        reply_id: &str,
        owner: &str,
    ) -> Result<(), ReplyError> {
        self.check_comment(thread_id, comment_id).await?;

        self.reply_repo
            .verify_available(reply_id, comment_id)
            .await
            .map_err(|e| match e {
                AppError::NotFound(_) => ReplyError::ReplyNotFound,
                e => ReplyError::Internal(e.to_string()),
            })?;

        self.reply_repo
            .verify_owner(reply_id, owner)
            .await
            .map_err(|e| match e {
                AppError::Forbidden(_) => ReplyError::Forbidden,
                e => ReplyError::Internal(e.to_string()),
            })?;

        self.reply_repo
            .soft_delete(reply_id)
            .await
            .map_err(|e| ReplyError::Internal(e.to_string()))?;

        tracing::info!(thread_id, comment_id, reply_id, "Reply soft-deleted");

        Ok(())
    }
}
