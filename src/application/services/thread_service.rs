//! Thread Service
//!
//! Thread creation and the thread detail aggregation: a thread merged with
//! its comments and their replies into one display tree.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::{
    Comment, CommentRepository, NewThread, Reply, ReplyRepository, Thread, ThreadRepository,
};
use crate::shared::error::AppError;
use crate::shared::id::{IdGenerator, THREAD_PREFIX};

/// Thread service trait
#[async_trait]
pub trait ThreadService: Send + Sync {
    /// Create a thread owned by `owner`
    async fn add_thread(&self, owner: &str, request: CreateThreadDto) -> Result<AddedThreadDto, ThreadError>;

    /// Get a thread with all its comments and replies
    async fn get_thread(&self, thread_id: &str) -> Result<ThreadView, ThreadError>;
}

/// Create thread request
#[derive(Debug, Clone)]
pub struct CreateThreadDto {
    pub title: String,
    pub body: String,
}

/// Newly created thread
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddedThreadDto {
    pub id: String,
    pub title: String,
    pub owner: String,
}

/// Thread detail as shown to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThreadView {
    pub id: String,
    pub title: String,
    pub body: String,
    pub date: DateTime<Utc>,
    pub username: String,
    pub comments: Vec<CommentView>,
}

/// A comment inside a [`ThreadView`], content masked if deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommentView {
    pub id: String,
    pub username: String,
    pub date: DateTime<Utc>,
    pub replies: Vec<ReplyView>,
    pub content: String,
}

/// A reply inside a [`CommentView`], content masked if deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReplyView {
    pub id: String,
    pub content: String,
    pub date: DateTime<Utc>,
    pub username: String,
}

impl From<Reply> for ReplyView {
    fn from(reply: Reply) -> Self {
        Self {
            content: reply.display_content(),
            id: reply.id,
            date: reply.created_at,
            username: reply.username,
        }
    }
}

impl CommentView {
    fn new(comment: Comment, replies: Vec<ReplyView>) -> Self {
        Self {
            content: comment.display_content(),
            id: comment.id,
            username: comment.username,
            date: comment.created_at,
            replies,
        }
    }
}

impl ThreadView {
    fn new(thread: Thread, comments: Vec<CommentView>) -> Self {
        Self {
            id: thread.id,
            title: thread.title,
            body: thread.body,
            date: thread.created_at,
            username: thread.username,
            comments,
        }
    }

    /// Total number of replies across all comments.
    pub fn reply_count(&self) -> usize {
        self.comments.iter().map(|c| c.replies.len()).sum()
    }
}

/// Merge a thread with its comments and replies.
///
/// Comments keep their input order. Replies are grouped by `comment_id` in a
/// single pass and keep their input order within each comment.
pub fn build_thread_view(thread: Thread, comments: Vec<Comment>, replies: Vec<Reply>) -> ThreadView {
    let mut replies_by_comment: HashMap<String, Vec<ReplyView>> = HashMap::new();
    for reply in replies {
        replies_by_comment
            .entry(reply.comment_id.clone())
            .or_default()
            .push(ReplyView::from(reply));
    }

    let comments: Vec<CommentView> = comments
        .into_iter()
        .map(|comment| {
            let replies = replies_by_comment.remove(&comment.id).unwrap_or_default();
            CommentView::new(comment, replies)
        })
        .collect();

    if !replies_by_comment.is_empty() {
        let orphaned: usize = replies_by_comment.values().map(Vec::len).sum();
        tracing::warn!(
            thread_id = %thread.id,
            orphaned,
            "Replies reference comments outside the thread"
        );
    }

    ThreadView::new(thread, comments)
}

/// Thread service errors
#[derive(Debug, thiserror::Error)]
pub enum ThreadError {
    #[error("Thread not found")]
    ThreadNotFound,

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ThreadError {
    /// Map an existence-check failure: not-found becomes `ThreadNotFound`.
    fn from_verification(error: AppError) -> Self {
        if error.is_not_found() {
            ThreadError::ThreadNotFound
        } else {
            ThreadError::Internal(error.to_string())
        }
    }
}

/// ThreadService implementation
pub struct ThreadServiceImpl<T, C, R>
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

impl<T, C, R> ThreadServiceImpl<T, C, R>
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
}

#[async_trait]
impl<T, C, R> ThreadService for ThreadServiceImpl<T, C, R>
where
    T: ThreadRepository + 'static,
    C: CommentRepository + 'static,
    R: ReplyRepository + 'static,
{
    async fn add_thread(&self, owner: &str, request: CreateThreadDto) -> Result<AddedThreadDto, ThreadError> {
        let thread = NewThread {
            id: self.id_generator.generate(THREAD_PREFIX),
            title: request.title,
            body: request.body,
            owner: owner.to_string(),
        };

        let created = self
            .thread_repo
            .create(&thread)
            .await
            .map_err(|e| ThreadError::Internal(e.to_string()))?;

        tracing::info!(thread_id = %created.id, owner = %created.username, "Thread created");

        Ok(AddedThreadDto {
            id: created.id,
            title: created.title,
            owner: created.username,
        })
    }

    async fn get_thread(&self, thread_id: &str) -> Result<ThreadView, ThreadError> {
        // Existence check gates every fetch
        self.thread_repo
            .verify_available(thread_id)
            .await
            .map_err(ThreadError::from_verification)?;

        // A thread vanishing after the check surfaces as an opaque internal failure
        let (thread, comments, replies) = tokio::try_join!(
            self.thread_repo.find_by_id(thread_id),
            self.comment_repo.find_by_thread(thread_id),
            self.reply_repo.find_by_thread(thread_id)
        )
        .map_err(|e| ThreadError::Internal(e.to_string()))?;

        let view = build_thread_view(thread, comments, replies);

        tracing::debug!(
            thread_id,
            comments = view.comments.len(),
            replies = view.reply_count(),
            "Thread aggregated"
        );

        Ok(view)
    }
}
