//! Reply Repository Implementation
//!
//! PostgreSQL implementation of reply operations.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use super::comment_repository::NOT_OWNER;
use crate::domain::{NewReply, Reply, ReplyRepository};
use crate::shared::error::AppError;

pub(crate) const REPLY_NOT_FOUND: &str = "Balasan tidak ditemukan";

#[derive(Debug, sqlx::FromRow)]
struct ReplyRow {
    id: String,
    comment_id: String,
    thread_id: String,
    owner: String,
    content: String,
    is_delete: bool,
    created_at: DateTime<Utc>,
}

impl ReplyRow {
    fn into_reply(self) -> Reply {
        Reply {
            id: self.id,
            comment_id: self.comment_id,
            thread_id: self.thread_id,
            username: self.owner,
            created_at: self.created_at,
            content: self.content,
            is_deleted: self.is_delete,
        }
    }
}

/// PostgreSQL reply repository implementation.
#[derive(Clone)]
pub struct PgReplyRepository {
    pool: PgPool,
}

impl PgReplyRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReplyRepository for PgReplyRepository {
    /// Replies of every comment in the thread, oldest first.
    ///
    /// Uses the denormalized `thread_id` column so one query covers the thread.
    async fn find_by_thread(&self, thread_id: &str) -> Result<Vec<Reply>, AppError> {
        let rows = sqlx::query_as::<_, ReplyRow>(
            r#"
            SELECT id, comment_id, thread_id, owner, content, is_delete, created_at
            FROM replies
            WHERE thread_id = $1
            ORDER BY created_at ASC, id ASC
            "#,
        )
        .bind(thread_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| r.into_reply()).collect())
    }

    async fn create(&self, reply: &NewReply) -> Result<Reply, AppError> {
        let row = sqlx::query_as::<_, ReplyRow>(
            r#"
            INSERT INTO replies (id, comment_id, thread_id, owner, content)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, comment_id, thread_id, owner, content, is_delete, created_at
            "#,
        )
        .bind(&reply.id)
        .bind(&reply.comment_id)
        .bind(&reply.thread_id)
        .bind(&reply.owner)
        .bind(&reply.content)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into_reply())
    }

    async fn verify_available(&self, reply_id: &str, comment_id: &str) -> Result<(), AppError> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM replies WHERE id = $1 AND comment_id = $2)",
        )
        .bind(reply_id)
        .bind(comment_id)
        .fetch_one(&self.pool)
        .await?;

        if !exists {
            return Err(AppError::NotFound(REPLY_NOT_FOUND.into()));
        }

        Ok(())
    }

    async fn verify_owner(&self, reply_id: &str, owner: &str) -> Result<(), AppError> {
        let actual = sqlx::query_scalar::<_, String>("SELECT owner FROM replies WHERE id = $1")
            .bind(reply_id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(REPLY_NOT_FOUND.into()))?;

        if actual != owner {
            return Err(AppError::Forbidden(NOT_OWNER.into()));
        }

        Ok(())
    }

    async fn soft_delete(&self, reply_id: &str) -> Result<(), AppError> {
        let result = sqlx::query("UPDATE replies SET is_delete = TRUE WHERE id = $1")
            .bind(reply_id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(REPLY_NOT_FOUND.into()));
        }

        Ok(())
    }
}
