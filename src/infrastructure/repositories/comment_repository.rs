//! Comment Repository Implementation
//!
//! PostgreSQL implementation of comment operations. Deletion is soft: the
//! `is_delete` flag is set and the row is kept.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::domain::{Comment, CommentRepository, NewComment};
use crate::shared::error::AppError;

pub(crate) const COMMENT_NOT_FOUND: &str = "Comment tidak ditemukan";
pub(crate) const NOT_OWNER: &str = "Anda tidak berhak mengakses resource ini!";

/// Internal row type for comment queries.
#[derive(Debug, sqlx::FromRow)]
struct CommentRow {
    id: String,
    thread_id: String,
    owner: String,
    content: String,
    is_delete: bool,
    created_at: DateTime<Utc>,
}

impl CommentRow {
    fn into_comment(self) -> Comment {
        Comment {
            id: self.id,
            thread_id: self.thread_id,
            username: self.owner,
            created_at: self.created_at,
            content: self.content,
            is_deleted: self.is_delete,
        }
    }
}

/// PostgreSQL comment repository implementation.
#[derive(Clone)]
pub struct PgCommentRepository {
    pool: PgPool,
}

impl PgCommentRepository {
    /// Creates a new PgCommentRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CommentRepository for PgCommentRepository {
    /// Comments of a thread, oldest first. Deleted comments are included.
    async fn find_by_thread(&self, thread_id: &str) -> Result<Vec<Comment>, AppError> {
        let rows = sqlx::query_as::<_, CommentRow>(
            r#"
            SELECT id, thread_id, owner, content, is_delete, created_at
            FROM comments
            WHERE thread_id = $1
            ORDER BY created_at ASC, id ASC
            "#,
        )
        .bind(thread_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| r.into_comment()).collect())
    }

    async fn create(&self, comment: &NewComment) -> Result<Comment, AppError> {
        let row = sqlx::query_as::<_, CommentRow>(
            r#"
            INSERT INTO comments (id, thread_id, owner, content)
            VALUES ($1, $2, $3, $4)
            RETURNING id, thread_id, owner, content, is_delete, created_at
            "#,
        )
        .bind(&comment.id)
        .bind(&comment.thread_id)
        .bind(&comment.owner)
        .bind(&comment.content)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into_comment())
    }

    async fn verify_available(&self, comment_id: &str, thread_id: &str) -> Result<(), AppError> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM comments WHERE id = $1 AND thread_id = $2)",
        )
        .bind(comment_id)
        .bind(thread_id)
        .fetch_one(&self.pool)
        .await?;

        if !exists {
            return Err(AppError::NotFound(COMMENT_NOT_FOUND.into()));
        }

        Ok(())
    }

    async fn verify_owner(&self, comment_id: &str, owner: &str) -> Result<(), AppError> {
        let actual = sqlx::query_scalar::<_, String>("SELECT owner FROM comments WHERE id = $1")
            .bind(comment_id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(COMMENT_NOT_FOUND.into()))?;

        if actual != owner {
            return Err(AppError::Forbidden(NOT_OWNER.into()));
        }

        Ok(())
    }

    async fn soft_delete(&self, comment_id: &str) -> Result<(), AppError> {
        let result = sqlx::query("UPDATE comments SET is_delete = TRUE WHERE id = $1")
            .bind(comment_id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(COMMENT_NOT_FOUND.into()));
        }

        Ok(())
    }
}
