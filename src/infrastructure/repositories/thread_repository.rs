//! Thread Repository Implementation
//!
//! PostgreSQL implementation of the ThreadRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::domain::{NewThread, Thread, ThreadRepository};
use crate::shared::error::AppError;

pub(crate) const THREAD_NOT_FOUND: &str = "Thread tidak ditemukan";

/// Database row representation of the threads table.
#[derive(Debug, sqlx::FromRow)]
struct ThreadRow {
    id: String,
    title: String,
    body: String,
    owner: String,
    created_at: DateTime<Utc>,
}

impl ThreadRow {
    fn into_thread(self) -> Thread {
        Thread {
            id: self.id,
            title: self.title,
            body: self.body,
            username: self.owner,
            created_at: self.created_at,
        }
    }
}

/// PostgreSQL thread repository implementation.
#[derive(Clone)]
pub struct PgThreadRepository {
    pool: PgPool,
}

impl PgThreadRepository {
    /// Create a new PgThreadRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ThreadRepository for PgThreadRepository {
    async fn verify_available(&self, thread_id: &str) -> Result<(), AppError> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM threads WHERE id = $1)",
        )
        .bind(thread_id)
        .fetch_one(&self.pool)
        .await?;

        if !exists {
            return Err(AppError::NotFound(THREAD_NOT_FOUND.into()));
        }

        Ok(())
    }

    async fn find_by_id(&self, thread_id: &str) -> Result<Thread, AppError> {
        let row = sqlx::query_as::<_, ThreadRow>(
            r#"
            SELECT id, title, body, owner, created_at
            FROM threads
            WHERE id = $1
            "#,
        )
        .bind(thread_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(THREAD_NOT_FOUND.into()))?;

        Ok(row.into_thread())
    }

    async fn create(&self, thread: &NewThread) -> Result<Thread, AppError> {
        let row = sqlx::query_as::<_, ThreadRow>(
            r#"
            INSERT INTO threads (id, title, body, owner)
            VALUES ($1, $2, $3, $4)
            RETURNING id, title, body, owner, created_at
            "#,
        )
        .bind(&thread.id)
        .bind(&thread.title)
        .bind(&thread.body)
        .bind(&thread.owner)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into_thread())
    }
}
