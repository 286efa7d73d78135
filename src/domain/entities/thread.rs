//! Thread entity and repository trait.
//!
//! Maps to the `threads` table in the database schema.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::error::AppError;

/// A top-level discussion topic.
///
/// Maps to the `threads` table:
/// - id: TEXT PRIMARY KEY
/// - title: TEXT NOT NULL
/// - body: TEXT NOT NULL
/// - owner: TEXT NOT NULL (username)
/// - created_at: TIMESTAMPTZ NOT NULL DEFAULT NOW()
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Thread {
    pub id: String,

    pub title: String,

    pub body: String,

    /// Username of the thread owner
    pub username: String,

    pub created_at: DateTime<Utc>,
}

/// Payload for a thread about to be persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewThread {
    pub id: String,
    pub title: String,
    pub body: String,
    pub owner: String,
}

/// Repository trait for Thread data access operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ThreadRepository: Send + Sync {
    /// Succeeds if the thread exists, `AppError::NotFound` otherwise.
    async fn verify_available(&self, thread_id: &str) -> Result<(), AppError>;

    /// Fetch a thread by ID.
    async fn find_by_id(&self, thread_id: &str) -> Result<Thread, AppError>;

    /// Persist a new thread.
    async fn create(&self, thread: &NewThread) -> Result<Thread, AppError>;
}
