//! Repository Implementations
//!
//! PostgreSQL implementations of the domain repository traits.
//!
//! ## Available Repositories
//!
//! - **PgThreadRepository** - Thread lookup and creation
//! - **PgCommentRepository** - Comments with ownership checks and soft delete
//! - **PgReplyRepository** - Replies with ownership checks and soft delete
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use sqlx::PgPool;
//! use forum_api::infrastructure::repositories::{
//!     PgCommentRepository, PgReplyRepository, PgThreadRepository,
//! };
//!
//! async fn setup_repositories(pool: PgPool) {
//!     let thread_repo = PgThreadRepository::new(pool.clone());
//!     let comment_repo = PgCommentRepository::new(pool.clone());
//!     let reply_repo = PgReplyRepository::new(pool);
//! }
//! ```

pub mod thread_repository;
pub mod comment_repository;
pub mod reply_repository;

pub use thread_repository::PgThreadRepository;
pub use comment_repository::PgCommentRepository;
pub use reply_repository::PgReplyRepository;
