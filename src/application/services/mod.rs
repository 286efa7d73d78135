//! Application Services
//!
//! Business logic services that coordinate domain operations.
//!
//! ## Available Services
//!
//! - **ThreadService**: Thread creation and thread detail aggregation
//! - **CommentService**: Adding and soft-deleting comments
//! - **ReplyService**: Adding and soft-deleting replies

pub mod thread_service;
pub mod comment_service;
pub mod reply_service;

// Re-export thread service types
pub use thread_service::{
    build_thread_view, AddedThreadDto, CommentView, CreateThreadDto, ReplyView, ThreadError,
    ThreadService, ThreadServiceImpl, ThreadView,
};

// Re-export comment service types
pub use comment_service::{AddedCommentDto, CommentError, CommentService, CommentServiceImpl};

// Re-export reply service types
pub use reply_service::{AddedReplyDto, ReplyError, ReplyService, ReplyServiceImpl};
