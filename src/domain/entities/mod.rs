//! # Domain Entities
//!
//! Core domain entities of the forum. All entities map directly to their
//! corresponding database tables.
//!
//! - **Thread**: a top-level discussion topic
//! - **Comment**: a comment attached to a thread, soft-deletable
//! - **Reply**: a reply attached to a comment, soft-deletable
//!
//! ## Repository Traits
//!
//! Each entity has an associated repository trait defining data access operations.
//! These traits are implemented in the infrastructure layer.

mod thread;
mod comment;
mod reply;

pub use thread::{NewThread, Thread, ThreadRepository};
pub use comment::{Comment, CommentRepository, NewComment};
pub use reply::{NewReply, Reply, ReplyRepository};

#[cfg(test)]
pub use thread::MockThreadRepository;
#[cfg(test)]
pub use comment::MockCommentRepository;
#[cfg(test)]
pub use reply::MockReplyRepository;
