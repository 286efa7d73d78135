//! # Domain Services
//!
//! Business rules that don't belong to a single entity.
//!
//! ## Services
//!
//! - **content_masking**: the soft-delete display rule shared by comments and replies

mod content_masking;

pub use content_masking::*;
