//! # Domain Layer
//!
//! The domain layer contains the core business objects of the forum.
//! It is independent of any external frameworks or infrastructure concerns.
//!
//! ## Structure
//!
//! - **entities**: Thread, Comment, Reply and their repository traits
//! - **services**: Business rules spanning entities (soft-delete masking)
//!
//! ## Design Principles
//!
//! - No dependencies on infrastructure or presentation layers
//! - Repository traits define data access contracts
//! - Entities are read-only snapshots of persisted rows

pub mod entities;
pub mod services;

// Re-export commonly used types
pub use entities::*;
pub use services::*;
