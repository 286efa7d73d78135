//! # Forum API Library
//!
//! Backend of a discussion forum: threads, comments on threads, and replies
//! on comments, stored in PostgreSQL and served over HTTP.
//!
//! The centerpiece is the thread detail read: a thread is merged with its
//! comments and their replies into one nested view, with soft-deleted
//! content replaced by a placeholder.
//!
//! ## Architecture
//!
//! - **Domain Layer**: Entities, repository traits, content masking
//! - **Application Layer**: Thread, comment and reply services; response DTOs
//! - **Infrastructure Layer**: PostgreSQL repositories, migrations, metrics
//! - **Presentation Layer**: HTTP routes, handlers and middleware
//!
//! ## Module Structure
//!
//! ```text
//! forum_api/
//! +-- config/         Configuration management
//! +-- domain/         Entities, repository traits, masking
//! +-- application/    Services and DTOs
//! +-- infrastructure/ Database, repositories, metrics
//! +-- presentation/   HTTP routes and middleware
//! +-- shared/         Errors, identifier generation
//! ```

// Configuration module
pub mod config;

// Domain layer - Core business logic
pub mod domain;

// Application layer - Business services
pub mod application;

// Infrastructure layer - External implementations
pub mod infrastructure;

// Presentation layer - HTTP handlers
pub mod presentation;

// Shared utilities
pub mod shared;

// Application startup and state management
pub mod startup;

// Telemetry and observability
pub mod telemetry;
