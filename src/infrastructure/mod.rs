//! Infrastructure Layer
//!
//! Contains implementations for external services including:
//! - PostgreSQL connection pool and migrations
//! - Repository implementations backing the domain traits
//! - Prometheus metrics

pub mod database;
pub mod metrics;
pub mod repositories;
