//! HTTP Module

pub mod extractors;
pub mod handlers;
pub mod routes;
