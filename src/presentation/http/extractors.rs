//! Custom Extractors

use axum::{
    extract::FromRequestParts,
    http::request::Parts,
};

use crate::shared::error::AppError;

/// Header carrying the acting user's id, set by the authenticating proxy
pub const OWNER_HEADER: &str = "x-forum-user";

/// Acting user of a write request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Owner(pub String);

impl<S> FromRequestParts<S> for Owner
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .headers
            .get(OWNER_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::trim)
            .filter(|owner| !owner.is_empty())
            .map(|owner| Owner(owner.to_string()))
            .ok_or_else(|| AppError::Unauthorized("Missing authentication".into()))
    }
}
