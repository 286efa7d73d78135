//! Request DTOs

use serde::Deserialize;

/// `POST /threads` body
#[derive(Debug, Clone, Deserialize)]
pub struct AddThreadRequest {
    pub title: String,
    pub body: String,
}

/// `POST /threads/{thread_id}/comments` and `.../replies` body
#[derive(Debug, Clone, Deserialize)]
pub struct AddContentRequest {
    pub content: String,
}
