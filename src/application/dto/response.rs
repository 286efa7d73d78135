//! Response DTOs
//!
//! Envelopes for API response bodies: `{"status": "success", "data": {...}}`.

use serde::Serialize;

use crate::application::services::{AddedCommentDto, AddedReplyDto, AddedThreadDto, ThreadView};

/// Successful response envelope
#[derive(Debug, Serialize)]
pub struct SuccessResponse<T> {
    pub status: &'static str,
    pub data: T,
}

/// Success envelope without a payload
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
}

impl StatusResponse {
    pub fn success() -> Self {
        Self { status: "success" }
    }
}

impl<T> SuccessResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            status: "success",
            data,
        }
    }
}

/// `data` payload of the thread detail endpoint
#[derive(Debug, Serialize)]
pub struct ThreadData {
    pub thread: ThreadView,
}

impl From<ThreadView> for SuccessResponse<ThreadData> {
    fn from(thread: ThreadView) -> Self {
        Self::new(ThreadData { thread })
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddedThreadData {
    pub added_thread: AddedThreadDto,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddedCommentData {
    pub added_comment: AddedCommentDto,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddedReplyData {
    pub added_reply: AddedReplyDto,
}

impl From<AddedThreadDto> for SuccessResponse<AddedThreadData> {
    fn from(added_thread: AddedThreadDto) -> Self {
        Self::new(AddedThreadData { added_thread })
    }
}

impl From<AddedCommentDto> for SuccessResponse<AddedCommentData> {
    fn from(added_comment: AddedCommentDto) -> Self {
        Self::new(AddedCommentData { added_comment })
    }
}

impl From<AddedReplyDto> for SuccessResponse<AddedReplyData> {
    fn from(added_reply: AddedReplyDto) -> Self {
        Self::new(AddedReplyData { added_reply })
    }
}
