//! Data Transfer Objects
//!
//! Request bodies and response envelopes of the HTTP API.

pub mod request;
pub mod response;

pub use request::{AddContentRequest, AddThreadRequest};
pub use response::{
    AddedCommentData, AddedReplyData, AddedThreadData, StatusResponse, SuccessResponse,
    ThreadData,
};
