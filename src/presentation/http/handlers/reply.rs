//! Reply Handlers

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};

use crate::application::dto::{AddContentRequest, AddedReplyData, StatusResponse, SuccessResponse};
use crate::application::services::ReplyError;
use crate::presentation::http::extractors::Owner;
use crate::shared::error::AppError;
use crate::startup::AppState;

fn map_reply_error(error: ReplyError) -> AppError {
    match error {
        ReplyError::ThreadNotFound => AppError::NotFound("Thread tidak ditemukan".into()),
        ReplyError::CommentNotFound => AppError::NotFound("Comment tidak ditemukan".into()),
        ReplyError::ReplyNotFound => AppError::NotFound("Balasan tidak ditemukan".into()),
        ReplyError::Forbidden => {
            AppError::Forbidden("Anda tidak berhak mengakses resource ini!".into())
        }
        e => AppError::Internal(e.to_string()),
    }
}

/// Reply to a comment
pub async fn add_reply(
    State(state): State<AppState>,
    Owner(owner): Owner,
    Path((thread_id, comment_id)): Path<(String, String)>,
    payload: Result<Json<AddContentRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<SuccessResponse<AddedReplyData>>), AppError> {
    let Json(body) =
        payload.map_err(|_| AppError::BadRequest("balasan harus berupa string".into()))?;

    let added = state
        .replies
        .add_reply(&thread_id, &comment_id, &owner, &body.content)
        .await
        .map_err(map_reply_error)?;

    Ok((StatusCode::CREATED, Json(SuccessResponse::from(added))))
}

/// Soft-delete a reply owned by the caller
pub async fn delete_reply(
    State(state): State<AppState>,
    Owner(owner): Owner,
    Path((thread_id, comment_id, reply_id)): Path<(String, String, String)>,
) -> Result<Json<StatusResponse>, AppError> {
    state
        .replies
        .delete_reply(&thread_id, &comment_id, &reply_id, &owner)
        .await
        .map_err(map_reply_error)?;

    Ok(Json(StatusResponse::success()))
}
