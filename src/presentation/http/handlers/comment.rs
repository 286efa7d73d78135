//! Comment Handlers

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};

use crate::application::dto::{AddContentRequest, AddedCommentData, StatusResponse, SuccessResponse};
use crate::application::services::CommentError;
use crate::presentation::http::extractors::Owner;
use crate::shared::error::AppError;
use crate::startup::AppState;

fn map_comment_error(error: CommentError) -> AppError {
    match error {
        CommentError::ThreadNotFound => AppError::NotFound("Thread tidak ditemukan".into()),
        CommentError::CommentNotFound => AppError::NotFound("Comment tidak ditemukan".into()),
        CommentError::Forbidden => {
            AppError::Forbidden("Anda tidak berhak mengakses resource ini!".into())
        }
        e => AppError::Internal(e.to_string()),
    }
}

/// Add a comment to a thread
pub async fn add_comment(
    State(state): State<AppState>,
    Owner(owner): Owner,
    Path(thread_id): Path<String>,
    payload: Result<Json<AddContentRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<SuccessResponse<AddedCommentData>>), AppError> {
    let Json(body) =
        payload.map_err(|_| AppError::BadRequest("comment harus berupa string".into()))?;

    let added = state
        .comments
        .add_comment(&thread_id, &owner, &body.content)
        .await
        .map_err(map_comment_error)?;

    Ok((StatusCode::CREATED, Json(SuccessResponse::from(added))))
}

/// Soft-delete a comment owned by the caller
pub async fn delete_comment(
    State(state): State<AppState>,
    Owner(owner): Owner,
    Path((thread_id, comment_id)): Path<(String, String)>,
) -> Result<Json<StatusResponse>, AppError> {
    state
        .comments
        .delete_comment(&thread_id, &comment_id, &owner)
        .await
        .map_err(map_comment_error)?;

    Ok(Json(StatusResponse::success()))
}
