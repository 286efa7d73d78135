//! Thread Handlers

use std::time::Instant;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};

use crate::application::dto::{AddThreadRequest, AddedThreadData, SuccessResponse, ThreadData};
use crate::application::services::{CreateThreadDto, ThreadError};
use crate::infrastructure::metrics;
use crate::presentation::http::extractors::Owner;
use crate::shared::error::AppError;
use crate::startup::AppState;

fn map_thread_error(error: ThreadError) -> AppError {
    match error {
        ThreadError::ThreadNotFound => AppError::NotFound("Thread tidak ditemukan".into()),
        e => AppError::Internal(e.to_string()),
    }
}

/// Create a thread
pub async fn add_thread(
    State(state): State<AppState>,
    Owner(owner): Owner,
    payload: Result<Json<AddThreadRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<SuccessResponse<AddedThreadData>>), AppError> {
    let Json(body) = payload.map_err(|e| {
        AppError::BadRequest(format!("tidak dapat membuat thread baru: {}", e.body_text()))
    })?;

    let added = state
        .threads
        .add_thread(
            &owner,
            CreateThreadDto {
                title: body.title,
                body: body.body,
            },
        )
        .await
        .map_err(map_thread_error)?;

    Ok((StatusCode::CREATED, Json(SuccessResponse::from(added))))
}

/// Get a thread with its comments and replies
pub async fn get_thread(
    State(state): State<AppState>,
    Path(thread_id): Path<String>,
) -> Result<Json<SuccessResponse<ThreadData>>, AppError> {
    let started = Instant::now();
    let result = state.threads.get_thread(&thread_id).await;

    let outcome = match &result {
        Ok(_) => "found",
        Err(ThreadError::ThreadNotFound) => "not_found",
        Err(_) => "error",
    };
    metrics::record_thread_view(outcome, started.elapsed().as_secs_f64());

    let view = result.map_err(map_thread_error)?;

    Ok(Json(SuccessResponse::from(view)))
}
