use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Response;
use axum::Json;
use tracing::info;

use common::types::ApiResponse;
use service::comment::domain::CommentDraft;

use crate::envelope::respond;
use crate::errors::ApiError;
use crate::routes::ServerState;

/// The path id must be a non-negative integer that fits the storage key.
fn parse_comment_id(raw: &str) -> Result<i64, ApiError> {
    raw.parse::<u64>()
        .ok()
        .and_then(|v| i64::try_from(v).ok())
        .ok_or_else(|| {
            ApiError::new(
                StatusCode::BAD_REQUEST,
                "Unable to parse comment ID",
                Some(format!("invalid comment id {:?}", raw)),
            )
        })
}

fn decode_draft(payload: Result<Json<CommentDraft>, JsonRejection>) -> Result<CommentDraft, ApiError> {
    let Json(draft) = payload.map_err(|e| {
        ApiError::new(StatusCode::BAD_REQUEST, "Failed to decode JSON body", Some(e.to_string()))
    })?;
    Ok(draft)
}

/// Liveness probe; unconditional, never touches storage.
pub async fn health() -> Response {
    respond(StatusCode::OK, &ApiResponse::message("I am Alive"))
}

pub async fn get_all_comments(State(state): State<ServerState>) -> Result<Response, ApiError> {
    let comments = state.comments.get_all_comments().await?;
    info!(count = comments.len(), "listed comments");
    Ok(respond(StatusCode::OK, &comments))
}

pub async fn get_comment(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    let id = parse_comment_id(&id)?;
    let comment = state.comments.get_comment(id).await?;
    Ok(respond(StatusCode::OK, &comment))
}

pub async fn post_comment(
    State(state): State<ServerState>,
    payload: Result<Json<CommentDraft>, JsonRejection>,
) -> Result<Response, ApiError> {
    let draft = decode_draft(payload)?;
    let created = state.comments.post_comment(draft).await?;
    info!(id = created.id, slug = %created.slug, "created comment");
    Ok(respond(StatusCode::CREATED, &created))
}

pub async fn update_comment(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    payload: Result<Json<CommentDraft>, JsonRejection>,
) -> Result<Response, ApiError> {
    let id = parse_comment_id(&id)?;
    let draft = decode_draft(payload)?;
    let updated = state.comments.update_comment(id, draft).await?;
    info!(id = updated.id, "updated comment");
    Ok(respond(StatusCode::OK, &updated))
}

pub async fn delete_comment(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    let id = parse_comment_id(&id)?;
    state.comments.delete_comment(id).await?;
    info!(id, "deleted comment");
    Ok(respond(StatusCode::OK, &ApiResponse::message("Successfully deleted comment")))
}
