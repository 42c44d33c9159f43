use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use tracing::error;

use common::types::ApiResponse;

/// Content type stamped on every response body.
pub const JSON_CONTENT_TYPE: &str = "application/json; charset=UTF-8";

/// Encode `body` as JSON with the API content type. An encode failure is
/// logged and answered with a 500 envelope; it never takes the process down.
pub fn respond<T: Serialize>(status: StatusCode, body: &T) -> Response {
    match serde_json::to_vec(body) {
        Ok(buf) => (status, [(header::CONTENT_TYPE, JSON_CONTENT_TYPE)], buf).into_response(),
        Err(e) => {
            error!(error = %e, "failed to encode response body");
            let fallback = ApiResponse::error("Internal Server Error", "encode_error");
            let buf = serde_json::to_vec(&fallback).unwrap_or_default();
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                [(header::CONTENT_TYPE, JSON_CONTENT_TYPE)],
                buf,
            )
                .into_response()
        }
    }
}
