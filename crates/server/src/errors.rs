use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tracing::error;

use common::types::ApiResponse;
use service::errors::ServiceError;

use crate::envelope::respond;

/// Transport-level error: a status code plus the envelope fields.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
    pub detail: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: &str, detail: Option<String>) -> Self {
        Self { status, message: message.to_string(), detail: detail.unwrap_or_default() }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        respond(self.status, &ApiResponse { message: self.message, error: self.detail })
    }
}

impl From<ServiceError> for ApiError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::Validation(_) => {
                ApiError::new(StatusCode::BAD_REQUEST, "Validation Error", Some(e.to_string()))
            }
            ServiceError::NotFound(_) => {
                ApiError::new(StatusCode::NOT_FOUND, "Not Found", Some(e.to_string()))
            }
            ServiceError::Timeout => {
                error!(err = %e, "storage operation timed out");
                // Clients get a diagnostic code only; the cause stays in the log.
                ApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error", Some("storage_timeout".into()))
            }
            ServiceError::Storage(_) => {
                error!(err = %e, "storage failure");
                ApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error", Some("storage_error".into()))
            }
        }
    }
}
