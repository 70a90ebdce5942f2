// ABOUTME: Shared API error payload and status mapping
// ABOUTME: Classifies storage errors once, at the API boundary

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json as ResponseJson, Response},
};
use serde::Serialize;

use taskdeck_tasks::StorageError;

/// Error payload returned by every failing endpoint
#[derive(Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Convert a storage error to an HTTP response.
///
/// Already-classified errors (malformed id, not found) keep their client
/// status; anything else surfaces as 500 carrying the underlying message.
pub fn storage_error_response(err: StorageError) -> Response {
    let status = match &err {
        StorageError::InvalidId(_) => StatusCode::BAD_REQUEST,
        StorageError::NotFound => StatusCode::NOT_FOUND,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };

    (
        status,
        ResponseJson(ErrorBody {
            error: err.to_string(),
        }),
    )
        .into_response()
}

/// 404 response for lookups that matched no task
pub fn task_not_found() -> Response {
    storage_error_response(StorageError::NotFound)
}
