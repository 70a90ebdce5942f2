use std::time::{SystemTime, UNIX_EPOCH};

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde_json::{json, Value};
use tracing::error;

use crate::state::AppState;

/// Service banner with the available endpoints
pub async fn root() -> Json<Value> {
    Json(json!({
        "message": "Taskdeck API is running",
        "endpoints": [
            "GET /health",
            "GET /tasks",
            "POST /tasks",
            "GET /tasks/{id}",
            "PUT /tasks/{id}",
            "DELETE /tasks/{id}",
            "DELETE /tasks"
        ]
    }))
}

/// Liveness plus storage reachability and current task count
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();

    let count = match state.task_storage.ping().await {
        Ok(()) => state.task_storage.count_tasks().await,
        Err(e) => Err(e),
    };

    match count {
        Ok(tasks) => (
            StatusCode::OK,
            Json(json!({
                "status": "healthy",
                "timestamp": timestamp,
                "version": env!("CARGO_PKG_VERSION"),
                "service": "taskdeck",
                "tasks": tasks
            })),
        ),
        Err(e) => {
            error!("Storage unreachable: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({
                    "status": "unavailable",
                    "timestamp": timestamp,
                    "version": env!("CARGO_PKG_VERSION"),
                    "service": "taskdeck",
                    "error": e.to_string()
                })),
            )
        }
    }
}
