// ABOUTME: HTTP request handlers for task operations
// ABOUTME: Handles CRUD operations for tasks against the storage backend

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json as ResponseJson},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::response::{storage_error_response, task_not_found};
use crate::state::AppState;
use taskdeck_tasks::{TaskCreateInput, TaskUpdateInput};

/// Request body for creating a task
#[derive(Deserialize)]
pub struct CreateTaskRequest {
    pub text: String,
    pub completed: Option<bool>,
}

/// Request body for updating a task
#[derive(Deserialize)]
pub struct UpdateTaskRequest {
    pub text: Option<String>,
    pub completed: Option<bool>,
}

/// Response for single-task deletion
#[derive(Serialize)]
pub struct DeleteTaskResponse {
    pub message: String,
    pub id: String,
}

/// Response for deleting every task
#[derive(Serialize)]
pub struct DeleteAllTasksResponse {
    pub message: String,
    pub deleted_count: u64,
    pub previous_count: u64,
}

/// List all tasks
pub async fn list_tasks(State(state): State<AppState>) -> impl IntoResponse {
    info!("Listing all tasks");

    match state.task_storage.list_tasks().await {
        Ok(tasks) => {
            info!("Retrieved {} tasks", tasks.len());
            (StatusCode::OK, ResponseJson(tasks)).into_response()
        }
        Err(e) => {
            error!("Failed to list tasks: {}", e);
            storage_error_response(e)
        }
    }
}

/// Get a single task by ID
pub async fn get_task(State(state): State<AppState>, Path(id): Path<String>) -> impl IntoResponse {
    info!("Getting task: {}", id);

    match state.task_storage.get_task(&id).await {
        Ok(Some(task)) => (StatusCode::OK, ResponseJson(task)).into_response(),
        Ok(None) => {
            info!("Task not found: {}", id);
            task_not_found()
        }
        Err(e) => {
            error!("Failed to get task {}: {}", id, e);
            storage_error_response(e)
        }
    }
}

/// Create a new task
pub async fn create_task(
    State(state): State<AppState>,
    Json(request): Json<CreateTaskRequest>,
) -> impl IntoResponse {
    info!("Creating task: {}", request.text);

    let input = TaskCreateInput {
        text: request.text,
        completed: request.completed,
    };

    match state.task_storage.create_task(input).await {
        Ok(task) => {
            info!("Created task with ID {}", task.id);
            (StatusCode::CREATED, ResponseJson(task)).into_response()
        }
        Err(e) => {
            error!("Failed to create task: {}", e);
            storage_error_response(e)
        }
    }
}

/// Update an existing task
pub async fn update_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<UpdateTaskRequest>,
) -> impl IntoResponse {
    info!("Updating task: {}", id);

    let input = TaskUpdateInput {
        text: request.text,
        completed: request.completed,
    };

    match state.task_storage.update_task(&id, input).await {
        Ok(task) => {
            info!("Updated task: {}", task.id);
            (StatusCode::OK, ResponseJson(task)).into_response()
        }
        Err(e) => {
            error!("Failed to update task {}: {}", id, e);
            storage_error_response(e)
        }
    }
}

/// Delete a task by ID
pub async fn delete_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    info!("Deleting task: {}", id);

    match state.task_storage.delete_task(&id).await {
        Ok(true) => {
            info!("Deleted task: {}", id);
            (
                StatusCode::OK,
                ResponseJson(DeleteTaskResponse {
                    message: "Task deleted successfully".to_string(),
                    id,
                }),
            )
                .into_response()
        }
        Ok(false) => {
            info!("Task not found for deletion: {}", id);
            task_not_found()
        }
        Err(e) => {
            error!("Failed to delete task {}: {}", id, e);
            storage_error_response(e)
        }
    }
}

/// Delete all tasks
pub async fn delete_all_tasks(State(state): State<AppState>) -> impl IntoResponse {
    info!("Deleting all tasks");

    let previous_count = match state.task_storage.count_tasks().await {
        Ok(count) => count,
        Err(e) => {
            error!("Failed to count tasks before deletion: {}", e);
            return storage_error_response(e);
        }
    };

    match state.task_storage.delete_all_tasks().await {
        Ok(deleted_count) => {
            info!("Deleted {} tasks", deleted_count);
            (
                StatusCode::OK,
                ResponseJson(DeleteAllTasksResponse {
                    message: "All tasks deleted successfully".to_string(),
                    deleted_count,
                    previous_count,
                }),
            )
                .into_response()
        }
        Err(e) => {
            error!("Failed to delete all tasks: {}", e);
            storage_error_response(e)
        }
    }
}
