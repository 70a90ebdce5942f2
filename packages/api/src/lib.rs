// ABOUTME: HTTP API layer for Taskdeck providing REST endpoints and routing
// ABOUTME: Maps each route to a single storage call through shared state

use axum::{
    routing::{delete, get, post, put},
    Router,
};

pub mod health;
pub mod response;
pub mod state;
pub mod tasks_handlers;

pub use state::AppState;

/// Creates the tasks API router
pub fn create_tasks_router() -> Router<AppState> {
    Router::new()
        .route("/", get(tasks_handlers::list_tasks))
        .route("/", post(tasks_handlers::create_task))
        .route("/", delete(tasks_handlers::delete_all_tasks))
        .route("/{id}", get(tasks_handlers::get_task))
        .route("/{id}", put(tasks_handlers::update_task))
        .route("/{id}", delete(tasks_handlers::delete_task))
}

/// Creates the full application router over the given state
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::root))
        .route("/health", get(health::health_check))
        .nest("/tasks", create_tasks_router())
        .with_state(state)
}
