// ABOUTME: Shared application state for API handlers
// ABOUTME: Holds the injected storage backend behind the TaskStorage trait

use std::sync::Arc;

use taskdeck_tasks::TaskStorage;

/// Shared state for API handlers
#[derive(Clone)]
pub struct AppState {
    pub task_storage: Arc<dyn TaskStorage>,
}

impl AppState {
    pub fn new(task_storage: Arc<dyn TaskStorage>) -> Self {
        Self { task_storage }
    }
}
