use async_trait::async_trait;
use thiserror::Error;

use crate::types::{Task, TaskCreateInput, TaskUpdateInput};

// Re-export modules
pub mod memory;
pub mod sqlite;

pub use memory::MemoryTaskStorage;
pub use sqlite::SqliteTaskStorage;

/// Storage errors
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Invalid task id: {0}")]
    InvalidId(String),
    #[error("Task not found")]
    NotFound,
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Database error: {0}")]
    Database(String),
    #[error("Sqlx error: {0}")]
    Sqlx(#[from] sqlx::Error),
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Main storage trait that all task storage implementations must implement
#[async_trait]
pub trait TaskStorage: Send + Sync {
    // Initialization
    async fn initialize(&self) -> StorageResult<()>;

    // Core CRUD operations
    async fn create_task(&self, input: TaskCreateInput) -> StorageResult<Task>;
    async fn get_task(&self, id: &str) -> StorageResult<Option<Task>>;
    async fn list_tasks(&self) -> StorageResult<Vec<Task>>;
    async fn update_task(&self, id: &str, input: TaskUpdateInput) -> StorageResult<Task>;
    async fn delete_task(&self, id: &str) -> StorageResult<bool>;
    async fn delete_all_tasks(&self) -> StorageResult<u64>;

    // Storage information
    async fn count_tasks(&self) -> StorageResult<u64>;
    async fn ping(&self) -> StorageResult<()>;
}

/// Generate a unique task ID
pub fn generate_task_id() -> String {
    use uuid::Uuid;
    Uuid::new_v4().to_string()
}
