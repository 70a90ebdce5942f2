// ABOUTME: Task management types and storage layer
// ABOUTME: Provides CRUD operations and storage backends for tasks

pub mod storage;
pub mod types;

pub use storage::*;
pub use types::*;
