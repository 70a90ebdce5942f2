// ABOUTME: In-memory task storage backed by an insertion-ordered collection
// ABOUTME: Ephemeral state whose lifetime equals the owning store value

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use super::{generate_task_id, StorageError, StorageResult, TaskStorage};
use crate::types::{Task, TaskCreateInput, TaskUpdateInput};

/// Ephemeral task storage with insertion-order listing.
///
/// All access is serialized through a single RwLock, so delete-all swaps the
/// collection under the write guard and cannot race concurrent writers.
/// Lookup accepts any string key; an unknown id is reported as absent, never
/// as malformed. Timestamps are not tracked.
#[derive(Default)]
pub struct MemoryTaskStorage {
    tasks: RwLock<Vec<Task>>,
}

impl MemoryTaskStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TaskStorage for MemoryTaskStorage {
    async fn initialize(&self) -> StorageResult<()> {
        Ok(())
    }

    async fn create_task(&self, input: TaskCreateInput) -> StorageResult<Task> {
        let task = Task {
            id: generate_task_id(),
            text: input.text,
            completed: input.completed.unwrap_or(false),
            created_at: None,
            updated_at: None,
        };

        let mut tasks = self.tasks.write().await;
        tasks.push(task.clone());
        debug!("Created task {} ({} total)", task.id, tasks.len());
        Ok(task)
    }

    async fn get_task(&self, id: &str) -> StorageResult<Option<Task>> {
        let tasks = self.tasks.read().await;
        Ok(tasks.iter().find(|t| t.id == id).cloned())
    }

    async fn list_tasks(&self) -> StorageResult<Vec<Task>> {
        Ok(self.tasks.read().await.clone())
    }

    async fn update_task(&self, id: &str, input: TaskUpdateInput) -> StorageResult<Task> {
        let mut tasks = self.tasks.write().await;
        let task = tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(StorageError::NotFound)?;

        if let Some(text) = input.text {
            task.text = text;
        }
        if let Some(completed) = input.completed {
            task.completed = completed;
        }

        debug!("Updated task {}", task.id);
        Ok(task.clone())
    }

    async fn delete_task(&self, id: &str) -> StorageResult<bool> {
        let mut tasks = self.tasks.write().await;
        let before = tasks.len();
        tasks.retain(|t| t.id != id);
        Ok(tasks.len() < before)
    }

    async fn delete_all_tasks(&self) -> StorageResult<u64> {
        let mut tasks = self.tasks.write().await;
        let removed = tasks.len() as u64;
        tasks.clear();
        debug!("Deleted all {} tasks", removed);
        Ok(removed)
    }

    async fn count_tasks(&self) -> StorageResult<u64> {
        Ok(self.tasks.read().await.len() as u64)
    }

    async fn ping(&self) -> StorageResult<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_input(text: &str) -> TaskCreateInput {
        TaskCreateInput {
            text: text.to_string(),
            completed: None,
        }
    }

    #[tokio::test]
    async fn test_create_defaults_completed_to_false() {
        let storage = MemoryTaskStorage::new();

        let task = storage.create_task(create_input("buy milk")).await.unwrap();

        assert_eq!(task.text, "buy milk");
        assert!(!task.completed);
        assert!(task.created_at.is_none(), "memory backend tracks no timestamps");
        assert!(task.updated_at.is_none());
    }

    #[tokio::test]
    async fn test_list_preserves_insertion_order() {
        let storage = MemoryTaskStorage::new();

        let first = storage.create_task(create_input("first")).await.unwrap();
        let second = storage.create_task(create_input("second")).await.unwrap();
        let third = storage.create_task(create_input("third")).await.unwrap();

        let tasks = storage.list_tasks().await.unwrap();
        let ids: Vec<&str> = tasks.iter().map(|t| t.id.as_str()).collect();

        assert_eq!(ids, vec![&first.id, &second.id, &third.id]);
    }

    #[tokio::test]
    async fn test_created_task_listed_exactly_once() {
        let storage = MemoryTaskStorage::new();

        let task = storage.create_task(create_input("only once")).await.unwrap();

        let tasks = storage.list_tasks().await.unwrap();
        let matches = tasks.iter().filter(|t| t.id == task.id).count();
        assert_eq!(matches, 1);
    }

    #[tokio::test]
    async fn test_get_unknown_id_is_absent_not_an_error() {
        let storage = MemoryTaskStorage::new();

        // Any string is a valid lookup key for the memory backend
        let result = storage.get_task("definitely-not-a-uuid").await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_update_only_completed_leaves_text() {
        let storage = MemoryTaskStorage::new();
        let task = storage.create_task(create_input("keep me")).await.unwrap();

        let updated = storage
            .update_task(
                &task.id,
                TaskUpdateInput {
                    text: None,
                    completed: Some(true),
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.text, "keep me");
        assert!(updated.completed);
    }

    #[tokio::test]
    async fn test_update_missing_task_is_not_found() {
        let storage = MemoryTaskStorage::new();

        let result = storage
            .update_task("missing", TaskUpdateInput::default())
            .await;

        assert!(matches!(result, Err(StorageError::NotFound)));
    }

    #[tokio::test]
    async fn test_delete_missing_task_leaves_collection_unchanged() {
        let storage = MemoryTaskStorage::new();
        storage.create_task(create_input("survivor")).await.unwrap();

        let deleted = storage.delete_task("missing").await.unwrap();

        assert!(!deleted);
        assert_eq!(storage.count_tasks().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_delete_all_empties_collection() {
        let storage = MemoryTaskStorage::new();
        storage.create_task(create_input("one")).await.unwrap();
        storage.create_task(create_input("two")).await.unwrap();

        let removed = storage.delete_all_tasks().await.unwrap();

        assert_eq!(removed, 2);
        assert!(storage.list_tasks().await.unwrap().is_empty());
        assert_eq!(storage.count_tasks().await.unwrap(), 0);
    }
}
