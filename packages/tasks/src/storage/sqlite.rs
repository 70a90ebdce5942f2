// ABOUTME: Persistent task storage layer using SQLite
// ABOUTME: Handles CRUD operations for tasks with creation-time ordering

use std::str::FromStr;
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions, SqliteRow};
use sqlx::{Row, SqlitePool};
use tracing::{debug, info};
use uuid::Uuid;

use super::{generate_task_id, StorageError, StorageResult, TaskStorage};
use crate::types::{Task, TaskCreateInput, TaskUpdateInput};

/// Persistent task storage backed by a SQLite connection pool.
///
/// Identifiers must have UUID shape; a malformed id fails with
/// `StorageError::InvalidId` before any query runs. Listing returns tasks
/// newest-created first.
pub struct SqliteTaskStorage {
    pool: SqlitePool,
}

impl SqliteTaskStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open a connection pool for the given database URL
    pub async fn connect(database_url: &str) -> StorageResult<Self> {
        debug!("Connecting to database: {}", database_url);

        let options = SqliteConnectOptions::from_str(database_url)
            .map_err(StorageError::Sqlx)?
            .create_if_missing(true);

        // Configure connection pool
        let pool = SqlitePoolOptions::new()
            .max_connections(10)
            .acquire_timeout(Duration::from_secs(30))
            .connect_with(options)
            .await
            .map_err(StorageError::Sqlx)?;

        // Configure SQLite settings
        sqlx::query("PRAGMA journal_mode = WAL")
            .execute(&pool)
            .await
            .map_err(StorageError::Sqlx)?;

        sqlx::query("PRAGMA synchronous = NORMAL")
            .execute(&pool)
            .await
            .map_err(StorageError::Sqlx)?;

        info!("Database connection established");

        Ok(Self::new(pool))
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    fn require_valid_id(&self, id: &str) -> StorageResult<()> {
        Uuid::parse_str(id)
            .map(|_| ())
            .map_err(|_| StorageError::InvalidId(id.to_string()))
    }

    async fn fetch_task(&self, id: &str) -> StorageResult<Option<Task>> {
        let row = sqlx::query("SELECT * FROM tasks WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(StorageError::Sqlx)?;

        row.as_ref().map(row_to_task).transpose()
    }
}

/// Map a storage row to the task entity
fn row_to_task(row: &SqliteRow) -> StorageResult<Task> {
    Ok(Task {
        id: row.try_get("id")?,
        text: row.try_get("text")?,
        completed: row.try_get("completed")?,
        created_at: row.try_get("created_at")?,
        updated_at: row.try_get("updated_at")?,
    })
}

#[async_trait]
impl TaskStorage for SqliteTaskStorage {
    async fn initialize(&self) -> StorageResult<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS tasks (
                id TEXT PRIMARY KEY,
                text TEXT NOT NULL,
                completed INTEGER NOT NULL DEFAULT 0,
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await
        .map_err(StorageError::Sqlx)?;

        debug!("Task schema ready");
        Ok(())
    }

    async fn create_task(&self, input: TaskCreateInput) -> StorageResult<Task> {
        let now = Utc::now();
        let task = Task {
            id: generate_task_id(),
            text: input.text,
            completed: input.completed.unwrap_or(false),
            created_at: Some(now),
            updated_at: Some(now),
        };

        sqlx::query(
            r#"
            INSERT INTO tasks (id, text, completed, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(&task.id)
        .bind(&task.text)
        .bind(task.completed)
        .bind(task.created_at)
        .bind(task.updated_at)
        .execute(&self.pool)
        .await
        .map_err(StorageError::Sqlx)?;

        debug!("Created task: {}", task.id);
        Ok(task)
    }

    async fn get_task(&self, id: &str) -> StorageResult<Option<Task>> {
        self.require_valid_id(id)?;
        self.fetch_task(id).await
    }

    async fn list_tasks(&self) -> StorageResult<Vec<Task>> {
        let rows = sqlx::query("SELECT * FROM tasks ORDER BY created_at DESC")
            .fetch_all(&self.pool)
            .await
            .map_err(StorageError::Sqlx)?;

        rows.iter().map(row_to_task).collect()
    }

    async fn update_task(&self, id: &str, input: TaskUpdateInput) -> StorageResult<Task> {
        self.require_valid_id(id)?;
        debug!("Updating task: {}", id);

        // Only explicitly supplied fields change; updated_at always refreshes
        let result = sqlx::query(
            r#"
            UPDATE tasks
            SET text = COALESCE(?, text),
                completed = COALESCE(?, completed),
                updated_at = ?
            WHERE id = ?
            "#,
        )
        .bind(&input.text)
        .bind(input.completed)
        .bind(Utc::now())
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(StorageError::Sqlx)?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        self.fetch_task(id).await?.ok_or(StorageError::NotFound)
    }

    async fn delete_task(&self, id: &str) -> StorageResult<bool> {
        self.require_valid_id(id)?;

        let result = sqlx::query("DELETE FROM tasks WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(StorageError::Sqlx)?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_all_tasks(&self) -> StorageResult<u64> {
        let result = sqlx::query("DELETE FROM tasks")
            .execute(&self.pool)
            .await
            .map_err(StorageError::Sqlx)?;

        info!("Deleted {} tasks", result.rows_affected());
        Ok(result.rows_affected())
    }

    async fn count_tasks(&self) -> StorageResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM tasks")
            .fetch_one(&self.pool)
            .await
            .map_err(StorageError::Sqlx)?;

        Ok(count as u64)
    }

    async fn ping(&self) -> StorageResult<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(StorageError::Sqlx)?;

        Ok(())
    }
}
