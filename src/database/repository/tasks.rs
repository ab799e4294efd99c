//! Task CRUD and validation
//!
//! The heaviest surface of the store: every write runs the full validation
//! chain before any statement executes, so the frontend gets stable
//! messages instead of engine error text.

use super::Repository;
use crate::config::{MAX_TASK_CONTENT_CHARS, MAX_TASK_TITLE_CHARS};
use crate::database::models::{Status, Task, UpsertTaskRequest};
use crate::database::now_ms;
use crate::error::{AppError, Result};

impl Repository {
    /// List all tasks, most recently touched first. Ties on updated_at are
    /// broken by id descending so the order stays deterministic when
    /// several writes land in the same millisecond.
    pub async fn list_tasks(&self) -> Result<Vec<Task>> {
        let tasks = sqlx::query_as::<_, Task>(
            r#"
            SELECT id, group_id, title, content, status, important, urgent, created_at, updated_at
            FROM tasks
            ORDER BY updated_at DESC, id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(tasks)
    }

    /// Create or update a task, returning the persisted row.
    ///
    /// The owning group is checked explicitly rather than left to the
    /// foreign key, so a dangling group_id reports which group is missing.
    pub async fn upsert_task(&self, req: UpsertTaskRequest) -> Result<Task> {
        let title = req.title.trim();
        let content = req.content.trim();

        if req.group_id <= 0 {
            return Err(AppError::Validation(
                "A group must be selected".to_string(),
            ));
        }
        if !self.group_exists(req.group_id).await? {
            return Err(AppError::GroupNotFound(req.group_id));
        }
        if title.is_empty() {
            return Err(AppError::Validation(
                "Task title cannot be empty".to_string(),
            ));
        }
        if title.chars().count() > MAX_TASK_TITLE_CHARS {
            return Err(AppError::Validation(format!(
                "Task title too long (max {} characters)",
                MAX_TASK_TITLE_CHARS
            )));
        }
        if content.chars().count() > MAX_TASK_CONTENT_CHARS {
            return Err(AppError::Validation(format!(
                "Task content too long (max {} characters)",
                MAX_TASK_CONTENT_CHARS
            )));
        }
        let status = Status::parse(&req.status)?;

        let now = now_ms();

        if req.id == 0 {
            let task = sqlx::query_as::<_, Task>(
                r#"
                INSERT INTO tasks (group_id, title, content, status, important, urgent, created_at, updated_at)
                VALUES (?, ?, ?, ?, ?, ?, ?, ?)
                RETURNING *
                "#,
            )
            .bind(req.group_id)
            .bind(title)
            .bind(content)
            .bind(status)
            .bind(req.important)
            .bind(req.urgent)
            .bind(now)
            .bind(now)
            .fetch_one(&self.pool)
            .await?;

            tracing::debug!("Created task: {}", task.id);
            return Ok(task);
        }

        let rows_affected = sqlx::query(
            r#"
            UPDATE tasks
            SET group_id = ?, title = ?, content = ?, status = ?, important = ?, urgent = ?, updated_at = ?
            WHERE id = ?
            "#,
        )
        .bind(req.group_id)
        .bind(title)
        .bind(content)
        .bind(status)
        .bind(req.important)
        .bind(req.urgent)
        .bind(now)
        .bind(req.id)
        .execute(&self.pool)
        .await?
        .rows_affected();

        if rows_affected == 0 {
            return Err(AppError::TaskNotFound(req.id));
        }

        // Re-read so the caller sees exactly what was persisted.
        let task = sqlx::query_as::<_, Task>(
            "SELECT id, group_id, title, content, status, important, urgent, created_at, updated_at FROM tasks WHERE id = ?",
        )
        .bind(req.id)
        .fetch_one(&self.pool)
        .await?;

        tracing::debug!("Updated task: {}", task.id);
        Ok(task)
    }

    /// Delete a task.
    pub async fn delete_task(&self, id: i64) -> Result<()> {
        if id <= 0 {
            return Err(AppError::Validation("Invalid task id".to_string()));
        }

        let rows_affected = sqlx::query("DELETE FROM tasks WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?
            .rows_affected();

        if rows_affected == 0 {
            return Err(AppError::TaskNotFound(id));
        }

        tracing::debug!("Deleted task: {}", id);
        Ok(())
    }
}
