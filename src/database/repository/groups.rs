//! Group CRUD

use super::Repository;
use crate::config::MAX_GROUP_NAME_CHARS;
use crate::database::models::Group;
use crate::database::now_ms;
use crate::error::{AppError, Result};

impl Repository {
    /// List all groups, ascending by id for a stable display order.
    pub async fn list_groups(&self) -> Result<Vec<Group>> {
        let groups = sqlx::query_as::<_, Group>(
            "SELECT id, name, created_at, updated_at FROM groups ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(groups)
    }

    /// Create or rename a group. `id == 0` inserts, `id > 0` renames.
    pub async fn upsert_group(&self, id: i64, name: &str) -> Result<Group> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::Validation(
                "Group name cannot be empty".to_string(),
            ));
        }
        if name.chars().count() > MAX_GROUP_NAME_CHARS {
            return Err(AppError::Validation(format!(
                "Group name too long (max {} characters)",
                MAX_GROUP_NAME_CHARS
            )));
        }

        let now = now_ms();

        if id == 0 {
            let group = sqlx::query_as::<_, Group>(
                r#"
                INSERT INTO groups (name, created_at, updated_at)
                VALUES (?, ?, ?)
                RETURNING *
                "#,
            )
            .bind(name)
            .bind(now)
            .bind(now)
            .fetch_one(&self.pool)
            .await
            .map_err(map_unique_violation)?;

            tracing::debug!("Created group: {}", group.id);
            return Ok(group);
        }

        let rows_affected = sqlx::query("UPDATE groups SET name = ?, updated_at = ? WHERE id = ?")
            .bind(name)
            .bind(now)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_unique_violation)?
            .rows_affected();

        if rows_affected == 0 {
            return Err(AppError::GroupNotFound(id));
        }

        let group = sqlx::query_as::<_, Group>(
            "SELECT id, name, created_at, updated_at FROM groups WHERE id = ?",
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await?;

        tracing::debug!("Renamed group: {}", group.id);
        Ok(group)
    }

    /// Delete a group. Owned tasks are removed by the cascading foreign key;
    /// no separate task deletion happens here.
    pub async fn delete_group(&self, id: i64) -> Result<()> {
        if id <= 0 {
            return Err(AppError::Validation("Invalid group id".to_string()));
        }

        let rows_affected = sqlx::query("DELETE FROM groups WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?
            .rows_affected();

        if rows_affected == 0 {
            return Err(AppError::GroupNotFound(id));
        }

        tracing::debug!("Deleted group: {}", id);
        Ok(())
    }

    /// Existence probe used before task writes so the error names the group
    /// instead of surfacing a foreign-key failure.
    pub(crate) async fn group_exists(&self, id: i64) -> Result<bool> {
        let found: Option<i64> = sqlx::query_scalar("SELECT id FROM groups WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(found.is_some())
    }
}

/// Map a UNIQUE violation on groups.name to the duplicate-name error. Other
/// constraint kinds pass through as database errors.
fn map_unique_violation(err: sqlx::Error) -> AppError {
    match err {
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
            AppError::DuplicateGroupName
        }
        other => other.into(),
    }
}
