//! Database schema and migrations
//!
//! Schema evolution is idempotent rather than version-ledgered: every step
//! either carries IF NOT EXISTS or is guarded by column introspection, so
//! the whole sequence is safe to re-run on every startup. New steps are
//! appended to the data below, never woven into conditional code.

use crate::error::Result;
use sqlx::{Row, SqlitePool};
use std::collections::HashSet;

/// Ordered DDL applied on every startup. Each statement is a no-op when the
/// object it creates already exists.
const SCHEMA_STATEMENTS: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS groups (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL UNIQUE,
        created_at INTEGER NOT NULL,
        updated_at INTEGER NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS tasks (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        group_id INTEGER NOT NULL REFERENCES groups(id) ON DELETE CASCADE,
        title TEXT NOT NULL,
        content TEXT NOT NULL DEFAULT '',
        status TEXT NOT NULL CHECK (status IN ('todo','doing','done')),
        important INTEGER NOT NULL DEFAULT 0 CHECK (important IN (0,1)),
        urgent INTEGER NOT NULL DEFAULT 0 CHECK (urgent IN (0,1)),
        created_at INTEGER NOT NULL,
        updated_at INTEGER NOT NULL
    )
    "#,
    "CREATE INDEX IF NOT EXISTS idx_tasks_group_status ON tasks(group_id, status)",
    r#"
    CREATE TABLE IF NOT EXISTS settings (
        key TEXT PRIMARY KEY,
        value TEXT NOT NULL
    )
    "#,
];

/// Columns added after the first release. Databases created by older
/// versions lack them; each is added with a safe default so existing rows
/// upgrade in place.
const TASK_COLUMN_UPGRADES: &[(&str, &str)] = &[
    (
        "important",
        "ALTER TABLE tasks ADD COLUMN important INTEGER NOT NULL DEFAULT 0 CHECK (important IN (0,1))",
    ),
    (
        "urgent",
        "ALTER TABLE tasks ADD COLUMN urgent INTEGER NOT NULL DEFAULT 0 CHECK (urgent IN (0,1))",
    ),
];

/// Initialize database with schema
pub async fn initialize_database(pool: &SqlitePool) -> Result<()> {
    tracing::info!("Initializing database schema");

    // Session pragmas are also set through the connect options; executing
    // them here keeps in-memory test pools on the same behavior.
    sqlx::query("PRAGMA journal_mode = WAL").execute(pool).await?;
    sqlx::query("PRAGMA foreign_keys = ON").execute(pool).await?;

    for statement in SCHEMA_STATEMENTS {
        sqlx::query(statement).execute(pool).await?;
    }

    ensure_task_columns(pool).await?;

    // Created after the column upgrades so it exists on legacy files too.
    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_tasks_important_urgent ON tasks(important, urgent)",
    )
    .execute(pool)
    .await?;

    tracing::info!("Database initialization complete");
    Ok(())
}

/// Introspect the tasks table and add any missing columns.
async fn ensure_task_columns(pool: &SqlitePool) -> Result<()> {
    let columns = task_columns(pool).await?;

    for (column, ddl) in TASK_COLUMN_UPGRADES {
        if !columns.contains(*column) {
            tracing::info!("Adding missing tasks column: {}", column);
            sqlx::query(ddl).execute(pool).await?;
        }
    }

    Ok(())
}

async fn task_columns(pool: &SqlitePool) -> Result<HashSet<String>> {
    let rows = sqlx::query("PRAGMA table_info(tasks)")
        .fetch_all(pool)
        .await?;

    Ok(rows
        .into_iter()
        .map(|row| row.get::<String, _>("name"))
        .collect())
}
