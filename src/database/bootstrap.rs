//! First-run defaults
//!
//! Seeds an empty database with a default group and the recognized settings
//! keys. Runs on every startup after migration; values the user has already
//! set are never overwritten.

use super::now_ms;
use crate::config::DEFAULT_GROUP_NAME;
use crate::error::Result;
use sqlx::SqlitePool;

/// Settings keys seeded on first run. INSERT OR IGNORE keeps any stored
/// value, including falsy ones the user set on purpose.
const DEFAULT_SETTINGS: &[(&str, &str)] = &[
    ("alwaysOnTop", "1"),
    ("hideDone", "0"),
    ("viewMode", "cards"),
    ("conciseMode", "0"),
];

/// Ensure default rows exist. Idempotent.
pub async fn ensure_defaults(pool: &SqlitePool) -> Result<()> {
    ensure_default_settings(pool).await?;
    ensure_default_group(pool).await
}

async fn ensure_default_settings(pool: &SqlitePool) -> Result<()> {
    for (key, value) in DEFAULT_SETTINGS {
        sqlx::query("INSERT OR IGNORE INTO settings (key, value) VALUES (?, ?)")
            .bind(key)
            .bind(value)
            .execute(pool)
            .await?;
    }

    Ok(())
}

/// Every task needs an owning group; with zero groups the frontend has no
/// way to create a task at all.
async fn ensure_default_group(pool: &SqlitePool) -> Result<()> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(1) FROM groups")
        .fetch_one(pool)
        .await?;

    if count > 0 {
        return Ok(());
    }

    tracing::info!("Seeding default group");

    let now = now_ms();
    sqlx::query("INSERT INTO groups (name, created_at, updated_at) VALUES (?, ?, ?)")
        .bind(DEFAULT_GROUP_NAME)
        .bind(now)
        .bind(now)
        .execute(pool)
        .await?;

    Ok(())
}
