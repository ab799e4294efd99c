//! Database module
//!
//! This module provides all database functionality including:
//! - Connection management
//! - Schema and migrations
//! - First-run defaults
//! - Model definitions
//! - Repository layer for CRUD operations

pub mod bootstrap;
pub mod models;
pub mod repository;
pub mod schema;

pub use models::*;
pub use repository::Repository;
pub use schema::initialize_database;

use crate::config::{APP_DIR_NAME, DB_FILE_NAME};
use crate::error::{AppError, Result};
use bootstrap::ensure_defaults;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

/// Current time as unix epoch milliseconds, the timestamp representation
/// used across all tables.
pub(crate) fn now_ms() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Resolve the default database location inside the per-user config
/// directory, creating the application folder if absent.
///
/// User data lives outside the install directory: program folders are often
/// read-only, and keeping data separate survives reinstalls.
pub fn default_db_path() -> Result<PathBuf> {
    let config_dir = dirs::config_dir()
        .ok_or_else(|| AppError::Generic("Could not resolve user config directory".to_string()))?;

    let app_dir = config_dir.join(APP_DIR_NAME);
    std::fs::create_dir_all(&app_dir)?;

    Ok(app_dir.join(DB_FILE_NAME))
}

/// Build connection options shared by migration and application connections.
///
/// foreign_keys turns on cascade deletes, the busy timeout absorbs transient
/// lock contention instead of failing immediately, and WAL suits a small
/// frequently-written store.
fn connect_options(db_path: &Path) -> std::result::Result<SqliteConnectOptions, sqlx::Error> {
    SqliteConnectOptions::from_str(&format!("sqlite://{}?mode=rwc", db_path.display())).map(
        |opts| {
            opts.create_if_missing(true)
                .busy_timeout(Duration::from_secs(5))
                .journal_mode(SqliteJournalMode::Wal)
                .foreign_keys(true)
        },
    )
}

/// Create and initialize a database connection pool.
///
/// Migrations and first-run defaults run on a dedicated single-connection
/// pool that is closed before the application pool is created. This prevents
/// schema-caching issues where pooled connections opened before ALTER TABLE
/// ADD COLUMN still see the old column count.
///
/// The application pool is also capped at one connection: this is a
/// single-user desktop store, and the single connection serializes all
/// statements without application-level locking. The pool is handed to
/// [`Repository`] and never exposed beyond it. Any migration or bootstrap
/// failure aborts here; no pool reaches the caller.
pub async fn create_pool(db_path: &Path) -> Result<SqlitePool> {
    if db_path.as_os_str().is_empty() {
        return Err(AppError::Validation("Database path is empty".to_string()));
    }

    tracing::info!("Creating database connection pool at: {:?}", db_path);

    // Ensure parent directory exists
    if let Some(parent) = db_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    // Phase 1 — migrate and seed on a single dedicated connection.
    let migration_pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(connect_options(db_path)?)
        .await?;

    initialize_database(&migration_pool).await?;
    ensure_defaults(&migration_pool).await?;
    migration_pool.close().await;

    // Phase 2 — create the application pool. Its connection is opened after
    // migrations have committed, so it reads the final schema.
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(connect_options(db_path)?)
        .await?;

    tracing::info!("Database pool created successfully");

    Ok(pool)
}
