//! Repository layer for database operations
//!
//! CRUD surfaces over groups, tasks and settings. Every operation validates
//! its input before touching storage and maps engine constraint violations
//! to domain errors; the underlying pool is never handed out.

mod groups;
mod settings;
mod tasks;

use sqlx::SqlitePool;

/// Repository for database operations. Owns the single shared connection
/// for its lifetime.
#[derive(Clone)]
pub struct Repository {
    pool: SqlitePool,
}

impl Repository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Close the underlying connection. Safe to call more than once.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::Repository;
    use crate::database::bootstrap::ensure_defaults;
    use crate::database::schema::initialize_database;
    use sqlx::sqlite::SqlitePoolOptions;

    /// In-memory repository with schema and defaults applied. Pinned to a
    /// single connection: an in-memory database lives on its connection.
    pub async fn memory_repo() -> Repository {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();

        initialize_database(&pool).await.unwrap();
        ensure_defaults(&pool).await.unwrap();

        Repository::new(pool)
    }
}
