//! Error types for the Spark Todo persistence layer
//!
//! All errors use thiserror for structured error handling.
//! These errors can be serialized to the frontend.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Caller-input problem, detected before any write. The message is
    /// stable and never derived from engine error text.
    #[error("{0}")]
    Validation(String),

    #[error("Invalid task status: {0:?}")]
    InvalidStatus(String),

    #[error("A group with this name already exists")]
    DuplicateGroupName,

    #[error("Group not found: {0}")]
    GroupNotFound(i64),

    #[error("Task not found: {0}")]
    TaskNotFound(i64),

    #[error("{0}")]
    Generic(String),
}

impl serde::Serialize for AppError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
