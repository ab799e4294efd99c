//! Application configuration constants
//!
//! Central location for validation limits and fixed defaults used by the
//! persistence layer.

// ===== Storage Location =====

/// Subfolder inside the per-user config directory that holds application data
pub const APP_DIR_NAME: &str = "Spark-Todo";

/// Database filename inside the application data folder
pub const DB_FILE_NAME: &str = "todo.db";

// ===== Validation Limits =====
// All text limits count Unicode code points, not bytes, so multi-byte
// scripts are not penalized relative to single-byte text.

/// Maximum length for a group name
pub const MAX_GROUP_NAME_CHARS: usize = 50;

/// Maximum length for a task title
pub const MAX_TASK_TITLE_CHARS: usize = 200;

/// Maximum length for task content
pub const MAX_TASK_CONTENT_CHARS: usize = 1000;

/// Maximum length for a stored view mode value; anything longer is treated
/// as unrecognized and falls back to the default
pub const MAX_VIEW_MODE_CHARS: usize = 20;

// ===== Defaults =====

/// Name of the group seeded into an empty database
pub const DEFAULT_GROUP_NAME: &str = "默认";

/// Valid view modes for the task board
pub const VALID_VIEW_MODES: &[&str] = &["list", "cards"];

/// View mode used when a stored value is missing or unrecognized
pub const DEFAULT_VIEW_MODE: &str = "cards";

// ===== Reminders =====

/// Minimum interval between water reminders (1 hour)
pub const WATER_REMINDER_INTERVAL_MS: i64 = 60 * 60 * 1000;
