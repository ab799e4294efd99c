//! Database models
//!
//! Rust structs representing database entities.
//! All models use serde for serialization to the frontend; field names
//! follow the camelCase JSON contract the frontend expects.

use crate::config::DEFAULT_VIEW_MODE;
use crate::error::{AppError, Result};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Task status. Stored as TEXT and CHECK-constrained in the schema; parsed
/// here as well so invalid input is rejected before it reaches the database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum Status {
    Todo,
    Doing,
    Done,
}

impl Status {
    /// All statuses, in board column order.
    pub const ALL: [Status; 3] = [Status::Todo, Status::Doing, Status::Done];

    /// Parse a raw status string coming from the frontend.
    pub fn parse(s: &str) -> Result<Status> {
        match s {
            "todo" => Ok(Status::Todo),
            "doing" => Ok(Status::Doing),
            "done" => Ok(Status::Done),
            _ => Err(AppError::InvalidStatus(s.to_string())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Todo => "todo",
            Status::Doing => "doing",
            Status::Done => "done",
        }
    }
}

/// A named bucket that owns zero or more tasks
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    pub id: i64,
    pub name: String,
    /// Unix epoch milliseconds
    pub created_at: i64,
    pub updated_at: i64,
}

/// A unit of work owned by a group
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: i64,
    pub group_id: i64,
    pub title: String,
    pub content: String,
    pub status: Status,
    pub important: bool,
    pub urgent: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Display bucket derived from the important/urgent flags. Never persisted;
/// the frontend groups tasks by this in the quadrant view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Quadrant {
    ImportantUrgent,
    ImportantNotUrgent,
    UrgentNotImportant,
    Neither,
}

impl Task {
    pub fn quadrant(&self) -> Quadrant {
        match (self.important, self.urgent) {
            (true, true) => Quadrant::ImportantUrgent,
            (true, false) => Quadrant::ImportantNotUrgent,
            (false, true) => Quadrant::UrgentNotImportant,
            (false, false) => Quadrant::Neither,
        }
    }
}

/// Upsert task request: `id == 0` inserts, `id > 0` updates.
///
/// `status` arrives as a raw string from the frontend and is validated
/// before any write.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpsertTaskRequest {
    #[serde(default)]
    pub id: i64,
    pub group_id: i64,
    pub title: String,
    #[serde(default)]
    pub content: String,
    pub status: String,
    #[serde(default)]
    pub important: bool,
    #[serde(default)]
    pub urgent: bool,
}

/// User preferences persisted to the settings table
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub hide_done: bool,
    pub always_on_top: bool,
    /// "list" | "cards"
    pub view_mode: String,
    /// Concise mode controls the window frame; takes effect after restart
    pub concise_mode: bool,
    /// "light" | "dark"; owned by the frontend and carried here untouched
    #[serde(default)]
    pub theme: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            hide_done: false,
            always_on_top: true,
            view_mode: DEFAULT_VIEW_MODE.to_string(),
            concise_mode: false,
            theme: String::new(),
        }
    }
}

/// Raw settings row
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Setting {
    pub key: String,
    pub value: String,
}

/// Aggregate the frontend needs to render the board in one round trip
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Board {
    pub groups: Vec<Group>,
    pub tasks: Vec<Task>,
    pub settings: Settings,
    pub statuses: Vec<Status>,
}
