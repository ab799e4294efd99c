//! Water reminder throttling
//!
//! The reminder dialog itself belongs to the embedding application; this
//! service only answers "is it time?" against the persisted last-shown
//! timestamp, so reopening the app shortly after a reminder stays quiet.

use crate::config::WATER_REMINDER_INTERVAL_MS;
use crate::database::{now_ms, Repository};
use crate::error::Result;

/// Service gating the periodic water reminder
#[derive(Clone)]
pub struct ReminderService {
    repo: Repository,
}

impl ReminderService {
    pub fn new(repo: Repository) -> Self {
        Self { repo }
    }

    /// True when no reminder was ever shown, or the last one is at least
    /// the configured interval old.
    pub async fn should_show_reminder(&self) -> Result<bool> {
        let last_at = self.repo.get_last_water_reminder_at().await?;
        if last_at <= 0 {
            return Ok(true);
        }

        Ok(now_ms() - last_at >= WATER_REMINDER_INTERVAL_MS)
    }

    /// Record that a reminder was just shown.
    pub async fn mark_reminder_shown(&self) -> Result<()> {
        self.repo.set_last_water_reminder_at(now_ms()).await
    }
}
