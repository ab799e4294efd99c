//! Settings key/value storage
//!
//! Settings reads start from fixed defaults and overlay whatever keys are
//! stored, so missing keys fall back cleanly and unknown keys are ignored
//! for forward compatibility.

use super::Repository;
use crate::config::{DEFAULT_VIEW_MODE, MAX_VIEW_MODE_CHARS, VALID_VIEW_MODES};
use crate::database::models::{Setting, Settings};
use crate::error::{AppError, Result};

impl Repository {
    /// Read settings, falling back to defaults for any missing key.
    pub async fn get_settings(&self) -> Result<Settings> {
        let mut settings = Settings::default();

        let rows = sqlx::query_as::<_, Setting>("SELECT key, value FROM settings")
            .fetch_all(&self.pool)
            .await?;

        for row in rows {
            match row.key.as_str() {
                "alwaysOnTop" => settings.always_on_top = parse_bool(&row.value),
                "hideDone" => settings.hide_done = parse_bool(&row.value),
                "viewMode" => settings.view_mode = normalize_view_mode(&row.value),
                "conciseMode" => settings.concise_mode = parse_bool(&row.value),
                _ => {}
            }
        }

        Ok(settings)
    }

    /// Persist the four user-facing keys, each as an independent upsert.
    /// The first failing key aborts with its error.
    pub async fn set_settings(&self, settings: &Settings) -> Result<()> {
        self.set_setting("alwaysOnTop", bool_to_01(settings.always_on_top))
            .await?;
        self.set_setting("hideDone", bool_to_01(settings.hide_done))
            .await?;
        self.set_setting("viewMode", &normalize_view_mode(&settings.view_mode))
            .await?;
        self.set_setting("conciseMode", bool_to_01(settings.concise_mode))
            .await?;

        Ok(())
    }

    async fn set_setting(&self, key: &str, value: &str) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO settings (key, value) VALUES (?, ?)
            ON CONFLICT(key) DO UPDATE SET value = excluded.value
            "#,
        )
        .bind(key)
        .bind(value)
        .execute(&self.pool)
        .await?;

        tracing::debug!("Set setting: {} = {}", key, value);
        Ok(())
    }

    /// Last water reminder time in unix millis; 0 means never.
    pub async fn get_last_water_reminder_at(&self) -> Result<i64> {
        let value: Option<String> = sqlx::query_scalar("SELECT value FROM settings WHERE key = ?")
            .bind("lastWaterReminderAt")
            .fetch_optional(&self.pool)
            .await?;

        let Some(value) = value else {
            return Ok(0);
        };

        let value = value.trim();
        if value.is_empty() {
            return Ok(0);
        }

        let ts: i64 = value.parse().map_err(|e| {
            AppError::Generic(format!("Failed to parse lastWaterReminderAt: {}", e))
        })?;

        Ok(ts.max(0))
    }

    /// Record the last water reminder time. Non-positive values store as 0.
    pub async fn set_last_water_reminder_at(&self, unix_ms: i64) -> Result<()> {
        let unix_ms = unix_ms.max(0);
        self.set_setting("lastWaterReminderAt", &unix_ms.to_string())
            .await
    }
}

fn parse_bool(value: &str) -> bool {
    value == "1" || value.eq_ignore_ascii_case("true")
}

fn bool_to_01(value: bool) -> &'static str {
    if value {
        "1"
    } else {
        "0"
    }
}

/// Clamp a view mode to the allow-list; unrecognized or absurdly long
/// values fall back to the default.
fn normalize_view_mode(value: &str) -> String {
    let value = value.trim().to_lowercase();
    if value.chars().count() > MAX_VIEW_MODE_CHARS {
        return DEFAULT_VIEW_MODE.to_string();
    }
    if VALID_VIEW_MODES.contains(&value.as_str()) {
        value
    } else {
        DEFAULT_VIEW_MODE.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::memory_repo;
    use super::*;

    #[tokio::test]
    async fn test_fresh_store_returns_defaults() {
        let repo = memory_repo().await;

        let settings = repo.get_settings().await.unwrap();

        assert!(!settings.hide_done);
        assert!(settings.always_on_top);
        assert_eq!(settings.view_mode, "cards");
        assert!(!settings.concise_mode);
    }

    #[tokio::test]
    async fn test_set_then_get_round_trips() {
        let repo = memory_repo().await;

        let mut settings = repo.get_settings().await.unwrap();
        settings.view_mode = "list".to_string();
        settings.hide_done = true;
        repo.set_settings(&settings).await.unwrap();

        let loaded = repo.get_settings().await.unwrap();
        assert_eq!(loaded.view_mode, "list");
        assert!(loaded.hide_done);
        // Untouched keys keep their stored values.
        assert!(loaded.always_on_top);
        assert!(!loaded.concise_mode);
    }

    #[tokio::test]
    async fn test_boolean_coercion_accepts_true_text() {
        let repo = memory_repo().await;

        repo.set_setting("hideDone", "TRUE").await.unwrap();

        let settings = repo.get_settings().await.unwrap();
        assert!(settings.hide_done);
    }

    #[tokio::test]
    async fn test_unrecognized_stored_view_mode_normalizes_on_read() {
        let repo = memory_repo().await;

        // Bypass set_settings to simulate a value written by a newer or
        // corrupted build.
        repo.set_setting("viewMode", "grid").await.unwrap();

        let settings = repo.get_settings().await.unwrap();
        assert_eq!(settings.view_mode, "cards");
    }

    #[tokio::test]
    async fn test_overlong_view_mode_normalizes_on_read() {
        let repo = memory_repo().await;

        repo.set_setting("viewMode", &"x".repeat(21)).await.unwrap();

        let settings = repo.get_settings().await.unwrap();
        assert_eq!(settings.view_mode, "cards");
    }

    #[tokio::test]
    async fn test_unknown_stored_keys_are_ignored() {
        let repo = memory_repo().await;

        repo.set_setting("futureFeature", "enabled").await.unwrap();

        let settings = repo.get_settings().await.unwrap();
        assert_eq!(settings.view_mode, "cards");
        assert!(settings.always_on_top);
    }

    #[test]
    fn test_view_mode_normalizes_case_and_whitespace() {
        assert_eq!(normalize_view_mode("  List "), "list");
        assert_eq!(normalize_view_mode("CARDS"), "cards");
        assert_eq!(normalize_view_mode("grid"), "cards");
        assert_eq!(normalize_view_mode(""), "cards");
    }

    #[tokio::test]
    async fn test_last_reminder_defaults_to_zero() {
        let repo = memory_repo().await;

        assert_eq!(repo.get_last_water_reminder_at().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_last_reminder_round_trips_exactly() {
        let repo = memory_repo().await;

        repo.set_last_water_reminder_at(1_722_000_000_123)
            .await
            .unwrap();

        assert_eq!(
            repo.get_last_water_reminder_at().await.unwrap(),
            1_722_000_000_123
        );
    }

    #[tokio::test]
    async fn test_last_reminder_clamps_negative_to_zero() {
        let repo = memory_repo().await;

        repo.set_last_water_reminder_at(-42).await.unwrap();

        assert_eq!(repo.get_last_water_reminder_at().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_last_reminder_blank_value_reads_as_zero() {
        let repo = memory_repo().await;

        repo.set_setting("lastWaterReminderAt", "  ").await.unwrap();

        assert_eq!(repo.get_last_water_reminder_at().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_last_reminder_garbage_value_is_an_error() {
        let repo = memory_repo().await;

        repo.set_setting("lastWaterReminderAt", "soon").await.unwrap();

        let err = repo.get_last_water_reminder_at().await.unwrap_err();
        assert!(matches!(err, AppError::Generic(_)));
    }
}
