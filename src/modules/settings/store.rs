use anyhow::Context;
use sqlx::PgPool;

use crate::modules::settings::model::GeneralSettings;
use crate::utils::errors::AppError;

/// Persistent key-value settings store backed by the `settings` table.
///
/// Each key maps to one JSON document; this store knows how to read and
/// write the `general_settings` document. Callers decide what a missing
/// key or a failed read means (the maintenance gate falls back to the
/// default snapshot).
pub struct SettingsStore;

impl SettingsStore {
    /// Key under which the general settings document is stored, both in
    /// the `settings` table and in the cache.
    pub const GENERAL: &'static str = parley_cache::keys::GENERAL_SETTINGS;

    pub async fn get(db: &PgPool, key: &str) -> Result<Option<GeneralSettings>, AppError> {
        let raw: Option<String> =
            sqlx::query_scalar("SELECT value FROM settings WHERE key = $1")
                .bind(key)
                .fetch_optional(db)
                .await
                .context("Failed to read settings document")
                .map_err(AppError::database)?;

        match raw {
            Some(text) => {
                let settings = serde_json::from_str(&text)
                    .context("Malformed settings document")
                    .map_err(AppError::database)?;
                Ok(Some(settings))
            }
            None => Ok(None),
        }
    }

    pub async fn put(db: &PgPool, key: &str, settings: &GeneralSettings) -> Result<(), AppError> {
        let text = serde_json::to_string(settings)
            .context("Failed to serialize settings document")
            .map_err(AppError::internal)?;

        sqlx::query(
            r#"
            INSERT INTO settings (key, value)
            VALUES ($1, $2)
            ON CONFLICT (key) DO UPDATE SET value = EXCLUDED.value, updated_at = now()
            "#,
        )
        .bind(key)
        .bind(text)
        .execute(db)
        .await
        .context("Failed to write settings document")
        .map_err(AppError::database)?;

        Ok(())
    }
}
