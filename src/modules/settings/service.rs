use std::time::Duration;

use parley_cache::RedisCache;
use sqlx::PgPool;
use tracing::{error, warn};

use crate::modules::settings::model::GeneralSettings;
use crate::modules::settings::store::SettingsStore;
use crate::utils::errors::AppError;

/// Injected settings source for the request-gating middleware.
///
/// Reads go cache-first (Redis, `general_settings` key) and fall through
/// to the store on a miss. A store failure is absorbed: the gate receives
/// the default snapshot (maintenance off) rather than an error, trading
/// maintenance-mode accuracy for availability of the rest of the site.
///
/// The cached snapshot is shared read-only across concurrent requests
/// until the TTL expires; requests racing past expiry may each reload,
/// which is tolerated because loads are idempotent and side-effect-free.
#[derive(Debug, Clone)]
pub struct SettingsService {
    backend: Backend,
}

#[derive(Debug, Clone)]
enum Backend {
    Store {
        db: PgPool,
        cache: Option<RedisCache>,
        ttl: Duration,
    },
    /// Fixed snapshot bypassing store and cache. Used by tests and the
    /// maintenance CLI, where a live cache is not assumed.
    Fixed(GeneralSettings),
}

impl SettingsService {
    pub fn new(db: PgPool, cache: Option<RedisCache>, ttl: Duration) -> Self {
        Self {
            backend: Backend::Store { db, cache, ttl },
        }
    }

    pub fn fixed(settings: GeneralSettings) -> Self {
        Self {
            backend: Backend::Fixed(settings),
        }
    }

    /// Current general settings snapshot. Never fails; see the type-level
    /// docs for the fallback behavior.
    pub async fn general(&self) -> GeneralSettings {
        match &self.backend {
            Backend::Fixed(settings) => settings.clone(),
            Backend::Store { db, cache, ttl } => match cache {
                Some(cache) => {
                    cache
                        .get_or_compute(SettingsStore::GENERAL, *ttl, || Self::load_or_default(db))
                        .await
                }
                None => Self::load_or_default(db).await,
            },
        }
    }

    /// Replace the general settings document and invalidate the cached
    /// copy so the change takes effect ahead of TTL expiry.
    pub async fn update_general(
        &self,
        settings: GeneralSettings,
    ) -> Result<GeneralSettings, AppError> {
        match &self.backend {
            // Fixed snapshots ignore updates.
            Backend::Fixed(_) => Ok(settings),
            Backend::Store { db, cache, .. } => {
                SettingsStore::put(db, SettingsStore::GENERAL, &settings).await?;

                if let Some(cache) = cache {
                    // Best effort: a stale cached copy expires within the TTL anyway.
                    if let Err(e) = cache.invalidate(SettingsStore::GENERAL).await {
                        error!(error = %e, "Failed to invalidate cached settings");
                    }
                }

                Ok(settings)
            }
        }
    }

    async fn load_or_default(db: &PgPool) -> GeneralSettings {
        match SettingsStore::get(db, SettingsStore::GENERAL).await {
            Ok(Some(settings)) => settings,
            Ok(None) => GeneralSettings::default(),
            Err(e) => {
                warn!(error = ?e.error, "Settings store unavailable, using defaults");
                GeneralSettings::default()
            }
        }
    }
}
