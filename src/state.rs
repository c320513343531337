use std::time::Duration;

use parley_cache::{CacheConfig, RedisCache};
use sqlx::PgPool;
use tracing::warn;

use crate::config::cors::CorsConfig;
use crate::config::database::init_db_pool;
use crate::config::jwt::JwtConfig;
use crate::modules::settings::service::SettingsService;

#[derive(Clone, Debug)]
pub struct AppState {
    pub db: PgPool,
    pub settings: SettingsService,
    pub jwt_config: JwtConfig,
    pub cors_config: CorsConfig,
}

pub async fn init_app_state() -> AppState {
    let db = init_db_pool().await;
    let cache_config = CacheConfig::from_env();

    // Redis is optional: without it, settings reads go straight to the
    // store on every request instead of erroring out.
    let cache = match RedisCache::new(&cache_config.redis_url).await {
        Ok(cache) => Some(cache),
        Err(e) => {
            warn!(error = %e, "Redis unavailable, settings cache disabled");
            None
        }
    };

    let settings = SettingsService::new(
        db.clone(),
        cache,
        Duration::from_secs(cache_config.default_ttl_seconds),
    );

    AppState {
        db,
        settings,
        jwt_config: JwtConfig::from_env(),
        cors_config: CorsConfig::from_env(),
    }
}
