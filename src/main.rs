use std::time::Duration;

use dotenvy::dotenv;
use parley::modules::settings::service::SettingsService;
use parley::router::init_router;
use parley::state::init_app_state;
use parley_cache::{CacheConfig, RedisCache};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() {
    dotenv().ok();

    let args: Vec<String> = std::env::args().collect();

    // Check if this is a CLI command
    if args.len() > 1 && args[1] == "set-maintenance" {
        handle_set_maintenance(args).await;
        return;
    }

    // Normal server startup
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                // axum logs rejections from built-in extractors with the `axum::rejection`
                // target, at `TRACE` level. `axum::rejection=trace` enables showing those events
                format!(
                    "{}=debug,tower_http=debug,axum::rejection=trace",
                    env!("CARGO_CRATE_NAME")
                )
                .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let state = init_app_state().await;
    let app = init_router(state);

    let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await.unwrap();
    println!("🚀 Server running on http://localhost:3000");
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<std::net::SocketAddr>(),
    )
    .await
    .unwrap();
}

async fn handle_set_maintenance(args: Vec<String>) {
    let enabled = match args.get(2).map(String::as_str) {
        Some("on") => true,
        Some("off") => false,
        _ => {
            eprintln!(
                "Usage: {} set-maintenance <on|off> [estimated_time]",
                args[0]
            );
            std::process::exit(1);
        }
    };

    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await
        .expect("Failed to connect to database");

    // Best effort: without Redis the cached copy simply expires within the TTL.
    let cache_config = CacheConfig::from_env();
    let cache = RedisCache::new(&cache_config.redis_url).await.ok();

    let service = SettingsService::new(
        pool,
        cache,
        Duration::from_secs(cache_config.default_ttl_seconds),
    );

    let mut settings = service.general().await;
    settings.maintenance_mode = enabled;
    if let Some(estimate) = args.get(3) {
        settings.estimated_time = estimate.clone();
    }

    match service.update_general(settings).await {
        Ok(settings) => {
            if settings.maintenance_mode {
                println!("✅ Maintenance mode enabled");
                println!("   Estimated time: {}", settings.estimated_time);
                println!("   Whitelisted IPs: {}", settings.whitelist_ips);
            } else {
                println!("✅ Maintenance mode disabled");
            }
        }
        Err(e) => {
            eprintln!("❌ Error updating settings: {}", e.error);
            std::process::exit(1);
        }
    }
}
