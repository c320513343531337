//! Router-level tests of the maintenance gate.
//!
//! The gate is exercised through the full middleware stack with a fixed
//! settings snapshot injected in place of the store-backed service, so no
//! Postgres or Redis instance is needed.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use parley::config::cors::CorsConfig;
use parley::config::jwt::JwtConfig;
use parley::modules::settings::model::GeneralSettings;
use parley::modules::settings::service::SettingsService;
use parley::router::init_router;
use parley::state::AppState;
use parley::utils::jwt::create_token;
use sqlx::PgPool;
use tower::ServiceExt;
use uuid::Uuid;

fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret: "integration-test-secret".to_string(),
        access_token_expiry: 3600,
    }
}

fn test_state(settings: GeneralSettings) -> AppState {
    // Lazy pool: never connected by the routes these tests hit.
    let db = PgPool::connect_lazy("postgres://parley@127.0.0.1:1/parley_test").unwrap();

    AppState {
        db,
        settings: SettingsService::fixed(settings),
        jwt_config: test_jwt_config(),
        cors_config: CorsConfig {
            allowed_origins: vec!["http://localhost:3000".to_string()],
        },
    }
}

fn maintenance_settings(whitelist: &str) -> GeneralSettings {
    GeneralSettings {
        maintenance_mode: true,
        estimated_time: "2 hours".to_string(),
        whitelist_ips: whitelist.to_string(),
    }
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_maintenance_off_allows_requests() {
    let app = init_router(test_state(GeneralSettings::default()));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["success"], serde_json::Value::Bool(true));
}

#[tokio::test]
async fn test_maintenance_on_returns_503_envelope() {
    let app = init_router(test_state(maintenance_settings("1.2.3.4,5.6.7.8")));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/health")
                .header("x-forwarded-for", "9.9.9.9")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

    let body = body_json(response).await;
    assert_eq!(body["success"], serde_json::Value::Bool(false));
    assert_eq!(body["maintenance"], serde_json::Value::Bool(true));
    assert_eq!(body["estimated_time"], "2 hours");
}

#[tokio::test]
async fn test_whitelisted_ip_passes_gate() {
    let app = init_router(test_state(maintenance_settings("1.2.3.4,5.6.7.8")));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/health")
                .header("x-forwarded-for", "5.6.7.8")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_super_admin_passes_gate() {
    let app = init_router(test_state(maintenance_settings("")));

    let token = create_token(
        Uuid::new_v4(),
        "root@example.com",
        "super_admin",
        &test_jwt_config(),
    )
    .unwrap();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/health")
                .header("authorization", format!("Bearer {token}"))
                .header("x-forwarded-for", "9.9.9.9")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_admin_does_not_pass_gate() {
    let app = init_router(test_state(maintenance_settings("")));

    let token = create_token(
        Uuid::new_v4(),
        "admin@example.com",
        "admin",
        &test_jwt_config(),
    )
    .unwrap();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/health")
                .header("authorization", format!("Bearer {token}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn test_invalid_token_does_not_error_the_gate() {
    // A bad token under maintenance is an ordinary rejection, not a 401.
    let app = init_router(test_state(maintenance_settings("")));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/health")
                .header("authorization", "Bearer not-a-jwt")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn test_unauthenticated_profile_requires_token() {
    let app = init_router(test_state(GeneralSettings::default()));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/users/profile")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body = body_json(response).await;
    assert_eq!(body["success"], serde_json::Value::Bool(false));
    assert!(body["message"].is_string());
}

#[tokio::test]
async fn test_admin_settings_requires_super_admin() {
    let app = init_router(test_state(GeneralSettings::default()));

    let token = create_token(
        Uuid::new_v4(),
        "mod@example.com",
        "moderator",
        &test_jwt_config(),
    )
    .unwrap();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/admin/settings")
                .header("authorization", format!("Bearer {token}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}
