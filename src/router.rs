use axum::http::{HeaderValue, Method};
use axum::{Json, Router, middleware, routing::get};
use tower_http::cors::CorsLayer;

use crate::logging::logging_middleware;
use crate::middleware::activity::track_activity;
use crate::middleware::ban::require_not_banned;
use crate::middleware::maintenance::maintenance_gate;
use crate::middleware::role::{require_admin, require_super_admin};
use crate::modules::settings::router::init_settings_router;
use crate::modules::users::router::{init_admin_users_router, init_users_router};
use crate::state::AppState;
use crate::utils::response::ApiResponse;

async fn health() -> Json<ApiResponse<()>> {
    Json(ApiResponse::message("ok"))
}

pub fn init_router(state: AppState) -> Router {
    Router::new()
        .nest(
            "/api",
            Router::new()
                .route("/health", get(health))
                .nest(
                    "/users",
                    init_users_router()
                        .route_layer(middleware::from_fn_with_state(
                            state.clone(),
                            track_activity,
                        ))
                        // Added last so the ban check runs ahead of activity stamping.
                        .route_layer(middleware::from_fn_with_state(
                            state.clone(),
                            require_not_banned,
                        )),
                )
                .nest(
                    "/admin",
                    Router::new()
                        .nest(
                            "/settings",
                            init_settings_router().route_layer(middleware::from_fn_with_state(
                                state.clone(),
                                require_super_admin,
                            )),
                        )
                        .nest(
                            "/users",
                            init_admin_users_router().route_layer(
                                middleware::from_fn_with_state(state.clone(), require_admin),
                            ),
                        ),
                )
                // The gate sits ahead of auth, bans, and routing for the
                // whole API surface.
                .layer(middleware::from_fn_with_state(
                    state.clone(),
                    maintenance_gate,
                )),
        )
        .with_state(state.clone())
        .layer({
            let allowed_origins: Vec<HeaderValue> = state
                .cors_config
                .allowed_origins
                .iter()
                .filter_map(|origin| origin.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(allowed_origins)
                .allow_methods([
                    Method::GET,
                    Method::POST,
                    Method::PUT,
                    Method::PATCH,
                    Method::DELETE,
                    Method::OPTIONS,
                ])
                .allow_headers([
                    axum::http::header::AUTHORIZATION,
                    axum::http::header::CONTENT_TYPE,
                    axum::http::header::ACCEPT,
                ])
                .allow_credentials(true)
        })
        .layer(middleware::from_fn(logging_middleware))
}
