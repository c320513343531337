//! User-activity timestamping middleware.
//!
//! Stamps `last_activity_at` for the authenticated user on each request.
//! The update is fire-and-forget: it runs on a spawned task, never delays
//! the response, and failures are logged rather than surfaced.

use axum::{
    extract::{FromRequestParts, Request, State},
    middleware::Next,
    response::Response,
};
use tracing::debug;

use crate::middleware::auth::AuthUser;
use crate::modules::users::service::UserService;
use crate::state::AppState;

pub async fn track_activity(State(state): State<AppState>, req: Request, next: Next) -> Response {
    let (mut parts, body) = req.into_parts();

    if let Ok(auth_user) = AuthUser::from_request_parts(&mut parts, &state).await {
        if let Ok(user_id) = auth_user.user_id() {
            let db = state.db.clone();
            tokio::spawn(async move {
                if let Err(e) = UserService::touch_last_activity(&db, user_id).await {
                    debug!(user_id = %user_id, error = ?e.error, "Failed to stamp activity");
                }
            });
        }
    }

    next.run(Request::from_parts(parts, body)).await
}
