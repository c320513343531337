use axum::{
    Router,
    routing::{get, post},
};

use crate::modules::users::controller::{ban_user, get_profile, unban_user};
use crate::state::AppState;

pub fn init_users_router() -> Router<AppState> {
    Router::new().route("/profile", get(get_profile))
}

/// Moderation routes, mounted under the admin scope.
pub fn init_admin_users_router() -> Router<AppState> {
    Router::new()
        .route("/{id}/ban", post(ban_user))
        .route("/{id}/unban", post(unban_user))
}
