use axum::{
    Json,
    extract::{Path, State},
};
use tracing::instrument;
use uuid::Uuid;

use crate::middleware::auth::AuthUser;
use crate::modules::users::model::{BanUserDto, User};
use crate::modules::users::service::UserService;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::response::ApiResponse;

/// Current user's profile.
#[instrument]
pub async fn get_profile(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> Result<Json<ApiResponse<User>>, AppError> {
    let user = UserService::get_user(&state.db, auth_user.user_id()?).await?;
    Ok(Json(ApiResponse::success("Profile fetched", user)))
}

/// Ban a user (admin only, gated at the router).
#[instrument]
pub async fn ban_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(dto): Json<BanUserDto>,
) -> Result<Json<ApiResponse<User>>, AppError> {
    let user = UserService::set_banned(&state.db, id, true, dto.reason).await?;
    Ok(Json(ApiResponse::success("User banned", user)))
}

/// Lift a user's ban (admin only, gated at the router).
#[instrument]
pub async fn unban_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<User>>, AppError> {
    let user = UserService::set_banned(&state.db, id, false, None).await?;
    Ok(Json(ApiResponse::success("User unbanned", user)))
}
