//! Ban enforcement middleware.
//!
//! Runs behind authentication and checks the account's current ban state
//! in the database rather than the token, so a ban takes effect on the
//! next request instead of at token expiry. A database failure here is a
//! 500, not a pass-through: ban checks do not fail open.

use axum::{
    extract::{FromRequestParts, Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::middleware::auth::AuthUser;
use crate::modules::users::service::UserService;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub async fn require_not_banned(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Response {
    match check_not_banned(state, req).await {
        Ok(req) => next.run(req).await,
        Err(err) => err.into_response(),
    }
}

async fn check_not_banned(state: AppState, req: Request) -> Result<Request, AppError> {
    let (mut parts, body) = req.into_parts();

    let auth_user = AuthUser::from_request_parts(&mut parts, &state).await?;
    let ban = UserService::ban_state(&state.db, auth_user.user_id()?).await?;

    if ban.is_banned {
        let message = match ban.ban_reason {
            Some(reason) => format!("Your account has been suspended: {}", reason),
            None => "Your account has been suspended.".to_string(),
        };
        return Err(AppError::forbidden(message));
    }

    Ok(Request::from_parts(parts, body))
}
