//! Role-based authorization middleware.
//!
//! Roles are modeled as an enumerated type with an explicit privilege
//! ordering rather than string comparison, so a mistyped role name fails
//! at the parse boundary instead of silently granting or denying access.

use std::str::FromStr;

use axum::{
    extract::{FromRequestParts, Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::middleware::auth::AuthUser;
use crate::state::AppState;
use crate::utils::errors::AppError;

/// System roles, from least to most privileged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserRole {
    Member,
    Moderator,
    Admin,
    SuperAdmin,
}

impl UserRole {
    /// Privilege level of a role (higher number = more privileges).
    pub fn privilege_level(&self) -> u8 {
        match self {
            UserRole::SuperAdmin => 3,
            UserRole::Admin => 2,
            UserRole::Moderator => 1,
            UserRole::Member => 0,
        }
    }

    /// Whether this role carries at least the privileges of `other`.
    pub fn at_least(&self, other: UserRole) -> bool {
        self.privilege_level() >= other.privilege_level()
    }
}

impl FromStr for UserRole {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "super_admin" => Ok(UserRole::SuperAdmin),
            "admin" => Ok(UserRole::Admin),
            "moderator" => Ok(UserRole::Moderator),
            "member" => Ok(UserRole::Member),
            _ => Err(AppError::internal(anyhow::anyhow!("Invalid role: {}", s))),
        }
    }
}

/// Middleware core: require at least `minimum_role` of the authenticated user.
pub async fn require_min_role(
    State(state): State<AppState>,
    req: Request,
    next: Next,
    minimum_role: UserRole,
) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();

    let auth_user = AuthUser::from_request_parts(&mut parts, &state).await?;
    check_min_role(&auth_user, minimum_role)?;

    let req = Request::from_parts(parts, body);
    Ok(next.run(req).await)
}

/// Middleware for admin-level routes (admin or super admin).
pub async fn require_admin(State(state): State<AppState>, req: Request, next: Next) -> Response {
    match require_min_role(State(state), req, next, UserRole::Admin).await {
        Ok(response) => response,
        Err(err) => err.into_response(),
    }
}

/// Middleware for super-admin-only routes.
pub async fn require_super_admin(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Response {
    match require_min_role(State(state), req, next, UserRole::SuperAdmin).await {
        Ok(response) => response,
        Err(err) => err.into_response(),
    }
}

/// Helper for manual checks inside handlers.
pub fn check_min_role(auth_user: &AuthUser, minimum_role: UserRole) -> Result<(), AppError> {
    let user_role = UserRole::from_str(&auth_user.0.role)?;

    if !user_role.at_least(minimum_role) {
        return Err(AppError::forbidden(format!(
            "Access denied. Minimum required role: {:?}, but user has role: {:?}",
            minimum_role, user_role
        )));
    }

    Ok(())
}
