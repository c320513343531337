use anyhow::Context;
use sqlx::PgPool;
use uuid::Uuid;

use crate::modules::users::model::{BanState, User};
use crate::utils::errors::AppError;

const USER_COLUMNS: &str = "id, username, email, role, is_banned, ban_reason, \
     last_activity_at, created_at, updated_at";

pub struct UserService;

impl UserService {
    pub async fn get_user(db: &PgPool, id: Uuid) -> Result<User, AppError> {
        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(db)
        .await
        .context("Failed to fetch user by ID")
        .map_err(AppError::database)?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("User with id {} not found", id)))?;

        Ok(user)
    }

    /// Ban state for the given user. A missing row maps to 401 rather
    /// than 404: it means the token outlived the account.
    pub async fn ban_state(db: &PgPool, id: Uuid) -> Result<BanState, AppError> {
        let state = sqlx::query_as::<_, BanState>(
            "SELECT is_banned, ban_reason FROM users WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(db)
        .await
        .context("Failed to fetch ban state")
        .map_err(AppError::database)?
        .ok_or_else(|| AppError::unauthorized("Account no longer exists"))?;

        Ok(state)
    }

    /// Stamp the user's last activity. Fired on every authenticated
    /// request; callers treat failures as non-fatal.
    pub async fn touch_last_activity(db: &PgPool, id: Uuid) -> Result<(), AppError> {
        sqlx::query("UPDATE users SET last_activity_at = now() WHERE id = $1")
            .bind(id)
            .execute(db)
            .await
            .context("Failed to update last activity")
            .map_err(AppError::database)?;

        Ok(())
    }

    pub async fn set_banned(
        db: &PgPool,
        id: Uuid,
        banned: bool,
        reason: Option<String>,
    ) -> Result<User, AppError> {
        let user = sqlx::query_as::<_, User>(&format!(
            "UPDATE users SET is_banned = $2, ban_reason = $3, updated_at = now() \
             WHERE id = $1 RETURNING {USER_COLUMNS}"
        ))
        .bind(id)
        .bind(banned)
        .bind(reason)
        .fetch_optional(db)
        .await
        .context("Failed to update ban state")
        .map_err(AppError::database)?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("User with id {} not found", id)))?;

        Ok(user)
    }
}
