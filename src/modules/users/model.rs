//! User data models and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A user account.
///
/// The `role` column holds the role name as text; checks parse it into
/// [`UserRole`](crate::middleware::role::UserRole).
#[derive(Serialize, Deserialize, FromRow, Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub role: String,
    pub is_banned: bool,
    pub ban_reason: Option<String>,
    pub last_activity_at: Option<chrono::DateTime<chrono::Utc>>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

/// Ban state projection used by the ban-enforcement middleware, which
/// has no reason to load the full user row.
#[derive(Debug, Clone, FromRow)]
pub struct BanState {
    pub is_banned: bool,
    pub ban_reason: Option<String>,
}

/// DTO for banning a user.
#[derive(Debug, Clone, Deserialize)]
pub struct BanUserDto {
    pub reason: Option<String>,
}
