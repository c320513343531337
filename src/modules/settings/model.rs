//! Application settings models.
//!
//! [`GeneralSettings`] is the snapshot the maintenance gate evaluates. It
//! is read per request cycle, cached under the `general_settings` key, and
//! never mutated in place: updates go through the store and invalidate the
//! cached copy.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Default downtime estimate shown when none has been configured.
pub const DEFAULT_ESTIMATED_TIME: &str = "a few hours";

/// Immutable snapshot of the application-wide settings document.
///
/// Missing fields deserialize to their defaults so older documents in the
/// store or cache remain readable after the shape grows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralSettings {
    /// When enabled, ordinary traffic is rejected with a 503 notice.
    pub maintenance_mode: bool,
    /// Human-readable downtime estimate shown to rejected clients.
    pub estimated_time: String,
    /// Comma-separated client IPs exempt from maintenance blocking.
    /// Entries are opaque strings, matched exactly after trimming.
    pub whitelist_ips: String,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            maintenance_mode: false,
            estimated_time: DEFAULT_ESTIMATED_TIME.to_string(),
            whitelist_ips: String::new(),
        }
    }
}

/// DTO for replacing the general settings document.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateSettingsDto {
    pub maintenance_mode: bool,
    #[validate(length(min = 1, message = "estimated_time must not be empty"))]
    pub estimated_time: String,
    #[serde(default)]
    pub whitelist_ips: String,
}

impl From<UpdateSettingsDto> for GeneralSettings {
    fn from(dto: UpdateSettingsDto) -> Self {
        Self {
            maintenance_mode: dto.maintenance_mode,
            estimated_time: dto.estimated_time,
            whitelist_ips: dto.whitelist_ips,
        }
    }
}
