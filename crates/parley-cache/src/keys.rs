//! Well-known cache keys.
//!
//! Keys are shared between the request-gating middleware (which reads them)
//! and the admin settings endpoints (which invalidate them on update), so
//! they live here rather than in either module.

/// Cached application-wide settings document.
pub const GENERAL_SETTINGS: &str = "general_settings";
