//! JSON response envelope.
//!
//! Every JSON body the API produces follows the same envelope convention:
//!
//! - success: `{"success": true, "message": ..., "data": ...}`
//! - failure: `{"success": false, "message": ...}` (see [`AppError`])
//! - maintenance: `{"success": false, "message": ..., "maintenance": true,
//!   "estimated_time": ...}` with status 503
//!
//! [`AppError`]: crate::utils::errors::AppError

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// Standard success envelope wrapping an optional payload.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: Some(data),
        }
    }
}

impl ApiResponse<()> {
    /// Success envelope with no payload.
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: None,
        }
    }
}

/// Body returned when the maintenance gate rejects a request.
///
/// Always served with status 503.
#[derive(Debug, Serialize)]
pub struct MaintenanceResponse {
    pub success: bool,
    pub message: String,
    pub maintenance: bool,
    pub estimated_time: String,
}

impl MaintenanceResponse {
    pub fn new(estimated_time: impl Into<String>) -> Self {
        Self {
            success: false,
            message: "The service is temporarily down for maintenance.".to_string(),
            maintenance: true,
            estimated_time: estimated_time.into(),
        }
    }
}

impl IntoResponse for MaintenanceResponse {
    fn into_response(self) -> Response {
        (StatusCode::SERVICE_UNAVAILABLE, Json(self)).into_response()
    }
}
