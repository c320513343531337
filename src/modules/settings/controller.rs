use axum::{Json, extract::State};
use tracing::instrument;

use crate::modules::settings::model::{GeneralSettings, UpdateSettingsDto};
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::response::ApiResponse;
use crate::validator::ValidatedJson;

/// Get the current general settings (super admin only, gated at the router).
#[instrument]
pub async fn get_settings(State(state): State<AppState>) -> Json<ApiResponse<GeneralSettings>> {
    let settings = state.settings.general().await;
    Json(ApiResponse::success("Settings fetched", settings))
}

/// Replace the general settings document and invalidate the cached copy.
#[instrument]
pub async fn update_settings(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<UpdateSettingsDto>,
) -> Result<Json<ApiResponse<GeneralSettings>>, AppError> {
    let updated = state.settings.update_general(dto.into()).await?;
    Ok(Json(ApiResponse::success("Settings updated", updated)))
}
