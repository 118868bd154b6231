// src/handlers/settings.rs

use axum::{extract::State, response::IntoResponse, Json};

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::capability::{CapSettingsManage, RequireCapability},
    models::settings::Settings,
};

#[utoipa::path(
    get,
    path = "/api/settings",
    tag = "Settings",
    responses((status = 200, description = "Configurações atuais", body = Settings)),
    security(("session_token" = []))
)]
pub async fn get_settings(
    State(app_state): State<AppState>,
    _guard: RequireCapability<CapSettingsManage>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(app_state.settings_service.get().await?))
}

// Substitui tema e preferências de notificação de uma vez
#[utoipa::path(
    put,
    path = "/api/settings",
    tag = "Settings",
    request_body = Settings,
    responses((status = 200, description = "Configurações salvas", body = Settings)),
    security(("session_token" = []))
)]
pub async fn update_settings(
    State(app_state): State<AppState>,
    _guard: RequireCapability<CapSettingsManage>,
    Json(settings): Json<Settings>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(app_state.settings_service.update(settings).await?))
}
