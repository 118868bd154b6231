// src/handlers/alerts.rs

use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
    Json,
};

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::capability::{CapAlertsRead, CapAlertsWrite, RequireCapability},
    models::alerts::{Alert, AlertSummary},
    services::filter::AlertFilter,
};

#[utoipa::path(
    get,
    path = "/api/alerts",
    tag = "Alerts",
    params(AlertFilter),
    responses((status = 200, description = "Alertas filtrados", body = Vec<Alert>)),
    security(("session_token" = []))
)]
pub async fn list_alerts(
    State(app_state): State<AppState>,
    _guard: RequireCapability<CapAlertsRead>,
    Query(filter): Query<AlertFilter>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(app_state.alert_service.list(&filter).await?))
}

#[utoipa::path(
    get,
    path = "/api/alerts/summary",
    tag = "Alerts",
    responses((status = 200, description = "Não lidos, alta prioridade e ação necessária", body = AlertSummary)),
    security(("session_token" = []))
)]
pub async fn get_summary(
    State(app_state): State<AppState>,
    _guard: RequireCapability<CapAlertsRead>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(app_state.alert_service.summary().await?))
}

#[utoipa::path(
    post,
    path = "/api/alerts/{id}/read",
    tag = "Alerts",
    params(("id" = String, Path, description = "ID do alerta")),
    responses(
        (status = 200, description = "Alerta marcado como lido", body = Alert),
        (status = 404, description = "Alerta não encontrado")
    ),
    security(("session_token" = []))
)]
pub async fn mark_read(
    State(app_state): State<AppState>,
    _guard: RequireCapability<CapAlertsWrite>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(app_state.alert_service.mark_read(&id).await?))
}
