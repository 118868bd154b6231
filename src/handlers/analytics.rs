// src/handlers/analytics.rs

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::capability::{CapAnalyticsView, CapDashboardView, RequireCapability},
    models::analytics::{AnalyticsOverview, DashboardOverview, SalesPeriod},
};

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
#[serde(default)]
pub struct DashboardParams {
    /// `weekly` (padrão) ou `monthly`
    #[param(value_type = Option<String>, example = "weekly")]
    pub period: SalesPeriod,
}

// ---
// Tela de Analytics (KPIs, tendência, categorias, ranking)
// ---
#[utoipa::path(
    get,
    path = "/api/analytics",
    tag = "Analytics",
    responses((status = 200, description = "KPIs, tendência, categorias e ranking", body = AnalyticsOverview)),
    security(("session_token" = []))
)]
pub async fn get_analytics(
    State(app_state): State<AppState>,
    _guard: RequireCapability<CapAnalyticsView>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(app_state.analytics_service.overview().await?))
}

// ---
// Tela inicial
// ---
#[utoipa::path(
    get,
    path = "/api/dashboard",
    tag = "Dashboard",
    params(DashboardParams),
    responses((status = 200, description = "Cards, gráfico do período e atividade recente", body = DashboardOverview)),
    security(("session_token" = []))
)]
pub async fn get_dashboard(
    State(app_state): State<AppState>,
    _guard: RequireCapability<CapDashboardView>,
    Query(params): Query<DashboardParams>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(app_state.analytics_service.dashboard(params.period).await?))
}

// Relatório fixo em texto, baixado como anexo
#[utoipa::path(
    get,
    path = "/api/reports/{title}/download",
    tag = "Dashboard",
    params(("title" = String, Path, description = "Título do card, ex.: \"Total Revenue\" ou total_revenue")),
    responses(
        (status = 200, description = "Arquivo .txt", content_type = "text/plain", body = String),
        (status = 404, description = "Relatório não encontrado")
    ),
    security(("session_token" = []))
)]
pub async fn download_report(
    State(app_state): State<AppState>,
    _guard: RequireCapability<CapDashboardView>,
    Path(title): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let report = app_state.analytics_service.report(&title).await?;
    let disposition = format!("attachment; filename=\"{}\"", report.file_name());

    tracing::info!("📄 Relatório '{}' baixado", report.title);
    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        report.body,
    ))
}
