// src/handlers/navigation.rs

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::session::CurrentSession,
    models::session::Navigation,
    services::navigation::navigation_for,
};

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct NavigationParams {
    /// Caminho atual, para marcar a rota ativa
    #[serde(default = "root_path")]
    pub current: String,
}

fn root_path() -> String {
    "/".to_string()
}

// GET /api/navigation
#[utoipa::path(
    get,
    path = "/api/navigation",
    tag = "Session",
    params(NavigationParams),
    responses(
        (status = 200, description = "Rotas da barra lateral liberadas para a sessão", body = Navigation)
    ),
    security(("session_token" = []))
)]
pub async fn get_navigation(
    CurrentSession(session): CurrentSession,
    Query(params): Query<NavigationParams>,
) -> Json<Navigation> {
    Json(navigation_for(&session, &params.current))
}

// POST /api/navigation/sidebar/toggle
#[utoipa::path(
    post,
    path = "/api/navigation/sidebar/toggle",
    tag = "Session",
    responses(
        (status = 200, description = "Barra lateral recolhida/expandida", body = Navigation)
    ),
    security(("session_token" = []))
)]
pub async fn toggle_sidebar(
    State(app_state): State<AppState>,
    CurrentSession(session): CurrentSession,
) -> Result<Json<Navigation>, AppError> {
    let session = app_state.sessions.toggle_sidebar(session.id).await?;
    Ok(Json(navigation_for(&session, "/")))
}
