// src/handlers/session.rs

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::session::CurrentSession,
    models::session::{LoginPayload, LoginResponse, Session},
};

// POST /api/session/login
#[utoipa::path(
    post,
    path = "/api/session/login",
    tag = "Session",
    request_body = LoginPayload,
    responses(
        (status = 200, description = "Sessão aberta (nenhuma credencial é verificada)", body = LoginResponse)
    )
)]
pub async fn login(
    State(app_state): State<AppState>,
    payload: Option<Json<LoginPayload>>,
) -> Json<LoginResponse> {
    let payload = payload.map(|Json(p)| p).unwrap_or_default();
    Json(app_state.sessions.login(payload).await)
}

// POST /api/session/logout
#[utoipa::path(
    post,
    path = "/api/session/logout",
    tag = "Session",
    responses(
        (status = 204, description = "Sessão encerrada"),
        (status = 401, description = "Sessão inválida")
    ),
    security(("session_token" = []))
)]
pub async fn logout(
    State(app_state): State<AppState>,
    CurrentSession(session): CurrentSession,
) -> Result<impl IntoResponse, AppError> {
    app_state.sessions.logout(session.id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// GET /api/session
#[utoipa::path(
    get,
    path = "/api/session",
    tag = "Session",
    responses(
        (status = 200, description = "Sessão atual", body = Session),
        (status = 401, description = "Sessão inválida")
    ),
    security(("session_token" = []))
)]
pub async fn current(CurrentSession(session): CurrentSession) -> Json<Session> {
    Json(session)
}
