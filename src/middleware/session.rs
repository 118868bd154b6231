// src/middleware/session.rs

use axum::{
    extract::{FromRequestParts, Request, State},
    http::request::Parts,
    middleware::Next,
    response::Response,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    typed_header::TypedHeaderRejection,
    TypedHeader,
};

use crate::{common::error::AppError, config::AppState, models::session::Session};

// O guardião: exige "Authorization: Bearer <token>" de uma sessão aberta
// e coloca a Session nos "extensions" da requisição.
// Header ausente, malformado ou de outro esquema (Basic, ...) = 401.
pub async fn session_guard(
    State(app_state): State<AppState>,
    bearer: Result<TypedHeader<Authorization<Bearer>>, TypedHeaderRejection>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let TypedHeader(Authorization(bearer)) = bearer.map_err(|rejection| {
        tracing::debug!("Authorization recusado: {}", rejection);
        AppError::InvalidSession
    })?;

    let session = app_state.sessions.find(bearer.token()).await?;
    request.extensions_mut().insert(session);

    Ok(next.run(request).await)
}

// Extrator para obter a sessão diretamente nos handlers
pub struct CurrentSession(pub Session);

impl<S> FromRequestParts<S> for CurrentSession
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Session>()
            .cloned()
            .map(CurrentSession)
            .ok_or(AppError::InvalidSession)
    }
}
