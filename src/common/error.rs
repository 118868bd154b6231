// src/common/error.rs

use std::collections::HashMap;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// Erro único da aplicação. Cada variante sabe virar uma resposta HTTP.
#[derive(Debug, Error)]
pub enum AppError {
    // `message` é a regra que bloqueou o envio (a primeira que falhou).
    #[error("Erro de validação: {message}")]
    ValidationError {
        message: String,
        details: HashMap<String, Vec<String>>,
    },

    #[error("{entity} '{id}' não encontrado")]
    NotFound { entity: &'static str, id: String },

    #[error("Sessão inválida ou ausente")]
    InvalidSession,

    #[error("Capacidade '{0}' necessária")]
    MissingCapability(&'static str),

    #[error("Exclusão não confirmada")]
    DeletionNotConfirmed,

    // Variante genérica para qualquer outro erro inesperado
    #[error("Erro interno do servidor")]
    InternalServerError(#[from] anyhow::Error),
}

impl AppError {
    pub fn not_found(entity: &'static str, id: impl Into<String>) -> Self {
        AppError::NotFound { entity, id: id.into() }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::ValidationError { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::InvalidSession => StatusCode::UNAUTHORIZED,
            AppError::MissingCapability(_) => StatusCode::FORBIDDEN,
            AppError::DeletionNotConfirmed => StatusCode::CONFLICT,
            AppError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.to_string();

        let body = match self {
            AppError::ValidationError { message, details } => json!({
                "error": message,
                "details": details,
            }),
            AppError::NotFound { .. } => json!({ "error": message }),
            AppError::InvalidSession => {
                json!({ "error": "Sessão inválida ou ausente. Faça login novamente." })
            }
            AppError::MissingCapability(slug) => json!({
                "error": format!("Você precisa da capacidade '{}' para acessar este recurso.", slug),
            }),
            AppError::DeletionNotConfirmed => json!({
                "error": "A exclusão precisa ser confirmada (confirm=true). Nada foi removido.",
            }),
            // O `tracing` loga a mensagem detalhada; o cliente recebe uma genérica.
            AppError::InternalServerError(e) => {
                tracing::error!("Erro Interno do Servidor: {:?}", e);
                json!({ "error": "Ocorreu um erro inesperado." })
            }
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_match_variants() {
        assert_eq!(AppError::InvalidSession.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(AppError::MissingCapability("orders:write").status(), StatusCode::FORBIDDEN);
        assert_eq!(AppError::DeletionNotConfirmed.status(), StatusCode::CONFLICT);
        assert_eq!(AppError::not_found("Item", "9").status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn not_found_message_names_entity_and_id() {
        let err = AppError::not_found("Pedido", "ORD-042");
        assert_eq!(err.to_string(), "Pedido 'ORD-042' não encontrado");
    }
}
