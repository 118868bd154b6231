// src/common/validation.rs

use std::collections::HashMap;

use rust_decimal::Decimal;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::common::error::AppError;

// ---
// Validação Customizada
// ---
pub fn validate_not_negative(val: &Decimal) -> Result<(), ValidationError> {
    if val.is_sign_negative() && !val.is_zero() {
        let mut err = ValidationError::new("range");
        err.add_param("min".into(), &0.0);
        err.message = Some("O valor não pode ser negativo.".into());
        return Err(err);
    }
    Ok(())
}

pub fn validate_not_blank(val: &str) -> Result<(), ValidationError> {
    if val.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

/// Um rascunho de formulário: regras do `validator` + a ordem em que o
/// usuário as vê. Só a primeira regra que falha bloqueia o envio.
pub trait DraftForm: Validate {
    /// Campos na ordem de exibição do formulário.
    const FIELD_ORDER: &'static [&'static str];

    fn check(&self) -> Result<(), AppError> {
        self.validate()
            .map_err(|errors| into_app_error(&errors, Self::FIELD_ORDER))
    }
}

fn into_app_error(errors: &ValidationErrors, order: &[&str]) -> AppError {
    let mut details: HashMap<String, Vec<String>> = HashMap::new();
    for (field, field_errors) in errors.field_errors() {
        let messages = field_errors
            .iter()
            .map(|e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| e.code.to_string())
            })
            .collect();
        details.insert(field.to_string(), messages);
    }

    let message = order
        .iter()
        .find_map(|field| details.get(*field).and_then(|m| m.first().cloned()))
        .or_else(|| details.values().find_map(|m| m.first().cloned()))
        .unwrap_or_else(|| "Um ou mais campos são inválidos.".to_string());

    AppError::ValidationError { message, details }
}
