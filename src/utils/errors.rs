//! Sistema de manejo de errores
//!
//! Este módulo define todos los tipos de errores del sistema
//! y su conversión a respuestas HTTP apropiadas.

use std::collections::BTreeMap;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

/// Errores principales de la aplicación
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Respuesta de error para la API
///
/// Mismo contrato que la API original: `message` siempre presente,
/// `errors` solo en errores de validación ({campo: [mensajes]}).
#[derive(Debug, serde::Serialize)]
struct ErrorResponse {
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    errors: Option<BTreeMap<String, Vec<String>>>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_response) = match self {
            AppError::Validation(e) => {
                tracing::debug!("Validation error: {}", e);
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    ErrorResponse {
                        message: "Les données fournies sont invalides.".to_string(),
                        errors: Some(validation_errors_to_map(&e)),
                    },
                )
            }

            AppError::Unauthorized(msg) => {
                tracing::debug!("Unauthorized access: {}", msg);
                (
                    StatusCode::UNAUTHORIZED,
                    ErrorResponse {
                        message: msg,
                        errors: None,
                    },
                )
            }

            AppError::NotFound(msg) => {
                tracing::debug!("Resource not found: {}", msg);
                (
                    StatusCode::NOT_FOUND,
                    ErrorResponse {
                        message: msg,
                        errors: None,
                    },
                )
            }

            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse {
                        message: "Une erreur interne est survenue.".to_string(),
                        errors: None,
                    },
                )
            }
        };

        (status, Json(error_response)).into_response()
    }
}

/// Resultado tipado para operaciones que pueden fallar
pub type AppResult<T> = Result<T, AppError>;

/// Aplanar los errores del validator al mapa {campo: [mensajes]}
pub fn validation_errors_to_map(
    errors: &validator::ValidationErrors,
) -> BTreeMap<String, Vec<String>> {
    errors
        .field_errors()
        .iter()
        .map(|(field, field_errors)| {
            let messages = field_errors
                .iter()
                .map(|e| {
                    e.message
                        .clone()
                        .map(|m| m.into_owned())
                        .unwrap_or_else(|| e.code.to_string())
                })
                .collect();
            (field.to_string(), messages)
        })
        .collect()
}

/// Función helper para crear errores de validación de un solo campo
pub fn validation_error(field: &'static str, message: String) -> AppError {
    use validator::ValidationError;

    let mut error = ValidationError::new("custom");
    error.message = Some(message.into());

    let mut errors = validator::ValidationErrors::new();
    errors.add(field, error);

    AppError::Validation(errors)
}

/// Renombrar un campo en los errores de validación
///
/// El validator usa el nombre del campo Rust; cuando el wire format
/// renombra el campo (p. ej. `type`), el mapa de errores debe usar el
/// nombre del wire.
pub fn rename_error_field(
    errors: validator::ValidationErrors,
    from: &'static str,
    to: &'static str,
) -> validator::ValidationErrors {
    let mut renamed = validator::ValidationErrors::new();
    for (field, field_errors) in errors.field_errors() {
        let target = if field == from { to } else { field };
        for error in field_errors {
            renamed.add(target, error.clone());
        }
    }
    renamed
}

/// Función helper para crear errores de recurso no encontrado
pub fn not_found_error(resource: &str) -> AppError {
    AppError::NotFound(format!("{} non trouvée", resource))
}

/// Extraer un campo requerido ya validado
///
/// Los DTOs modelan los campos requeridos como Option; después de
/// `validate()` siempre son Some, pero la extracción queda tipada.
pub fn required_field<T>(value: Option<T>, field: &'static str) -> AppResult<T> {
    value.ok_or_else(|| validation_error(field, format!("Le champ {} est obligatoire.", field)))
}
