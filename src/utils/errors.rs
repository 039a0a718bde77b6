//! Sistema de manejo de errores
//! 
//! Este módulo define los errores de la aplicación, su texto para el usuario
//! y su conversión a respuestas HTTP.

use axum::{
    extract::rejection::FormRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use super::validation::describe_validation_errors;
use crate::views;

/// Errores principales de la aplicación
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),
}

impl AppError {
    /// Texto del error tal como se muestra al usuario
    pub fn detail(&self) -> String {
        match self {
            AppError::Database(sqlx::Error::Database(db)) => db.message().to_string(),
            AppError::Database(e) => e.to_string(),
            AppError::Validation(e) => describe_validation_errors(e),
            AppError::BadRequest(msg) | AppError::NotFound(msg) | AppError::Conflict(msg) => {
                msg.clone()
            }
        }
    }

    /// Mensaje flash para una operación fallida.
    ///
    /// Los conflictos ya son mensajes redactados para el usuario y no
    /// llevan el contexto de la operación.
    pub fn flash_message(&self, context: &str) -> String {
        match self {
            AppError::Conflict(msg) => format!("Error: {}", msg),
            other => format!("{}: {}", context, other.detail()),
        }
    }

    /// Registrar en el log una operación fallida
    pub fn log_failure(&self, operation: &str) {
        match self {
            AppError::Database(sqlx::Error::Database(db)) if db.constraint().is_some() => {
                tracing::warn!("⚠️ {} rechazado por restricción: {}", operation, db.message());
            }
            AppError::Database(e) => tracing::error!("❌ Error de base de datos al {}: {}", operation, e),
            other => tracing::warn!("⚠️ No se pudo {}: {}", operation, other.detail()),
        }
    }

    pub fn is_foreign_key_violation(&self) -> bool {
        matches!(self, AppError::Database(sqlx::Error::Database(db)) if db.is_foreign_key_violation())
    }

    fn status(&self) -> StatusCode {
        match self {
            AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Validation(_) | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
        }
    }
}

impl From<FormRejection> for AppError {
    fn from(rejection: FormRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("❌ {}", self);
        } else {
            tracing::warn!("⚠️ {}", self);
        }

        (status, views::error_page(status, &self.detail())).into_response()
    }
}

/// Función helper para crear errores de recurso no encontrado
pub fn not_found_error(resource: &str, key: &str) -> AppError {
    AppError::NotFound(format!("{} '{}' no encontrado", resource, key))
}
