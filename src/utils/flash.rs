//! Mensajes flash
//! 
//! Las operaciones de escritura responden con un `302 Found` hacia la página
//! de listado. El mensaje de estado viaja en la query string de la
//! redirección y la página lo muestra una sola vez.

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use super::errors::AppError;

/// Severidad del mensaje
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashKind {
    Success,
    Danger,
}

impl FlashKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FlashKind::Success => "success",
            FlashKind::Danger => "danger",
        }
    }

    fn parse(value: &str) -> Option<Self> {
        match value {
            "success" => Some(FlashKind::Success),
            "danger" => Some(FlashKind::Danger),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flash {
    pub kind: FlashKind,
    pub message: String,
}

impl Flash {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: FlashKind::Success,
            message: message.into(),
        }
    }

    pub fn danger(message: impl Into<String>) -> Self {
        Self {
            kind: FlashKind::Danger,
            message: message.into(),
        }
    }

    /// Convertir el resultado de una operación en su mensaje
    pub fn from_result<T>(result: Result<T, AppError>, success: &str, error_context: &str) -> Self {
        match result {
            Ok(_) => Flash::success(success),
            Err(e) => Flash::danger(e.flash_message(error_context)),
        }
    }

    /// Query string `kind=...&msg=...`
    pub fn to_query(&self) -> String {
        format!(
            "kind={}&msg={}",
            self.kind.as_str(),
            urlencoding::encode(&self.message)
        )
    }
}

/// Parámetros de query que leen las páginas de listado
#[derive(Debug, Default, Deserialize)]
pub struct FlashQuery {
    pub kind: Option<String>,
    pub msg: Option<String>,
}

impl FlashQuery {
    pub fn into_flash(self) -> Option<Flash> {
        let message = self.msg.filter(|m| !m.trim().is_empty())?;
        let kind = self
            .kind
            .as_deref()
            .and_then(FlashKind::parse)
            .unwrap_or(FlashKind::Success);
        Some(Flash { kind, message })
    }
}

/// Redirección `302 Found` con mensaje flash
#[derive(Debug)]
pub struct FlashRedirect {
    location: &'static str,
    flash: Flash,
}

impl FlashRedirect {
    pub fn to(location: &'static str, flash: Flash) -> Self {
        Self { location, flash }
    }

    pub fn location(&self) -> String {
        format!("{}?{}", self.location, self.flash.to_query())
    }
}

impl IntoResponse for FlashRedirect {
    fn into_response(self) -> Response {
        (StatusCode::FOUND, [(header::LOCATION, self.location())]).into_response()
    }
}
