pub mod docente_routes;
pub mod home_routes;
pub mod proyecto_routes;

use axum::{extract::rejection::FormRejection, Form, Router};
use tower_http::trace::TraceLayer;

use crate::state::AppState;
use crate::utils::errors::AppError;

/// Router completo de la aplicación
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(home_routes::create_home_router())
        .merge(docente_routes::create_docente_router())
        .merge(proyecto_routes::create_proyecto_router())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Un formulario que no se pudo deserializar se trata como error de la operación
fn form_or_error<T>(form: Result<Form<T>, FormRejection>, operation: &str) -> Result<T, AppError> {
    form.map(|Form(request)| request).map_err(|rejection| {
        let err = AppError::from(rejection);
        err.log_failure(operation);
        err
    })
}
