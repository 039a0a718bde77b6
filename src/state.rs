//! Estado compartido de la aplicación
//! 
//! Este módulo define el estado que se pasa a través del router de Axum.

use sqlx::PgPool;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
}

impl AppState {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}
