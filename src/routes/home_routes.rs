use axum::{extract::State, response::Html, routing::get, Json, Router};
use serde_json::json;

use crate::database::check_connection;
use crate::state::AppState;
use crate::views;

pub fn create_home_router() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
}

async fn index() -> Html<String> {
    views::home_page()
}

/// Estado del servicio y de la conexión a la base de datos
async fn health(State(state): State<AppState>) -> Json<serde_json::Value> {
    let (status, database) = match check_connection(&state.pool).await {
        Ok(()) => ("ok", "ok".to_string()),
        Err(e) => {
            tracing::error!("❌ Health check sin base de datos: {}", e);
            ("degraded", e.to_string())
        }
    };

    Json(json!({
        "status": status,
        "database": database,
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
