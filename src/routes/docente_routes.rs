use axum::{
    extract::{rejection::FormRejection, Path, Query, State},
    response::Html,
    routing::{get, post},
    Form, Router,
};
use crate::controllers::docente_controller::DocenteController;
use crate::dto::docente_dto::{CreateDocenteRequest, UpdateDocenteRequest};
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::flash::{Flash, FlashQuery, FlashRedirect};
use crate::views;

use super::form_or_error;

const DOCENTES_PATH: &str = "/docentes";

pub fn create_docente_router() -> Router<AppState> {
    Router::new()
        .route("/docentes", get(list_docentes))
        .route("/docente/add", post(add_docente))
        .route("/docente/update/:documento", post(update_docente))
        .route("/docente/delete/:documento", get(delete_docente))
}

async fn list_docentes(
    State(state): State<AppState>,
    Query(query): Query<FlashQuery>,
) -> Result<Html<String>, AppError> {
    let controller = DocenteController::new(state.pool.clone());
    let docentes = controller.list().await?;
    Ok(views::docentes_page(&docentes, query.into_flash().as_ref()))
}

async fn add_docente(
    State(state): State<AppState>,
    form: Result<Form<CreateDocenteRequest>, FormRejection>,
) -> FlashRedirect {
    let controller = DocenteController::new(state.pool.clone());
    let result = match form_or_error(form, "crear docente") {
        Ok(request) => controller.create(request).await,
        Err(e) => Err(e),
    };
    FlashRedirect::to(
        DOCENTES_PATH,
        Flash::from_result(result, "Docente añadido con éxito.", "Error al añadir docente"),
    )
}

async fn update_docente(
    State(state): State<AppState>,
    Path(documento): Path<String>,
    form: Result<Form<UpdateDocenteRequest>, FormRejection>,
) -> FlashRedirect {
    let controller = DocenteController::new(state.pool.clone());
    let result = match form_or_error(form, "actualizar docente") {
        Ok(request) => controller.update(&documento, request).await,
        Err(e) => Err(e),
    };
    FlashRedirect::to(
        DOCENTES_PATH,
        Flash::from_result(result, "Docente actualizado con éxito.", "Error al actualizar docente"),
    )
}

async fn delete_docente(
    State(state): State<AppState>,
    Path(documento): Path<String>,
) -> FlashRedirect {
    let controller = DocenteController::new(state.pool.clone());
    let result = controller.delete(&documento).await;
    FlashRedirect::to(
        DOCENTES_PATH,
        Flash::from_result(result, "Docente eliminado con éxito.", "Error al eliminar docente"),
    )
}
