use axum::{
    extract::{rejection::FormRejection, Path, Query, State},
    response::Html,
    routing::{get, post},
    Form, Router,
};
use crate::controllers::proyecto_controller::ProyectoController;
use crate::dto::proyecto_dto::ProyectoRequest;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::flash::{Flash, FlashQuery, FlashRedirect};
use crate::views;

use super::form_or_error;

const PROYECTOS_PATH: &str = "/proyectos";

pub fn create_proyecto_router() -> Router<AppState> {
    Router::new()
        .route("/proyectos", get(list_proyectos))
        .route("/proyecto/add", post(add_proyecto))
        .route("/proyecto/update/:codigo", post(update_proyecto))
        .route("/proyecto/delete/:codigo", get(delete_proyecto))
}

async fn list_proyectos(
    State(state): State<AppState>,
    Query(query): Query<FlashQuery>,
) -> Result<Html<String>, AppError> {
    let controller = ProyectoController::new(state.pool.clone());
    let listado = controller.list().await?;
    Ok(views::proyectos_page(
        &listado.proyectos,
        &listado.docentes,
        query.into_flash().as_ref(),
    ))
}

async fn add_proyecto(
    State(state): State<AppState>,
    form: Result<Form<ProyectoRequest>, FormRejection>,
) -> FlashRedirect {
    let controller = ProyectoController::new(state.pool.clone());
    let result = match form_or_error(form, "crear proyecto") {
        Ok(request) => controller.create(request).await,
        Err(e) => Err(e),
    };
    FlashRedirect::to(
        PROYECTOS_PATH,
        Flash::from_result(result, "Proyecto añadido con éxito.", "Error al añadir proyecto"),
    )
}

async fn update_proyecto(
    State(state): State<AppState>,
    Path(codigo): Path<i32>,
    form: Result<Form<ProyectoRequest>, FormRejection>,
) -> FlashRedirect {
    let controller = ProyectoController::new(state.pool.clone());
    let result = match form_or_error(form, "actualizar proyecto") {
        Ok(request) => controller.update(codigo, request).await,
        Err(e) => Err(e),
    };
    FlashRedirect::to(
        PROYECTOS_PATH,
        Flash::from_result(result, "Proyecto actualizado con éxito.", "Error al actualizar proyecto"),
    )
}

async fn delete_proyecto(
    State(state): State<AppState>,
    Path(codigo): Path<i32>,
) -> FlashRedirect {
    let controller = ProyectoController::new(state.pool.clone());
    let result = controller.delete(codigo).await;
    FlashRedirect::to(
        PROYECTOS_PATH,
        Flash::from_result(result, "Proyecto eliminado con éxito.", "Error al eliminar proyecto"),
    )
}
