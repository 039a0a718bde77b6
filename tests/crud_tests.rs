//! Pruebas de extremo a extremo contra PostgreSQL.
//!
//! Ejecutar con: DATABASE_URL=postgres://... cargo test -- --ignored

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    response::Response,
    Router,
};
use proyectos_informaticos::controllers::docente_controller::DocenteController;
use proyectos_informaticos::controllers::proyecto_controller::ProyectoController;
use proyectos_informaticos::{create_router, AppState};
use sqlx::PgPool;
use tower::ServiceExt;

fn app(pool: &PgPool) -> Router {
    create_router(AppState::new(pool.clone()))
}

async fn post_form(pool: &PgPool, uri: &str, body: String) -> Response {
    app(pool)
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap()
}

async fn get(pool: &PgPool, uri: &str) -> Response {
    app(pool)
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn get_page(pool: &PgPool, uri: &str) -> String {
    let response = get(pool, uri).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(body.to_vec()).unwrap()
}

/// Mensaje flash decodificado de una redirección, con su severidad
fn flash_of(response: &Response) -> (String, String) {
    assert_eq!(response.status(), StatusCode::FOUND);
    let location = response.headers()[header::LOCATION].to_str().unwrap();
    let (_, query) = location.split_once('?').unwrap();
    let mut kind = String::new();
    let mut msg = String::new();
    for pair in query.split('&') {
        let (key, value) = pair.split_once('=').unwrap();
        let value = urlencoding::decode(value).unwrap().into_owned();
        match key {
            "kind" => kind = value,
            "msg" => msg = value,
            _ => {}
        }
    }
    (kind, msg)
}

async fn insertar_docente(pool: &PgPool, documento: &str, nombre: &str) -> i32 {
    sqlx::query_scalar(
        "INSERT INTO docente (documento, nombre, direccion, titulo, anosexperiencia)
         VALUES ($1, $2, 'Calle 1', 'MSc', 5) RETURNING codigo",
    )
    .bind(documento)
    .bind(nombre)
    .fetch_one(pool)
    .await
    .unwrap()
}

async fn insertar_proyecto(pool: &PgPool, nombre: &str, docentejefe: Option<i32>) -> i32 {
    sqlx::query_scalar(
        "INSERT INTO proyecto (nombre, aliado, descripcion, presupuesto, horasestimadas,
                               fechainicio, fechafin, docentejefe)
         VALUES ($1, 'Acme', 'Piloto', 1000.00, 40, '2024-01-01', '2024-06-30', $2)
         RETURNING codigo",
    )
    .bind(nombre)
    .bind(docentejefe)
    .fetch_one(pool)
    .await
    .unwrap()
}

async fn contar(pool: &PgPool, tabla: &str) -> i64 {
    sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {}", tabla))
        .fetch_one(pool)
        .await
        .unwrap()
}

fn proyecto_form(docente_jefe: &str) -> String {
    format!(
        "nombre=Robot&aliado=Acme&descripcion=Piloto&presupuesto=2500.50&horas_estimadas=120\
         &fecha_inicio=2024-02-01&fecha_fin=2024-11-30&docente_jefe={}",
        docente_jefe
    )
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires database"]
async fn test_add_docente_then_list(pool: PgPool) {
    let response = post_form(
        &pool,
        "/docente/add",
        "documento=123&nombre=Ana&direccion=Calle+1&titulo=MSc&anos_experiencia=5".to_string(),
    )
    .await;
    assert_eq!(
        flash_of(&response),
        ("success".to_string(), "Docente añadido con éxito.".to_string())
    );

    let location = response.headers()[header::LOCATION].to_str().unwrap().to_string();
    let page = get_page(&pool, &location).await;
    assert!(page.contains("<td>123</td>"));
    assert!(page.contains(r#"value="Ana""#));
    assert!(page.contains("alert-success"));
    assert!(page.contains("Docente añadido con éxito."));
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires database"]
async fn test_docentes_are_listed_by_name(pool: PgPool) {
    insertar_docente(&pool, "3", "Carla").await;
    insertar_docente(&pool, "1", "Ana").await;
    insertar_docente(&pool, "2", "Beto").await;

    let docentes = DocenteController::new(pool.clone()).list().await.unwrap();
    let nombres: Vec<_> = docentes.iter().map(|d| d.nombre.as_str()).collect();
    assert_eq!(nombres, vec!["Ana", "Beto", "Carla"]);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires database"]
async fn test_duplicate_documento_surfaces_database_error(pool: PgPool) {
    insertar_docente(&pool, "123", "Ana").await;

    let response = post_form(
        &pool,
        "/docente/add",
        "documento=123&nombre=Otra&direccion=Calle+2&titulo=PhD&anos_experiencia=1".to_string(),
    )
    .await;
    let (kind, msg) = flash_of(&response);
    assert_eq!(kind, "danger");
    assert!(msg.starts_with("Error al añadir docente: "));
    assert!(msg.contains("docente_documento_key"));
    assert_eq!(contar(&pool, "docente").await, 1);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires database"]
async fn test_update_docente_by_documento(pool: PgPool) {
    insertar_docente(&pool, "123", "Ana").await;

    let response = post_form(
        &pool,
        "/docente/update/123",
        "nombre=Ana+Mar%C3%ADa&direccion=Calle+9&titulo=PhD&anos_experiencia=12".to_string(),
    )
    .await;
    assert_eq!(flash_of(&response).0, "success");

    let docentes = DocenteController::new(pool.clone()).list().await.unwrap();
    assert_eq!(docentes[0].nombre, "Ana María");
    assert_eq!(docentes[0].anosexperiencia, 12);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires database"]
async fn test_update_missing_docente_reports_not_found(pool: PgPool) {
    let response = post_form(
        &pool,
        "/docente/update/999",
        "nombre=Nadie&direccion=Calle+1&titulo=MSc&anos_experiencia=1".to_string(),
    )
    .await;
    assert_eq!(
        flash_of(&response),
        (
            "danger".to_string(),
            "Error al actualizar docente: Docente '999' no encontrado".to_string()
        )
    );
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires database"]
async fn test_delete_docente_leading_a_project_fails(pool: PgPool) {
    let codigo = insertar_docente(&pool, "123", "Ana").await;
    insertar_proyecto(&pool, "Robot", Some(codigo)).await;

    let response = get(&pool, "/docente/delete/123").await;
    assert_eq!(
        flash_of(&response),
        (
            "danger".to_string(),
            "Error: No se puede eliminar el docente porque es jefe de uno o más proyectos."
                .to_string()
        )
    );
    assert_eq!(contar(&pool, "docente").await, 1);
    assert_eq!(contar(&pool, "proyecto").await, 1);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires database"]
async fn test_delete_unreferenced_docente(pool: PgPool) {
    insertar_docente(&pool, "123", "Ana").await;
    insertar_docente(&pool, "456", "Beto").await;

    let response = get(&pool, "/docente/delete/123").await;
    assert_eq!(
        flash_of(&response),
        ("success".to_string(), "Docente eliminado con éxito.".to_string())
    );

    let docentes = DocenteController::new(pool.clone()).list().await.unwrap();
    assert_eq!(docentes.len(), 1);
    assert_eq!(docentes[0].documento, "456");
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires database"]
async fn test_add_proyecto_and_list_with_lead(pool: PgPool) {
    let codigo = insertar_docente(&pool, "123", "Ana").await;

    let response = post_form(&pool, "/proyecto/add", proyecto_form(&codigo.to_string())).await;
    assert_eq!(
        flash_of(&response),
        ("success".to_string(), "Proyecto añadido con éxito.".to_string())
    );

    let page = get_page(&pool, "/proyectos").await;
    assert!(page.contains("<td>Robot</td>"));
    assert!(page.contains("<td>Ana</td>"));
    assert!(page.contains(r#"value="2500.50""#));
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires database"]
async fn test_project_without_lead_still_listed(pool: PgPool) {
    insertar_docente(&pool, "123", "Ana").await;
    let sin_jefe = insertar_proyecto(&pool, "Huérfano", None).await;

    let listado = ProyectoController::new(pool.clone()).list().await.unwrap();
    assert_eq!(listado.proyectos.len(), 1);
    assert_eq!(listado.proyectos[0].proyecto.codigo, sin_jefe);
    assert_eq!(listado.proyectos[0].nombre_jefe, None);
    assert_eq!(listado.docentes.len(), 1);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires database"]
async fn test_update_proyecto_lead_changes_joined_name(pool: PgPool) {
    let ana = insertar_docente(&pool, "1", "Ana").await;
    let beto = insertar_docente(&pool, "2", "Beto").await;
    let proyecto = insertar_proyecto(&pool, "Robot", Some(ana)).await;

    let response = post_form(
        &pool,
        &format!("/proyecto/update/{}", proyecto),
        proyecto_form(&beto.to_string()),
    )
    .await;
    assert_eq!(
        flash_of(&response),
        ("success".to_string(), "Proyecto actualizado con éxito.".to_string())
    );

    let listado = ProyectoController::new(pool.clone()).list().await.unwrap();
    assert_eq!(listado.proyectos[0].proyecto.docentejefe, Some(beto));
    assert_eq!(listado.proyectos[0].nombre_jefe.as_deref(), Some("Beto"));
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires database"]
async fn test_add_proyecto_with_unknown_lead_leaves_no_row(pool: PgPool) {
    let response = post_form(&pool, "/proyecto/add", proyecto_form("4242")).await;
    let (kind, msg) = flash_of(&response);
    assert_eq!(kind, "danger");
    assert!(msg.starts_with("Error al añadir proyecto: "));
    assert!(msg.contains("foreign key"));
    assert_eq!(contar(&pool, "proyecto").await, 0);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires database"]
async fn test_delete_proyecto(pool: PgPool) {
    let proyecto = insertar_proyecto(&pool, "Robot", None).await;

    let response = get(&pool, &format!("/proyecto/delete/{}", proyecto)).await;
    assert_eq!(
        flash_of(&response),
        ("success".to_string(), "Proyecto eliminado con éxito.".to_string())
    );
    assert_eq!(contar(&pool, "proyecto").await, 0);

    let response = get(&pool, &format!("/proyecto/delete/{}", proyecto)).await;
    let (kind, msg) = flash_of(&response);
    assert_eq!(kind, "danger");
    assert!(msg.contains("no encontrado"));
}
