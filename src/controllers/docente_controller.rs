use crate::dto::docente_dto::{CreateDocenteRequest, UpdateDocenteRequest};
use crate::models::docente::Docente;
use crate::repositories::docente_repository::DocenteRepository;
use crate::utils::errors::AppError;
use sqlx::PgPool;
use tracing::info;
use validator::Validate;

pub const DOCENTE_ES_JEFE: &str =
    "No se puede eliminar el docente porque es jefe de uno o más proyectos.";

pub struct DocenteController {
    repository: DocenteRepository,
}

impl DocenteController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: DocenteRepository::new(pool),
        }
    }

    pub async fn list(&self) -> Result<Vec<Docente>, AppError> {
        self.repository.list().await
    }

    pub async fn create(&self, request: CreateDocenteRequest) -> Result<Docente, AppError> {
        let result = match request.validate() {
            Ok(()) => self.repository.create(&request).await,
            Err(e) => Err(e.into()),
        };

        match &result {
            Ok(docente) => info!("✅ Docente creado: {} (codigo {})", docente.documento, docente.codigo),
            Err(e) => e.log_failure("crear docente"),
        }
        result
    }

    pub async fn update(
        &self,
        documento: &str,
        request: UpdateDocenteRequest,
    ) -> Result<Docente, AppError> {
        let result = match request.validate() {
            Ok(()) => self.repository.update(documento, &request).await,
            Err(e) => Err(e.into()),
        };

        match &result {
            Ok(docente) => info!("✅ Docente actualizado: {}", docente.documento),
            Err(e) => e.log_failure("actualizar docente"),
        }
        result
    }

    /// Eliminar por documento.
    ///
    /// Si el docente es jefe de algún proyecto la base de datos rechaza el
    /// borrado y se devuelve `AppError::Conflict`.
    pub async fn delete(&self, documento: &str) -> Result<(), AppError> {
        let result = self.repository.delete(documento).await.map_err(|e| {
            if e.is_foreign_key_violation() {
                AppError::Conflict(DOCENTE_ES_JEFE.to_string())
            } else {
                e
            }
        });

        match &result {
            Ok(()) => info!("🗑️ Docente eliminado: {}", documento),
            Err(e) => e.log_failure("eliminar docente"),
        }
        result
    }
}
