use crate::dto::proyecto_dto::ProyectoRequest;
use crate::models::docente::DocenteOpcion;
use crate::models::proyecto::{Proyecto, ProyectoConJefe};
use crate::repositories::docente_repository::DocenteRepository;
use crate::repositories::proyecto_repository::ProyectoRepository;
use crate::utils::errors::AppError;
use sqlx::PgPool;
use tracing::info;
use validator::Validate;

/// Datos de la página de proyectos
#[derive(Debug)]
pub struct ProyectosListado {
    pub proyectos: Vec<ProyectoConJefe>,
    pub docentes: Vec<DocenteOpcion>,
}

pub struct ProyectoController {
    repository: ProyectoRepository,
    docentes: DocenteRepository,
}

impl ProyectoController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: ProyectoRepository::new(pool.clone()),
            docentes: DocenteRepository::new(pool),
        }
    }

    pub async fn list(&self) -> Result<ProyectosListado, AppError> {
        let proyectos = self.repository.list_con_jefe().await?;
        let docentes = self.docentes.list_opciones().await?;
        Ok(ProyectosListado { proyectos, docentes })
    }

    pub async fn create(&self, request: ProyectoRequest) -> Result<Proyecto, AppError> {
        let result = match request.validate() {
            Ok(()) => self.repository.create(&request).await,
            Err(e) => Err(e.into()),
        };

        match &result {
            Ok(proyecto) => info!("✅ Proyecto creado: {} (codigo {})", proyecto.nombre, proyecto.codigo),
            Err(e) => e.log_failure("crear proyecto"),
        }
        result
    }

    pub async fn update(&self, codigo: i32, request: ProyectoRequest) -> Result<Proyecto, AppError> {
        let result = match request.validate() {
            Ok(()) => self.repository.update(codigo, &request).await,
            Err(e) => Err(e.into()),
        };

        match &result {
            Ok(proyecto) => info!("✅ Proyecto actualizado: codigo {}", proyecto.codigo),
            Err(e) => e.log_failure("actualizar proyecto"),
        }
        result
    }

    pub async fn delete(&self, codigo: i32) -> Result<(), AppError> {
        let result = self.repository.delete(codigo).await;

        match &result {
            Ok(()) => info!("🗑️ Proyecto eliminado: codigo {}", codigo),
            Err(e) => e.log_failure("eliminar proyecto"),
        }
        result
    }
}
