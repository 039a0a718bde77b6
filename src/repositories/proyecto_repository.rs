use crate::dto::proyecto_dto::ProyectoRequest;
use crate::models::proyecto::{Proyecto, ProyectoConJefe};
use crate::utils::errors::{not_found_error, AppError};
use sqlx::PgPool;

pub struct ProyectoRepository {
    pool: PgPool,
}

impl ProyectoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Proyectos con el nombre de su docente jefe.
    ///
    /// LEFT JOIN: los proyectos sin jefe también aparecen, con `nombre_jefe` nulo.
    pub async fn list_con_jefe(&self) -> Result<Vec<ProyectoConJefe>, AppError> {
        let proyectos = sqlx::query_as::<_, ProyectoConJefe>(
            r#"
            SELECT p.codigo, p.nombre, p.aliado, p.descripcion, p.presupuesto,
                   p.horasestimadas, p.fechainicio, p.fechafin, p.docentejefe,
                   d.nombre AS nombre_jefe
            FROM proyecto p
            LEFT JOIN docente d ON p.docentejefe = d.codigo
            ORDER BY p.codigo
            "#
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(proyectos)
    }

    pub async fn create(&self, request: &ProyectoRequest) -> Result<Proyecto, AppError> {
        let mut tx = self.pool.begin().await?;

        let proyecto = sqlx::query_as::<_, Proyecto>(
            r#"
            INSERT INTO proyecto (nombre, aliado, descripcion, presupuesto, horasestimadas,
                                  fechainicio, fechafin, docentejefe)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#
        )
        .bind(&request.nombre)
        .bind(&request.aliado)
        .bind(&request.descripcion)
        .bind(request.presupuesto)
        .bind(request.horas_estimadas)
        .bind(request.fecha_inicio)
        .bind(request.fecha_fin)
        .bind(request.docente_jefe)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(proyecto)
    }

    pub async fn update(&self, codigo: i32, request: &ProyectoRequest) -> Result<Proyecto, AppError> {
        let mut tx = self.pool.begin().await?;

        let proyecto = sqlx::query_as::<_, Proyecto>(
            r#"
            UPDATE proyecto
            SET nombre = $1, aliado = $2, descripcion = $3, presupuesto = $4,
                horasestimadas = $5, fechainicio = $6, fechafin = $7, docentejefe = $8
            WHERE codigo = $9
            RETURNING *
            "#
        )
        .bind(&request.nombre)
        .bind(&request.aliado)
        .bind(&request.descripcion)
        .bind(request.presupuesto)
        .bind(request.horas_estimadas)
        .bind(request.fecha_inicio)
        .bind(request.fecha_fin)
        .bind(request.docente_jefe)
        .bind(codigo)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| not_found_error("Proyecto", &codigo.to_string()))?;

        tx.commit().await?;
        Ok(proyecto)
    }

    pub async fn delete(&self, codigo: i32) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query("DELETE FROM proyecto WHERE codigo = $1")
            .bind(codigo)
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() == 0 {
            return Err(not_found_error("Proyecto", &codigo.to_string()));
        }

        tx.commit().await?;
        Ok(())
    }
}
