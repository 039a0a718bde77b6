use crate::dto::docente_dto::{CreateDocenteRequest, UpdateDocenteRequest};
use crate::models::docente::{Docente, DocenteOpcion};
use crate::utils::errors::{not_found_error, AppError};
use sqlx::PgPool;

pub struct DocenteRepository {
    pool: PgPool,
}

impl DocenteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<Docente>, AppError> {
        let docentes = sqlx::query_as::<_, Docente>(
            r#"
            SELECT codigo, documento, nombre, direccion, titulo, anosexperiencia
            FROM docente
            ORDER BY nombre
            "#
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(docentes)
    }

    /// Código y nombre de cada docente, para el selector de docente jefe
    pub async fn list_opciones(&self) -> Result<Vec<DocenteOpcion>, AppError> {
        let opciones = sqlx::query_as::<_, DocenteOpcion>(
            "SELECT codigo, nombre FROM docente ORDER BY nombre"
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(opciones)
    }

    // En todas las escrituras, un error antes del commit descarta `tx`
    // y la transacción se revierte al devolver la conexión al pool.

    pub async fn create(&self, request: &CreateDocenteRequest) -> Result<Docente, AppError> {
        let mut tx = self.pool.begin().await?;

        let docente = sqlx::query_as::<_, Docente>(
            r#"
            INSERT INTO docente (documento, nombre, direccion, titulo, anosexperiencia)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING codigo, documento, nombre, direccion, titulo, anosexperiencia
            "#
        )
        .bind(&request.documento)
        .bind(&request.nombre)
        .bind(&request.direccion)
        .bind(&request.titulo)
        .bind(request.anos_experiencia)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(docente)
    }

    pub async fn update(
        &self,
        documento: &str,
        request: &UpdateDocenteRequest,
    ) -> Result<Docente, AppError> {
        let mut tx = self.pool.begin().await?;

        let docente = sqlx::query_as::<_, Docente>(
            r#"
            UPDATE docente
            SET nombre = $1, direccion = $2, titulo = $3, anosexperiencia = $4
            WHERE documento = $5
            RETURNING codigo, documento, nombre, direccion, titulo, anosexperiencia
            "#
        )
        .bind(&request.nombre)
        .bind(&request.direccion)
        .bind(&request.titulo)
        .bind(request.anos_experiencia)
        .bind(documento)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| not_found_error("Docente", documento))?;

        tx.commit().await?;
        Ok(docente)
    }

    pub async fn delete(&self, documento: &str) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query("DELETE FROM docente WHERE documento = $1")
            .bind(documento)
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() == 0 {
            return Err(not_found_error("Docente", documento));
        }

        tx.commit().await?;
        Ok(())
    }
}
