//! Modelo de Proyecto
//! 
//! Mapea la tabla `proyecto`. `docentejefe` referencia `docente.codigo`
//! y puede ser nulo.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::FromRow;

/// Proyecto principal - mapea exactamente a la tabla proyecto
#[derive(Debug, Clone, Serialize, FromRow, PartialEq)]
pub struct Proyecto {
    pub codigo: i32,
    pub nombre: String,
    pub aliado: String,
    pub descripcion: String,
    pub presupuesto: Decimal,
    pub horasestimadas: i32,
    pub fechainicio: NaiveDate,
    pub fechafin: NaiveDate,
    pub docentejefe: Option<i32>,
}

/// Proyecto con el nombre de su docente jefe (LEFT JOIN)
#[derive(Debug, Clone, Serialize, FromRow, PartialEq)]
pub struct ProyectoConJefe {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub proyecto: Proyecto,
    pub nombre_jefe: Option<String>,
}
