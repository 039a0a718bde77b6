//! Modelo de Docente
//! 
//! Mapea la tabla `docente`: clave sustituta `codigo` y clave natural
//! `documento`.

use serde::Serialize;
use sqlx::FromRow;

/// Docente principal - mapea exactamente a la tabla docente
#[derive(Debug, Clone, Serialize, FromRow, PartialEq, Eq)]
pub struct Docente {
    pub codigo: i32,
    pub documento: String,
    pub nombre: String,
    pub direccion: String,
    pub titulo: String,
    pub anosexperiencia: i32,
}

/// Opción del selector de docente jefe en el formulario de proyectos
#[derive(Debug, Clone, Serialize, FromRow, PartialEq, Eq)]
pub struct DocenteOpcion {
    pub codigo: i32,
    pub nombre: String,
}
