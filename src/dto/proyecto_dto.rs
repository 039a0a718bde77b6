use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::utils::validation::{empty_as_none, trimmed, validate_date_order, validate_non_negative};

// Formulario de proyecto, compartido por creación y actualización
#[derive(Debug, Clone, Deserialize, Validate)]
#[validate(schema(function = "validate_fechas", skip_on_field_errors = false))]
pub struct ProyectoRequest {
    #[serde(deserialize_with = "trimmed")]
    #[validate(length(min = 1, max = 150, message = "es obligatorio (máximo 150 caracteres)"))]
    pub nombre: String,

    #[serde(deserialize_with = "trimmed")]
    #[validate(length(min = 1, max = 150, message = "es obligatorio (máximo 150 caracteres)"))]
    pub aliado: String,

    #[serde(deserialize_with = "trimmed")]
    #[validate(length(min = 1, max = 2000, message = "es obligatoria (máximo 2000 caracteres)"))]
    pub descripcion: String,

    #[validate(custom = "validate_non_negative")]
    pub presupuesto: Decimal,

    #[validate(range(min = 0, message = "no puede ser negativo"))]
    pub horas_estimadas: i32,

    pub fecha_inicio: NaiveDate,

    pub fecha_fin: NaiveDate,

    // Vacío = proyecto sin docente jefe
    #[serde(default, deserialize_with = "empty_as_none")]
    pub docente_jefe: Option<i32>,
}

fn validate_fechas(request: &ProyectoRequest) -> Result<(), ValidationError> {
    validate_date_order(request.fecha_inicio, request.fecha_fin)
}
