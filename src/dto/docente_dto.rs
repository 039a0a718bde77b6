use serde::Deserialize;
use validator::Validate;

use crate::utils::validation::trimmed;

// Formulario para crear un docente
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateDocenteRequest {
    #[serde(deserialize_with = "trimmed")]
    #[validate(length(min = 1, max = 20, message = "es obligatorio (máximo 20 caracteres)"))]
    pub documento: String,

    #[serde(deserialize_with = "trimmed")]
    #[validate(length(min = 1, max = 100, message = "es obligatorio (máximo 100 caracteres)"))]
    pub nombre: String,

    #[serde(deserialize_with = "trimmed")]
    #[validate(length(min = 1, max = 150, message = "es obligatoria (máximo 150 caracteres)"))]
    pub direccion: String,

    #[serde(deserialize_with = "trimmed")]
    #[validate(length(min = 1, max = 100, message = "es obligatorio (máximo 100 caracteres)"))]
    pub titulo: String,

    #[validate(range(min = 0, max = 80, message = "debe estar entre 0 y 80"))]
    pub anos_experiencia: i32,
}

// Formulario para actualizar un docente (el documento va en la ruta)
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateDocenteRequest {
    #[serde(deserialize_with = "trimmed")]
    #[validate(length(min = 1, max = 100, message = "es obligatorio (máximo 100 caracteres)"))]
    pub nombre: String,

    #[serde(deserialize_with = "trimmed")]
    #[validate(length(min = 1, max = 150, message = "es obligatoria (máximo 150 caracteres)"))]
    pub direccion: String,

    #[serde(deserialize_with = "trimmed")]
    #[validate(length(min = 1, max = 100, message = "es obligatorio (máximo 100 caracteres)"))]
    pub titulo: String,

    #[validate(range(min = 0, max = 80, message = "debe estar entre 0 y 80"))]
    pub anos_experiencia: i32,
}
