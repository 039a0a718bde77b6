//! Utilidades de validación
//! 
//! Este módulo contiene validadores compartidos por los esquemas de
//! formularios y deserializadores para campos de formulario HTML.

use std::fmt::Display;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{de, Deserialize, Deserializer, Serialize};
use validator::{ValidationError, ValidationErrors};

/// Validar que un valor sea no negativo
pub fn validate_non_negative<T>(value: &T) -> Result<(), ValidationError>
where
    T: PartialOrd + num_traits::Zero + Serialize,
{
    if *value < T::zero() {
        let mut error = ValidationError::new("non_negative");
        error.add_param("value".into(), value);
        error.message = Some("no puede ser negativo".into());
        return Err(error);
    }
    Ok(())
}

/// Validar que la fecha de fin no sea anterior a la de inicio
pub fn validate_date_order(start: NaiveDate, end: NaiveDate) -> Result<(), ValidationError> {
    if end < start {
        let mut error = ValidationError::new("date_order");
        error.add_param("start".into(), &start.to_string());
        error.add_param("end".into(), &end.to_string());
        error.message = Some("la fecha de fin no puede ser anterior a la fecha de inicio".into());
        return Err(error);
    }
    Ok(())
}

/// Resumen legible de los errores de validación, ordenado por campo
pub fn describe_validation_errors(errors: &ValidationErrors) -> String {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by_key(|(field, _)| *field);

    fields
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| {
                let message = e
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("inválido ({})", e.code));
                if field == "__all__" {
                    message
                } else {
                    format!("{}: {}", field, message)
                }
            })
        })
        .collect::<Vec<_>>()
        .join("; ")
}

/// Deserializar texto de formulario sin espacios al inicio ni al final
pub fn trimmed<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Ok(raw.trim().to_string())
}

/// Deserializar un campo opcional donde la cadena vacía equivale a ausente
pub fn empty_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: Display,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value.parse().map(Some).map_err(de::Error::custom),
    }
}
