//! Field cleaning and field-level checks shared by every record kind.

use crate::error::ValidationError;

/// Trims surrounding whitespace from a text input.
pub fn clean(value: String) -> String {
    value.trim().to_string()
}

/// Trims an optional text input; blank input becomes absent.
pub fn clean_optional(value: Option<String>) -> Option<String> {
    value.map(clean).filter(|v| !v.is_empty())
}

pub fn required(field: &'static str, value: &str) -> Result<(), ValidationError> {
    required_with(field, value, "Este campo es obligatorio.")
}

/// Like [`required`], with a field-specific message.
pub fn required_with(
    field: &'static str,
    value: &str,
    message: &'static str,
) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::new(field, message));
    }
    Ok(())
}

pub fn max_length(field: &'static str, value: &str, max: usize) -> Result<(), ValidationError> {
    let length = value.chars().count();
    if length > max {
        return Err(ValidationError::new(
            field,
            format!("Debe tener como máximo {max} caracteres (tiene {length})."),
        ));
    }
    Ok(())
}

pub fn max_length_optional(
    field: &'static str,
    value: Option<&str>,
    max: usize,
) -> Result<(), ValidationError> {
    value.map_or(Ok(()), |v| max_length(field, v, max))
}

/// An absent email is accepted; a present one must be a valid address.
pub fn email(field: &'static str, value: Option<&str>) -> Result<(), ValidationError> {
    match value {
        Some(address) if !validator::validate_email(address) => Err(ValidationError::new(
            field,
            "Introduzca una dirección de correo electrónico válida.",
        )),
        _ => Ok(()),
    }
}

/// Fails when `taken` reports another record already holding the value.
pub fn unique(field: &'static str, taken: bool) -> Result<(), ValidationError> {
    if taken {
        return Err(ValidationError::new(
            field,
            format!("Ya existe un registro con este {field}."),
        ));
    }
    Ok(())
}
