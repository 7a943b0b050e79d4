//! Utilidades de validación
//!
//! Este módulo contiene funciones helper para validación de datos
//! de entrada del formulario de login.

use validator::ValidationError;

/// Validar que un string no esté vacío. Los espacios cuentan como contenido.
pub fn validate_not_empty(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        let mut error = ValidationError::new("not_empty");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar formato de email (basta con que contenga '@')
pub fn validate_email(value: &str) -> Result<(), ValidationError> {
    if !value.contains('@') {
        let mut error = ValidationError::new("email");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}
