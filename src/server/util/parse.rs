use std::str::FromStr;

use crate::server::error::{internal::InternalError, AppError};

/// Parses an enum value read back from the database.
///
/// Stored values are written by the application itself, so a value that fails to
/// parse indicates corrupted data or a missing migration.
///
/// # Arguments
/// - `column` - Column name used in the error message
/// - `value` - The stored string
///
/// # Returns
/// - `Ok(T)` - Parsed value
/// - `Err(AppError::InternalErr(UnknownStoredValue))` - Unrecognised stored value
pub fn parse_stored<T: FromStr>(column: &'static str, value: String) -> Result<T, AppError> {
    match value.parse::<T>() {
        Ok(parsed) => Ok(parsed),
        Err(_) => Err(InternalError::UnknownStoredValue { column, value }.into()),
    }
}

/// Parses an enum value supplied by a client.
///
/// # Arguments
/// - `field` - Request field name used in the error message
/// - `value` - The submitted string
///
/// # Returns
/// - `Ok(T)` - Parsed value
/// - `Err(AppError::BadRequest)` - Value is not one of the accepted options
pub fn parse_request<T: FromStr>(field: &str, value: &str) -> Result<T, AppError> {
    value
        .trim()
        .parse::<T>()
        .map_err(|_| AppError::BadRequest(format!("Invalid {}: '{}'", field, value)))
}
