use crate::server::{error::AppError, model::object_id::ObjectId};

/// Parses an identifier read back from the store.
///
/// Unlike client input, a stored identifier that fails to parse means the row does not
/// have the expected shape, so the failure is reported as a decode error.
///
/// # Arguments
/// - `value` - The stored identifier string
///
/// # Returns
/// - `Ok(ObjectId)` - Successfully parsed identifier
/// - `Err(AppError::DecodeError)` - The stored value is not a valid identifier
pub fn parse_stored_object_id(value: &str) -> Result<ObjectId, AppError> {
    ObjectId::parse_str(value).map_err(|e| AppError::DecodeError(e.to_string()))
}
