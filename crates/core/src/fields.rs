//! Request body parsing and field checks
//!
//! Bodies are read leniently: anything that is not a JSON object (empty body,
//! malformed JSON, an array, a bare string) parses to an empty field map, which
//! then fails the first required-field check with a `MissingField` error.

use crate::error::ApiError;
use serde_json::{Map, Value};

pub type Fields = Map<String, Value>;

/// Parse a raw request body into a field map
pub fn parse_body(body: &[u8]) -> Fields {
    match serde_json::from_slice::<Value>(body) {
        Ok(Value::Object(fields)) => fields,
        _ => Fields::new(),
    }
}

/// Fail with the first name (in the given order) that is absent from `fields`
pub fn require_all(fields: &Fields, names: &[&'static str]) -> Result<(), ApiError> {
    match names.iter().find(|name| !fields.contains_key(**name)) {
        Some(name) => Err(ApiError::MissingField(*name)),
        None => Ok(()),
    }
}

pub fn string_field(fields: &Fields, name: &'static str) -> Result<String, ApiError> {
    match fields.get(name) {
        None => Err(ApiError::MissingField(name)),
        Some(Value::String(value)) => Ok(value.clone()),
        Some(_) => Err(ApiError::InvalidField {
            field: name,
            expected: "string",
        }),
    }
}

pub fn bool_field(fields: &Fields, name: &'static str) -> Result<bool, ApiError> {
    optional_bool_field(fields, name)?.ok_or(ApiError::MissingField(name))
}

pub fn optional_bool_field(fields: &Fields, name: &'static str) -> Result<Option<bool>, ApiError> {
    match fields.get(name) {
        None => Ok(None),
        Some(Value::Bool(value)) => Ok(Some(*value)),
        Some(_) => Err(ApiError::InvalidField {
            field: name,
            expected: "boolean",
        }),
    }
}

/// Parse an `{id}` path segment
///
/// Only plain decimal digits are accepted, so `+4`, `-1` and `4.0` are
/// rejected and the request falls through to "Endpoint not found".
pub fn parse_id(segment: &str) -> Option<u64> {
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    segment.parse::<u64>().ok()
}
