//! Request body helpers shared by the pet and toy handlers.

use serde_json::{Map, Value};

use crate::database::models::ValidationErrors;

/// Drop blank string fields from every object nested one level under the body,
/// so `{ toy: { name: "" } }` behaves as if `name` had not been sent.
pub fn remove_blanks(body: &mut Value) {
    let Value::Object(resources) = body else {
        return;
    };

    for resource in resources.values_mut() {
        if let Value::Object(fields) = resource {
            fields.retain(|_, value| !matches!(value, Value::String(s) if s.trim().is_empty()));
        }
    }
}

/// Parse a raw request body and return the object under `key` with blank fields
/// removed. An empty body is an empty payload; malformed JSON is a validation
/// error on `body`.
pub fn parse_resource(body: &[u8], key: &str) -> Result<Map<String, Value>, ValidationErrors> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Map::new());
    }

    let mut value: Value = serde_json::from_slice(body).map_err(|e| {
        let mut errors = ValidationErrors::new();
        errors.add("body", format!("request body is not valid JSON: {}", e));
        errors
    })?;
    remove_blanks(&mut value);
    resource_object(&value, key)
}

/// Take the object stored under `key` (e.g. `toy`). A missing key is an empty
/// payload; anything other than an object is a validation error on `key`.
pub fn resource_object(body: &Value, key: &str) -> Result<Map<String, Value>, ValidationErrors> {
    match body.get(key) {
        None | Some(Value::Null) => Ok(Map::new()),
        Some(Value::Object(fields)) => Ok(fields.clone()),
        Some(_) => {
            let mut errors = ValidationErrors::new();
            errors.add(key, format!("{} must be an object", key));
            Err(errors)
        }
    }
}
