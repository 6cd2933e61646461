pub mod pet;
pub mod toy;

pub use pet::{NewPet, Pet};
pub use toy::{Toy, ToyChanges, ToyCondition};

use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;

/// Field-level validation failures, keyed by the wire name of the field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(HashMap<String, String>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_insert_with(|| message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    /// Sorted field names, for messages.
    pub fn fields(&self) -> Vec<&str> {
        let mut fields: Vec<&str> = self.0.keys().map(String::as_str).collect();
        fields.sort_unstable();
        fields
    }

    pub fn into_map(self) -> HashMap<String, String> {
        self.0
    }

    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid fields: {}", self.fields().join(", "))
    }
}

/// A field in a partial payload: left out, explicitly nulled, or set.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Patch<T> {
    #[default]
    Absent,
    Null,
    Value(T),
}

impl<T> Patch<T> {
    pub fn is_absent(&self) -> bool {
        matches!(self, Patch::Absent)
    }
}

pub(crate) fn string_field(
    value: Option<&Value>,
    field: &str,
    errors: &mut ValidationErrors,
) -> Patch<String> {
    match value {
        None => Patch::Absent,
        Some(Value::Null) => Patch::Null,
        Some(Value::String(s)) => Patch::Value(s.clone()),
        Some(Value::Number(n)) => Patch::Value(n.to_string()),
        Some(_) => {
            errors.add(field, format!("{} must be a string", field));
            Patch::Absent
        }
    }
}

pub(crate) fn bool_field(
    value: Option<&Value>,
    field: &str,
    errors: &mut ValidationErrors,
) -> Patch<bool> {
    match value {
        None => Patch::Absent,
        Some(Value::Null) => Patch::Null,
        Some(Value::Bool(b)) => Patch::Value(*b),
        Some(Value::String(s)) if s.trim() == "true" => Patch::Value(true),
        Some(Value::String(s)) if s.trim() == "false" => Patch::Value(false),
        Some(_) => {
            errors.add(field, format!("{} must be a boolean", field));
            Patch::Absent
        }
    }
}

pub(crate) fn number_field(
    value: Option<&Value>,
    field: &str,
    errors: &mut ValidationErrors,
) -> Patch<f64> {
    let parsed = match value {
        None => return Patch::Absent,
        Some(Value::Null) => return Patch::Null,
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
        Some(_) => None,
    };
    match parsed {
        Some(n) => Patch::Value(n),
        None => {
            errors.add(field, format!("{} must be a number", field));
            Patch::Absent
        }
    }
}
