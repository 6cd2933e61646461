use serde_json::{json, Map, Value};

use crate::database::models::{Pet, Toy};

/// Public JSON for a pet: stored fields, embedded toys, and the derived
/// `fullTitle` / `isABaby` values, computed here and never persisted.
pub fn pet_to_api_value(pet: &Pet) -> Value {
    let mut obj = Map::new();
    obj.insert("id".into(), json!(pet.id));
    obj.insert("name".into(), json!(pet.name));
    obj.insert("type".into(), json!(pet.kind));
    obj.insert("age".into(), age_value(pet.age));
    obj.insert("adoptable".into(), json!(pet.adoptable));
    obj.insert(
        "toys".into(),
        Value::Array(pet.toys.iter().map(toy_to_api_value).collect()),
    );
    obj.insert("owner".into(), json!(pet.owner));
    obj.insert("createdAt".into(), json!(pet.created_at));
    obj.insert("updatedAt".into(), json!(pet.updated_at));
    obj.insert("fullTitle".into(), Value::String(pet.full_title()));
    obj.insert("isABaby".into(), Value::String(pet.is_a_baby().to_string()));
    Value::Object(obj)
}

/// Whole ages are sent as integers (`3`, not `3.0`).
fn age_value(age: f64) -> Value {
    if age.fract() == 0.0 && age.abs() < i64::MAX as f64 {
        json!(age as i64)
    } else {
        json!(age)
    }
}

pub fn toy_to_api_value(toy: &Toy) -> Value {
    json!({
        "id": toy.id,
        "name": toy.name,
        "description": toy.description,
        "isSqueaky": toy.is_squeaky,
        "condition": toy.condition.as_str(),
        "createdAt": toy.created_at,
        "updatedAt": toy.updated_at,
    })
}
