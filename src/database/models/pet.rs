use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

use super::{bool_field, number_field, string_field, Patch, Toy, ValidationErrors};

/// A pet document. Its toys are stored inline, in display order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pet {
    pub id: Uuid,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub age: f64,
    #[serde(default)]
    pub adoptable: bool,
    #[serde(default)]
    pub toys: Vec<Toy>,
    /// Legacy pets may have no owner; nobody can mutate their toys.
    #[serde(default)]
    pub owner: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields accepted when creating a pet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewPet {
    pub name: String,
    pub kind: String,
    pub age: f64,
    pub adoptable: bool,
}

impl NewPet {
    pub fn from_json(object: &Map<String, Value>) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let name = required_text(
            string_field(object.get("name"), "name", &mut errors),
            "name",
            &mut errors,
        );
        let kind = required_text(
            string_field(object.get("type"), "type", &mut errors),
            "type",
            &mut errors,
        );
        let age = match number_field(object.get("age"), "age", &mut errors) {
            Patch::Value(age) => age,
            Patch::Null | Patch::Absent => {
                errors.add("age", "age is required");
                0.0
            }
        };
        let adoptable = match bool_field(object.get("adoptable"), "adoptable", &mut errors) {
            Patch::Value(adoptable) => adoptable,
            Patch::Null => {
                errors.add("adoptable", "adoptable is required");
                false
            }
            Patch::Absent => false,
        };

        errors.into_result().map(|_| Self {
            name,
            kind,
            age,
            adoptable,
        })
    }
}

fn required_text(value: Patch<String>, field: &str, errors: &mut ValidationErrors) -> String {
    match value {
        Patch::Value(text) if !text.trim().is_empty() => text,
        _ => {
            errors.add(field, format!("{} is required", field));
            String::new()
        }
    }
}

impl Pet {
    pub fn create(new_pet: NewPet, owner: Option<Uuid>, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: new_pet.name,
            kind: new_pet.kind,
            age: new_pet.age,
            adoptable: new_pet.adoptable,
            toys: Vec::new(),
            owner,
            created_at: now,
            updated_at: now,
        }
    }

    /// "Rex the dog"
    pub fn full_title(&self) -> String {
        format!("{} the {}", self.name, self.kind)
    }

    pub fn is_a_baby(&self) -> &'static str {
        if self.age < 5.0 {
            "Yeah, theyre just a baby"
        } else if self.age < 10.0 {
            "Not really a baby, but like, still a baby"
        } else {
            "A good old pet(definitely still a baby)"
        }
    }

    pub fn is_owned_by(&self, user_id: Uuid) -> bool {
        self.owner == Some(user_id)
    }

    pub fn toy(&self, toy_id: Uuid) -> Option<&Toy> {
        self.toys.iter().find(|toy| toy.id == toy_id)
    }

    pub fn toy_mut(&mut self, toy_id: Uuid) -> Option<&mut Toy> {
        self.toys.iter_mut().find(|toy| toy.id == toy_id)
    }

    /// Append at the end of the collection; display order is insertion order.
    pub fn push_toy(&mut self, toy: Toy) -> &Toy {
        self.toys.push(toy);
        &self.toys[self.toys.len() - 1]
    }

    pub fn remove_toy(&mut self, toy_id: Uuid) -> Option<Toy> {
        let index = self.toys.iter().position(|toy| toy.id == toy_id)?;
        Some(self.toys.remove(index))
    }

    pub fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = now;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::models::ToyChanges;
    use serde_json::json;

    fn pet(name: &str, kind: &str, age: f64) -> Pet {
        Pet::create(
            NewPet {
                name: name.into(),
                kind: kind.into(),
                age,
                adoptable: false,
            },
            None,
            Utc::now(),
        )
    }

    fn toy(name: &str) -> Toy {
        let payload = json!({ "name": name });
        Toy::create(
            ToyChanges::from_json(payload.as_object().unwrap()).unwrap(),
            Utc::now(),
        )
        .unwrap()
    }

    #[test]
    fn full_title_combines_name_and_type() {
        assert_eq!(pet("Rex", "dog", 3.0).full_title(), "Rex the dog");
    }

    #[test]
    fn is_a_baby_partitions_at_five_and_ten() {
        assert_eq!(pet("a", "cat", 3.0).is_a_baby(), "Yeah, theyre just a baby");
        assert_eq!(pet("a", "cat", 4.9).is_a_baby(), "Yeah, theyre just a baby");
        assert_eq!(
            pet("a", "cat", 5.0).is_a_baby(),
            "Not really a baby, but like, still a baby"
        );
        assert_eq!(
            pet("a", "cat", 7.0).is_a_baby(),
            "Not really a baby, but like, still a baby"
        );
        assert_eq!(
            pet("a", "cat", 10.0).is_a_baby(),
            "A good old pet(definitely still a baby)"
        );
        assert_eq!(
            pet("a", "cat", 15.0).is_a_baby(),
            "A good old pet(definitely still a baby)"
        );
    }

    #[test]
    fn toys_keep_insertion_order_and_resolve_by_id() {
        let mut rex = pet("Rex", "dog", 2.0);
        let first = rex.push_toy(toy("Ball")).id;
        let second = rex.push_toy(toy("Rope")).id;
        let third = rex.push_toy(toy("Bone")).id;

        let names: Vec<&str> = rex.toys.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["Ball", "Rope", "Bone"]);

        assert_eq!(rex.toy(second).unwrap().name, "Rope");
        assert!(rex.toy(Uuid::new_v4()).is_none());

        let removed = rex.remove_toy(second).unwrap();
        assert_eq!(removed.name, "Rope");
        assert_eq!(
            rex.toys.iter().map(|t| t.id).collect::<Vec<_>>(),
            vec![first, third]
        );
        assert!(rex.remove_toy(second).is_none());
    }

    #[test]
    fn unowned_pets_are_owned_by_nobody() {
        let rex = pet("Rex", "dog", 2.0);
        assert!(!rex.is_owned_by(Uuid::new_v4()));
    }

    #[test]
    fn new_pet_validation() {
        let payload = json!({ "name": "Rex", "type": "dog", "age": "4" });
        let new_pet = NewPet::from_json(payload.as_object().unwrap()).unwrap();
        assert_eq!(new_pet.age, 4.0);
        assert!(!new_pet.adoptable);

        let payload = json!({ "name": "", "age": "old" });
        let errors = NewPet::from_json(payload.as_object().unwrap()).unwrap_err();
        assert_eq!(errors.fields(), vec!["age", "name", "type"]);
    }

    #[test]
    fn stored_document_uses_type_key_and_no_derived_fields() {
        let value = serde_json::to_value(pet("Rex", "dog", 3.0)).unwrap();
        assert_eq!(value["type"], "dog");
        assert!(value.get("fullTitle").is_none());
        assert!(value.get("isABaby").is_none());
        assert_eq!(value["owner"], Value::Null);
    }
}
