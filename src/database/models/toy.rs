use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use super::{bool_field, string_field, Patch, ValidationErrors};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToyCondition {
    #[default]
    New,
    Used,
    Disgusting,
}

impl ToyCondition {
    pub const ALL: [ToyCondition; 3] = [Self::New, Self::Used, Self::Disgusting];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::New => "new",
            Self::Used => "used",
            Self::Disgusting => "disgusting",
        }
    }
}

impl fmt::Display for ToyCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ToyCondition {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| format!("`{}` is not a valid condition (new, used, disgusting)", s))
    }
}

/// A toy embedded in a pet document. Toys have no life outside their pet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Toy {
    pub id: Uuid,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub is_squeaky: bool,
    #[serde(default)]
    pub condition: ToyCondition,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Client-supplied toy fields, as found under `toy` in a request body.
///
/// `condition` stays a raw string here so an out-of-range value is reported
/// against the field instead of failing deserialization.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToyChanges {
    pub name: Patch<String>,
    pub description: Patch<String>,
    pub is_squeaky: Patch<bool>,
    pub condition: Patch<String>,
}

impl ToyChanges {
    /// Unknown keys and server-managed keys (`id`, `createdAt`, ...) are ignored.
    pub fn from_json(object: &Map<String, Value>) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let changes = Self {
            name: string_field(object.get("name"), "name", &mut errors),
            description: string_field(object.get("description"), "description", &mut errors),
            is_squeaky: bool_field(object.get("isSqueaky"), "isSqueaky", &mut errors),
            condition: string_field(object.get("condition"), "condition", &mut errors),
        };

        errors.into_result().map(|_| changes)
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_absent()
            && self.description.is_absent()
            && self.is_squeaky.is_absent()
            && self.condition.is_absent()
    }
}

impl Toy {
    /// Build a new toy, filling schema defaults for omitted fields.
    pub fn create(changes: ToyChanges, now: DateTime<Utc>) -> Result<Self, ValidationErrors> {
        let mut toy = Self {
            id: Uuid::new_v4(),
            name: String::new(),
            description: None,
            is_squeaky: false,
            condition: ToyCondition::default(),
            created_at: now,
            updated_at: now,
        };
        toy.merge(changes)?;
        Ok(toy)
    }

    /// Merge a partial update. Absent fields keep their value. On validation
    /// failure the toy is left exactly as it was.
    pub fn apply(&mut self, changes: ToyChanges, now: DateTime<Utc>) -> Result<(), ValidationErrors> {
        let mut updated = self.clone();
        updated.merge(changes)?;
        updated.updated_at = now;
        *self = updated;
        Ok(())
    }

    fn merge(&mut self, changes: ToyChanges) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        match changes.name {
            Patch::Absent => {}
            Patch::Null => self.name.clear(),
            Patch::Value(name) => self.name = name,
        }
        if self.name.trim().is_empty() {
            errors.add("name", "name is required");
        }

        match changes.description {
            Patch::Absent => {}
            Patch::Null => self.description = None,
            Patch::Value(description) => self.description = Some(description),
        }

        match changes.is_squeaky {
            Patch::Absent => {}
            Patch::Null => errors.add("isSqueaky", "isSqueaky is required"),
            Patch::Value(squeaky) => self.is_squeaky = squeaky,
        }

        match changes.condition {
            Patch::Absent => {}
            Patch::Null => errors.add("condition", "condition is required"),
            Patch::Value(raw) => match raw.parse::<ToyCondition>() {
                Ok(condition) => self.condition = condition,
                Err(message) => errors.add("condition", message),
            },
        }

        errors.into_result()
    }
}
