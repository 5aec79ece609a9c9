//! Director entity

use crate::core::{Entity, EntityPatch, FieldValue};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A film director.
///
/// The movies a director made are not stored here; they are found by
/// querying movies on `directorId`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Director {
    pub id: Uuid,
    pub name: String,
    pub age: i32,
}

impl Director {
    /// Create a director with a fresh server-assigned identifier
    pub fn new(name: impl Into<String>, age: i32) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            age,
        }
    }
}

/// Full replacement of a director's name and age
#[derive(Debug, Clone, PartialEq)]
pub struct DirectorPatch {
    pub name: String,
    pub age: i32,
}

impl EntityPatch<Director> for DirectorPatch {
    fn apply(&self, target: &mut Director) {
        target.name = self.name.clone();
        target.age = self.age;
    }

    fn assignments(&self) -> Vec<(&'static str, FieldValue)> {
        vec![
            ("name", FieldValue::from(self.name.as_str())),
            ("age", FieldValue::from(self.age)),
        ]
    }
}

impl Entity for Director {
    type Patch = DirectorPatch;

    fn resource_name() -> &'static str {
        "directors"
    }

    fn resource_name_singular() -> &'static str {
        "director"
    }

    fn id(&self) -> Uuid {
        self.id
    }

    fn field_value(&self, field: &str) -> Option<FieldValue> {
        match field {
            "id" => Some(FieldValue::Uuid(self.id)),
            "name" => Some(FieldValue::String(self.name.clone())),
            "age" => Some(FieldValue::from(self.age)),
            _ => None,
        }
    }
}
