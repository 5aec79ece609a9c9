//! Movie entity

use super::FieldUpdate;
use crate::core::{Entity, EntityPatch, FieldValue};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A movie in the catalog.
///
/// `director_id` is a plain foreign key. Nothing checks that it names an
/// existing director, and deleting a director leaves it dangling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    pub id: Uuid,
    pub name: String,
    pub genre: String,
    #[serde(default)]
    pub rate: Option<i32>,
    pub watched: bool,
    #[serde(default)]
    pub director_id: Option<Uuid>,
}

impl Movie {
    /// Create a movie with a fresh server-assigned identifier
    pub fn new(
        name: impl Into<String>,
        genre: impl Into<String>,
        rate: Option<i32>,
        watched: bool,
        director_id: Option<Uuid>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            genre: genre.into(),
            rate,
            watched,
            director_id,
        }
    }
}

/// Replacement of a movie's fields.
///
/// Required fields are always written; `rate` and `director_id` are written
/// only when the caller supplied them.
#[derive(Debug, Clone, PartialEq)]
pub struct MoviePatch {
    pub name: String,
    pub genre: String,
    pub watched: bool,
    pub rate: FieldUpdate<i32>,
    pub director_id: FieldUpdate<Uuid>,
}

impl EntityPatch<Movie> for MoviePatch {
    fn apply(&self, target: &mut Movie) {
        target.name = self.name.clone();
        target.genre = self.genre.clone();
        target.watched = self.watched;
        self.rate.apply_to(&mut target.rate);
        self.director_id.apply_to(&mut target.director_id);
    }

    fn assignments(&self) -> Vec<(&'static str, FieldValue)> {
        let mut fields = vec![
            ("name", FieldValue::from(self.name.as_str())),
            ("genre", FieldValue::from(self.genre.as_str())),
            ("watched", FieldValue::from(self.watched)),
        ];
        if let Some(rate) = self.rate.written() {
            fields.push(("rate", FieldValue::from(rate)));
        }
        if let Some(director_id) = self.director_id.written() {
            fields.push(("directorId", FieldValue::from(director_id)));
        }
        fields
    }
}

impl Entity for Movie {
    type Patch = MoviePatch;

    fn resource_name() -> &'static str {
        "movies"
    }

    fn resource_name_singular() -> &'static str {
        "movie"
    }

    fn id(&self) -> Uuid {
        self.id
    }

    fn field_value(&self, field: &str) -> Option<FieldValue> {
        match field {
            "id" => Some(FieldValue::Uuid(self.id)),
            "name" => Some(FieldValue::String(self.name.clone())),
            "genre" => Some(FieldValue::String(self.genre.clone())),
            "rate" => Some(FieldValue::from(self.rate)),
            "watched" => Some(FieldValue::Boolean(self.watched)),
            "directorId" => Some(FieldValue::from(self.director_id)),
            _ => None,
        }
    }
}
