//! Domain entities exposed by the catalog

pub mod director;
pub mod movie;

pub use director::{Director, DirectorPatch};
pub use movie::{Movie, MoviePatch};

/// Update instruction for a nullable field.
///
/// Mirrors a `$set` document: an unchanged field is left out of the update,
/// `Clear` stores null, `Set` stores the value.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FieldUpdate<T> {
    #[default]
    Unchanged,
    Clear,
    Set(T),
}

impl<T: Clone> FieldUpdate<T> {
    /// Apply the update to a stored optional value
    pub fn apply_to(&self, slot: &mut Option<T>) {
        match self {
            FieldUpdate::Unchanged => {}
            FieldUpdate::Clear => *slot = None,
            FieldUpdate::Set(value) => *slot = Some(value.clone()),
        }
    }

    /// The value written by this update, if any
    pub fn written(&self) -> Option<Option<T>> {
        match self {
            FieldUpdate::Unchanged => None,
            FieldUpdate::Clear => Some(None),
            FieldUpdate::Set(value) => Some(Some(value.clone())),
        }
    }
}
