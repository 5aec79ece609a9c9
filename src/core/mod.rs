//! Core module containing fundamental traits and types for the crate

pub mod entity;
pub mod error;
pub mod field;
pub mod service;

pub use entity::{Entity, EntityPatch};
pub use error::{CatalogError, ConfigError, EntityError, StorageError};
pub use field::{FieldValue, Filter};
pub use service::DocumentStore;
