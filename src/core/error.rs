//! Typed error handling for cinegraph
//!
//! Stores report failures through `anyhow::Result`; the typed errors below
//! are attached as the error source so the GraphQL layer can recover a
//! stable error code for clients.
//!
//! # Error Categories
//!
//! - [`EntityError`]: Errors related to entity identifiers and records
//! - [`StorageError`]: Errors raised by a storage backend
//! - [`ConfigError`]: Errors related to configuration loading, returned
//!   directly by `AppConfig` and never surfaced over GraphQL
//!
//! # Example
//!
//! ```rust,ignore
//! use cinegraph::core::error::{CatalogError, EntityError};
//!
//! match CatalogError::from(store_err) {
//!     CatalogError::Entity(EntityError::InvalidId { value, .. }) => {
//!         println!("'{}' is not an identifier", value);
//!     }
//!     other => eprintln!("{} ({})", other, other.error_code()),
//! }
//! ```

use async_graphql::ErrorExtensions;
use thiserror::Error;

/// The main error type for cinegraph
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Entity-related errors
    #[error(transparent)]
    Entity(#[from] EntityError),

    /// Storage backend errors
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl CatalogError {
    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            CatalogError::Entity(e) => e.error_code(),
            CatalogError::Storage(e) => e.error_code(),
        }
    }
}

/// Recover the typed error carried by a store failure.
///
/// Anything that is not one of ours is a driver error, reported with its
/// message untouched.
impl From<anyhow::Error> for CatalogError {
    fn from(err: anyhow::Error) -> Self {
        let err = match err.downcast::<CatalogError>() {
            Ok(e) => return e,
            Err(err) => err,
        };
        let err = match err.downcast::<EntityError>() {
            Ok(e) => return CatalogError::Entity(e),
            Err(err) => err,
        };
        match err.downcast::<StorageError>() {
            Ok(e) => CatalogError::Storage(e),
            Err(err) => CatalogError::Storage(StorageError::Driver {
                message: err.to_string(),
            }),
        }
    }
}

impl ErrorExtensions for CatalogError {
    fn extend(&self) -> async_graphql::Error {
        let code = self.error_code();
        async_graphql::Error::new(self.to_string()).extend_with(|_, e| e.set("code", code.to_string()))
    }
}

// =============================================================================
// Entity Errors
// =============================================================================

/// Errors related to entity records and identifiers
#[derive(Debug, Error)]
pub enum EntityError {
    /// An identifier argument could not be parsed
    #[error("'{value}' is not a valid {entity_type} id")]
    InvalidId { entity_type: String, value: String },

    /// Failed to serialize/deserialize entity
    #[error("Failed to serialize/deserialize {entity_type}: {message}")]
    SerializationError {
        entity_type: String,
        message: String,
    },
}

impl EntityError {
    pub fn error_code(&self) -> &'static str {
        match self {
            EntityError::InvalidId { .. } => "INVALID_ID",
            EntityError::SerializationError { .. } => "ENTITY_SERIALIZATION_ERROR",
        }
    }
}

// =============================================================================
// Storage Errors
// =============================================================================

/// Errors raised by storage backends
#[derive(Debug, Error)]
pub enum StorageError {
    /// Could not reach the backend
    #[error("Failed to connect to {backend}: {message}")]
    Connection { backend: String, message: String },

    /// A shared in-memory collection lock was poisoned
    #[error("Lock poisoned on {collection}")]
    LockPoisoned { collection: String },

    /// Failure reported by the underlying driver, message kept as is
    #[error("{message}")]
    Driver { message: String },
}

impl StorageError {
    pub fn error_code(&self) -> &'static str {
        match self {
            StorageError::Connection { .. } => "STORAGE_UNAVAILABLE",
            StorageError::LockPoisoned { .. } => "STORAGE_ERROR",
            StorageError::Driver { .. } => "STORAGE_ERROR",
        }
    }
}

// =============================================================================
// Config Errors
// =============================================================================

/// Errors related to configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to parse configuration
    #[error("Failed to parse config{}: {message}", .file.as_ref().map(|f| format!(" file '{}'", f)).unwrap_or_default())]
    ParseError {
        file: Option<String>,
        message: String,
    },

    /// Invalid value in configuration
    #[error("Invalid value '{value}' for field '{field}': {message}")]
    InvalidValue {
        field: String,
        value: String,
        message: String,
    },

    /// Configuration file not found
    #[error("Configuration file not found: {path}")]
    FileNotFound { path: String },

    /// IO error while reading configuration
    #[error("IO error: {message}")]
    IoError { message: String },

    /// The configured storage backend was not compiled in
    #[error("Storage backend '{backend}' is not available (enable the '{feature}' feature)")]
    BackendUnavailable { backend: String, feature: String },
}
