//! # Cinegraph
//!
//! A GraphQL API over a catalog of movies and their directors, backed by a
//! document store.
//!
//! ## Features
//!
//! - **Movie / Director entities**: a movie references its director by id
//! - **Lazy cross references**: `Movie.director` and `Director.movies` are
//!   looked up only when selected
//! - **Pluggable storage**: in-memory by default, MongoDB behind the
//!   `mongodb_backend` feature
//! - **Configuration-Based**: YAML file plus `CINEGRAPH_*` overrides
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use cinegraph::prelude::*;
//!
//! let app = ServerBuilder::new()
//!     .with_movie_store(InMemoryStore::<Movie>::new())
//!     .with_director_store(InMemoryStore::<Director>::new())
//!     .build()?;
//!
//! let listener = tokio::net::TcpListener::bind("127.0.0.1:4000").await?;
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod core;
pub mod entities;
pub mod server;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core Traits ===
    pub use crate::core::{
        entity::{Entity, EntityPatch},
        error::{CatalogError, ConfigError, EntityError, StorageError},
        field::{FieldValue, Filter},
        service::DocumentStore,
    };

    // === Entities ===
    pub use crate::entities::{Director, DirectorPatch, FieldUpdate, Movie, MoviePatch};

    // === Storage ===
    pub use crate::storage::InMemoryStore;
    #[cfg(feature = "mongodb_backend")]
    pub use crate::storage::MongoStore;

    // === Config ===
    pub use crate::config::{AppConfig, GraphQLConfig, ServerConfig, StorageConfig};

    // === Server ===
    pub use crate::server::exposure::graphql::{CatalogSchema, build_schema};
    pub use crate::server::{GraphQLExposure, RestExposure, ServerBuilder, ServerHost};

    // === External dependencies ===
    pub use anyhow::Result;
    pub use async_trait::async_trait;
    pub use uuid::Uuid;
}
