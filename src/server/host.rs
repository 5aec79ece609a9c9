//! Server host for transport-agnostic API exposure
//!
//! `ServerHost` holds everything an exposure needs to serve the catalog:
//! configuration and the two document stores. It knows nothing about
//! HTTP or GraphQL.

use crate::config::AppConfig;
use crate::core::DocumentStore;
use crate::entities::{Director, Movie};
use std::sync::Arc;

/// Host context containing all application state
///
/// # Example
///
/// ```rust,ignore
/// let host = Arc::new(ServerHost::new(config, movies, directors));
/// let graphql_app = GraphQLExposure::build_router(host)?;
/// ```
pub struct ServerHost {
    /// Application configuration
    pub config: Arc<AppConfig>,

    /// Movie collection
    pub movies: Arc<dyn DocumentStore<Movie>>,

    /// Director collection
    pub directors: Arc<dyn DocumentStore<Director>>,
}

impl ServerHost {
    pub fn new(
        config: AppConfig,
        movies: Arc<dyn DocumentStore<Movie>>,
        directors: Arc<dyn DocumentStore<Director>>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            movies,
            directors,
        }
    }
}
