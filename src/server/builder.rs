//! ServerBuilder for fluent API to build the HTTP server

use super::exposure::{GraphQLExposure, RestExposure};
use super::host::ServerHost;
use crate::config::{AppConfig, StorageConfig};
use crate::core::DocumentStore;
#[cfg(not(feature = "mongodb_backend"))]
use crate::core::error::ConfigError;
use crate::entities::{Director, Movie};
use crate::storage::InMemoryStore;
use anyhow::Result;
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Builder for the catalog HTTP server
///
/// # Example
///
/// ```ignore
/// let app = ServerBuilder::new()
///     .with_movie_store(InMemoryStore::new())
///     .with_director_store(InMemoryStore::new())
///     .build()?;
/// ```
pub struct ServerBuilder {
    config: AppConfig,
    movies: Option<Arc<dyn DocumentStore<Movie>>>,
    directors: Option<Arc<dyn DocumentStore<Director>>>,
}

impl ServerBuilder {
    /// Create a new ServerBuilder with default configuration
    pub fn new() -> Self {
        Self {
            config: AppConfig::default(),
            movies: None,
            directors: None,
        }
    }

    /// Set the application configuration
    pub fn with_config(mut self, config: AppConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the movie store (required)
    pub fn with_movie_store(mut self, store: impl DocumentStore<Movie> + 'static) -> Self {
        self.movies = Some(Arc::new(store));
        self
    }

    /// Set the director store (required)
    pub fn with_director_store(mut self, store: impl DocumentStore<Director> + 'static) -> Self {
        self.directors = Some(Arc::new(store));
        self
    }

    /// Open the stores selected by `config.storage`
    ///
    /// For MongoDB this only creates the client; the driver connects lazily,
    /// so an unreachable server surfaces on the first request.
    pub async fn with_configured_storage(self) -> Result<Self> {
        match self.config.storage.clone() {
            StorageConfig::InMemory => {
                tracing::info!("Using in-memory storage");
                Ok(self
                    .with_movie_store(InMemoryStore::<Movie>::new())
                    .with_director_store(InMemoryStore::<Director>::new()))
            }
            #[cfg(feature = "mongodb_backend")]
            StorageConfig::Mongodb { uri, database } => {
                use crate::storage::MongoStore;

                tracing::info!(database = %database, "Using MongoDB storage");
                let db = crate::storage::mongodb::connect(&uri, &database).await?;
                Ok(self
                    .with_movie_store(MongoStore::<Movie>::new(db.clone()))
                    .with_director_store(MongoStore::<Director>::new(db)))
            }
            #[cfg(not(feature = "mongodb_backend"))]
            StorageConfig::Mongodb { .. } => Err(ConfigError::BackendUnavailable {
                backend: "mongodb".to_string(),
                feature: "mongodb_backend".to_string(),
            }
            .into()),
        }
    }

    /// Build the transport-agnostic host
    pub fn build_host(self) -> Result<ServerHost> {
        let movies = self
            .movies
            .ok_or_else(|| anyhow::anyhow!("Movie store is required. Call .with_movie_store()"))?;
        let directors = self.directors.ok_or_else(|| {
            anyhow::anyhow!("Director store is required. Call .with_director_store()")
        })?;

        Ok(ServerHost::new(self.config, movies, directors))
    }

    /// Build the final router: GraphQL, health checks, tracing and CORS
    pub fn build(self) -> Result<Router> {
        let host = Arc::new(self.build_host()?);
        Ok(Self::router_for(host))
    }

    /// Assemble the router for an existing host
    pub fn router_for(host: Arc<ServerHost>) -> Router {
        RestExposure::build_router()
            .merge(GraphQLExposure::build_router(host))
            .layer(
                ServiceBuilder::new()
                    .layer(TraceLayer::new_for_http())
                    .layer(CorsLayer::permissive()),
            )
    }

    /// Serve the application with graceful shutdown
    ///
    /// Binds to the configured address and stops on SIGTERM or Ctrl+C.
    pub async fn serve(self) -> Result<()> {
        let addr = self.config.bind_addr();
        let app = self.build()?;
        let listener = TcpListener::bind(&addr).await?;

        tracing::info!("Server listening on {}", addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");
        Ok(())
    }
}

impl Default for ServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal, initiating graceful shutdown...");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM signal, initiating graceful shutdown...");
        },
    }
}
