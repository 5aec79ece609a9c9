//! Cinegraph server binary
//!
//! Reads configuration from `CINEGRAPH_CONFIG` / `CINEGRAPH_*` (a `.env`
//! file is honoured), picks the storage backend and serves the GraphQL API.

use anyhow::Result;
use cinegraph::config::AppConfig;
use cinegraph::server::ServerBuilder;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::load()?;

    tracing::info!("Cinegraph v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("GraphQL endpoint: http://{}/graphql", config.bind_addr());
    if config.graphql.playground {
        tracing::info!(
            "GraphQL playground: http://{}/graphql/playground",
            config.bind_addr()
        );
    }

    ServerBuilder::new()
        .with_config(config)
        .with_configured_storage()
        .await?
        .serve()
        .await
}
