//! GraphQL API exposure
//!
//! Serves the catalog schema over HTTP:
//! - `POST /graphql` executes queries and mutations
//! - `GET /graphql/playground` serves the playground UI (when enabled)
//! - `GET /graphql/schema` exports the schema as SDL

mod mutation;
mod query;
mod schema;
mod types;

pub use mutation::MutationRoot;
pub use query::QueryRoot;
pub use schema::{CatalogSchema, build_schema};
pub use types::{DirectorObject, MovieObject};

use crate::server::host::ServerHost;
use async_graphql::http::{GraphQLPlaygroundConfig, playground_source};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    Router,
    extract::Extension,
    response::{Html, IntoResponse},
    routing::{get, post},
};
use std::sync::Arc;

/// GraphQL API exposure implementation
pub struct GraphQLExposure;

impl GraphQLExposure {
    /// Build the GraphQL router from a host
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let host = Arc::new(builder.build_host()?);
    /// let graphql_app = GraphQLExposure::build_router(host);
    /// ```
    pub fn build_router(host: Arc<ServerHost>) -> Router {
        let playground = host.config.graphql.playground;
        let schema = build_schema(host);

        let mut router = Router::new()
            .route("/graphql", post(graphql_handler))
            .route("/graphql/schema", get(graphql_sdl));

        if playground {
            router = router.route("/graphql/playground", get(graphql_playground));
        }

        router.layer(Extension(schema))
    }
}

/// Handler for GraphQL queries and mutations
async fn graphql_handler(
    Extension(schema): Extension<CatalogSchema>,
    request: GraphQLRequest,
) -> GraphQLResponse {
    schema.execute(request.into_inner()).await.into()
}

/// Handler for GraphQL playground UI
async fn graphql_playground() -> impl IntoResponse {
    Html(playground_source(GraphQLPlaygroundConfig::new("/graphql")))
}

/// Handler for GraphQL schema SDL export
async fn graphql_sdl(Extension(schema): Extension<CatalogSchema>) -> impl IntoResponse {
    (
        [(
            axum::http::header::CONTENT_TYPE,
            "text/plain; charset=utf-8",
        )],
        schema.sdl(),
    )
}
