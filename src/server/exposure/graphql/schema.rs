//! GraphQL schema assembly and shared resolver helpers

use super::mutation::MutationRoot;
use super::query::QueryRoot;
use crate::core::error::{CatalogError, EntityError};
use crate::core::Entity;
use crate::server::host::ServerHost;
use async_graphql::extensions::Tracing;
use async_graphql::{Context, EmptySubscription, ErrorExtensions, ID, Schema};
use std::sync::Arc;
use uuid::Uuid;

/// The catalog schema: movie and director queries and mutations
pub type CatalogSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Build the schema over a host's stores
///
/// The host is attached as context data; every resolver reads its stores
/// from there.
pub fn build_schema(host: Arc<ServerHost>) -> CatalogSchema {
    let mut builder = Schema::build(QueryRoot, MutationRoot, EmptySubscription).extension(Tracing);

    if let Some(depth) = host.config.graphql.depth_limit {
        builder = builder.limit_depth(depth);
    }

    builder.data(host).finish()
}

/// Fetch the host from the resolver context
pub(crate) fn host<'a>(ctx: &Context<'a>) -> async_graphql::Result<&'a Arc<ServerHost>> {
    ctx.data::<Arc<ServerHost>>()
}

/// Parse an `ID` argument as the identifier of a `T`
pub(crate) fn parse_id<T: Entity>(id: &ID) -> async_graphql::Result<Uuid> {
    Uuid::parse_str(id.as_str()).map_err(|_| {
        CatalogError::from(EntityError::InvalidId {
            entity_type: T::resource_name_singular().to_string(),
            value: id.to_string(),
        })
        .extend()
    })
}

/// Parse an optional `ID` argument; absent or null stays `None`
pub(crate) fn parse_optional_id<T: Entity>(id: Option<&ID>) -> async_graphql::Result<Option<Uuid>> {
    id.map(parse_id::<T>).transpose()
}

/// Convert a store failure into a GraphQL error carrying its code
pub(crate) fn store_error(err: anyhow::Error) -> async_graphql::Error {
    CatalogError::from(err).extend()
}
