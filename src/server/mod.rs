//! Server module for exposing the catalog over HTTP
//!
//! `ServerBuilder` wires the document stores into a `ServerHost` and
//! exposes it through GraphQL plus health check routes.

pub mod builder;
pub mod exposure;
pub mod host;

pub use builder::ServerBuilder;
pub use exposure::{GraphQLExposure, RestExposure};
pub use host::ServerHost;
