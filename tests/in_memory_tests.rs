//! Integration tests for InMemoryStore using the store test harness.
//!
//! Invokes `document_store_tests!` to validate that `InMemoryStore` conforms
//! to the `DocumentStore` contract.

#[macro_use]
mod store_harness;

use cinegraph::entities::{Director, Movie};
use cinegraph::storage::InMemoryStore;
use store_harness::*;

document_store_tests!(
    InMemoryStore::<Movie>::new(),
    InMemoryStore::<Director>::new()
);
