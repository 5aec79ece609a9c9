//! Shared test harness for document store backends
//!
//! Provides sample movies and directors plus the `document_store_tests!`
//! macro that validates any `DocumentStore<Movie>` / `DocumentStore<Director>`
//! pair against the store contract.
//!
//! # Usage
//!
//! From any integration test file in `tests/`:
//! ```rust,ignore
//! #[macro_use]
//! mod store_harness;
//! use store_harness::*;
//!
//! document_store_tests!(InMemoryStore::<Movie>::new(), InMemoryStore::<Director>::new());
//! ```

#![allow(dead_code)]

#[macro_use]
pub mod document_store_tests;

use cinegraph::entities::{Director, Movie};
use uuid::Uuid;

/// A director with the given name and age
pub fn director(name: &str, age: i32) -> Director {
    Director::new(name, age)
}

/// A rated, watched movie by `director_id`
pub fn movie_by(name: &str, director_id: Uuid) -> Movie {
    Movie::new(name, "Drama", Some(7), true, Some(director_id))
}

/// An unrated, unwatched movie with no director
pub fn orphan_movie(name: &str) -> Movie {
    Movie::new(name, "Documentary", None, false, None)
}

/// `n` directors with distinct names
pub fn sample_directors(n: usize) -> Vec<Director> {
    (0..n)
        .map(|i| director(&format!("Director {}", i), 30 + i as i32))
        .collect()
}
