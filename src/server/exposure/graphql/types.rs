//! GraphQL object types for movies and directors
//!
//! The cross-reference fields (`Movie.director`, `Director.movies`) are
//! resolved lazily, each with its own store lookup, only when selected.

use super::schema::{host, store_error};
use crate::core::Filter;
use crate::entities::{Director, Movie};
use async_graphql::{Context, ID, Object, Result};

/// GraphQL view of a stored movie
pub struct MovieObject(pub Movie);

impl From<Movie> for MovieObject {
    fn from(movie: Movie) -> Self {
        Self(movie)
    }
}

#[Object(name = "Movie")]
impl MovieObject {
    async fn id(&self) -> ID {
        ID::from(self.0.id.to_string())
    }

    async fn name(&self) -> &str {
        &self.0.name
    }

    async fn genre(&self) -> &str {
        &self.0.genre
    }

    async fn rate(&self) -> Option<i32> {
        self.0.rate
    }

    async fn watched(&self) -> bool {
        self.0.watched
    }

    /// The director this movie references, or null when the reference is
    /// absent or dangling
    async fn director(&self, ctx: &Context<'_>) -> Result<Option<DirectorObject>> {
        let Some(director_id) = self.0.director_id else {
            return Ok(None);
        };

        let director = host(ctx)?
            .directors
            .find_by_id(&director_id)
            .await
            .map_err(store_error)?;

        Ok(director.map(DirectorObject::from))
    }
}

/// GraphQL view of a stored director
pub struct DirectorObject(pub Director);

impl From<Director> for DirectorObject {
    fn from(director: Director) -> Self {
        Self(director)
    }
}

#[Object(name = "Director")]
impl DirectorObject {
    async fn id(&self) -> ID {
        ID::from(self.0.id.to_string())
    }

    async fn name(&self) -> &str {
        &self.0.name
    }

    async fn age(&self) -> i32 {
        self.0.age
    }

    /// Movies whose `directorId` is this director's id
    async fn movies(&self, ctx: &Context<'_>) -> Result<Vec<MovieObject>> {
        let movies = host(ctx)?
            .movies
            .find(&Filter::eq("directorId", self.0.id))
            .await
            .map_err(store_error)?;

        Ok(movies.into_iter().map(MovieObject::from).collect())
    }
}
