//! Query root

use super::schema::{host, parse_optional_id, store_error};
use super::types::{DirectorObject, MovieObject};
use crate::core::Filter;
use crate::entities::{Director, Movie};
use async_graphql::{Context, ID, Object, Result};

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Fetch one movie by id
    async fn movie(&self, ctx: &Context<'_>, id: Option<ID>) -> Result<Option<MovieObject>> {
        let Some(id) = parse_optional_id::<Movie>(id.as_ref())? else {
            return Ok(None);
        };

        let movie = host(ctx)?
            .movies
            .find_by_id(&id)
            .await
            .map_err(store_error)?;

        Ok(movie.map(MovieObject::from))
    }

    /// Fetch one director by id
    async fn director(&self, ctx: &Context<'_>, id: Option<ID>) -> Result<Option<DirectorObject>> {
        let Some(id) = parse_optional_id::<Director>(id.as_ref())? else {
            return Ok(None);
        };

        let director = host(ctx)?
            .directors
            .find_by_id(&id)
            .await
            .map_err(store_error)?;

        Ok(director.map(DirectorObject::from))
    }

    /// Every movie
    async fn movies(&self, ctx: &Context<'_>) -> Result<Vec<MovieObject>> {
        let movies = host(ctx)?
            .movies
            .find(&Filter::all())
            .await
            .map_err(store_error)?;

        Ok(movies.into_iter().map(MovieObject::from).collect())
    }

    /// Every director
    async fn directors(&self, ctx: &Context<'_>) -> Result<Vec<DirectorObject>> {
        let directors = host(ctx)?
            .directors
            .find(&Filter::all())
            .await
            .map_err(store_error)?;

        Ok(directors.into_iter().map(DirectorObject::from).collect())
    }
}
