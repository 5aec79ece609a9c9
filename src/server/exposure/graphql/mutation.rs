//! Mutation root
//!
//! Each mutation is one store call. Deleting a director leaves the movies
//! that reference it untouched.

use super::schema::{host, parse_id, parse_optional_id, store_error};
use super::types::{DirectorObject, MovieObject};
use crate::entities::{Director, DirectorPatch, FieldUpdate, Movie, MoviePatch};
use async_graphql::{Context, ID, MaybeUndefined, Object, Result};

pub struct MutationRoot;

/// Map an optional argument onto a `$set` update.
///
/// Omitted keeps the stored value; explicit null clears it.
fn field_update<T, U>(
    value: MaybeUndefined<T>,
    convert: impl FnOnce(T) -> Result<U>,
) -> Result<FieldUpdate<U>> {
    Ok(match value {
        MaybeUndefined::Undefined => FieldUpdate::Unchanged,
        MaybeUndefined::Null => FieldUpdate::Clear,
        MaybeUndefined::Value(v) => FieldUpdate::Set(convert(v)?),
    })
}

#[Object]
impl MutationRoot {
    /// Create a director
    async fn add_director(&self, ctx: &Context<'_>, name: String, age: i32) -> Result<DirectorObject> {
        let director = host(ctx)?
            .directors
            .save(Director::new(name, age))
            .await
            .map_err(store_error)?;

        tracing::info!(id = %director.id, name = %director.name, "director added");

        Ok(DirectorObject::from(director))
    }

    /// Create a movie
    ///
    /// `directorId` is stored as given; it is not checked against the
    /// director collection.
    async fn add_movie(
        &self,
        ctx: &Context<'_>,
        name: String,
        genre: String,
        rate: Option<i32>,
        watched: bool,
        director_id: Option<ID>,
    ) -> Result<MovieObject> {
        let director_id = parse_optional_id::<Director>(director_id.as_ref())?;

        let movie = host(ctx)?
            .movies
            .save(Movie::new(name, genre, rate, watched, director_id))
            .await
            .map_err(store_error)?;

        tracing::info!(id = %movie.id, name = %movie.name, "movie added");

        Ok(MovieObject::from(movie))
    }

    /// Remove a director, returning its last value
    async fn delete_director(&self, ctx: &Context<'_>, id: Option<ID>) -> Result<Option<DirectorObject>> {
        let Some(id) = parse_optional_id::<Director>(id.as_ref())? else {
            return Ok(None);
        };

        let removed = host(ctx)?
            .directors
            .find_by_id_and_remove(&id)
            .await
            .map_err(store_error)?;

        if removed.is_some() {
            tracing::info!(%id, "director deleted");
        }

        Ok(removed.map(DirectorObject::from))
    }

    /// Remove a movie, returning its last value
    async fn delete_movie(&self, ctx: &Context<'_>, id: Option<ID>) -> Result<Option<MovieObject>> {
        let Some(id) = parse_optional_id::<Movie>(id.as_ref())? else {
            return Ok(None);
        };

        let removed = host(ctx)?
            .movies
            .find_by_id_and_remove(&id)
            .await
            .map_err(store_error)?;

        if removed.is_some() {
            tracing::info!(%id, "movie deleted");
        }

        Ok(removed.map(MovieObject::from))
    }

    /// Replace a director's name and age
    async fn update_director(
        &self,
        ctx: &Context<'_>,
        id: Option<ID>,
        name: String,
        age: i32,
    ) -> Result<Option<DirectorObject>> {
        let Some(id) = parse_optional_id::<Director>(id.as_ref())? else {
            return Ok(None);
        };

        let updated = host(ctx)?
            .directors
            .find_by_id_and_update(&id, &DirectorPatch { name, age })
            .await
            .map_err(store_error)?;

        if updated.is_some() {
            tracing::info!(%id, "director updated");
        }

        Ok(updated.map(DirectorObject::from))
    }

    /// Replace a movie's fields
    ///
    /// An omitted `rate` or `directorId` keeps the stored value; passing
    /// null clears it.
    async fn update_movie(
        &self,
        ctx: &Context<'_>,
        id: Option<ID>,
        name: String,
        genre: String,
        rate: MaybeUndefined<i32>,
        watched: bool,
        director_id: MaybeUndefined<ID>,
    ) -> Result<Option<MovieObject>> {
        let Some(id) = parse_optional_id::<Movie>(id.as_ref())? else {
            return Ok(None);
        };

        let patch = MoviePatch {
            name,
            genre,
            watched,
            rate: field_update(rate, Ok)?,
            director_id: field_update(director_id, |v| parse_id::<Director>(&v))?,
        };

        let updated = host(ctx)?
            .movies
            .find_by_id_and_update(&id, &patch)
            .await
            .map_err(store_error)?;

        if updated.is_some() {
            tracing::info!(%id, "movie updated");
        }

        Ok(updated.map(MovieObject::from))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_field_update_from_arguments() {
        assert_eq!(
            field_update(MaybeUndefined::<i32>::Undefined, Ok).unwrap(),
            FieldUpdate::Unchanged
        );
        assert_eq!(
            field_update(MaybeUndefined::<i32>::Null, Ok).unwrap(),
            FieldUpdate::Clear
        );
        assert_eq!(
            field_update(MaybeUndefined::Value(4), Ok).unwrap(),
            FieldUpdate::Set(4)
        );
    }

    #[test]
    fn test_field_update_propagates_conversion_error() {
        let result: Result<FieldUpdate<Uuid>> = field_update(MaybeUndefined::Value(ID::from("x")), |v| {
            parse_id::<Director>(&v)
        });
        assert!(result.is_err());
    }
}
