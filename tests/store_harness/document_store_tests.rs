//! Macro-generated contract suite for `DocumentStore` backends.
//!
//! # Generated Tests
//!
//! ## Save & find
//! - `test_save_and_find_by_id`: save then fetch, all fields intact
//! - `test_find_by_id_nonexistent`: random id returns None
//! - `test_find_all_empty`: empty collection lists nothing
//! - `test_find_all_multiple`: every saved record is listed
//! - `test_find_by_director_id`: equality filter on the foreign key
//! - `test_find_by_null_director_id`: movies without a director
//!
//! ## Update
//! - `test_update_director`: `$set` of name/age, post-update value returned
//! - `test_update_movie_keeps_omitted_fields`: unchanged optionals survive
//! - `test_update_movie_clears_fields`: explicit clear stores null
//! - `test_update_nonexistent`: returns None, creates nothing
//!
//! ## Remove
//! - `test_remove_returns_prior_value`: removed record is returned once
//! - `test_remove_director_leaves_movies`: no cascade
//!
//! ## Concurrency
//! - `test_concurrent_saves`: parallel saves from spawned tasks

/// Generate a full `DocumentStore` conformance suite.
///
/// `$movies` and `$directors` must evaluate to fresh, empty stores
/// implementing `DocumentStore<Movie>` and `DocumentStore<Director>`. They
/// are re-evaluated for each test. The director store must also be
/// `Clone + 'static` for the concurrency test.
#[macro_export]
macro_rules! document_store_tests {
    ($movies:expr, $directors:expr) => {
        mod document_store_contract_tests {
            use super::*;
            use cinegraph::core::{DocumentStore, Filter, FieldValue};
            use cinegraph::entities::{DirectorPatch, FieldUpdate, MoviePatch};
            use uuid::Uuid;

            // ==================================================================
            // Save & find
            // ==================================================================

            #[tokio::test]
            async fn test_save_and_find_by_id() {
                let movies = $movies;
                let director_id = Uuid::new_v4();
                let movie = movie_by("Jaws", director_id);

                let saved = movies.save(movie.clone()).await.unwrap();
                assert_eq!(saved, movie);

                let found = movies.find_by_id(&movie.id).await.unwrap();
                assert_eq!(found, Some(movie), "Saved movie should be found by id");
            }

            #[tokio::test]
            async fn test_find_by_id_nonexistent() {
                let directors = $directors;

                let result = directors.find_by_id(&Uuid::new_v4()).await.unwrap();
                assert!(result.is_none(), "Unknown id should return None");
            }

            #[tokio::test]
            async fn test_find_all_empty() {
                let movies = $movies;

                let all = movies.find(&Filter::all()).await.unwrap();
                assert!(all.is_empty(), "Empty collection should list nothing");
            }

            #[tokio::test]
            async fn test_find_all_multiple() {
                let directors = $directors;
                let batch = sample_directors(5);

                for d in &batch {
                    directors.save(d.clone()).await.unwrap();
                }

                let all = directors.find(&Filter::all()).await.unwrap();
                assert_eq!(all.len(), 5);
                for d in &batch {
                    assert!(all.contains(d), "Listing should contain {}", d.name);
                }
            }

            #[tokio::test]
            async fn test_find_by_director_id() {
                let movies = $movies;
                let spielberg = Uuid::new_v4();
                let scott = Uuid::new_v4();

                let jaws = movies.save(movie_by("Jaws", spielberg)).await.unwrap();
                let et = movies.save(movie_by("E.T.", spielberg)).await.unwrap();
                movies.save(movie_by("Alien", scott)).await.unwrap();
                movies.save(orphan_movie("Nanook")).await.unwrap();

                let found = movies
                    .find(&Filter::eq("directorId", spielberg))
                    .await
                    .unwrap();
                assert_eq!(found.len(), 2);
                assert!(found.contains(&jaws));
                assert!(found.contains(&et));

                let none = movies
                    .find(&Filter::eq("directorId", Uuid::new_v4()))
                    .await
                    .unwrap();
                assert!(none.is_empty());
            }

            #[tokio::test]
            async fn test_find_by_null_director_id() {
                let movies = $movies;

                movies.save(movie_by("Jaws", Uuid::new_v4())).await.unwrap();
                let orphan = movies.save(orphan_movie("Nanook")).await.unwrap();

                let found = movies
                    .find(&Filter::eq("directorId", FieldValue::Null))
                    .await
                    .unwrap();
                assert_eq!(found, vec![orphan]);
            }

            // ==================================================================
            // Update
            // ==================================================================

            #[tokio::test]
            async fn test_update_director() {
                let directors = $directors;
                let nolan = directors.save(director("Chris", 50)).await.unwrap();

                let patch = DirectorPatch {
                    name: "Nolan".to_string(),
                    age: 52,
                };
                let updated = directors
                    .find_by_id_and_update(&nolan.id, &patch)
                    .await
                    .unwrap()
                    .expect("Existing director should be updated");

                assert_eq!(updated.id, nolan.id);
                assert_eq!(updated.name, "Nolan");
                assert_eq!(updated.age, 52);

                let stored = directors.find_by_id(&nolan.id).await.unwrap().unwrap();
                assert_eq!(stored, updated);
            }

            #[tokio::test]
            async fn test_update_movie_keeps_omitted_fields() {
                let movies = $movies;
                let director_id = Uuid::new_v4();
                let jaws = movies.save(movie_by("Jaws", director_id)).await.unwrap();

                let patch = MoviePatch {
                    name: "Jaws".to_string(),
                    genre: "Thriller".to_string(),
                    watched: false,
                    rate: FieldUpdate::Unchanged,
                    director_id: FieldUpdate::Unchanged,
                };
                let updated = movies
                    .find_by_id_and_update(&jaws.id, &patch)
                    .await
                    .unwrap()
                    .unwrap();

                assert_eq!(updated.genre, "Thriller");
                assert!(!updated.watched);
                assert_eq!(updated.rate, Some(7));
                assert_eq!(updated.director_id, Some(director_id));
            }

            #[tokio::test]
            async fn test_update_movie_clears_fields() {
                let movies = $movies;
                let jaws = movies.save(movie_by("Jaws", Uuid::new_v4())).await.unwrap();

                let patch = MoviePatch {
                    name: "Jaws".to_string(),
                    genre: "Drama".to_string(),
                    watched: true,
                    rate: FieldUpdate::Clear,
                    director_id: FieldUpdate::Clear,
                };
                movies
                    .find_by_id_and_update(&jaws.id, &patch)
                    .await
                    .unwrap()
                    .unwrap();

                let stored = movies.find_by_id(&jaws.id).await.unwrap().unwrap();
                assert_eq!(stored.rate, None);
                assert_eq!(stored.director_id, None);
            }

            #[tokio::test]
            async fn test_update_nonexistent() {
                let directors = $directors;
                let patch = DirectorPatch {
                    name: "Ghost".to_string(),
                    age: 1,
                };

                let result = directors
                    .find_by_id_and_update(&Uuid::new_v4(), &patch)
                    .await
                    .unwrap();
                assert!(result.is_none(), "Updating an unknown id should return None");

                let all = directors.find(&Filter::all()).await.unwrap();
                assert!(all.is_empty(), "Update must not create a record");
            }

            // ==================================================================
            // Remove
            // ==================================================================

            #[tokio::test]
            async fn test_remove_returns_prior_value() {
                let movies = $movies;
                let alien = movies.save(orphan_movie("Alien")).await.unwrap();

                let removed = movies.find_by_id_and_remove(&alien.id).await.unwrap();
                assert_eq!(removed, Some(alien.clone()));

                assert!(movies.find_by_id(&alien.id).await.unwrap().is_none());

                let again = movies.find_by_id_and_remove(&alien.id).await.unwrap();
                assert!(again.is_none(), "Second removal should find nothing");
            }

            #[tokio::test]
            async fn test_remove_director_leaves_movies() {
                let movies = $movies;
                let directors = $directors;

                let spielberg = directors.save(director("Spielberg", 77)).await.unwrap();
                let jaws = movies.save(movie_by("Jaws", spielberg.id)).await.unwrap();

                directors.find_by_id_and_remove(&spielberg.id).await.unwrap();

                let stored = movies.find_by_id(&jaws.id).await.unwrap().unwrap();
                assert_eq!(stored.director_id, Some(spielberg.id));
            }

            // ==================================================================
            // Concurrency
            // ==================================================================

            #[tokio::test]
            async fn test_concurrent_saves() {
                let directors = $directors;

                let handles: Vec<_> = sample_directors(10)
                    .into_iter()
                    .map(|d| {
                        let store = directors.clone();
                        tokio::spawn(async move { store.save(d).await })
                    })
                    .collect();

                for result in futures::future::join_all(handles).await {
                    result.unwrap().unwrap();
                }

                let all = directors.find(&Filter::all()).await.unwrap();
                assert_eq!(all.len(), 10);
            }
        }
    };
}
