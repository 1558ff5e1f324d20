use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use thiserror::Error;
use tracing::debug;

/// Errors surfaced by catalog operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("movie with id `{0}` already exists")]
    DuplicateId(String),

    #[error("movie with id `{0}` not found")]
    NotFound(String),

    #[error("rating must be between 1 and 5, got {0}")]
    InvalidRating(i64),
}

/// A single catalog entry
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    pub id: String,
    pub title: String,
    pub director: String,
    pub release_year: i32,
    pub genre: String,
    pub ratings: Vec<u8>,
}

/// Fields required to create a movie; ratings always start empty
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMovie {
    pub id: String,
    pub title: String,
    pub director: String,
    pub release_year: i32,
    pub genre: String,
}

/// Partial update; fields absent from the payload are left unchanged
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieUpdate {
    pub title: Option<String>,
    pub director: Option<String>,
    pub release_year: Option<i32>,
    pub genre: Option<String>,
}

/// A movie annotated with its average rating, as produced by `top_rated`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RatedMovie {
    pub id: String,
    pub title: String,
    pub avg_rating: f64,
    pub ratings: Vec<u8>,
}

/// In-memory movie catalog.
///
/// Movies are kept in insertion order: deletions preserve the relative
/// order of the remaining records, and `top_rated` breaks average-rating
/// ties by original insertion. Lookups are linear scans.
#[derive(Debug, Default)]
pub struct MovieCatalog {
    movies: Vec<Movie>,
}

impl MovieCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self { movies: Vec::new() }
    }

    /// Number of movies currently in the catalog
    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    fn find(&self, id: &str) -> Option<&Movie> {
        self.movies.iter().find(|m| m.id == id)
    }

    fn find_mut(&mut self, id: &str) -> Option<&mut Movie> {
        self.movies.iter_mut().find(|m| m.id == id)
    }

    /// Add a new movie with an empty rating history
    pub fn add(&mut self, new: NewMovie) -> Result<(), CatalogError> {
        if self.find(&new.id).is_some() {
            return Err(CatalogError::DuplicateId(new.id));
        }

        debug!(id = %new.id, title = %new.title, "Adding movie to catalog");

        self.movies.push(Movie {
            id: new.id,
            title: new.title,
            director: new.director,
            release_year: new.release_year,
            genre: new.genre,
            ratings: Vec::new(),
        });

        Ok(())
    }

    /// Look up a movie by id
    pub fn get(&self, id: &str) -> Result<&Movie, CatalogError> {
        self.find(id)
            .ok_or_else(|| CatalogError::NotFound(id.to_string()))
    }

    /// Apply the fields present in `update`, leaving the rest unchanged.
    /// The id is immutable and the rating history is untouched.
    pub fn update(&mut self, id: &str, update: MovieUpdate) -> Result<Movie, CatalogError> {
        let movie = self
            .find_mut(id)
            .ok_or_else(|| CatalogError::NotFound(id.to_string()))?;

        if let Some(title) = update.title {
            movie.title = title;
        }
        if let Some(director) = update.director {
            movie.director = director;
        }
        if let Some(release_year) = update.release_year {
            movie.release_year = release_year;
        }
        if let Some(genre) = update.genre {
            movie.genre = genre;
        }

        Ok(movie.clone())
    }

    /// Remove a movie, preserving the order of the remaining records
    pub fn delete(&mut self, id: &str) -> Result<(), CatalogError> {
        let pos = self
            .movies
            .iter()
            .position(|m| m.id == id)
            .ok_or_else(|| CatalogError::NotFound(id.to_string()))?;

        self.movies.remove(pos);

        debug!(id = %id, remaining = self.movies.len(), "Removed movie from catalog");

        Ok(())
    }

    /// Append a rating to a movie's history.
    /// The range check runs before the lookup, so an invalid value never
    /// mutates anything even when the id is also unknown.
    pub fn rate(&mut self, id: &str, rating: i64) -> Result<Movie, CatalogError> {
        if !(1..=5).contains(&rating) {
            return Err(CatalogError::InvalidRating(rating));
        }

        let movie = self
            .find_mut(id)
            .ok_or_else(|| CatalogError::NotFound(id.to_string()))?;

        movie.ratings.push(rating as u8);

        Ok(movie.clone())
    }

    /// Arithmetic mean of the movie's ratings, 0 when it has none
    pub fn average_rating(&self, id: &str) -> Result<f64, CatalogError> {
        Ok(mean(&self.get(id)?.ratings))
    }

    /// All movies annotated with freshly computed averages, sorted
    /// descending by average rating. Unrated movies are included with an
    /// average of 0. The sort is stable, so ties keep insertion order.
    pub fn top_rated(&self) -> Vec<RatedMovie> {
        let mut rated: Vec<RatedMovie> = self
            .movies
            .iter()
            .map(|m| RatedMovie {
                id: m.id.clone(),
                title: m.title.clone(),
                avg_rating: mean(&m.ratings),
                ratings: m.ratings.clone(),
            })
            .collect();

        rated.sort_by(|a, b| {
            b.avg_rating
                .partial_cmp(&a.avg_rating)
                .unwrap_or(Ordering::Equal)
        });

        rated
    }

    /// Movies whose genre matches exactly, ignoring case
    pub fn by_genre(&self, genre: &str) -> Vec<Movie> {
        self.movies
            .iter()
            .filter(|m| m.genre.eq_ignore_ascii_case(genre))
            .cloned()
            .collect()
    }

    /// Movies whose director matches exactly, ignoring case
    pub fn by_director(&self, director: &str) -> Vec<Movie> {
        self.movies
            .iter()
            .filter(|m| m.director.eq_ignore_ascii_case(director))
            .cloned()
            .collect()
    }

    /// Movies whose title contains the keyword, ignoring case
    pub fn search(&self, keyword: &str) -> Vec<Movie> {
        let keyword = keyword.to_lowercase();
        self.movies
            .iter()
            .filter(|m| m.title.to_lowercase().contains(&keyword))
            .cloned()
            .collect()
    }
}

/// Mean rounded to 2 decimal places; 0 for an empty history
fn mean(ratings: &[u8]) -> f64 {
    if ratings.is_empty() {
        return 0.0;
    }

    let sum: u32 = ratings.iter().map(|&r| u32::from(r)).sum();
    let avg = f64::from(sum) / ratings.len() as f64;

    (avg * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_movie(id: &str, title: &str, director: &str, genre: &str) -> NewMovie {
        NewMovie {
            id: id.to_string(),
            title: title.to_string(),
            director: director.to_string(),
            release_year: 2010,
            genre: genre.to_string(),
        }
    }

    fn seeded() -> MovieCatalog {
        let mut catalog = MovieCatalog::new();
        catalog
            .add(new_movie("m1", "Inception", "Nolan", "Sci-Fi"))
            .unwrap();
        catalog
            .add(new_movie("m2", "Heat", "Mann", "Action"))
            .unwrap();
        catalog
            .add(new_movie("m3", "Tenet", "Nolan", "Sci-Fi"))
            .unwrap();
        catalog
    }

    #[test]
    fn add_then_get_roundtrip() {
        let mut catalog = MovieCatalog::new();
        catalog
            .add(new_movie("m1", "Inception", "Nolan", "Sci-Fi"))
            .unwrap();

        let movie = catalog.get("m1").unwrap();
        assert_eq!(movie.title, "Inception");
        assert_eq!(movie.release_year, 2010);
        assert!(movie.ratings.is_empty());
    }

    #[test]
    fn duplicate_add_fails_and_leaves_record_unchanged() {
        let mut catalog = MovieCatalog::new();
        catalog
            .add(new_movie("m1", "Inception", "Nolan", "Sci-Fi"))
            .unwrap();

        let err = catalog
            .add(new_movie("m1", "Interstellar", "Nolan", "Sci-Fi"))
            .unwrap_err();
        assert_eq!(err, CatalogError::DuplicateId("m1".to_string()));

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get("m1").unwrap().title, "Inception");
    }

    #[test]
    fn get_unknown_id_is_not_found() {
        let catalog = MovieCatalog::new();
        assert_eq!(
            catalog.get("zzz").unwrap_err(),
            CatalogError::NotFound("zzz".to_string())
        );
    }

    #[test]
    fn update_applies_only_present_fields() {
        let mut catalog = seeded();

        let updated = catalog
            .update(
                "m1",
                MovieUpdate {
                    title: Some("Inception (Director's Cut)".to_string()),
                    release_year: Some(2011),
                    ..MovieUpdate::default()
                },
            )
            .unwrap();

        assert_eq!(updated.title, "Inception (Director's Cut)");
        assert_eq!(updated.release_year, 2011);
        assert_eq!(updated.director, "Nolan");
        assert_eq!(updated.genre, "Sci-Fi");
    }

    #[test]
    fn update_applies_provided_empty_string() {
        let mut catalog = seeded();

        let updated = catalog
            .update(
                "m1",
                MovieUpdate {
                    genre: Some(String::new()),
                    ..MovieUpdate::default()
                },
            )
            .unwrap();

        assert_eq!(updated.genre, "");
        assert_eq!(updated.title, "Inception");
    }

    #[test]
    fn update_unknown_id_is_not_found() {
        let mut catalog = MovieCatalog::new();
        let err = catalog.update("zzz", MovieUpdate::default()).unwrap_err();
        assert_eq!(err, CatalogError::NotFound("zzz".to_string()));
    }

    #[test]
    fn delete_then_get_is_not_found() {
        let mut catalog = seeded();
        catalog.delete("m2").unwrap();

        assert_eq!(
            catalog.get("m2").unwrap_err(),
            CatalogError::NotFound("m2".to_string())
        );
    }

    #[test]
    fn delete_preserves_order_of_remaining_movies() {
        let mut catalog = seeded();
        catalog.delete("m2").unwrap();

        let ids: Vec<String> = catalog.top_rated().into_iter().map(|m| m.id).collect();
        assert_eq!(ids, vec!["m1", "m3"]);
    }

    #[test]
    fn delete_unknown_id_is_not_found() {
        let mut catalog = MovieCatalog::new();
        assert_eq!(
            catalog.delete("zzz").unwrap_err(),
            CatalogError::NotFound("zzz".to_string())
        );
    }

    #[test]
    fn average_is_mean_of_submitted_ratings() {
        let mut catalog = seeded();
        catalog.rate("m1", 4).unwrap();
        catalog.rate("m1", 5).unwrap();

        assert_eq!(catalog.average_rating("m1").unwrap(), 4.5);
    }

    #[test]
    fn average_rounds_to_two_decimals() {
        let mut catalog = seeded();
        catalog.rate("m1", 1).unwrap();
        catalog.rate("m1", 1).unwrap();
        catalog.rate("m1", 2).unwrap();

        // 4 / 3 = 1.333...
        assert_eq!(catalog.average_rating("m1").unwrap(), 1.33);
    }

    #[test]
    fn average_of_unrated_movie_is_zero() {
        let catalog = seeded();
        assert_eq!(catalog.average_rating("m1").unwrap(), 0.0);
    }

    #[test]
    fn out_of_range_rating_never_mutates() {
        let mut catalog = seeded();

        for invalid in [0, 6, -3, 100] {
            let err = catalog.rate("m1", invalid).unwrap_err();
            assert_eq!(err, CatalogError::InvalidRating(invalid));
        }

        assert!(catalog.get("m1").unwrap().ratings.is_empty());
    }

    #[test]
    fn rate_unknown_id_is_not_found() {
        let mut catalog = MovieCatalog::new();
        assert_eq!(
            catalog.rate("zzz", 3).unwrap_err(),
            CatalogError::NotFound("zzz".to_string())
        );
    }

    #[test]
    fn top_rated_sorts_descending_with_stable_ties() {
        let mut catalog = seeded();
        // m1 avg 3.0, m2 avg 5.0, m3 avg 3.0 (tie with m1)
        catalog.rate("m1", 3).unwrap();
        catalog.rate("m2", 5).unwrap();
        catalog.rate("m3", 2).unwrap();
        catalog.rate("m3", 4).unwrap();

        let ids: Vec<String> = catalog.top_rated().into_iter().map(|m| m.id).collect();
        assert_eq!(ids, vec!["m2", "m1", "m3"]);
    }

    #[test]
    fn top_rated_includes_unrated_movies_with_zero_average() {
        let mut catalog = seeded();
        catalog.rate("m2", 4).unwrap();

        let rated = catalog.top_rated();
        assert_eq!(rated.len(), 3);
        assert_eq!(rated[0].id, "m2");
        assert_eq!(rated[1].avg_rating, 0.0);
        assert_eq!(rated[2].avg_rating, 0.0);
        // unrated movies keep insertion order behind the rated one
        assert_eq!(rated[1].id, "m1");
        assert_eq!(rated[2].id, "m3");
    }

    #[test]
    fn top_rated_on_empty_catalog_is_empty() {
        let catalog = MovieCatalog::new();
        assert!(catalog.top_rated().is_empty());
    }

    #[test]
    fn genre_filter_is_case_insensitive() {
        let catalog = seeded();

        let upper: Vec<String> = catalog.by_genre("Sci-Fi").into_iter().map(|m| m.id).collect();
        let lower: Vec<String> = catalog.by_genre("sci-fi").into_iter().map(|m| m.id).collect();

        assert_eq!(upper, vec!["m1", "m3"]);
        assert_eq!(upper, lower);
    }

    #[test]
    fn director_filter_is_case_insensitive() {
        let catalog = seeded();

        let matches: Vec<String> = catalog.by_director("NOLAN").into_iter().map(|m| m.id).collect();
        assert_eq!(matches, vec!["m1", "m3"]);
    }

    #[test]
    fn filters_return_empty_vec_when_nothing_matches() {
        let catalog = seeded();
        assert!(catalog.by_genre("Western").is_empty());
        assert!(catalog.by_director("Kubrick").is_empty());
        assert!(catalog.search("matrix").is_empty());
    }

    #[test]
    fn search_matches_title_substring_case_insensitively() {
        let catalog = seeded();

        let matches: Vec<String> = catalog.search("CEP").into_iter().map(|m| m.id).collect();
        assert_eq!(matches, vec!["m1"]);
    }
}
