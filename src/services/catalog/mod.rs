/// Movie catalog abstraction
///
/// The recommendation pipeline only talks to the catalog through `CatalogClient`, so the
/// TMDB implementation can be swapped for a fake in tests or another metadata source.
use crate::{
    error::AppResult,
    models::{CatalogMovie, GenreMap, Review, Video, WatchProvider},
};

pub mod images;
pub mod tmdb;

pub use images::{ImageUrls, ImageVariant};
pub use tmdb::TmdbCatalog;

/// Trait for movie metadata sources
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait CatalogClient: Send + Sync {
    /// Fetch the genre list as a lower-cased name to id map
    async fn fetch_genres(&self) -> AppResult<GenreMap>;

    /// Popular movies matching all given genre ids (first page only)
    async fn discover_by_genres(&self, genre_ids: &[u64]) -> AppResult<Vec<CatalogMovie>>;

    /// Free-text title search (first page only, adult content excluded)
    async fn search_by_text(&self, query: &str) -> AppResult<Vec<CatalogMovie>>;

    /// Providers offering the movie in the configured market
    async fn fetch_watch_providers(&self, movie_id: u64) -> AppResult<Vec<WatchProvider>>;

    /// Up to three reviews, in the order the catalog returns them
    async fn fetch_reviews(&self, movie_id: u64) -> AppResult<Vec<Review>>;

    /// All videos attached to the movie
    async fn fetch_videos(&self, movie_id: u64) -> AppResult<Vec<Video>>;

    /// Catalog name for logging
    fn name(&self) -> &'static str;
}

/// Outcome of a catalog call whose failure must not abort the request
///
/// `Unavailable` records that the fetch failed, so callers can tell a failed lookup
/// apart from one that legitimately returned nothing.
#[derive(Debug, Clone, PartialEq)]
pub enum Fetched<T> {
    Ready(T),
    Unavailable(String),
}

impl<T> Fetched<T> {
    pub fn is_unavailable(&self) -> bool {
        matches!(self, Fetched::Unavailable(_))
    }

    pub fn ready(self) -> Option<T> {
        match self {
            Fetched::Ready(value) => Some(value),
            Fetched::Unavailable(_) => None,
        }
    }
}

impl<T: Default> Fetched<T> {
    /// The fetched value, or an empty one when the catalog was unavailable
    pub fn unwrap_or_default(self) -> T {
        self.ready().unwrap_or_default()
    }
}

/// Converts an upstream-unavailable error into `Fetched::Unavailable`
///
/// Any other error (malformed payload, internal failure) is returned unchanged.
pub fn soften<T>(result: AppResult<T>, operation: &'static str) -> AppResult<Fetched<T>> {
    match result {
        Ok(value) => Ok(Fetched::Ready(value)),
        Err(e) if e.is_upstream_unavailable() => {
            tracing::warn!(error = %e, operation, "Catalog unavailable, continuing without data");
            Ok(Fetched::Unavailable(e.to_string()))
        }
        Err(e) => Err(e),
    }
}
