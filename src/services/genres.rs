use std::sync::Arc;

use tokio::sync::OnceCell;

use crate::{error::AppResult, models::GenreMap, services::catalog::CatalogClient};

/// Process-wide genre name to id lookup
///
/// The map is fetched from the catalog on first use and kept for the life of the process.
/// Concurrent first callers wait on the same in-flight fetch. A failed fetch leaves the
/// directory empty so the next caller retries.
pub struct GenreDirectory {
    catalog: Arc<dyn CatalogClient>,
    genres: OnceCell<GenreMap>,
}

impl GenreDirectory {
    pub fn new(catalog: Arc<dyn CatalogClient>) -> Self {
        Self {
            catalog,
            genres: OnceCell::new(),
        }
    }

    /// Returns the cached map, fetching it if no fetch has succeeded yet
    pub async fn resolve(&self) -> AppResult<&GenreMap> {
        if let Some(genres) = self.genres.get() {
            tracing::debug!("Genre cache hit");
            return Ok(genres);
        }

        self.genres
            .get_or_try_init(|| async {
                tracing::info!(catalog = self.catalog.name(), "Loading genre list");
                self.catalog.fetch_genres().await
            })
            .await
    }

    /// Maps genre names to catalog ids, silently dropping names the catalog doesn't know
    pub async fn ids_for(&self, names: &[String]) -> AppResult<Vec<u64>> {
        let genres = self.resolve().await?;
        Ok(names
            .iter()
            .filter_map(|name| genres.get(&name.to_lowercase()).copied())
            .collect())
    }
}
