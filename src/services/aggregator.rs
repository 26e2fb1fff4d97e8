use std::{collections::HashSet, sync::Arc};

use crate::{
    error::AppResult,
    models::CatalogMovie,
    services::{
        catalog::{soften, CatalogClient, Fetched},
        genres::GenreDirectory,
    },
};

/// Collects candidate movies from genre discovery and free-text search
pub struct CandidateAggregator {
    catalog: Arc<dyn CatalogClient>,
    genres: Arc<GenreDirectory>,
}

impl CandidateAggregator {
    pub fn new(catalog: Arc<dyn CatalogClient>, genres: Arc<GenreDirectory>) -> Self {
        Self { catalog, genres }
    }

    /// Runs both searches concurrently and merges them, discovery results first
    ///
    /// If the genre lookup or either search is unavailable the whole result is
    /// `Unavailable`: partial results are never returned.
    pub async fn search(
        &self,
        text: &str,
        genres: &[String],
    ) -> AppResult<Fetched<Vec<CatalogMovie>>> {
        let genre_ids = match soften(self.genres.ids_for(genres).await, "resolve_genres")? {
            Fetched::Ready(ids) => ids,
            Fetched::Unavailable(reason) => return Ok(Fetched::Unavailable(reason)),
        };

        let (discovered, searched) = tokio::join!(
            self.catalog.discover_by_genres(&genre_ids),
            self.catalog.search_by_text(text)
        );

        let discovered = match soften(discovered, "discover_by_genres")? {
            Fetched::Ready(movies) => movies,
            Fetched::Unavailable(reason) => return Ok(Fetched::Unavailable(reason)),
        };
        let searched = match soften(searched, "search_by_text")? {
            Fetched::Ready(movies) => movies,
            Fetched::Unavailable(reason) => return Ok(Fetched::Unavailable(reason)),
        };

        let discovered_count = discovered.len();
        let searched_count = searched.len();
        let candidates = merge_unique(discovered, searched);

        tracing::info!(
            genre_ids = ?genre_ids,
            discovered = discovered_count,
            searched = searched_count,
            candidates = candidates.len(),
            "Candidates aggregated"
        );

        Ok(Fetched::Ready(candidates))
    }
}

/// Concatenates both lists, keeping only the first occurrence of each movie id
fn merge_unique(first: Vec<CatalogMovie>, second: Vec<CatalogMovie>) -> Vec<CatalogMovie> {
    let mut seen = HashSet::new();
    first
        .into_iter()
        .chain(second)
        .filter(|movie| seen.insert(movie.id))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        error::AppError,
        models::GenreMap,
        services::catalog::MockCatalogClient,
    };

    fn movie(id: u64, title: &str) -> CatalogMovie {
        CatalogMovie {
            id,
            title: title.to_string(),
            overview: String::new(),
            release_date: None,
            poster_path: None,
            backdrop_path: None,
            vote_average: 7.0,
            popularity: 100.0,
            genre_ids: Vec::new(),
        }
    }

    fn genre_map() -> GenreMap {
        [("action".to_string(), 28), ("thriller".to_string(), 53)]
            .into_iter()
            .collect()
    }

    fn aggregator(catalog: MockCatalogClient) -> CandidateAggregator {
        let catalog: Arc<dyn CatalogClient> = Arc::new(catalog);
        let genres = Arc::new(GenreDirectory::new(catalog.clone()));
        CandidateAggregator::new(catalog, genres)
    }

    fn base_mock() -> MockCatalogClient {
        let mut catalog = MockCatalogClient::new();
        catalog.expect_name().return_const("mock");
        catalog.expect_fetch_genres().returning(|| Ok(genre_map()));
        catalog
    }

    #[test]
    fn test_merge_unique_keeps_first_occurrence() {
        let merged = merge_unique(
            vec![movie(1, "a"), movie(2, "discovered")],
            vec![movie(2, "searched"), movie(3, "c")],
        );

        let ids: Vec<u64> = merged.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(merged[1].title, "discovered");
    }

    #[tokio::test]
    async fn test_search_resolves_genres_and_merges() {
        let mut catalog = base_mock();
        catalog
            .expect_discover_by_genres()
            .withf(|ids| ids.to_vec() == vec![28, 53])
            .times(1)
            .returning(|_| Ok(vec![movie(1, "a"), movie(2, "b")]));
        catalog
            .expect_search_by_text()
            .withf(|query| query.to_string() == "tense action thriller")
            .times(1)
            .returning(|_| Ok(vec![movie(2, "b"), movie(3, "c")]));

        let result = aggregator(catalog)
            .search(
                "tense action thriller",
                &["action".to_string(), "horror".to_string(), "Thriller".to_string()],
            )
            .await
            .unwrap();

        let ids: Vec<u64> = result.unwrap_or_default().iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_search_failure_returns_nothing() {
        let mut catalog = base_mock();
        catalog
            .expect_discover_by_genres()
            .returning(|_| Ok(vec![movie(1, "a")]));
        catalog
            .expect_search_by_text()
            .returning(|_| Err(AppError::ExternalApi("status 500".to_string())));

        let result = aggregator(catalog).search("anything", &[]).await.unwrap();

        assert!(result.is_unavailable());
        assert!(result.unwrap_or_default().is_empty());
    }

    #[tokio::test]
    async fn test_discover_failure_returns_nothing() {
        let mut catalog = base_mock();
        catalog
            .expect_discover_by_genres()
            .returning(|_| Err(AppError::ExternalApi("status 401".to_string())));
        catalog
            .expect_search_by_text()
            .returning(|_| Ok(vec![movie(3, "c")]));

        let result = aggregator(catalog).search("anything", &[]).await.unwrap();
        assert!(result.is_unavailable());
    }

    #[tokio::test]
    async fn test_genre_lookup_failure_returns_nothing() {
        let mut catalog = MockCatalogClient::new();
        catalog.expect_name().return_const("mock");
        catalog
            .expect_fetch_genres()
            .returning(|| Err(AppError::ExternalApi("status 503".to_string())));
        catalog.expect_discover_by_genres().never();
        catalog.expect_search_by_text().never();

        let result = aggregator(catalog)
            .search("anything", &["action".to_string()])
            .await
            .unwrap();
        assert!(result.is_unavailable());
    }

    #[tokio::test]
    async fn test_malformed_payload_surfaces_as_error() {
        let mut catalog = base_mock();
        catalog
            .expect_discover_by_genres()
            .returning(|_| Ok(Vec::new()));
        catalog
            .expect_search_by_text()
            .returning(|_| Err(AppError::Internal("unexpected payload".to_string())));

        let result = aggregator(catalog).search("anything", &[]).await;
        assert!(result.is_err());
    }
}
