use std::sync::Arc;

use crate::{
    error::AppResult,
    models::Recommendation,
    services::{
        aggregator::CandidateAggregator,
        analyzer::analyze,
        catalog::{CatalogClient, ImageUrls},
        genres::GenreDirectory,
        scorer::RecommendationScorer,
    },
};

/// Generates movie recommendations from a free-text description
///
/// The description is analyzed into a preference profile, candidates are collected from
/// the catalog, then every candidate is enriched, scored and ranked. When the catalog is
/// unavailable the result is an empty list rather than an error; only malformed catalog
/// responses and internal failures are returned as errors.
pub struct Recommender {
    aggregator: CandidateAggregator,
    scorer: RecommendationScorer,
}

impl Recommender {
    pub fn new(catalog: Arc<dyn CatalogClient>, images: ImageUrls) -> Self {
        let genres = Arc::new(GenreDirectory::new(catalog.clone()));

        Self {
            aggregator: CandidateAggregator::new(catalog.clone(), genres),
            scorer: RecommendationScorer::new(catalog, images),
        }
    }

    pub async fn recommend(&self, description: &str) -> AppResult<Vec<Recommendation>> {
        let profile = analyze(description);

        let candidates = self.aggregator.search(description, &profile.genres).await?;
        if candidates.is_unavailable() {
            tracing::warn!("Catalog unavailable, returning no recommendations");
        }

        let candidates = candidates.unwrap_or_default();
        if candidates.is_empty() {
            return Ok(Vec::new());
        }

        self.scorer.score_and_rank(candidates, &profile).await
    }
}
