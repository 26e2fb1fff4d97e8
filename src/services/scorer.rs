use std::sync::Arc;

use futures::future::try_join_all;

use crate::{
    error::AppResult,
    models::{CatalogMovie, EnrichmentBundle, PreferenceProfile, Recommendation},
    services::catalog::{soften, CatalogClient, ImageUrls, ImageVariant},
};

/// Recommendations must score strictly above this to be returned
pub const MATCH_THRESHOLD: u8 = 30;
/// Maximum number of recommendations returned per request
pub const MAX_RECOMMENDATIONS: usize = 7;

const BASE_SCORE: f64 = 60.0;
const MAX_RATING_BONUS: f64 = 20.0;
const MAX_POPULARITY_BONUS: f64 = 20.0;

/// Match percentage for a candidate
///
/// 60, plus twice the vote average capped at 20, plus popularity / 100 capped at 20.
/// The total is capped at 100 and rounded to the nearest integer, ties to even, so
/// 78.5 gives 78 rather than the half-up 79.
pub fn match_score(movie: &CatalogMovie) -> u8 {
    let rating_bonus = (movie.vote_average * 2.0).min(MAX_RATING_BONUS);
    let popularity_bonus = (movie.popularity / 100.0).min(MAX_POPULARITY_BONUS);
    let score = (BASE_SCORE + rating_bonus + popularity_bonus).min(100.0);

    score.round_ties_even().clamp(0.0, 100.0) as u8
}

/// Keeps recommendations above the threshold, best first, at most seven
///
/// The sort is stable so equal scores keep their candidate order.
pub fn rank(mut recommendations: Vec<Recommendation>) -> Vec<Recommendation> {
    recommendations.retain(|r| r.match_percentage > MATCH_THRESHOLD);
    recommendations.sort_by(|a, b| b.match_percentage.cmp(&a.match_percentage));
    recommendations.truncate(MAX_RECOMMENDATIONS);
    recommendations
}

/// Enriches candidates with catalog side data, scores and ranks them
pub struct RecommendationScorer {
    catalog: Arc<dyn CatalogClient>,
    images: ImageUrls,
}

impl RecommendationScorer {
    pub fn new(catalog: Arc<dyn CatalogClient>, images: ImageUrls) -> Self {
        Self { catalog, images }
    }

    /// Fetches providers, reviews and videos for one movie concurrently
    ///
    /// An unavailable fetch leaves its part of the bundle empty.
    pub async fn enrich(&self, movie_id: u64) -> AppResult<EnrichmentBundle> {
        let (providers, reviews, videos) = tokio::join!(
            self.catalog.fetch_watch_providers(movie_id),
            self.catalog.fetch_reviews(movie_id),
            self.catalog.fetch_videos(movie_id)
        );

        let watch_providers = soften(providers, "fetch_watch_providers")?.unwrap_or_default();
        let reviews = soften(reviews, "fetch_reviews")?.unwrap_or_default();
        let trailer_key = soften(videos, "fetch_videos")?
            .unwrap_or_default()
            .into_iter()
            .find(|video| video.is_youtube_trailer())
            .map(|video| video.key);

        Ok(EnrichmentBundle {
            watch_providers,
            reviews,
            trailer_key,
        })
    }

    /// Enriches every candidate concurrently, then scores, filters, sorts and truncates
    pub async fn score_and_rank(
        &self,
        candidates: Vec<CatalogMovie>,
        profile: &PreferenceProfile,
    ) -> AppResult<Vec<Recommendation>> {
        let bundles = try_join_all(candidates.iter().map(|movie| self.enrich(movie.id))).await?;

        let scored: Vec<Recommendation> = candidates
            .into_iter()
            .zip(bundles)
            .map(|(movie, bundle)| self.assemble(movie, bundle, profile))
            .collect();

        let scored_count = scored.len();
        let ranked = rank(scored);

        tracing::info!(
            scored = scored_count,
            returned = ranked.len(),
            "Recommendations ranked"
        );

        Ok(ranked)
    }

    fn assemble(
        &self,
        movie: CatalogMovie,
        bundle: EnrichmentBundle,
        profile: &PreferenceProfile,
    ) -> Recommendation {
        let match_percentage = match_score(&movie);

        Recommendation {
            id: movie.id,
            year: movie.release_year(),
            poster_url: self
                .images
                .build(movie.poster_path.as_deref(), ImageVariant::Poster),
            backdrop_url: self
                .images
                .build(movie.backdrop_path.as_deref(), ImageVariant::Backdrop),
            title: movie.title,
            plot: movie.overview,
            release_date: movie.release_date,
            rating: movie.vote_average,
            popularity: movie.popularity,
            genre_ids: movie.genre_ids,
            genres: Vec::new(),
            themes: Vec::new(),
            streaming_platforms: bundle.watch_providers.iter().map(|p| p.name.clone()).collect(),
            streaming_logos: bundle
                .watch_providers
                .iter()
                .map(|p| p.logo_url.clone())
                .collect(),
            watch_providers: bundle.watch_providers,
            reviews: bundle.reviews,
            trailer_key: bundle.trailer_key,
            intensity: profile.intensity,
            emotions: profile.emotions.clone(),
            match_percentage,
        }
    }
}
