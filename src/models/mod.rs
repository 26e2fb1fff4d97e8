use serde::Deserialize;
use std::collections::HashMap;

mod movie;
mod preference;

pub use movie::{CatalogMovie, EnrichmentBundle, Recommendation, Review, Video, WatchProvider};
pub use preference::{PreferenceProfile, DEFAULT_INTENSITY, HIGH_INTENSITY, LOW_INTENSITY};

/// Lower-cased genre name to catalog genre id
pub type GenreMap = HashMap<String, u64>;

// ============================================================================
// TMDB API Types
// ============================================================================

/// Paged list envelope used by discover, search, reviews and videos
#[derive(Debug, Clone, Deserialize)]
pub struct ApiPage<T> {
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
}

/// Response of `/genre/movie/list`
#[derive(Debug, Clone, Deserialize)]
pub struct ApiGenreList {
    pub genres: Vec<ApiGenre>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiGenre {
    pub id: u64,
    pub name: String,
}

impl ApiGenreList {
    /// Builds the case-insensitive name lookup
    pub fn into_genre_map(self) -> GenreMap {
        self.genres
            .into_iter()
            .map(|genre| (genre.name.to_lowercase(), genre.id))
            .collect()
    }
}

/// Raw review as returned by `/movie/{id}/reviews`
#[derive(Debug, Clone, Deserialize)]
pub struct ApiReview {
    pub author: String,
    pub content: String,
    pub created_at: String,
    #[serde(default)]
    pub author_details: Option<ApiAuthorDetails>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiAuthorDetails {
    #[serde(default)]
    pub rating: Option<f64>,
}

impl From<ApiReview> for Review {
    fn from(review: ApiReview) -> Self {
        Self {
            author: review.author,
            content: review.content,
            created_at: review.created_at,
            rating: review.author_details.and_then(|d| d.rating),
        }
    }
}

/// Response of `/movie/{id}/watch/providers`, keyed by region code
#[derive(Debug, Clone, Deserialize)]
pub struct ApiWatchProviders {
    #[serde(default)]
    pub results: HashMap<String, ApiRegionProviders>,
}

/// Providers for one region, grouped by offer type
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiRegionProviders {
    #[serde(default)]
    pub flatrate: Option<Vec<ApiProviderOption>>,
    #[serde(default)]
    pub rent: Option<Vec<ApiProviderOption>>,
    #[serde(default)]
    pub buy: Option<Vec<ApiProviderOption>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiProviderOption {
    pub provider_name: String,
    #[serde(default)]
    pub logo_path: Option<String>,
}

impl ApiRegionProviders {
    /// Flatrate, then rent, then buy; first occurrence of each provider name wins
    pub fn unique_options(&self) -> Vec<&ApiProviderOption> {
        let mut seen = std::collections::HashSet::new();
        [&self.flatrate, &self.rent, &self.buy]
            .into_iter()
            .flatten()
            .flatten()
            .filter(|option| seen.insert(option.provider_name.as_str()))
            .collect()
    }
}
