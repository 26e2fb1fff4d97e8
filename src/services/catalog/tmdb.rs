/// TMDB catalog client
///
/// Implements every catalog capability against The Movie Database v3 REST API.
/// Authentication uses the `api_key` query parameter.
use crate::{
    config::Config,
    error::{AppError, AppResult},
    models::{
        ApiGenreList, ApiPage, ApiReview, ApiWatchProviders, CatalogMovie, GenreMap, Review,
        Video, WatchProvider,
    },
    services::catalog::{CatalogClient, ImageUrls, ImageVariant},
};
use reqwest::Client as HttpClient;
use serde::de::DeserializeOwned;
use std::time::Duration;

const MIN_VOTE_COUNT: &str = "100";
const MAX_REVIEWS: usize = 3;

#[derive(Clone)]
pub struct TmdbCatalog {
    http_client: HttpClient,
    api_key: String,
    api_url: String,
    language: String,
    region: String,
    images: ImageUrls,
}

impl TmdbCatalog {
    pub fn new(config: &Config) -> AppResult<Self> {
        let http_client = HttpClient::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self {
            http_client,
            api_key: config.tmdb_api_key.clone(),
            api_url: config.tmdb_api_url.trim_end_matches('/').to_string(),
            language: config.catalog_language.clone(),
            region: config.catalog_region.clone(),
            images: ImageUrls::new(config.tmdb_image_url.clone()),
        })
    }

    /// Issues a GET against the API and decodes the JSON body
    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> AppResult<T> {
        let url = format!("{}{}", self.api_url, path);
        let response = self
            .http_client
            .get(&url)
            .query(&[("api_key", self.api_key.as_str())])
            .query(query)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalApi(format!(
                "TMDB API returned status {}: {}",
                status, body
            )));
        }

        Ok(response.json().await?)
    }

    /// Flattens the configured region's offers into unique providers
    fn convert_watch_providers(&self, response: ApiWatchProviders) -> Vec<WatchProvider> {
        let Some(region) = response.results.get(&self.region) else {
            return Vec::new();
        };

        region
            .unique_options()
            .into_iter()
            .map(|option| WatchProvider {
                name: option.provider_name.clone(),
                logo_url: self
                    .images
                    .build(option.logo_path.as_deref(), ImageVariant::Logo),
            })
            .collect()
    }
}

#[async_trait::async_trait]
impl CatalogClient for TmdbCatalog {
    async fn fetch_genres(&self) -> AppResult<GenreMap> {
        let list: ApiGenreList = self
            .get_json("/genre/movie/list", &[("language", self.language.as_str())])
            .await?;
        let genres = list.into_genre_map();

        tracing::info!(genres = genres.len(), provider = "tmdb", "Genre list fetched");

        Ok(genres)
    }

    async fn discover_by_genres(&self, genre_ids: &[u64]) -> AppResult<Vec<CatalogMovie>> {
        let with_genres = genre_ids
            .iter()
            .map(u64::to_string)
            .collect::<Vec<_>>()
            .join(",");

        let page: ApiPage<CatalogMovie> = self
            .get_json(
                "/discover/movie",
                &[
                    ("with_genres", with_genres.as_str()),
                    ("sort_by", "popularity.desc"),
                    ("vote_count.gte", MIN_VOTE_COUNT),
                    ("language", self.language.as_str()),
                    ("page", "1"),
                ],
            )
            .await?;

        tracing::info!(
            genres = %with_genres,
            results = page.results.len(),
            provider = "tmdb",
            "Discover completed"
        );

        Ok(page.results)
    }

    async fn search_by_text(&self, query: &str) -> AppResult<Vec<CatalogMovie>> {
        let page: ApiPage<CatalogMovie> = self
            .get_json(
                "/search/movie",
                &[
                    ("query", query),
                    ("language", self.language.as_str()),
                    ("page", "1"),
                    ("include_adult", "false"),
                ],
            )
            .await?;

        tracing::info!(
            results = page.results.len(),
            provider = "tmdb",
            "Title search completed"
        );

        Ok(page.results)
    }

    async fn fetch_watch_providers(&self, movie_id: u64) -> AppResult<Vec<WatchProvider>> {
        let response: ApiWatchProviders = self
            .get_json(&format!("/movie/{}/watch/providers", movie_id), &[])
            .await?;

        Ok(self.convert_watch_providers(response))
    }

    async fn fetch_reviews(&self, movie_id: u64) -> AppResult<Vec<Review>> {
        let page: ApiPage<ApiReview> = self
            .get_json(
                &format!("/movie/{}/reviews", movie_id),
                &[("language", self.language.as_str()), ("page", "1")],
            )
            .await?;

        Ok(page
            .results
            .into_iter()
            .take(MAX_REVIEWS)
            .map(Review::from)
            .collect())
    }

    async fn fetch_videos(&self, movie_id: u64) -> AppResult<Vec<Video>> {
        let page: ApiPage<Video> = self
            .get_json(
                &format!("/movie/{}/videos", movie_id),
                &[("language", self.language.as_str())],
            )
            .await?;

        Ok(page.results)
    }

    fn name(&self) -> &'static str {
        "tmdb"
    }
}
