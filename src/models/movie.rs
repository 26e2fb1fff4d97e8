use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize};

/// Reads a missing or `null` field as the type's default
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A movie record as returned by the catalog's discover and search endpoints
///
/// Owned by a single request; never mutated once fetched.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogMovie {
    /// Stable catalog identifier
    pub id: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub overview: String,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub backdrop_path: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub vote_average: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub popularity: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub genre_ids: Vec<u64>,
}

impl CatalogMovie {
    /// Release year parsed from the `YYYY-MM-DD` release date, if present and valid
    pub fn release_year(&self) -> Option<i32> {
        self.release_date
            .as_deref()
            .and_then(|date| NaiveDate::parse_from_str(date, "%Y-%m-%d").ok())
            .map(|date| date.year())
    }
}

/// A service where a movie can be streamed, rented or bought
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WatchProvider {
    pub name: String,
    pub logo_url: String,
}

/// A user review of a movie
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub author: String,
    pub content: String,
    pub created_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
}

/// A video attached to a movie (trailer, teaser, featurette...)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Video {
    pub key: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub site: String,
}

impl Video {
    /// Whether this is a trailer hosted on YouTube
    pub fn is_youtube_trailer(&self) -> bool {
        self.site == "YouTube" && self.kind == "Trailer"
    }
}

/// Side data fetched per candidate before scoring
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EnrichmentBundle {
    pub watch_providers: Vec<WatchProvider>,
    pub reviews: Vec<Review>,
    pub trailer_key: Option<String>,
}

/// A scored, enriched movie recommendation returned to the client
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub id: u64,
    pub title: String,
    pub year: Option<i32>,
    pub plot: String,
    pub release_date: Option<String>,
    pub rating: f64,
    pub popularity: f64,
    pub genre_ids: Vec<u64>,
    /// Always empty: matched genres do not feed into the output
    pub genres: Vec<String>,
    /// Always empty: no theme extraction is performed
    pub themes: Vec<String>,
    pub watch_providers: Vec<WatchProvider>,
    pub streaming_platforms: Vec<String>,
    pub streaming_logos: Vec<String>,
    pub poster_url: String,
    pub backdrop_url: String,
    pub reviews: Vec<Review>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trailer_key: Option<String>,
    pub intensity: u8,
    pub emotions: Vec<String>,
    /// Match score in 0-100
    pub match_percentage: u8,
}
