#![allow(dead_code)]

use std::{
    sync::atomic::{AtomicUsize, Ordering},
    time::Duration,
};

use tokio::{
    io::{AsyncReadExt, AsyncWriteExt},
    net::TcpListener,
};

use cinematch_api::{
    error::{AppError, AppResult},
    models::{CatalogMovie, GenreMap, Review, Video, WatchProvider},
    services::CatalogClient,
};

/// How a fake endpoint should respond
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Behavior {
    Succeed,
    Unavailable,
    Malformed,
}

impl Behavior {
    fn apply<T>(self, value: T) -> AppResult<T> {
        match self {
            Behavior::Succeed => Ok(value),
            Behavior::Unavailable => Err(AppError::ExternalApi(
                "TMDB API returned status 503 Service Unavailable".to_string(),
            )),
            Behavior::Malformed => Err(AppError::Internal("malformed catalog payload".to_string())),
        }
    }
}

/// In-memory catalog that counts genre fetches
pub struct FakeCatalog {
    pub discovered: Vec<CatalogMovie>,
    pub searched: Vec<CatalogMovie>,
    pub genres: Behavior,
    pub discover: Behavior,
    pub search: Behavior,
    pub reviews: Behavior,
    pub genre_delay: Duration,
    pub genre_fetches: AtomicUsize,
}

impl Default for FakeCatalog {
    fn default() -> Self {
        Self {
            discovered: Vec::new(),
            searched: Vec::new(),
            genres: Behavior::Succeed,
            discover: Behavior::Succeed,
            search: Behavior::Succeed,
            reviews: Behavior::Succeed,
            genre_delay: Duration::ZERO,
            genre_fetches: AtomicUsize::new(0),
        }
    }
}

impl FakeCatalog {
    pub fn genre_fetch_count(&self) -> usize {
        self.genre_fetches.load(Ordering::SeqCst)
    }
}

/// Serves `200 OK` with the given body to every connection and returns the base URL
pub async fn serve_body(body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        while let Ok((mut socket, _)) = listener.accept().await {
            tokio::spawn(async move {
                let mut request = [0u8; 4096];
                let _ = socket.read(&mut request).await;
                let response = format!(
                    "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    body.len(),
                    body
                );
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            });
        }
    });

    format!("http://{}", addr)
}

pub fn movie(id: u64, vote_average: f64, popularity: f64) -> CatalogMovie {
    CatalogMovie {
        id,
        title: format!("Movie {}", id),
        overview: format!("Overview of movie {}", id),
        release_date: Some("2014-11-05".to_string()),
        poster_path: Some(format!("/poster-{}.jpg", id)),
        backdrop_path: Some(format!("/backdrop-{}.jpg", id)),
        vote_average,
        popularity,
        genre_ids: vec![878],
    }
}

#[async_trait::async_trait]
impl CatalogClient for FakeCatalog {
    async fn fetch_genres(&self) -> AppResult<GenreMap> {
        self.genre_fetches.fetch_add(1, Ordering::SeqCst);
        tokio::time::sleep(self.genre_delay).await;
        let genres = [
            ("action", 28),
            ("comedy", 35),
            ("drama", 18),
            ("science fiction", 878),
            ("thriller", 53),
        ]
        .into_iter()
        .map(|(name, id)| (name.to_string(), id))
        .collect();
        self.genres.apply(genres)
    }

    async fn discover_by_genres(&self, _genre_ids: &[u64]) -> AppResult<Vec<CatalogMovie>> {
        self.discover.apply(self.discovered.clone())
    }

    async fn search_by_text(&self, _query: &str) -> AppResult<Vec<CatalogMovie>> {
        self.search.apply(self.searched.clone())
    }

    async fn fetch_watch_providers(&self, movie_id: u64) -> AppResult<Vec<WatchProvider>> {
        Ok(vec![WatchProvider {
            name: format!("Service {}", movie_id % 2),
            logo_url: format!("https://image.tmdb.org/t/p/original/logo-{}.png", movie_id % 2),
        }])
    }

    async fn fetch_reviews(&self, movie_id: u64) -> AppResult<Vec<Review>> {
        self.reviews.apply(vec![Review {
            author: "critic".to_string(),
            content: format!("Review of movie {}", movie_id),
            created_at: "2020-05-01T12:00:00.000Z".to_string(),
            rating: Some(8.0),
        }])
    }

    async fn fetch_videos(&self, movie_id: u64) -> AppResult<Vec<Video>> {
        Ok(vec![Video {
            key: format!("trailer-{}", movie_id),
            name: "Official Trailer".to_string(),
            kind: "Trailer".to_string(),
            site: "YouTube".to_string(),
        }])
    }

    fn name(&self) -> &'static str {
        "fake"
    }
}
