pub mod aggregator;
pub mod analyzer;
pub mod catalog;
pub mod genres;
pub mod keywords;
pub mod recommendations;
pub mod scorer;

pub use aggregator::CandidateAggregator;
pub use analyzer::analyze;
pub use catalog::{CatalogClient, Fetched, ImageUrls, ImageVariant, TmdbCatalog};
pub use genres::GenreDirectory;
pub use recommendations::Recommender;
pub use scorer::RecommendationScorer;
