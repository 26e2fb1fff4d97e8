use axum::{extract::State, Extension, Json};
use serde::Deserialize;
use std::sync::Arc;

use crate::{
    error::{AppError, AppResult},
    middleware::RequestId,
    models::Recommendation,
    routes::AppState,
};

/// Descriptions shorter than this many words are rejected before analysis
pub const MIN_DESCRIPTION_WORDS: usize = 5;

#[derive(Debug, Deserialize)]
pub struct RecommendationRequest {
    pub description: String,
}

/// Handler for recommendations endpoint
pub async fn recommend(
    State(state): State<Arc<AppState>>,
    Extension(request_id): Extension<RequestId>,
    Json(request): Json<RecommendationRequest>,
) -> AppResult<Json<Vec<Recommendation>>> {
    validate_description(&request.description)?;

    tracing::info!(
        request_id = %request_id,
        words = request.description.split_whitespace().count(),
        "Processing recommendation request"
    );

    let recommendations = state.recommender.recommend(&request.description).await?;

    tracing::info!(
        request_id = %request_id,
        count = recommendations.len(),
        "Recommendations completed"
    );

    Ok(Json(recommendations))
}

fn validate_description(description: &str) -> AppResult<()> {
    if description.split_whitespace().count() < MIN_DESCRIPTION_WORDS {
        return Err(AppError::InvalidInput(format!(
            "Please describe what you want to watch in at least {} words",
            MIN_DESCRIPTION_WORDS
        )));
    }
    Ok(())
}
